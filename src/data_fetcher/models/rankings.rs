use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ApiRankings {
    #[serde(default)]
    pub rankings: Option<Vec<ApiRanking>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiRanking {
    pub rank: u32,
    pub team_key: String,
    #[serde(default)]
    pub record: Option<ApiWinLossRecord>,
    #[serde(default)]
    pub matches_played: u32,
}

#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
pub struct ApiWinLossRecord {
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
}

/// A ranking row joined with the team's display name.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RankingRecord {
    pub rank: u32,
    pub team_number: String,
    pub team_name: String,
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
    pub matches_played: u32,
}
