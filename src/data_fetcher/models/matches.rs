use serde::{Deserialize, Serialize};

/// Match as returned by `/team/{team}/event/{event}/matches/simple`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiMatchSimple {
    pub key: String,
    pub comp_level: String,
    #[serde(default)]
    pub set_number: u32,
    #[serde(default)]
    pub match_number: u32,
    #[serde(default)]
    pub winning_alliance: Option<String>,
    /// Unix timestamp of the predicted start
    #[serde(default)]
    pub predicted_time: Option<i64>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MatchSummary {
    pub match_key: String,
    pub description: String,
    pub match_completed: bool,
}
