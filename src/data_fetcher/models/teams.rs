use serde::{Deserialize, Serialize};

/// Team as returned by the `/simple` team endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiTeamSimple {
    pub key: String,
    pub team_number: u32,
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state_prov: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

/// Just the nickname from `/team/{key}/simple`; everything else is ignored.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ApiTeamNickname {
    #[serde(default)]
    pub nickname: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TeamRecord {
    pub team_number: u32,
    /// The team's nickname, which is what people actually call it
    pub name: Option<String>,
    pub key: String,
    pub city: Option<String>,
    pub state_prov: Option<String>,
    pub country: Option<String>,
}

impl From<ApiTeamSimple> for TeamRecord {
    fn from(team: ApiTeamSimple) -> Self {
        TeamRecord {
            team_number: team.team_number,
            name: team.nickname,
            key: team.key,
            city: team.city,
            state_prov: team.state_prov,
            country: team.country,
        }
    }
}
