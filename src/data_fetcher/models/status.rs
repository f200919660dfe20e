use serde::{Deserialize, Serialize};

/// Subset of `/status` the client cares about.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiStatus {
    pub current_season: i32,
    pub max_season: i32,
    #[serde(default)]
    pub is_datafeed_down: bool,
}
