use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashMap;

/// Payload of `/event/{key}/oprs`: three maps keyed by team key.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ApiOprs {
    #[serde(default)]
    pub oprs: HashMap<String, f64>,
    #[serde(default)]
    pub dprs: HashMap<String, f64>,
    #[serde(default)]
    pub ccwms: HashMap<String, f64>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OprRecord {
    pub team_number: u32,
    pub opr: f64,
    pub dpr: f64,
    pub ccwm: f64,
}

/// One team's component power ratings. Metric names vary by season, so they
/// are kept in payload order and serialized as flat fields next to the team number.
#[derive(Debug, Clone, PartialEq)]
pub struct CoprRecord {
    pub team_number: u32,
    pub metrics: Vec<(String, f64)>,
}

impl CoprRecord {
    pub fn metric(&self, name: &str) -> Option<f64> {
        self.metrics
            .iter()
            .find(|(metric, _)| metric == name)
            .map(|(_, value)| *value)
    }
}

impl Serialize for CoprRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.metrics.len() + 1))?;
        map.serialize_entry("team_number", &self.team_number)?;
        for (metric, value) in &self.metrics {
            map.serialize_entry(metric, value)?;
        }
        map.end()
    }
}
