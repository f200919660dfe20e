use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Event as returned by `/events/{year}`. Only the fields we reshape are kept.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiEvent {
    pub key: String,
    pub name: String,
    pub event_type: i32,
    #[serde(default)]
    pub event_type_string: String,
    /// Zero-based competition week; null for events outside the regular season
    #[serde(default)]
    pub week: Option<u32>,
}

/// Week shown for an event: a number, or the `Offseason` label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventWeek {
    Number(u32),
    Offseason,
}

impl fmt::Display for EventWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventWeek::Number(week) => write!(f, "{week}"),
            EventWeek::Offseason => f.write_str(crate::constants::events::OFFSEASON),
        }
    }
}

impl Serialize for EventWeek {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            EventWeek::Number(week) => serializer.serialize_u32(*week),
            EventWeek::Offseason => serializer.serialize_str(crate::constants::events::OFFSEASON),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EventRecord {
    pub name: String,
    pub key: String,
    pub event_type: i32,
    pub event_type_string: String,
    pub week: EventWeek,
}

/// Inclusion flags for events that have no provider week.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventFilter {
    pub include_week0: bool,
    pub include_offseason: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_week_serializes_number_or_label() {
        assert_eq!(serde_json::to_string(&EventWeek::Number(3)).unwrap(), "3");
        assert_eq!(
            serde_json::to_string(&EventWeek::Offseason).unwrap(),
            "\"Offseason\""
        );
        assert_eq!(EventWeek::Number(8).to_string(), "8");
    }

    #[test]
    fn test_api_event_tolerates_extra_fields_and_null_week() {
        let json = r#"{
            "key": "2024mnum",
            "name": "Minnesota Week Zero",
            "event_type": 100,
            "event_type_string": "Preseason",
            "week": null,
            "city": "Minneapolis",
            "start_date": "2024-02-17"
        }"#;
        let event: ApiEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event.week, None);
        assert_eq!(event.event_type_string, "Preseason");
    }
}
