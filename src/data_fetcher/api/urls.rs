//! Request descriptors and URL building for the provider endpoints

use crate::error::AppError;
use std::fmt;
use std::str::FromStr;

/// The closed set of logical requests the client knows how to make.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestKind {
    AllEventsList,
    AllTeamsList,
    TeamName,
    EventOpr,
    EventCopr,
    TeamMatch,
    EventRanking,
    Status,
}

impl RequestKind {
    pub const ALL: [RequestKind; 8] = [
        RequestKind::AllEventsList,
        RequestKind::AllTeamsList,
        RequestKind::TeamName,
        RequestKind::EventOpr,
        RequestKind::EventCopr,
        RequestKind::TeamMatch,
        RequestKind::EventRanking,
        RequestKind::Status,
    ];

    /// Stable snake_case name, accepted back by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            RequestKind::AllEventsList => "all_events_list",
            RequestKind::AllTeamsList => "all_teams_list",
            RequestKind::TeamName => "team_name",
            RequestKind::EventOpr => "event_opr",
            RequestKind::EventCopr => "event_copr",
            RequestKind::TeamMatch => "team_match",
            RequestKind::EventRanking => "event_ranking",
            RequestKind::Status => "status",
        }
    }
}

impl fmt::Display for RequestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RequestKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        RequestKind::ALL
            .into_iter()
            .find(|kind| kind.name() == wanted)
            .ok_or_else(|| AppError::InvalidRequestKind(s.to_string()))
    }
}

/// A logical request. Parameters left as `None` are filled in from the
/// configuration (keys) or the clock (year) when the request is resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub kind: RequestKind,
    pub year: Option<i32>,
    pub event_key: Option<String>,
    pub team_key: Option<String>,
    pub page: u32,
}

impl Request {
    pub fn new(kind: RequestKind) -> Self {
        Self {
            kind,
            year: None,
            event_key: None,
            team_key: None,
            page: 0,
        }
    }

    pub fn year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn event_key(mut self, event_key: impl Into<String>) -> Self {
        self.event_key = Some(event_key.into());
        self
    }

    pub fn team_key(mut self, team_key: impl Into<String>) -> Self {
        self.team_key = Some(team_key.into());
        self
    }

    /// Sets the event key only when one is given, leaving the config default otherwise.
    pub fn maybe_event_key(mut self, event_key: Option<&str>) -> Self {
        if let Some(key) = event_key {
            self.event_key = Some(key.to_string());
        }
        self
    }

    pub fn maybe_team_key(mut self, team_key: Option<&str>) -> Self {
        if let Some(key) = team_key {
            self.team_key = Some(key.to_string());
        }
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }
}

/// A fully resolved endpoint with every path parameter present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    Events { year: i32 },
    Teams { year: i32, page: u32 },
    Team { team_key: String },
    EventOprs { event_key: String },
    EventCoprs { event_key: String },
    TeamEventMatches { team_key: String, event_key: String },
    EventRankings { event_key: String },
    Status,
}

impl Endpoint {
    pub fn path(&self) -> String {
        match self {
            Endpoint::Events { year } => format!("/events/{year}"),
            Endpoint::Teams { year, page } => format!("/teams/{year}/{page}/simple"),
            Endpoint::Team { team_key } => format!("/team/{team_key}/simple"),
            Endpoint::EventOprs { event_key } => format!("/event/{event_key}/oprs"),
            Endpoint::EventCoprs { event_key } => format!("/event/{event_key}/coprs"),
            Endpoint::TeamEventMatches {
                team_key,
                event_key,
            } => format!("/team/{team_key}/event/{event_key}/matches/simple"),
            Endpoint::EventRankings { event_key } => format!("/event/{event_key}/rankings"),
            Endpoint::Status => "/status".to_string(),
        }
    }
}

/// Joins the API base path and an endpoint.
///
/// # Example
/// ```
/// use frc_stats::data_fetcher::api::{Endpoint, build_url};
///
/// let url = build_url("https://api.example.com/api/v3/", &Endpoint::Teams { year: 2024, page: 2 });
/// assert_eq!(url, "https://api.example.com/api/v3/teams/2024/2/simple");
/// ```
pub fn build_url(api_domain: &str, endpoint: &Endpoint) -> String {
    format!("{}{}", api_domain.trim_end_matches('/'), endpoint.path())
}
