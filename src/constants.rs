//! Application-wide constants and configuration values
//!
//! This module centralizes magic numbers, provider constants and environment
//! variable names.

/// Default API base path, including the `/api/v3` version prefix
pub const DEFAULT_API_DOMAIN: &str = "https://www.thebluealliance.com/api/v3";

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of redirects the HTTP client follows
pub const MAX_REDIRECTS: usize = 10;

/// Name used for the config directory and log file
pub const APP_NAME: &str = "frc_stats";

/// Provider headers
pub mod headers {
    /// Authentication header carrying the API key (lowercase, as `HeaderName` requires)
    pub const AUTH_KEY: &str = "x-tba-auth-key";
}

/// Retry configuration
pub mod retry {
    /// Attempts made before the retry executor gives up
    pub const MAX_RETRIES: u32 = 3;

    /// Fixed delay between attempts (seconds)
    pub const DELAY_SECONDS: u64 = 2;
}

/// Season bounds accepted at the API boundary
pub mod season {
    /// First season the provider has data for
    pub const MIN_YEAR: i32 = 1992;

    /// Last season accepted
    pub const MAX_YEAR: i32 = 2026;
}

/// Event listing constants
pub mod events {
    /// Sort position for events without a provider week
    pub const UNSCHEDULED_SORT_WEEK: u32 = 7;

    /// Displayed week for championship events
    pub const CHAMPIONSHIP_WEEK: u32 = 8;

    /// Displayed week for preseason events
    pub const PRESEASON_WEEK: u32 = 0;

    pub const PRESEASON: &str = "Preseason";
    pub const OFFSEASON: &str = "Offseason";
    pub const CHAMPIONSHIP_DIVISION: &str = "Championship Division";
    pub const CHAMPIONSHIP_FINALS: &str = "Championship Finals";
}

/// Placeholder used when a team has no nickname
pub const UNKNOWN_TEAM_NAME: &str = "Unknown";

/// Prefix the provider puts on team keys
pub const TEAM_KEY_PREFIX: &str = "frc";

/// Environment variable names
pub mod env_vars {
    /// Environment variable for the provider API key
    pub const API_KEY: &str = "FRC_STATS_API_KEY";

    /// Environment variable for the default team key
    pub const TEAM_KEY: &str = "FRC_STATS_TEAM_KEY";

    /// Environment variable for the default event key
    pub const EVENT_KEY: &str = "FRC_STATS_EVENT_KEY";

    /// Environment variable for API domain override
    pub const API_DOMAIN: &str = "FRC_STATS_API_DOMAIN";

    /// Environment variable for log file path override
    pub const LOG_FILE: &str = "FRC_STATS_LOG_FILE";

    /// Environment variable for HTTP timeout override in seconds
    pub const HTTP_TIMEOUT: &str = "FRC_STATS_HTTP_TIMEOUT";
}
