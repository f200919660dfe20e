use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    // Caller-fixable input errors, raised before any I/O
    #[error("Invalid {field} '{value}': {reason}")]
    InvalidArgument {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("Unknown request kind: {0}")]
    InvalidRequestKind(String),

    #[error("Configuration error: {0}")]
    Config(String),

    // Upstream errors
    #[error("Failed to fetch data from API: {0}")]
    ApiFetch(#[from] reqwest::Error),

    #[error("Failed to parse API response: {0}")]
    ApiParse(#[from] serde_json::Error),

    #[error("API returned status {status} (URL: {url})")]
    ApiStatus { status: u16, url: String },

    #[error("API returned an empty body (URL: {url})")]
    ApiNoData { url: String },

    #[error("Network timeout while fetching data from: {url}")]
    NetworkTimeout { url: String },

    #[error("Connection failed to: {url} - {message}")]
    NetworkConnection { url: String, message: String },

    #[error("API returned unexpected data structure: {message} (URL: {url})")]
    ApiUnexpectedStructure { message: String, url: String },

    #[error("Failed to look up team name for {team_key}: {source}")]
    TeamLookup {
        team_key: String,
        #[source]
        source: Box<AppError>,
    },

    #[error("Gave up after {attempts} failed attempts: {context}")]
    RetriesExhausted { attempts: u32, context: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize config: {0}")]
    ConfigSerialize(String),

    #[error("Failed to serialize output: {0}")]
    OutputSerialize(#[source] serde_json::Error),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Create an invalid argument error carrying the offending value
    pub fn invalid_argument(
        field: &'static str,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidArgument {
            field,
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an error for a non-200 HTTP status
    pub fn api_status(status: u16, url: impl Into<String>) -> Self {
        Self::ApiStatus {
            status,
            url: url.into(),
        }
    }

    /// Create an empty body error
    pub fn api_no_data(url: impl Into<String>) -> Self {
        Self::ApiNoData { url: url.into() }
    }

    /// Create a network timeout error
    pub fn network_timeout(url: impl Into<String>) -> Self {
        Self::NetworkTimeout { url: url.into() }
    }

    /// Create a network connection error
    pub fn network_connection(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::NetworkConnection {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create an unexpected data structure error
    pub fn api_unexpected_structure(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiUnexpectedStructure {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Wrap a failed team-name lookup so the key shows up in the message
    pub fn team_lookup(team_key: impl Into<String>, source: AppError) -> Self {
        Self::TeamLookup {
            team_key: team_key.into(),
            source: Box::new(source),
        }
    }

    pub fn retries_exhausted(attempts: u32, context: impl Into<String>) -> Self {
        Self::RetriesExhausted {
            attempts,
            context: context.into(),
        }
    }

    /// True for failures that originate at the provider or on the wire.
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            AppError::ApiFetch(_)
                | AppError::ApiParse(_)
                | AppError::ApiStatus { .. }
                | AppError::ApiNoData { .. }
                | AppError::NetworkTimeout { .. }
                | AppError::NetworkConnection { .. }
                | AppError::ApiUnexpectedStructure { .. }
                | AppError::TeamLookup { .. }
                | AppError::RetriesExhausted { .. }
        )
    }

    /// Check if error is worth retrying (network issues, server errors, rate limits)
    pub fn is_retryable(&self) -> bool {
        match self {
            AppError::NetworkTimeout { .. } | AppError::NetworkConnection { .. } => true,
            AppError::ApiStatus { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}
