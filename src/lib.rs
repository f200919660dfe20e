//! FRC Stats Library
//!
//! A client for The Blue Alliance v3 API that reshapes its JSON payloads into
//! flat records: season events with display weeks, paginated team listings,
//! OPR/COPR tables, rankings joined with team names, and match summaries.
//!
//! # Examples
//!
//! ```rust,no_run
//! use frc_stats::{ApiClient, AppError, Config};
//! use frc_stats::data_fetcher::EventFilter;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config {
//!         api_key: "your-read-key".to_string(),
//!         event_key: "2024ohcl".to_string(),
//!         ..Config::default()
//!     };
//!     let client = ApiClient::new(config)?;
//!
//!     for event in client.list_events("2024", EventFilter::default()).await? {
//!         println!("{} week {}", event.name, event.week);
//!     }
//!
//!     for row in client.fetch_oprs(None).await? {
//!         println!("{}: {:.2}", row.team_number, row.opr);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::api::ApiClient;
pub use data_fetcher::{Request, RequestKind};
pub use error::AppError;

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
