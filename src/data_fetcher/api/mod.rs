pub mod http_client;
pub mod urls;
mod client;

mod events_api;
mod matches_api;
mod rankings_api;
mod ratings_api;
mod status_api;
mod teams_api;

pub use client::ApiClient;
pub use http_client::{build_headers, create_http_client_with_timeout};
pub use urls::{Endpoint, Request, RequestKind, build_url};
