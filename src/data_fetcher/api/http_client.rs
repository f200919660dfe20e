//! HTTP client creation and authentication headers

use crate::constants::{MAX_REDIRECTS, headers::AUTH_KEY};
use crate::error::AppError;
use reqwest::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, IF_NONE_MATCH};
use reqwest::redirect::Policy;
use std::time::Duration;

/// Creates an HTTP client with a request timeout and redirect following enabled.
pub fn create_http_client_with_timeout(timeout_seconds: u64) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .redirect(Policy::limited(MAX_REDIRECTS))
        .build()
}

/// Builds the header set sent with every request: the auth key plus an empty
/// `If-None-Match`, so the provider always returns a full body instead of a 304.
///
/// # Errors
/// * `AppError::Config` - If the key is empty or cannot be encoded as a header value
pub fn build_headers(api_key: &str) -> Result<HeaderMap, AppError> {
    if api_key.trim().is_empty() {
        return Err(AppError::config_error("api_key is empty"));
    }
    let mut auth = HeaderValue::from_str(api_key.trim()).map_err(|_| {
        AppError::config_error("api_key contains characters that cannot be sent in a header")
    })?;
    auth.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(HeaderName::from_static(AUTH_KEY), auth);
    headers.insert(IF_NONE_MATCH, HeaderValue::from_static(""));
    Ok(headers)
}

/// Creates an HTTP client for testing with default timeout
#[cfg(test)]
pub fn create_test_http_client() -> Client {
    create_http_client_with_timeout(crate::constants::DEFAULT_HTTP_TIMEOUT_SECONDS)
        .expect("Failed to create test HTTP client")
}
