use crate::config::Config;
use crate::data_fetcher::retry::{RetryPolicy, TokioSleeper, with_retry};
use crate::data_fetcher::validation::{
    normalize_team_key, validate_event_key, validate_year_value,
};
use crate::error::AppError;
use chrono::{Datelike, Local};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::future::Future;
use tracing::{debug, error, info, instrument};

use super::http_client::{build_headers, create_http_client_with_timeout};
use super::urls::{Endpoint, Request, RequestKind, build_url};

/// Client for the provider API.
///
/// Owns an immutable copy of the configuration; defaults for keys come from it
/// and every request carries its API key. Requests are issued one at a time.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    config: Config,
    retry_policy: RetryPolicy,
    sleeper: TokioSleeper,
}

impl ApiClient {
    /// Builds a client using the configured HTTP timeout and the default retry policy.
    pub fn new(config: Config) -> Result<Self, AppError> {
        let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
        Ok(Self::with_http_client(client, config))
    }

    /// Builds a client around an existing `reqwest::Client`.
    pub fn with_http_client(client: Client, config: Config) -> Self {
        Self {
            client,
            config,
            retry_policy: RetryPolicy::default(),
            sleeper: TokioSleeper,
        }
    }

    /// Replaces the policy used by operations that retry (team listing).
    pub fn with_retry_policy(mut self, retry_policy: RetryPolicy) -> Self {
        self.retry_policy = retry_policy;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn retry_policy(&self) -> &RetryPolicy {
        &self.retry_policy
    }

    fn team_key_or_default(&self, team_key: Option<&str>) -> Result<String, AppError> {
        match team_key {
            Some(key) => normalize_team_key(key),
            None => normalize_team_key(self.config.team_key()?),
        }
    }

    fn event_key_or_default(&self, event_key: Option<&str>) -> Result<String, AppError> {
        let key = match event_key {
            Some(key) => key.trim(),
            None => self.config.event_key()?,
        };
        validate_event_key(key)?;
        Ok(key.to_string())
    }

    /// Fills in defaults and picks the endpoint for a request.
    ///
    /// Only the parameters a kind actually uses are resolved, so a missing
    /// event key in the config does not break team-only requests. An explicit
    /// year must fall within the supported seasons.
    pub fn resolve(&self, request: &Request) -> Result<Endpoint, AppError> {
        let year = || match request.year {
            Some(year) => validate_year_value(year),
            None => Ok(Local::now().year()),
        };
        let team_key = || self.team_key_or_default(request.team_key.as_deref());
        let event_key = || self.event_key_or_default(request.event_key.as_deref());

        Ok(match request.kind {
            RequestKind::AllEventsList => Endpoint::Events { year: year()? },
            RequestKind::AllTeamsList => Endpoint::Teams {
                year: year()?,
                page: request.page,
            },
            RequestKind::TeamName => Endpoint::Team {
                team_key: team_key()?,
            },
            RequestKind::EventOpr => Endpoint::EventOprs {
                event_key: event_key()?,
            },
            RequestKind::EventCopr => Endpoint::EventCoprs {
                event_key: event_key()?,
            },
            RequestKind::TeamMatch => Endpoint::TeamEventMatches {
                team_key: team_key()?,
                event_key: event_key()?,
            },
            RequestKind::EventRanking => Endpoint::EventRankings {
                event_key: event_key()?,
            },
            RequestKind::Status => Endpoint::Status,
        })
    }

    /// Resolves the request to its full URL.
    pub fn url_for(&self, request: &Request) -> Result<String, AppError> {
        Ok(build_url(&self.config.api_domain, &self.resolve(request)?))
    }

    /// Issues one GET and returns the raw body.
    ///
    /// # Errors
    /// * `AppError::InvalidArgument` / `AppError::Config` - bad or missing parameters, before any I/O
    /// * `AppError::ApiStatus` - anything other than 200
    /// * `AppError::ApiNoData` - 200 with an empty body
    /// * `AppError::NetworkTimeout` / `AppError::NetworkConnection` / `AppError::ApiFetch` - transport failures
    ///
    /// Nothing is retried here.
    pub async fn fetch_raw(&self, request: &Request) -> Result<String, AppError> {
        self.fetch_body(request).await.map(|(_, body)| body)
    }

    #[instrument(skip(self), fields(kind = %request.kind))]
    async fn fetch_body(&self, request: &Request) -> Result<(String, String), AppError> {
        let url = self.url_for(request)?;
        self.fetch_url(url).await
    }

    async fn fetch_url(&self, url: String) -> Result<(String, String), AppError> {
        let headers = build_headers(self.config.api_key()?)?;

        info!("Fetching data from URL: {url}");
        let response = self
            .client
            .get(&url)
            .headers(headers)
            .send()
            .await
            .map_err(|e| {
                error!("Request failed for URL {}: {}", url, e);
                if e.is_timeout() {
                    AppError::network_timeout(&url)
                } else if e.is_connect() {
                    AppError::network_connection(&url, e.to_string())
                } else {
                    AppError::ApiFetch(e)
                }
            })?;

        let status = response.status();
        debug!("Response status: {status}");
        if status != StatusCode::OK {
            error!("HTTP {} (URL: {})", status.as_u16(), url);
            return Err(AppError::api_status(status.as_u16(), url));
        }

        let body = response.text().await.map_err(|e| {
            error!("Failed to read response text from URL {}: {}", url, e);
            AppError::ApiFetch(e)
        })?;
        if body.trim().is_empty() {
            error!("Empty response body (URL: {})", url);
            return Err(AppError::api_no_data(url));
        }

        debug!("Response length: {} bytes", body.len());
        Ok((url, body))
    }

    /// Fetches a request and parses the body as JSON.
    pub async fn fetch_json<T: DeserializeOwned>(&self, request: &Request) -> Result<T, AppError> {
        let (url, body) = self.fetch_body(request).await?;
        parse_body(&body, &url)
    }

    /// Fetches an already resolved endpoint and parses the body as JSON.
    ///
    /// Used for keys the provider handed back, which skip caller-input validation.
    pub(super) async fn fetch_endpoint_json<T: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
    ) -> Result<T, AppError> {
        let url = build_url(&self.config.api_domain, endpoint);
        let (url, body) = self.fetch_url(url).await?;
        parse_body(&body, &url)
    }

    /// Runs `operation` under this client's retry policy.
    pub(super) async fn retrying<T, F, Fut>(&self, operation: F) -> Option<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, AppError>>,
    {
        with_retry(&self.retry_policy, &self.sleeper, operation).await
    }
}

/// Parses a response body, logging a preview when it does not match `T`.
pub(super) fn parse_body<T: DeserializeOwned>(body: &str, url: &str) -> Result<T, AppError> {
    serde_json::from_str::<T>(body).map_err(|e| {
        error!("Failed to parse API response: {} (URL: {})", e, url);
        error!(
            "Response text (first 200 chars): {}",
            body.chars().take(200).collect::<String>()
        );
        if body.trim_start().starts_with('{') || body.trim_start().starts_with('[') {
            AppError::api_unexpected_structure(e.to_string(), url)
        } else {
            AppError::ApiParse(e)
        }
    })
}
