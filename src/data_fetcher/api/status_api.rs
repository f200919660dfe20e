use crate::data_fetcher::models::ApiStatus;
use crate::error::AppError;
use tracing::{instrument, warn};

use super::client::ApiClient;
use super::urls::{Request, RequestKind};

impl ApiClient {
    /// Provider status: current and max season, and whether the data feed is down.
    ///
    /// Also a cheap way to check that the configured API key is accepted.
    #[instrument(skip(self))]
    pub async fn fetch_status(&self) -> Result<ApiStatus, AppError> {
        let status: ApiStatus = self.fetch_json(&Request::new(RequestKind::Status)).await?;
        if status.is_datafeed_down {
            warn!("Provider reports its data feed is down");
        }
        Ok(status)
    }
}
