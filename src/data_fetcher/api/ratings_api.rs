use crate::data_fetcher::models::{ApiOprs, CoprRecord, OprRecord};
use crate::data_fetcher::processors::{pivot_coprs, pivot_oprs};
use crate::error::AppError;
use serde_json::{Map, Value};
use tracing::{info, instrument};

use super::client::ApiClient;
use super::urls::{Request, RequestKind};

impl ApiClient {
    /// OPR, DPR and CCWM for every team at an event, sorted by team number.
    ///
    /// `event_key` falls back to the configured event.
    #[instrument(skip(self))]
    pub async fn fetch_oprs(&self, event_key: Option<&str>) -> Result<Vec<OprRecord>, AppError> {
        let request = Request::new(RequestKind::EventOpr).maybe_event_key(event_key);
        let url = self.url_for(&request)?;
        let payload: ApiOprs = self.fetch_json(&request).await?;

        let records = pivot_oprs(&payload, &url)?;
        info!("Pivoted OPRs for {} teams", records.len());
        Ok(records)
    }

    /// Component OPRs for every team at an event, one field per metric.
    ///
    /// Metric names vary by season and keep the order the provider sends them in.
    #[instrument(skip(self))]
    pub async fn fetch_coprs(&self, event_key: Option<&str>) -> Result<Vec<CoprRecord>, AppError> {
        let request = Request::new(RequestKind::EventCopr).maybe_event_key(event_key);
        let url = self.url_for(&request)?;
        let payload: Map<String, Value> = self.fetch_json(&request).await?;

        let records = pivot_coprs(payload, &url)?;
        info!("Pivoted COPRs for {} teams", records.len());
        Ok(records)
    }
}
