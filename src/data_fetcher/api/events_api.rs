use crate::data_fetcher::models::{ApiEvent, EventFilter, EventRecord};
use crate::data_fetcher::processors::select_events;
use crate::data_fetcher::validation::validate_year;
use crate::error::AppError;
use tracing::{info, instrument};

use super::client::ApiClient;
use super::urls::{Request, RequestKind};

impl ApiClient {
    /// Lists a season's events with their display week.
    ///
    /// Events are sorted by provider week (week-less ones last) and then filtered;
    /// see [`crate::data_fetcher::processors::display_week`] for the rules.
    #[instrument(skip(self))]
    pub async fn list_events(
        &self,
        year: &str,
        filter: EventFilter,
    ) -> Result<Vec<EventRecord>, AppError> {
        let year = validate_year(year)?;
        let request = Request::new(RequestKind::AllEventsList).year(year);
        let events: Vec<ApiEvent> = self.fetch_json(&request).await?;
        let total = events.len();

        let records = select_events(events, filter);
        info!("Listed {} of {} events for {}", records.len(), total, year);
        Ok(records)
    }
}
