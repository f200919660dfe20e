use crate::data_fetcher::models::{ApiMatchSimple, MatchSummary};
use crate::data_fetcher::processors::summarize_matches;
use crate::error::AppError;
use tracing::{info, instrument};

use super::client::ApiClient;
use super::urls::{Request, RequestKind};

impl ApiClient {
    /// A team's matches at an event, ordered by predicted start time.
    ///
    /// Both keys fall back to the configured defaults.
    #[instrument(skip(self))]
    pub async fn fetch_match_info(
        &self,
        team_key: Option<&str>,
        event_key: Option<&str>,
    ) -> Result<Vec<MatchSummary>, AppError> {
        let request = Request::new(RequestKind::TeamMatch)
            .maybe_team_key(team_key)
            .maybe_event_key(event_key);
        let matches: Vec<ApiMatchSimple> = self.fetch_json(&request).await?;

        let summaries = summarize_matches(matches);
        info!("Summarized {} matches", summaries.len());
        Ok(summaries)
    }
}
