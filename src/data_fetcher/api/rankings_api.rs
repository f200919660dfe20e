use crate::data_fetcher::models::{ApiRankings, RankingRecord};
use crate::data_fetcher::validation::team_number_str;
use crate::error::AppError;
use tracing::{info, instrument, warn};

use super::client::ApiClient;
use super::urls::{Request, RequestKind};

impl ApiClient {
    /// Event rankings joined with each team's display name, in provider order.
    ///
    /// Names are looked up one row at a time. If any lookup fails the whole call
    /// fails and no rows are returned. An event without published rankings
    /// yields an empty list.
    #[instrument(skip(self))]
    pub async fn fetch_rankings(
        &self,
        event_key: Option<&str>,
    ) -> Result<Vec<RankingRecord>, AppError> {
        let request = Request::new(RequestKind::EventRanking).maybe_event_key(event_key);
        let payload: ApiRankings = self.fetch_json(&request).await?;

        let Some(rankings) = payload.rankings else {
            warn!("Event has no rankings yet");
            return Ok(Vec::new());
        };

        let mut records = Vec::with_capacity(rankings.len());
        for ranking in rankings {
            let team_name = self.fetch_team_name_for_key(&ranking.team_key).await?;
            let record = ranking.record.unwrap_or_default();
            records.push(RankingRecord {
                rank: ranking.rank,
                team_number: team_number_str(&ranking.team_key).to_string(),
                team_name,
                wins: record.wins,
                losses: record.losses,
                ties: record.ties,
                matches_played: ranking.matches_played,
            });
        }

        info!("Enriched {} ranking rows", records.len());
        Ok(records)
    }
}
