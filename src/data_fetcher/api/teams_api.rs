use crate::data_fetcher::models::{ApiTeamNickname, ApiTeamSimple, TeamRecord};
use crate::data_fetcher::processors::team_display_name;
use crate::constants::TEAM_KEY_PREFIX;
use crate::data_fetcher::validation::{normalize_team_key, validate_year};
use crate::error::AppError;
use futures::stream::{self, Stream, StreamExt, TryStreamExt};
use tracing::{debug, error, info, instrument, warn};

use super::client::ApiClient;
use super::urls::{Endpoint, Request, RequestKind};

/// Outcome of fetching one page of the team listing.
enum TeamPage {
    Teams(Vec<TeamRecord>),
    /// Empty or unreadable page; the listing stops quietly
    End,
    /// The retry executor gave up on this page
    Exhausted(AppError),
}

impl ApiClient {
    async fn fetch_team_page(&self, year: i32, page: u32) -> TeamPage {
        let request = Request::new(RequestKind::AllTeamsList).year(year).page(page);
        let request = &request;

        let Some(body) = self.retrying(move || self.fetch_raw(request)).await else {
            warn!("Giving up on teams page {page} for {year}");
            return TeamPage::Exhausted(AppError::retries_exhausted(
                self.retry_policy().max_retries,
                format!("teams page {page} for {year}"),
            ));
        };

        match serde_json::from_str::<Vec<ApiTeamSimple>>(&body) {
            Ok(teams) if teams.is_empty() => {
                debug!("Teams page {page} for {year} is empty, listing complete");
                TeamPage::End
            }
            Ok(teams) => {
                debug!("Teams page {page} for {year}: {} teams", teams.len());
                TeamPage::Teams(teams.into_iter().map(TeamRecord::from).collect())
            }
            Err(e) => {
                error!("Malformed teams page {page} for {year}: {e}");
                TeamPage::End
            }
        }
    }

    /// Streams every team registered for a season, page by page, starting at page 0.
    ///
    /// Each page goes through the retry executor. The stream ends after the first
    /// empty page, or quietly after a page that is not valid JSON. If a page cannot
    /// be fetched at all, the stream yields one `AppError::RetriesExhausted` and ends,
    /// so running out of retries is never mistaken for the end of the data.
    ///
    /// The year is validated up front; nothing is requested until the stream is polled.
    pub fn team_stream(
        &self,
        year: &str,
    ) -> Result<impl Stream<Item = Result<TeamRecord, AppError>> + '_, AppError> {
        let year = validate_year(year)?;

        let pages = stream::unfold(Some(0u32), move |next_page| async move {
            let page = next_page?;
            match self.fetch_team_page(year, page).await {
                TeamPage::Teams(teams) => Some((
                    teams.into_iter().map(Ok).collect::<Vec<_>>(),
                    Some(page + 1),
                )),
                TeamPage::End => None,
                TeamPage::Exhausted(err) => Some((vec![Err(err)], None)),
            }
        });

        Ok(pages.flat_map(stream::iter))
    }

    /// Collects [`ApiClient::team_stream`] into a list.
    #[instrument(skip(self))]
    pub async fn fetch_all_teams(&self, year: &str) -> Result<Vec<TeamRecord>, AppError> {
        let teams: Vec<TeamRecord> = self.team_stream(year)?.try_collect().await?;
        info!("Fetched {} teams for {}", teams.len(), year);
        Ok(teams)
    }

    /// Looks up a team's display name.
    ///
    /// Accepts `4611` or `frc4611`. A missing nickname becomes `Unknown` and
    /// non-ASCII characters are removed. Fetch and parse failures are wrapped in
    /// `AppError::TeamLookup` with the team key.
    #[instrument(skip(self))]
    pub async fn fetch_team_name(&self, team_key: &str) -> Result<String, AppError> {
        let team_key = normalize_team_key(team_key)?;
        let request = Request::new(RequestKind::TeamName).team_key(team_key.as_str());
        let team: ApiTeamNickname = self
            .fetch_json(&request)
            .await
            .map_err(|e| AppError::team_lookup(&team_key, e))?;
        Ok(team_display_name(team.nickname.as_deref()))
    }

    /// Name lookup for a key that came back from the provider, such as a
    /// ranking row. Keys like `frc1114B` are legitimate there, so only keys
    /// missing the `frc` prefix go through caller-input normalization.
    pub(super) async fn fetch_team_name_for_key(
        &self,
        team_key: &str,
    ) -> Result<String, AppError> {
        let team_key = team_key.trim();
        let team_key = if team_key.len() > TEAM_KEY_PREFIX.len()
            && team_key.starts_with(TEAM_KEY_PREFIX)
        {
            team_key.to_string()
        } else {
            normalize_team_key(team_key)?
        };
        let team: ApiTeamNickname = self
            .fetch_endpoint_json(&Endpoint::Team {
                team_key: team_key.clone(),
            })
            .await
            .map_err(|e| AppError::team_lookup(&team_key, e))?;
        Ok(team_display_name(team.nickname.as_deref()))
    }
}

#[cfg(test)]
mod tests {
    use super::super::client::test_support::test_client;
    use super::*;
    use serde_json::json;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, path},
    };

    fn team_json(number: u32, nickname: &str) -> serde_json::Value {
        json!({
            "key": format!("frc{number}"),
            "team_number": number,
            "nickname": nickname,
            "name": "Sponsors",
            "city": "Columbus",
            "state_prov": "Ohio",
            "country": "USA"
        })
    }

    async fn mount_page(mock_server: &MockServer, page: u32, template: ResponseTemplate) {
        Mock::given(method("GET"))
            .and(path(format!("/teams/2024/{page}/simple")))
            .respond_with(template)
            .mount(mock_server)
            .await;
    }

    #[tokio::test]
    async fn test_single_page_then_empty_stops_after_page_1() {
        let mock_server = MockServer::start().await;
        mount_page(
            &mock_server,
            0,
            ResponseTemplate::new(200).set_body_json(json!([team_json(4611, "OZone")])),
        )
        .await;
        mount_page(&mock_server, 1, ResponseTemplate::new(200).set_body_string("[]")).await;
        Mock::given(method("GET"))
            .and(path("/teams/2024/2/simple"))
            .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
            .expect(0)
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let teams = client.fetch_all_teams("2024").await.unwrap();

        assert_eq!(teams.len(), 1);
        assert_eq!(teams[0].team_number, 4611);
        assert_eq!(teams[0].name.as_deref(), Some("OZone"));
        assert_eq!(mock_server.received_requests().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_pages_are_accumulated_in_order() {
        let mock_server = MockServer::start().await;
        mount_page(
            &mock_server,
            0,
            ResponseTemplate::new(200)
                .set_body_json(json!([team_json(1, "The Juggernauts"), team_json(4, "Team 4")])),
        )
        .await;
        mount_page(
            &mock_server,
            1,
            ResponseTemplate::new(200).set_body_json(json!([team_json(500, "Team 500")])),
        )
        .await;
        mount_page(&mock_server, 2, ResponseTemplate::new(200).set_body_string("[]")).await;

        let client = test_client(&mock_server.uri());
        let numbers: Vec<u32> = client
            .fetch_all_teams("2024")
            .await
            .unwrap()
            .iter()
            .map(|t| t.team_number)
            .collect();

        assert_eq!(numbers, vec![1, 4, 500]);
    }

    #[tokio::test]
    async fn test_transient_failure_is_retried() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/teams/2024/0/simple"))
            .respond_with(ResponseTemplate::new(503))
            .up_to_n_times(1)
            .mount(&mock_server)
            .await;
        mount_page(
            &mock_server,
            0,
            ResponseTemplate::new(200).set_body_json(json!([team_json(48, "Team Xtreme")])),
        )
        .await;
        mount_page(&mock_server, 1, ResponseTemplate::new(200).set_body_string("[]")).await;

        let client = test_client(&mock_server.uri());
        let teams = client.fetch_all_teams("2024").await.unwrap();

        assert_eq!(teams.len(), 1);
        assert_eq!(teams[0].team_number, 48);
    }

    #[tokio::test]
    async fn test_exhausted_retries_are_reported_not_treated_as_end() {
        let mock_server = MockServer::start().await;
        mount_page(
            &mock_server,
            0,
            ResponseTemplate::new(200).set_body_json(json!([team_json(4611, "OZone")])),
        )
        .await;
        Mock::given(method("GET"))
            .and(path("/teams/2024/1/simple"))
            .respond_with(ResponseTemplate::new(500))
            // three attempts for each of the two listings below
            .expect(6)
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let items: Vec<Result<TeamRecord, AppError>> =
            client.team_stream("2024").unwrap().collect().await;

        assert_eq!(items.len(), 2);
        assert!(items[0].is_ok());
        assert!(matches!(
            items[1],
            Err(AppError::RetriesExhausted { attempts: 3, .. })
        ));

        let err = client.fetch_all_teams("2024").await.unwrap_err();
        assert!(matches!(err, AppError::RetriesExhausted { .. }));
    }

    #[tokio::test]
    async fn test_malformed_page_stops_quietly() {
        let mock_server = MockServer::start().await;
        mount_page(
            &mock_server,
            0,
            ResponseTemplate::new(200).set_body_json(json!([team_json(4611, "OZone")])),
        )
        .await;
        mount_page(
            &mock_server,
            1,
            ResponseTemplate::new(200).set_body_string("not json"),
        )
        .await;

        let client = test_client(&mock_server.uri());
        let teams = client.fetch_all_teams("2024").await.unwrap();
        assert_eq!(teams.len(), 1);
    }

    #[tokio::test]
    async fn test_team_stream_validates_year_before_any_request() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
            .expect(0)
            .mount(&mock_server)
            .await;
        let client = test_client(&mock_server.uri());

        for year in ["20AB", "1800", "2031"] {
            assert!(matches!(
                client.team_stream(year).err(),
                Some(AppError::InvalidArgument { .. })
            ));
        }
    }

    #[tokio::test]
    async fn test_fetch_team_name_missing_nickname_is_unknown() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/team/frc4611/simple"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"key": "frc4611", "team_number": 4611})),
            )
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        assert_eq!(client.fetch_team_name("4611").await.unwrap(), "Unknown");
    }

    #[tokio::test]
    async fn test_fetch_team_name_strips_non_ascii() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/team/frc1678/simple"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"key": "frc1678", "nickname": "Citrus Círcuits ⚡"})),
            )
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        assert_eq!(
            client.fetch_team_name("frc1678").await.unwrap(),
            "Citrus Crcuits "
        );
    }

    #[tokio::test]
    async fn test_fetch_team_name_failure_names_the_team() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let err = client.fetch_team_name("9999").await.unwrap_err();
        assert!(matches!(err, AppError::TeamLookup { .. }));
        assert!(err.to_string().contains("frc9999"));
        assert!(err.to_string().contains("404"));
    }

    #[tokio::test]
    async fn test_fetch_team_name_rejects_malformed_key() {
        let client = test_client("http://127.0.0.1:9");
        let err = client.fetch_team_name("team254").await.unwrap_err();
        assert!(matches!(err, AppError::InvalidArgument { .. }));
        let err = client.fetch_team_name("frc1114B").await.unwrap_err();
        assert!(matches!(err, AppError::InvalidArgument { .. }));
    }

    #[tokio::test]
    async fn test_provider_key_with_suffix_is_looked_up() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/team/frc1114B/simple"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"nickname": "Simbotics"})),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        assert_eq!(
            client.fetch_team_name_for_key("frc1114B").await.unwrap(),
            "Simbotics"
        );
    }

    #[tokio::test]
    async fn test_provider_key_without_prefix_is_still_validated() {
        let client = test_client("http://127.0.0.1:9");
        for key in ["", "frc", "team254"] {
            assert!(matches!(
                client.fetch_team_name_for_key(key).await,
                Err(AppError::InvalidArgument { .. })
            ));
        }
    }
}
