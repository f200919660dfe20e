pub mod api;
pub mod models;
pub mod processors;
pub mod retry;
pub mod validation;

pub use api::{ApiClient, Request, RequestKind};
pub use models::{
    ApiStatus, CoprRecord, EventFilter, EventRecord, EventWeek, MatchSummary, OprRecord,
    RankingRecord, TeamRecord,
};
pub use retry::{RetryPolicy, Sleeper, TokioSleeper, with_retry};
