pub mod events;
pub mod matches;
pub mod rankings;
pub mod ratings;
pub mod status;
pub mod teams;

pub use events::{ApiEvent, EventFilter, EventRecord, EventWeek};
pub use matches::{ApiMatchSimple, MatchSummary};
pub use rankings::{ApiRanking, ApiRankings, ApiWinLossRecord, RankingRecord};
pub use ratings::{ApiOprs, CoprRecord, OprRecord};
pub use status::ApiStatus;
pub use teams::{ApiTeamNickname, ApiTeamSimple, TeamRecord};
