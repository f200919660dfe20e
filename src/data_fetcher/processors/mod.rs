pub mod event_weeks;
pub mod matches;
pub mod ratings;
pub mod text;

pub use event_weeks::{display_week, select_events, sort_events_by_week};
pub use matches::{describe_match, summarize_matches};
pub use ratings::{pivot_coprs, pivot_oprs, round2};
pub use text::{strip_non_ascii, team_display_name};
