use crate::constants::events::{
    CHAMPIONSHIP_DIVISION, CHAMPIONSHIP_FINALS, CHAMPIONSHIP_WEEK, OFFSEASON, PRESEASON,
    PRESEASON_WEEK, UNSCHEDULED_SORT_WEEK,
};
use crate::data_fetcher::models::{ApiEvent, EventFilter, EventRecord, EventWeek};

/// Sorts events by provider week, stable, with week-less events after week 6.
///
/// The fallback week only decides sort position; it never shows up in output.
pub fn sort_events_by_week(events: &mut [ApiEvent]) {
    events.sort_by_key(|event| event.week.unwrap_or(UNSCHEDULED_SORT_WEEK));
}

/// Decides whether an event is listed and which week it is shown under.
///
/// # Rules
/// - Provider week present: always listed, shown one-based (`week + 1`)
/// - `Preseason`: listed as week 0 when `include_week0` is set
/// - `Offseason`: listed under the `Offseason` label when `include_offseason` is set
/// - Championship divisions and finals: always listed as week 8
/// - Anything else without a week is dropped
///
/// # Example
/// ```
/// use frc_stats::data_fetcher::models::{ApiEvent, EventFilter, EventWeek};
/// use frc_stats::data_fetcher::processors::display_week;
///
/// let event = ApiEvent {
///     key: "2024ohcl".to_string(),
///     name: "Buckeye Regional".to_string(),
///     event_type: 0,
///     event_type_string: "Regional".to_string(),
///     week: Some(4),
/// };
/// assert_eq!(display_week(&event, EventFilter::default()), Some(EventWeek::Number(5)));
/// ```
pub fn display_week(event: &ApiEvent, filter: EventFilter) -> Option<EventWeek> {
    if let Some(week) = event.week {
        return Some(EventWeek::Number(week + 1));
    }
    match event.event_type_string.as_str() {
        PRESEASON if filter.include_week0 => Some(EventWeek::Number(PRESEASON_WEEK)),
        OFFSEASON if filter.include_offseason => Some(EventWeek::Offseason),
        CHAMPIONSHIP_DIVISION | CHAMPIONSHIP_FINALS => Some(EventWeek::Number(CHAMPIONSHIP_WEEK)),
        _ => None,
    }
}

/// Sorts the raw events, then keeps the ones [`display_week`] accepts, in sorted order.
pub fn select_events(mut events: Vec<ApiEvent>, filter: EventFilter) -> Vec<EventRecord> {
    sort_events_by_week(&mut events);
    events
        .into_iter()
        .filter_map(|event| {
            let week = display_week(&event, filter)?;
            Some(EventRecord {
                name: event.name,
                key: event.key,
                event_type: event.event_type,
                event_type_string: event.event_type_string,
                week,
            })
        })
        .collect()
}
