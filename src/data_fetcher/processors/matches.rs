use crate::data_fetcher::models::{ApiMatchSimple, MatchSummary};

/// Human-readable name for a match; empty for levels without a naming rule.
pub fn describe_match(m: &ApiMatchSimple) -> String {
    match m.comp_level.as_str() {
        "qm" => format!("Qualifying Match {}", m.match_number),
        "sf" => format!("Semifinal Match {}", m.set_number),
        "f" => format!("Final {}", m.match_number),
        _ => String::new(),
    }
}

/// Sorts matches by predicted start (unknown times last) and summarizes each.
pub fn summarize_matches(mut matches: Vec<ApiMatchSimple>) -> Vec<MatchSummary> {
    matches.sort_by_key(|m| (m.predicted_time.is_none(), m.predicted_time));
    matches
        .into_iter()
        .map(|m| MatchSummary {
            description: describe_match(&m),
            match_completed: m
                .winning_alliance
                .as_deref()
                .is_some_and(|alliance| !alliance.is_empty()),
            match_key: m.key,
        })
        .collect()
}
