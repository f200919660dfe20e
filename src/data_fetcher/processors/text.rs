use crate::constants::UNKNOWN_TEAM_NAME;

/// Drops every non-ASCII character.
pub fn strip_non_ascii(text: &str) -> String {
    text.chars().filter(char::is_ascii).collect()
}

/// Display name for a team: its nickname with non-ASCII removed, or `Unknown`.
pub fn team_display_name(nickname: Option<&str>) -> String {
    strip_non_ascii(nickname.unwrap_or(UNKNOWN_TEAM_NAME))
}
