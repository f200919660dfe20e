//! Input validation applied before any request leaves the process

use crate::constants::{TEAM_KEY_PREFIX, season};
use crate::error::AppError;
use regex::Regex;
use std::sync::LazyLock;

static YEAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}$").expect("valid year regex"));
static TEAM_KEY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(frc)?\d{1,5}$").expect("valid team key regex"));
static EVENT_KEY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}[A-Za-z0-9]+$").expect("valid event key regex"));

/// Parses a season year, which must be exactly four digits within the supported range.
///
/// # Example
/// ```
/// use frc_stats::data_fetcher::validation::validate_year;
///
/// assert_eq!(validate_year("2025").unwrap(), 2025);
/// assert!(validate_year("20AB").is_err());
/// assert!(validate_year("1800").is_err());
/// ```
pub fn validate_year(year: &str) -> Result<i32, AppError> {
    let year = year.trim();
    if !YEAR_RE.is_match(year) {
        return Err(AppError::invalid_argument(
            "year",
            year,
            "must be exactly 4 digits",
        ));
    }
    let parsed: i32 = year
        .parse()
        .map_err(|_| AppError::invalid_argument("year", year, "not a number"))?;
    validate_year_value(parsed)
}

/// Range check for a year that is already a number.
pub fn validate_year_value(year: i32) -> Result<i32, AppError> {
    if !(season::MIN_YEAR..=season::MAX_YEAR).contains(&year) {
        return Err(AppError::invalid_argument(
            "year",
            year.to_string(),
            format!(
                "must be between {} and {}",
                season::MIN_YEAR,
                season::MAX_YEAR
            ),
        ));
    }
    Ok(year)
}

/// Checks a team key: a bare 1-5 digit number or `frc` followed by 1-5 digits.
pub fn validate_team_key(team_key: &str) -> Result<(), AppError> {
    if TEAM_KEY_RE.is_match(team_key.trim()) {
        Ok(())
    } else {
        Err(AppError::invalid_argument(
            "team key",
            team_key,
            "expected a team number or frc followed by 1-5 digits",
        ))
    }
}

/// Checks an event key: four digits followed by at least one alphanumeric character.
pub fn validate_event_key(event_key: &str) -> Result<(), AppError> {
    if EVENT_KEY_RE.is_match(event_key.trim()) {
        Ok(())
    } else {
        Err(AppError::invalid_argument(
            "event key",
            event_key,
            "expected a 4-digit year followed by the event code",
        ))
    }
}

/// Validates a team key and returns it in `frcNNNN` form.
///
/// # Example
/// ```
/// use frc_stats::data_fetcher::validation::normalize_team_key;
///
/// assert_eq!(normalize_team_key("4611").unwrap(), "frc4611");
/// assert_eq!(normalize_team_key("frc48").unwrap(), "frc48");
/// ```
pub fn normalize_team_key(team_key: &str) -> Result<String, AppError> {
    validate_team_key(team_key)?;
    let team_key = team_key.trim();
    if team_key.starts_with(TEAM_KEY_PREFIX) {
        Ok(team_key.to_string())
    } else {
        Ok(format!("{TEAM_KEY_PREFIX}{team_key}"))
    }
}

/// Strips the `frc` prefix from a provider team key.
pub fn team_number_str(team_key: &str) -> &str {
    team_key.strip_prefix(TEAM_KEY_PREFIX).unwrap_or(team_key)
}

/// Parses the numeric part of a provider team key, `None` if it is not a number.
pub fn team_number_from_key(team_key: &str) -> Option<u32> {
    team_number_str(team_key).parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_year_accepts_supported_range() {
        assert_eq!(validate_year("2025").unwrap(), 2025);
        assert_eq!(validate_year("1992").unwrap(), 1992);
        assert_eq!(validate_year("2026").unwrap(), 2026);
    }

    #[test]
    fn test_validate_year_rejects_non_digits() {
        let err = validate_year("20AB").unwrap_err();
        assert!(matches!(err, AppError::InvalidArgument { field: "year", .. }));
        assert!(err.to_string().contains("20AB"));
        assert!(validate_year("202").is_err());
        assert!(validate_year("20255").is_err());
    }

    #[test]
    fn test_validate_year_rejects_out_of_range() {
        let err = validate_year("1800").unwrap_err();
        assert!(err.to_string().contains("1800"));
        assert!(validate_year("1991").is_err());
        assert!(validate_year("2027").is_err());
    }

    #[test]
    fn test_validate_year_value() {
        assert_eq!(validate_year_value(2024).unwrap(), 2024);
        assert!(matches!(
            validate_year_value(1800),
            Err(AppError::InvalidArgument { field: "year", .. })
        ));
        assert!(validate_year_value(20255).is_err());
        assert!(validate_year_value(-2024).is_err());
    }

    #[test]
    fn test_validate_team_key() {
        for ok in ["1", "254", "4611", "99999", "frc1", "frc4611"] {
            assert!(validate_team_key(ok).is_ok(), "{ok} should be valid");
        }
        for bad in ["", "frc", "123456", "frc123456", "team254", "FRC254", "25a"] {
            assert!(validate_team_key(bad).is_err(), "{bad} should be invalid");
        }
    }

    #[test]
    fn test_validate_event_key() {
        for ok in ["2024ohcl", "2019cmptx", "2023micmp4"] {
            assert!(validate_event_key(ok).is_ok(), "{ok} should be valid");
        }
        for bad in ["", "2024", "ohcl", "24ohcl", "2024-ohcl"] {
            assert!(validate_event_key(bad).is_err(), "{bad} should be invalid");
        }
    }

    #[test]
    fn test_normalize_team_key() {
        assert_eq!(normalize_team_key("4611").unwrap(), "frc4611");
        assert_eq!(normalize_team_key(" frc4611 ").unwrap(), "frc4611");
        assert!(normalize_team_key("frcABC").is_err());
    }

    #[test]
    fn test_team_number_helpers() {
        assert_eq!(team_number_str("frc4611"), "4611");
        assert_eq!(team_number_str("4611"), "4611");
        assert_eq!(team_number_from_key("frc48"), Some(48));
        assert_eq!(team_number_from_key("frcB"), None);
    }
}
