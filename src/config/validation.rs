use super::Config;
use crate::data_fetcher::validation::{validate_event_key, validate_team_key};
use crate::error::AppError;
use std::path::Path;

/// Validates the configuration settings
///
/// # Validation Rules
/// - API domain cannot be empty and must be an http(s) URL
/// - Team and event keys, when set, must match the provider formats
/// - If log file path is provided, it cannot be empty
/// - Log file path parent directory must exist or be creatable
///
/// A missing API key is not a validation error here; it surfaces when a request
/// is built, so that `config` subcommands keep working without one.
pub fn validate_config(config: &Config) -> Result<(), AppError> {
    let api_domain = config.api_domain.trim();
    if api_domain.is_empty() {
        return Err(AppError::config_error("API domain cannot be empty"));
    }
    if !api_domain.starts_with("http://") && !api_domain.starts_with("https://") {
        return Err(AppError::config_error(format!(
            "API domain must start with http:// or https://, got '{api_domain}'"
        )));
    }

    if !config.team_key.is_empty() {
        validate_team_key(&config.team_key)
            .map_err(|e| AppError::config_error(format!("team_key: {e}")))?;
    }
    if !config.event_key.is_empty() {
        validate_event_key(&config.event_key)
            .map_err(|e| AppError::config_error(format!("event_key: {e}")))?;
    }

    if let Some(log_path) = &config.log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_rejects_bad_domain() {
        let config = Config {
            api_domain: "www.thebluealliance.com".to_string(),
            ..Config::default()
        };
        assert!(matches!(validate_config(&config), Err(AppError::Config(_))));

        let config = Config {
            api_domain: "  ".to_string(),
            ..Config::default()
        };
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_rejects_malformed_keys() {
        let config = Config {
            team_key: "team4611".to_string(),
            ..Config::default()
        };
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("team_key"));

        let config = Config {
            event_key: "ohcl".to_string(),
            ..Config::default()
        };
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_accepts_bare_and_prefixed_team_keys() {
        for key in ["4611", "frc4611"] {
            let config = Config {
                team_key: key.to_string(),
                event_key: "2024ohcl".to_string(),
                ..Config::default()
            };
            assert!(validate_config(&config).is_ok(), "{key} should be valid");
        }
    }

    #[test]
    fn test_rejects_empty_log_path() {
        let config = Config {
            log_file_path: Some(String::new()),
            ..Config::default()
        };
        assert!(validate_config(&config).is_err());
    }
}
