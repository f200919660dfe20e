use crate::constants::{self, env_vars};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod user_prompts;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use user_prompts::prompt_for_keys;
use validation::validate_config;

/// Configuration record for the application.
///
/// The three provider fields are stored as plain strings; an empty string means
/// "not configured" and the accessors turn that into a configuration error.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Provider API key sent with every request
    #[serde(default)]
    pub api_key: String,
    /// Default team key (`frc4611` or bare `4611`)
    #[serde(default)]
    pub team_key: String,
    /// Default event key (`2024ohcl`)
    #[serde(default)]
    pub event_key: String,
    /// Base path of the API, including the version prefix
    #[serde(default = "default_api_domain")]
    pub api_domain: String,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// HTTP timeout in seconds for API requests. Defaults to 30 seconds if not specified.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
}

fn default_api_domain() -> String {
    constants::DEFAULT_API_DOMAIN.to_string()
}

fn default_http_timeout() -> u64 {
    constants::DEFAULT_HTTP_TIMEOUT_SECONDS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_key: String::new(),
            team_key: String::new(),
            event_key: String::new(),
            api_domain: default_api_domain(),
            log_file_path: None,
            http_timeout_seconds: default_http_timeout(),
        }
    }
}

fn required<'a>(value: &'a str, field: &str) -> Result<&'a str, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(AppError::config_error(format!(
            "{field} is not set; run `frc_stats config --{}` first",
            field.replace('_', "-")
        )))
    } else {
        Ok(trimmed)
    }
}

impl Config {
    /// Returns the configured API key or a configuration error when it is missing.
    pub fn api_key(&self) -> Result<&str, AppError> {
        required(&self.api_key, "api_key")
    }

    /// Returns the configured default team key.
    pub fn team_key(&self) -> Result<&str, AppError> {
        required(&self.team_key, "team_key")
    }

    /// Returns the configured default event key.
    pub fn event_key(&self) -> Result<&str, AppError> {
        required(&self.event_key, "event_key")
    }

    /// Loads configuration from the default config file location.
    /// If no config file exists and no API key is provided through the environment,
    /// prompts the user for the provider keys and creates one.
    ///
    /// # Environment Variables
    /// - `FRC_STATS_API_KEY` - Override API key
    /// - `FRC_STATS_TEAM_KEY` - Override default team key
    /// - `FRC_STATS_EVENT_KEY` - Override default event key
    /// - `FRC_STATS_API_DOMAIN` - Override API domain
    /// - `FRC_STATS_LOG_FILE` - Override log file path
    /// - `FRC_STATS_HTTP_TIMEOUT` - Override HTTP timeout in seconds (default: 30)
    ///
    /// # Returns
    /// * `Ok(Config)` - Successfully loaded or created configuration
    /// * `Err(AppError)` - Error occurred during load/create
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            Self::load_from_path(&config_path).await?
        } else if std::env::var(env_vars::API_KEY).is_ok() {
            Config::default()
        } else {
            let (api_key, team_key, event_key) = prompt_for_keys().await?;
            let config = Config {
                api_key,
                team_key,
                event_key,
                ..Config::default()
            };
            config.save().await?;
            config
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads configuration without prompting, falling back to defaults plus
    /// environment overrides when no file exists.
    pub async fn load_or_default() -> Result<Self, AppError> {
        let config_path = get_config_path();
        let mut config = if Path::new(&config_path).exists() {
            Self::load_from_path(&config_path).await?
        } else {
            Config::default()
        };
        config.apply_env_overrides();
        Ok(config)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(api_key) = std::env::var(env_vars::API_KEY) {
            self.api_key = api_key;
        }
        if let Ok(team_key) = std::env::var(env_vars::TEAM_KEY) {
            self.team_key = team_key;
        }
        if let Ok(event_key) = std::env::var(env_vars::EVENT_KEY) {
            self.event_key = event_key;
        }
        if let Ok(api_domain) = std::env::var(env_vars::API_DOMAIN) {
            self.api_domain = api_domain;
        }
        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }
        if let Some(timeout) = std::env::var(env_vars::HTTP_TIMEOUT)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            self.http_timeout_seconds = timeout;
        }
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(self)
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    /// The API key is masked apart from its last four characters.
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();

        if Path::new(&config_path).exists() {
            let config = Config::load_from_path(&config_path).await?;
            println!("\nCurrent Configuration");
            println!("────────────────────────────────────");
            println!("Config Location:");
            println!("{config_path}");
            println!("────────────────────────────────────");
            println!("API Domain:");
            println!("{}", config.api_domain);
            println!("────────────────────────────────────");
            println!("API Key:");
            println!("{}", mask_secret(&config.api_key));
            println!("────────────────────────────────────");
            println!("Team Key / Event Key:");
            println!("{} / {}", or_unset(&config.team_key), or_unset(&config.event_key));
            println!("────────────────────────────────────");
            println!("HTTP Timeout:");
            println!("{} seconds", config.http_timeout_seconds);
            println!("────────────────────────────────────");
            println!("Log File Location:");
            if let Some(custom_path) = &config.log_file_path {
                println!("{custom_path}");
            } else {
                println!("{log_dir}/{}.log", constants::APP_NAME);
                println!("(Default location)");
            }
        } else {
            println!("\nNo configuration file found at:");
            println!("{config_path}");
        }

        Ok(())
    }

    /// Saves configuration to a custom file path as pretty-printed JSON.
    ///
    /// Creates the parent directory if it doesn't exist.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::ConfigSerialize` - If the configuration cannot be serialized
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.as_os_str().is_empty() && !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| AppError::ConfigSerialize(e.to_string()))?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads configuration from a custom file path.
    /// A file that is not valid JSON is reported as a configuration error.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        serde_json::from_str(&content).map_err(|e| {
            AppError::config_error(format!("Config file '{path}' is not valid JSON: {e}"))
        })
    }
}

fn mask_secret(secret: &str) -> String {
    if secret.is_empty() {
        return "(not set)".to_string();
    }
    let visible: String = secret
        .chars()
        .rev()
        .take(4)
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    format!("****{visible}")
}

fn or_unset(value: &str) -> &str {
    if value.is_empty() { "(not set)" } else { value }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    fn sample_config() -> Config {
        Config {
            api_key: "abc123secret".to_string(),
            team_key: "frc4611".to_string(),
            event_key: "2024ohcl".to_string(),
            ..Config::default()
        }
    }

    #[tokio::test]
    async fn test_config_load_existing_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.json");
        let config_path_str = config_path.to_string_lossy();

        let config_content = r#"{
            "api_key": "abc123",
            "team_key": "frc4611",
            "event_key": "2024ohcl"
        }"#;
        tokio::fs::write(&config_path, config_content).await.unwrap();

        let config = Config::load_from_path(&config_path_str).await.unwrap();

        assert_eq!(config.api_key, "abc123");
        assert_eq!(config.team_key, "frc4611");
        assert_eq!(config.event_key, "2024ohcl");
        assert_eq!(config.api_domain, constants::DEFAULT_API_DOMAIN);
        assert_eq!(
            config.http_timeout_seconds,
            constants::DEFAULT_HTTP_TIMEOUT_SECONDS
        );
        assert_eq!(config.log_file_path, None);
    }

    #[tokio::test]
    async fn test_config_save_creates_directory() {
        let temp_dir = tempdir().unwrap();
        let config_dir = temp_dir.path().join("frc_stats");
        let config_path = config_dir.join("config.json");
        let config_path_str = config_path.to_string_lossy();

        sample_config().save_to_path(&config_path_str).await.unwrap();

        assert!(config_dir.exists());
        assert!(config_path.exists());
        let content = tokio::fs::read_to_string(&config_path).await.unwrap();
        assert!(content.contains("\"team_key\": \"frc4611\""));
        // log_file_path is skipped when unset
        assert!(!content.contains("log_file_path"));
    }

    #[tokio::test]
    async fn test_config_save_and_load_roundtrip() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.json");
        let config_path_str = config_path.to_string_lossy();
        let original = Config {
            log_file_path: Some("/custom/log/path".to_string()),
            ..sample_config()
        };

        original.save_to_path(&config_path_str).await.unwrap();
        let loaded = Config::load_from_path(&config_path_str).await.unwrap();

        assert_eq!(original, loaded);
    }

    #[tokio::test]
    async fn test_config_load_from_nonexistent_path() {
        let result = Config::load_from_path("/nonexistent/path/config.json").await;
        assert!(matches!(result.unwrap_err(), AppError::Io(_)));
    }

    #[tokio::test]
    async fn test_config_malformed_json_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("malformed.json");
        tokio::fs::write(&config_path, "{ \"api_key\": ").await.unwrap();

        let result = Config::load_from_path(&config_path.to_string_lossy()).await;
        assert!(matches!(result.unwrap_err(), AppError::Config(_)));
    }

    #[test]
    fn test_accessors_reject_empty_fields() {
        let config = Config::default();
        assert!(matches!(config.api_key(), Err(AppError::Config(_))));
        assert!(matches!(config.team_key(), Err(AppError::Config(_))));
        assert!(matches!(config.event_key(), Err(AppError::Config(_))));

        let config = sample_config();
        assert_eq!(config.api_key().unwrap(), "abc123secret");
        assert_eq!(config.team_key().unwrap(), "frc4611");
        assert_eq!(config.event_key().unwrap(), "2024ohcl");
    }

    #[test]
    fn test_accessor_error_names_the_field() {
        let err = Config::default().event_key().unwrap_err();
        assert!(err.to_string().contains("event_key"));
        assert!(err.to_string().contains("--event-key"));
    }

    #[test]
    fn test_mask_secret() {
        assert_eq!(mask_secret(""), "(not set)");
        assert_eq!(mask_secret("abcdefgh"), "****efgh");
        assert_eq!(mask_secret("ab"), "****ab");
    }

    #[test]
    #[serial]
    fn test_env_overrides() {
        unsafe {
            std::env::set_var(env_vars::API_KEY, "from-env");
            std::env::set_var(env_vars::HTTP_TIMEOUT, "5");
        }
        let mut config = sample_config();
        config.apply_env_overrides();
        unsafe {
            std::env::remove_var(env_vars::API_KEY);
            std::env::remove_var(env_vars::HTTP_TIMEOUT);
        }

        assert_eq!(config.api_key, "from-env");
        assert_eq!(config.http_timeout_seconds, 5);
        assert_eq!(config.team_key, "frc4611");
    }

    #[test]
    #[serial]
    fn test_env_override_ignores_unparsable_timeout() {
        unsafe {
            std::env::set_var(env_vars::HTTP_TIMEOUT, "soon");
        }
        let mut config = sample_config();
        config.apply_env_overrides();
        unsafe {
            std::env::remove_var(env_vars::HTTP_TIMEOUT);
        }

        assert_eq!(
            config.http_timeout_seconds,
            constants::DEFAULT_HTTP_TIMEOUT_SECONDS
        );
    }
}
