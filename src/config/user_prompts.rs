//! User prompts for first-run configuration
//!
//! Asks for the provider keys when no config file exists yet.

use crate::error::AppError;
use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt};

async fn prompt_line<R>(reader: &mut R, label: &str) -> Result<String, AppError>
where
    R: AsyncBufReadExt + Unpin,
{
    let mut out = io::stdout();
    out.write_all(label.as_bytes()).await?;
    out.flush().await?;
    let mut input = String::new();
    reader.read_line(&mut input).await?;
    Ok(input.trim().to_string())
}

/// Prompts for the API key, default team key and default event key.
///
/// Team and event keys may be left blank; the API key may not.
///
/// # Example
/// ```no_run
/// use frc_stats::config::user_prompts::prompt_for_keys;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let (api_key, team_key, event_key) = prompt_for_keys().await?;
/// # Ok(())
/// # }
/// ```
pub async fn prompt_for_keys() -> Result<(String, String, String), AppError> {
    let mut reader = io::BufReader::new(io::stdin());

    let api_key = prompt_line(&mut reader, "Please enter your API key: ").await?;
    if api_key.is_empty() {
        return Err(AppError::config_error("An API key is required"));
    }
    let team_key = prompt_line(&mut reader, "Default team key (e.g. frc4611, optional): ").await?;
    let event_key =
        prompt_line(&mut reader, "Default event key (e.g. 2024ohcl, optional): ").await?;

    Ok((api_key, team_key, event_key))
}
