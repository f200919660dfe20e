use crate::cli::{Command, ConfigArgs};
use frc_stats::config::Config;
use frc_stats::data_fetcher::{EventFilter, Request, RequestKind};
use frc_stats::{ApiClient, AppError};
use futures::TryStreamExt;
use serde::Serialize;
use std::pin::pin;
use tracing::info;

fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String, AppError> {
    serde_json::to_string_pretty(value).map_err(AppError::OutputSerialize)
}

fn to_json_line<T: Serialize + ?Sized>(value: &T) -> Result<String, AppError> {
    serde_json::to_string(value).map_err(AppError::OutputSerialize)
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), AppError> {
    println!("{}", to_pretty_json(value)?);
    Ok(())
}

/// Builds the request for `frc_stats raw`. The kind is parsed here so an
/// unknown name fails before the config is even loaded.
fn raw_request(
    kind: &str,
    year: Option<i32>,
    team: Option<&str>,
    event: Option<&str>,
    page: u32,
) -> Result<Request, AppError> {
    let mut request = Request::new(kind.parse::<RequestKind>()?)
        .maybe_team_key(team)
        .maybe_event_key(event)
        .page(page);
    if let Some(year) = year {
        request = request.year(year);
    }
    Ok(request)
}

async fn load_client() -> Result<ApiClient, AppError> {
    ApiClient::new(Config::load().await?)
}

/// Runs one subcommand and prints its result to stdout.
pub async fn run(command: Command) -> Result<(), AppError> {
    match command {
        Command::Config(config_args) => handle_config_command(&config_args).await,
        Command::Raw {
            kind,
            year,
            team,
            event,
            page,
        } => {
            let request = raw_request(&kind, year, team.as_deref(), event.as_deref(), page)?;
            let client = load_client().await?;
            println!("{}", client.fetch_raw(&request).await?);
            Ok(())
        }
        Command::Events {
            year,
            week0,
            offseason,
        } => {
            let filter = EventFilter {
                include_week0: week0,
                include_offseason: offseason,
            };
            print_json(&load_client().await?.list_events(&year, filter).await?)
        }
        Command::Teams { year, stream: true } => {
            let client = load_client().await?;
            let mut teams = pin!(client.team_stream(&year)?);
            let mut count = 0usize;
            while let Some(team) = teams.try_next().await? {
                println!("{}", to_json_line(&team)?);
                count += 1;
            }
            info!("Streamed {count} teams");
            Ok(())
        }
        Command::Teams { year, stream: false } => {
            print_json(&load_client().await?.fetch_all_teams(&year).await?)
        }
        Command::Oprs { event } => {
            print_json(&load_client().await?.fetch_oprs(event.as_deref()).await?)
        }
        Command::Coprs { event } => {
            print_json(&load_client().await?.fetch_coprs(event.as_deref()).await?)
        }
        Command::Rankings { event } => {
            print_json(&load_client().await?.fetch_rankings(event.as_deref()).await?)
        }
        Command::TeamName { team } => {
            let client = load_client().await?;
            let team_key = match team.as_deref() {
                Some(team) => team,
                None => client.config().team_key()?,
            };
            print_json(&client.fetch_team_name(team_key).await?)
        }
        Command::Matches { team, event } => {
            let client = load_client().await?;
            print_json(
                &client
                    .fetch_match_info(team.as_deref(), event.as_deref())
                    .await?,
            )
        }
        Command::Status => print_json(&load_client().await?.fetch_status().await?),
    }
}

/// Handles `frc_stats config`: lists the settings, or applies the given
/// updates and saves them. Never prompts.
pub async fn handle_config_command(args: &ConfigArgs) -> Result<(), AppError> {
    if !args.has_updates() {
        return Config::display().await;
    }

    let mut config = Config::load_or_default().await?;
    apply_config_updates(&mut config, args);
    config.validate()?;
    config.save().await?;
    println!("Config updated successfully!");

    if args.list {
        Config::display().await?;
    }
    Ok(())
}

fn apply_config_updates(config: &mut Config, args: &ConfigArgs) {
    if let Some(api_key) = &args.api_key {
        config.api_key = api_key.trim().to_string();
    }
    if let Some(team_key) = &args.team_key {
        config.team_key = team_key.trim().to_string();
    }
    if let Some(event_key) = &args.event_key {
        config.event_key = event_key.trim().to_string();
    }
    if let Some(api_domain) = &args.api_domain {
        config.api_domain = api_domain.trim().to_string();
    }
    if let Some(log_file) = &args.set_log_file {
        config.log_file_path = Some(log_file.clone());
    } else if args.clear_log_file {
        config.log_file_path = None;
        println!("Custom log file path cleared. Using default location.");
    }
}
