use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, Subcommand};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// FRC statistics from The Blue Alliance
///
/// Fetches events, teams, power ratings, rankings and match schedules and
/// prints them as JSON. Team and event arguments fall back to the keys stored
/// with `frc_stats config`.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Also write debug-level logs to stderr.
    #[arg(long, global = true, help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", global = true, help_heading = "Debug")]
    pub log_file: Option<String>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[command(rename_all = "kebab-case")]
pub enum Command {
    /// List a season's events with their display week
    Events {
        /// Four-digit season, e.g. 2024
        year: String,
        /// Include preseason (week 0) events
        #[arg(long)]
        week0: bool,
        /// Include offseason events
        #[arg(long)]
        offseason: bool,
    },
    /// List every team registered for a season
    Teams {
        /// Four-digit season, e.g. 2024
        year: String,
        /// Print one compact JSON object per team as each page arrives
        #[arg(long)]
        stream: bool,
    },
    /// OPR, DPR and CCWM for an event
    Oprs {
        #[arg(short, long)]
        event: Option<String>,
    },
    /// Component OPRs for an event
    Coprs {
        #[arg(short, long)]
        event: Option<String>,
    },
    /// Event rankings with team names
    Rankings {
        #[arg(short, long)]
        event: Option<String>,
    },
    /// Look up a team's nickname
    TeamName {
        /// `4611` or `frc4611`
        team: Option<String>,
    },
    /// A team's matches at an event
    Matches {
        #[arg(short, long)]
        team: Option<String>,
        #[arg(short, long)]
        event: Option<String>,
    },
    /// Provider status and current season
    Status,
    /// Fetch one endpoint and print the body untouched
    Raw {
        /// all_events_list, all_teams_list, team_name, event_opr, event_copr,
        /// team_match, event_ranking or status
        kind: String,
        #[arg(short, long)]
        year: Option<i32>,
        #[arg(short, long)]
        team: Option<String>,
        #[arg(short, long)]
        event: Option<String>,
        #[arg(short, long, default_value_t = 0)]
        page: u32,
    },
    /// Show or update the stored configuration
    Config(ConfigArgs),
}

#[derive(clap::Args, Debug, Clone, PartialEq, Default)]
pub struct ConfigArgs {
    /// List current configuration settings
    #[arg(long = "list", short = 'l')]
    pub list: bool,

    #[arg(long = "api-key")]
    pub api_key: Option<String>,

    #[arg(long = "team-key")]
    pub team_key: Option<String>,

    #[arg(long = "event-key")]
    pub event_key: Option<String>,

    #[arg(long = "api-domain")]
    pub api_domain: Option<String>,

    /// Persist a custom log file location
    #[arg(long = "set-log-file", conflicts_with = "clear_log_file")]
    pub set_log_file: Option<String>,

    /// Revert to the default log location
    #[arg(long = "clear-log-file")]
    pub clear_log_file: bool,
}

impl ConfigArgs {
    /// True when at least one setting would change.
    pub fn has_updates(&self) -> bool {
        self.api_key.is_some()
            || self.team_key.is_some()
            || self.event_key.is_some()
            || self.api_domain.is_some()
            || self.set_log_file.is_some()
            || self.clear_log_file
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_events_with_flags() {
        let args = Args::try_parse_from(["frc_stats", "events", "2024", "--week0"]).unwrap();
        assert_eq!(
            args.command,
            Command::Events {
                year: "2024".to_string(),
                week0: true,
                offseason: false,
            }
        );
        assert!(!args.debug);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args =
            Args::try_parse_from(["frc_stats", "status", "--debug", "--log-file", "/tmp/x.log"])
                .unwrap();
        assert_eq!(args.command, Command::Status);
        assert!(args.debug);
        assert_eq!(args.log_file.as_deref(), Some("/tmp/x.log"));
    }

    #[test]
    fn test_parse_team_name_subcommand() {
        let args = Args::try_parse_from(["frc_stats", "team-name", "254"]).unwrap();
        assert_eq!(
            args.command,
            Command::TeamName {
                team: Some("254".to_string())
            }
        );
    }

    #[test]
    fn test_parse_config_updates() {
        let args = Args::try_parse_from([
            "frc_stats",
            "config",
            "--team-key",
            "frc4611",
            "--clear-log-file",
        ])
        .unwrap();
        let Command::Config(config_args) = args.command else {
            panic!("expected config subcommand");
        };
        assert_eq!(config_args.team_key.as_deref(), Some("frc4611"));
        assert!(config_args.clear_log_file);
        assert!(config_args.has_updates());
        assert!(!ConfigArgs::default().has_updates());
    }

    #[test]
    fn test_set_and_clear_log_file_conflict() {
        let result = Args::try_parse_from([
            "frc_stats",
            "config",
            "--set-log-file",
            "/tmp/a.log",
            "--clear-log-file",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_raw_defaults_page_to_zero() {
        let args = Args::try_parse_from(["frc_stats", "raw", "status"]).unwrap();
        let Command::Raw { kind, page, .. } = args.command else {
            panic!("expected raw subcommand");
        };
        assert_eq!(kind, "status");
        assert_eq!(page, 0);
    }
}
