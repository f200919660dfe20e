// src/main.rs
mod cli;
mod commands;
mod logging;

use clap::Parser;
use cli::Args;
use frc_stats::AppError;
use logging::setup_logging;
use std::process::ExitCode;
use tracing::{debug, error};

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let (log_file_path, guard) = match setup_logging(&args).await {
        Ok(logging) => logging,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };
    debug!("Logging to {log_file_path}");

    let result = commands::run(args.command).await;
    let code = match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            report(&e);
            ExitCode::FAILURE
        }
    };

    // flush buffered log lines before exiting
    drop(guard);
    code
}

fn report(error: &AppError) {
    eprintln!("Error: {error}");
    if error.is_retryable() {
        eprintln!("The provider may be temporarily unavailable; try again shortly.");
    }
}
