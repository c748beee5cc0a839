use crate::cli::Cli;
use crate::consts::EX_USAGE;
use crate::errors::AppResult;
use crate::services::csv_service::{ConversionReport, run_conversion};
use chrono::{Local, NaiveDate};
use clap::Parser;
use clap::error::ErrorKind;
use log::info;
use std::process::ExitCode;

mod cli;
mod consts;
mod errors;
mod models;
mod services;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    info!("Application started");

    let args = match Cli::try_parse() {
        Ok(args) => args,
        Err(e) => match cli_exit_code(&e) {
            Some(code) => {
                println!("{}", e.render());
                return ExitCode::from(code);
            }
            None => e.exit(),
        },
    };

    match run(args, Local::now().date_naive()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            println!("{e}");
            ExitCode::from(e.exit_code())
        }
    }
}

/// Exit code for a failed argument parse; `None` when clap should print
/// help or version and exit successfully.
fn cli_exit_code(err: &clap::Error) -> Option<u8> {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => None,
        _ => Some(EX_USAGE),
    }
}

fn run(args: Cli, today: NaiveDate) -> AppResult<ConversionReport> {
    let config = args.into_config(today)?;
    info!(
        "converting {} to {:?}",
        config.input.display(),
        config.format
    );
    run_conversion(&config)
}
