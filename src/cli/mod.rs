//! Command-line front end over the progression engines.

pub mod commands;
pub mod output;

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::config::ConfigManager;
use crate::core::utils::app_data_dir;
use crate::errors::Result;
use commands::{CommandContext, EvaluateArgs};
use output::OutputPreferences;

#[derive(Debug, Parser)]
#[command(
    name = "progression_cli",
    version,
    about = "Streaks, achievements, weekly challenges and levels over a transaction ledger"
)]
pub struct Cli {
    /// Data directory holding config.json and state.json.
    #[arg(long, global = true, value_name = "DIR")]
    pub home: Option<PathBuf>,

    /// Disable coloured output.
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Only print warnings, errors and results.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Evaluate a ledger against the stored progression state.
    Evaluate {
        /// JSON array of transactions.
        #[arg(long, value_name = "FILE")]
        ledger: PathBuf,
        /// State file to read and update.
        #[arg(long, value_name = "FILE")]
        state: Option<PathBuf>,
        /// Evaluate as of this day instead of now.
        #[arg(long, value_name = "YYYY-MM-DD", value_parser = parse_date)]
        today: Option<NaiveDate>,
        /// Report without saving.
        #[arg(long)]
        dry_run: bool,
        /// Add the earned XP to the stored profile.
        #[arg(long)]
        apply_xp: bool,
        /// Print the delta as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Show the level reached at the given XP.
    Level { xp: u64 },
    /// Show the ISO week containing a date.
    Week {
        #[arg(long, value_name = "YYYY-MM-DD", value_parser = parse_date)]
        date: Option<NaiveDate>,
    },
    /// List the achievement catalog with unlock state and progress.
    Achievements {
        #[arg(long, value_name = "FILE")]
        ledger: Option<PathBuf>,
        #[arg(long, value_name = "FILE")]
        state: Option<PathBuf>,
    },
    /// Show build metadata.
    Version,
}

fn parse_date(raw: &str) -> std::result::Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("invalid date `{raw}`: {err}"))
}

pub fn run_cli() -> Result<()> {
    run(Cli::parse())
}

pub fn run(cli: Cli) -> Result<()> {
    let base = cli.home.clone().unwrap_or_else(app_data_dir);
    let config = ConfigManager::with_base_dir(base.clone())?.load()?;
    output::set_preferences(OutputPreferences {
        color_enabled: config.ui_color_enabled && !cli.no_color,
        quiet_mode: cli.quiet,
    });
    let context = CommandContext { base, config };

    match cli.command {
        Command::Evaluate {
            ledger,
            state,
            today,
            dry_run,
            apply_xp,
            json,
        } => commands::evaluate(
            &context,
            &EvaluateArgs {
                ledger,
                state,
                today,
                dry_run,
                apply_xp,
                json,
            },
        ),
        Command::Level { xp } => commands::level(xp),
        Command::Week { date } => commands::week(date),
        Command::Achievements { ledger, state } => {
            commands::achievements(&context, ledger.as_deref(), state.as_deref())
        }
        Command::Version => commands::version(),
    }
}
