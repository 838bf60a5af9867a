use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Doomsday-rule day-of-week calculator.
#[derive(Parser)]
#[command(
    name = "doomsday",
    version,
    about = "Find the day of the week for any Gregorian date"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the day of the week for a date.
    Weekday(WeekdayArgs),
    /// Print the anchor day and doomsday table for a year.
    Anchor(AnchorArgs),
}

/// Arguments for the `weekday` subcommand.
#[derive(clap::Args)]
pub struct WeekdayArgs {
    /// Date as month/day/year. Read from stdin when omitted.
    #[arg(allow_hyphen_values = true)]
    pub date: Option<String>,

    /// Path to TOML configuration file (defaults to `doomsday.toml` if present).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the date separator from config.
    #[arg(short, long)]
    pub separator: Option<char>,

    /// Override the output format from config.
    #[arg(short, long, value_enum)]
    pub format: Option<crate::config::OutputFormat>,
}

/// Arguments for the `anchor` subcommand.
#[derive(clap::Args)]
pub struct AnchorArgs {
    /// Year to report on.
    #[arg(allow_negative_numbers = true)]
    pub year: i32,
}
