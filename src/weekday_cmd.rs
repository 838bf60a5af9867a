//! Weekday command: read a date, validate it and print its day of the week.

use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing::{debug, info_span};

use doomsday_calendar::{Weekday, compute_weekday};

use crate::cli::WeekdayArgs;
use crate::config::{self, OutputFormat};
use crate::input;

/// Run the weekday command.
pub fn run(args: WeekdayArgs) -> Result<()> {
    let _cmd = info_span!("weekday").entered();
    let config = config::load(args.config.as_deref())?;

    // CLI flags override config file values
    let separator = args.separator.unwrap_or(config.input.separator);
    let format = args.format.unwrap_or(config.output.format);

    let line = match args.date {
        Some(date) => date,
        None => input::prompt_line(&mut io::stdin().lock(), &mut io::stdout())?,
    };
    let (month, day, year) = input::parse_mdy(&line, separator)?;
    debug!(month, day, year, "parsed date");

    let weekday =
        compute_weekday(month, day, year).context("the specified date does not exist")?;

    let mut out = io::stdout().lock();
    writeln!(out, "{}", render(weekday, format))?;
    Ok(())
}

/// Format `weekday` for display.
fn render(weekday: Weekday, format: OutputFormat) -> String {
    match format {
        OutputFormat::Name => format!("day of week: {weekday}"),
        OutputFormat::Index => weekday.index().to_string(),
        OutputFormat::Both => format!("day of week: {weekday} ({})", weekday.index()),
    }
}
