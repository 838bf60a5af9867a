//! Anchor command: report the Doomsday-rule reference data for a year.

use std::io::{self, Write};

use anyhow::Result;
use tracing::info_span;

use doomsday_calendar::{century_anchor_day, doomsdays, is_leap_year, year_anchor_day};

use crate::cli::AnchorArgs;

/// Run the anchor command.
pub fn run(args: AnchorArgs) -> Result<()> {
    let _cmd = info_span!("anchor", year = args.year).entered();
    let mut out = io::stdout().lock();
    write_report(&mut out, args.year)?;
    Ok(())
}

/// Write the leap status, anchors and doomsday dates of `year` to `out`.
fn write_report(out: &mut impl Write, year: i32) -> io::Result<()> {
    let kind = if is_leap_year(year) { "leap" } else { "common" };
    writeln!(out, "year: {year} ({kind})")?;
    writeln!(out, "century anchor: {}", century_anchor_day(year))?;
    writeln!(out, "year anchor: {}", year_anchor_day(year))?;

    let dates: Vec<String> = doomsdays(year)
        .iter()
        .zip(1..)
        .map(|(day, month)| format!("{month}/{day}"))
        .collect();
    writeln!(out, "doomsdays: {}", dates.join(" "))
}
