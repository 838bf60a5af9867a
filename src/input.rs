//! Parsing of `month/day/year` text lines.

use std::io::{BufRead, Write};

use anyhow::{Context, Result, bail};

/// Prompt printed before reading a date from stdin.
pub const PROMPT: &str = "enter date (m/d/y): ";

/// Parse `line` as three integers separated by `separator`, in month, day,
/// year order.
///
/// Range checks are left to the calendar; this only rejects text that is not
/// three integers.
pub fn parse_mdy(line: &str, separator: char) -> Result<(i32, i32, i32)> {
    let fields: Vec<&str> = line.trim().split(separator).map(str::trim).collect();
    let [month, day, year] = fields.as_slice() else {
        bail!(
            "expected month{separator}day{separator}year, got {:?}",
            line.trim()
        );
    };
    let month = month
        .parse::<i32>()
        .with_context(|| format!("invalid month {month:?}"))?;
    let day = day
        .parse::<i32>()
        .with_context(|| format!("invalid day {day:?}"))?;
    let year = year
        .parse::<i32>()
        .with_context(|| format!("invalid year {year:?}"))?;
    Ok((month, day, year))
}

/// Write [`PROMPT`] to `out` and read one line from `input`.
pub fn prompt_line(input: &mut impl BufRead, out: &mut impl Write) -> Result<String> {
    out.write_all(PROMPT.as_bytes())?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line).context("failed to read date")? == 0 {
        bail!("no date given on stdin");
    }
    Ok(line)
}
