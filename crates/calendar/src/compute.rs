//! Weekday computation from the year anchor and the month's doomsday.

use crate::anchor::year_anchor_day;
use crate::date::GregorianDate;
use crate::doomsday::doomsdays;
use crate::error::CalendarError;
use crate::weekday::Weekday;

/// Returns the day of the week `date` falls on.
///
/// The weekday is the year's anchor shifted by the distance from the month's
/// doomsday to the requested day.
pub fn weekday_of(date: GregorianDate) -> Weekday {
    let anchor = year_anchor_day(date.year());
    let doom = doomsdays(date.year())[usize::from(date.month() - 1)];
    let shift = i32::from(date.day()) - i32::from(doom);
    let weekday = Weekday::from_offset(i32::from(anchor.index()) + shift);
    tracing::trace!(%date, %anchor, doom, %weekday, "weekday computed");
    weekday
}

/// Validates `(month, day, year)` and returns the weekday it falls on.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidDate`] if the triple is not an existing
/// proleptic Gregorian date. No weekday is computed in that case.
///
/// # Examples
///
/// ```
/// use doomsday_calendar::{Weekday, compute_weekday};
///
/// assert_eq!(compute_weekday(7, 4, 1776).unwrap(), Weekday::Thursday);
/// assert!(compute_weekday(2, 29, 1900).is_err());
/// ```
pub fn compute_weekday(month: i32, day: i32, year: i32) -> Result<Weekday, CalendarError> {
    let date = GregorianDate::from_mdy(month, day, year)?;
    Ok(weekday_of(date))
}
