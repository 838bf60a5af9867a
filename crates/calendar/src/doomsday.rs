//! Per-month doomsday reference dates.

use crate::error::CalendarError;
use crate::leap::is_leap_year;

/// Day of month falling on the year's anchor weekday in a common year
/// (index 0 = January).
///
/// 4/4, 6/6, 8/8, 10/10 and 12/12 pair up with 5/9, 9/5, 7/11 and 11/7.
const COMMON_DOOMSDAYS: [u8; 12] = [3, 28, 14, 4, 9, 6, 11, 8, 5, 10, 7, 12];

/// Returns the doomsday of every month of `year` (index 0 = January).
///
/// In leap years January moves to the 4th and February to the leap day.
pub fn doomsdays(year: i32) -> [u8; 12] {
    let mut days = COMMON_DOOMSDAYS;
    if is_leap_year(year) {
        days[0] = 4;
        days[1] = 29;
    }
    days
}

/// Returns the day of `month` that falls on the anchor weekday of `year`.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12.
pub fn doomsday(month: u8, year: i32) -> Result<u8, CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth { month });
    }
    Ok(doomsdays(year)[usize::from(month - 1)])
}
