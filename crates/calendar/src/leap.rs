//! Gregorian leap-year rule and month lengths.

/// Number of days in each month of a common year (index 0 = January).
const COMMON_MONTH_DAYS: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Returns `true` if `year` is a leap year in the proleptic Gregorian calendar.
///
/// Century years are leap years only when also divisible by 400. Negative
/// years follow the same arithmetic, so year 0 is a leap year.
pub fn is_leap_year(year: i32) -> bool {
    if year % 400 == 0 {
        true
    } else if year % 100 == 0 {
        false
    } else {
        year % 4 == 0
    }
}

/// Returns the twelve month lengths for `year`, with February adjusted for
/// leap years.
pub(crate) fn month_lengths(year: i32) -> [u8; 12] {
    let mut days = COMMON_MONTH_DAYS;
    if is_leap_year(year) {
        days[1] = 29;
    }
    days
}

/// Returns the number of days in `month` of `year`, or `None` if `month` is
/// not in 1..=12.
pub fn days_in_month(month: u8, year: i32) -> Option<u8> {
    if !(1..=12).contains(&month) {
        return None;
    }
    Some(month_lengths(year)[usize::from(month - 1)])
}
