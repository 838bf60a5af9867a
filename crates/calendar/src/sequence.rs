//! Date sequence generation for the Gregorian calendar.

use crate::date::GregorianDate;

/// Generates a contiguous sequence of Gregorian dates.
///
/// Starting from `start`, produces exactly `n_days` consecutive dates by
/// repeatedly advancing to the next day. Month ends, leap days and year
/// boundaries are handled by [`GregorianDate::next`].
///
/// # Example
///
/// ```
/// use doomsday_calendar::{GregorianDate, date_sequence};
///
/// let start = GregorianDate::new(2024, 2, 28).unwrap();
/// let dates = date_sequence(start, 3);
/// assert_eq!(dates[1], GregorianDate::new(2024, 2, 29).unwrap());
/// assert_eq!(dates[2], GregorianDate::new(2024, 3, 1).unwrap());
/// ```
pub fn date_sequence(start: GregorianDate, n_days: usize) -> Vec<GregorianDate> {
    let mut dates = Vec::with_capacity(n_days);
    if n_days == 0 {
        return dates;
    }
    dates.push(start);
    let mut current = start;
    for _ in 1..n_days {
        current = current.next();
        dates.push(current);
    }
    dates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty() {
        let start = GregorianDate::new(2000, 1, 1).unwrap();
        assert!(date_sequence(start, 0).is_empty());
    }

    #[test]
    fn single() {
        let start = GregorianDate::new(2000, 6, 15).unwrap();
        let dates = date_sequence(start, 1);
        assert_eq!(dates, vec![start]);
    }

    #[test]
    fn leap_year_length() {
        let start = GregorianDate::new(2024, 1, 1).unwrap();
        let dates = date_sequence(start, 367);
        assert_eq!(dates[365], GregorianDate::new(2024, 12, 31).unwrap());
        assert_eq!(dates[366], GregorianDate::new(2025, 1, 1).unwrap());
    }

    #[test]
    fn common_year_length() {
        let start = GregorianDate::new(1900, 1, 1).unwrap();
        let dates = date_sequence(start, 366);
        assert_eq!(dates[364], GregorianDate::new(1900, 12, 31).unwrap());
        assert_eq!(dates[365], GregorianDate::new(1901, 1, 1).unwrap());
    }
}
