//! Cross-checks against chrono's proleptic Gregorian implementation.

use chrono::{Datelike, NaiveDate};
use doomsday_calendar::{GregorianDate, Weekday, date_sequence};

fn chrono_weekday(date: GregorianDate) -> u8 {
    NaiveDate::from_ymd_opt(date.year(), u32::from(date.month()), u32::from(date.day()))
        .unwrap()
        .weekday()
        .num_days_from_sunday() as u8
}

#[test]
fn agrees_with_chrono_1582_to_2401() {
    let start = GregorianDate::new(1582, 1, 1).unwrap();
    let end = GregorianDate::new(2401, 12, 31).unwrap();
    let mut date = start;
    while date <= end {
        assert_eq!(date.weekday().index(), chrono_weekday(date), "{date}");
        date = date.next();
    }
}

#[test]
fn agrees_with_chrono_before_year_zero() {
    let start = GregorianDate::new(-801, 1, 1).unwrap();
    for date in date_sequence(start, 365 * 802) {
        assert_eq!(date.weekday().index(), chrono_weekday(date), "{date}");
    }
}

#[test]
fn consecutive_days_advance_by_one() {
    let start = GregorianDate::new(1899, 12, 25).unwrap();
    let dates = date_sequence(start, 365 * 210);
    for pair in dates.windows(2) {
        let (today, tomorrow) = (pair[0].weekday(), pair[1].weekday());
        assert_eq!(tomorrow, today.next(), "{} -> {}", pair[0], pair[1]);
    }
}

#[test]
fn previous_is_inverse_of_next() {
    let start = GregorianDate::new(1999, 1, 1).unwrap();
    for date in date_sequence(start, 3 * 366) {
        assert_eq!(date.next().previous(), date);
        assert_eq!(date.previous().weekday(), date.weekday().previous());
    }
}

#[test]
fn anchors_match_last_day_of_february() {
    for year in 1600..=2400 {
        let feb_end = GregorianDate::new(year, 3, 1).unwrap().previous();
        let expected = Weekday::from_index(chrono_weekday(feb_end)).unwrap();
        assert_eq!(doomsday_calendar::year_anchor_day(year), expected, "year {year}");
    }
}
