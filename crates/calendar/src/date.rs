//! Calendar validity checks and the validated Gregorian date type.

use std::fmt;

use crate::compute::weekday_of;
use crate::error::CalendarError;
use crate::leap::month_lengths;
use crate::weekday::Weekday;

/// Returns `true` if `(month, day, year)` names an existing date in the
/// proleptic Gregorian calendar.
///
/// The month must be in 1..=12 and the day in 1..=N, where N is the length of
/// that month in `year` (29 for February of a leap year).
pub fn is_valid_date(month: i32, day: i32, year: i32) -> bool {
    if !(1..=12).contains(&month) {
        return false;
    }
    let max_day = month_lengths(year)[(month - 1) as usize];
    (1..=i32::from(max_day)).contains(&day)
}

/// A date in the proleptic Gregorian calendar.
///
/// Every value of this type has passed [`is_valid_date`], so weekday
/// computation on it is always defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GregorianDate {
    year: i32,
    month: u8,
    day: u8,
}

impl GregorianDate {
    /// Creates a new `GregorianDate` from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDate`] if the month or day does not
    /// exist in `year`.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        Self::from_mdy(i32::from(month), i32::from(day), year)
    }

    /// Creates a new `GregorianDate` from a month/day/year triple as it is
    /// conventionally written, accepting out-of-range and negative inputs.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDate`] if the triple fails
    /// [`is_valid_date`].
    pub fn from_mdy(month: i32, day: i32, year: i32) -> Result<Self, CalendarError> {
        if !is_valid_date(month, day, year) {
            return Err(CalendarError::InvalidDate { month, day, year });
        }
        // month is in 1..=12 and day in 1..=31 after validation
        Ok(Self {
            year,
            month: month as u8,
            day: day as u8,
        })
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns the day of the week this date falls on.
    pub fn weekday(self) -> Weekday {
        weekday_of(self)
    }

    /// Returns the following calendar day.
    ///
    /// February 28 advances to the 29th only in leap years, and December 31
    /// wraps to January 1 of the following year.
    pub fn next(self) -> Self {
        let lengths = month_lengths(self.year);
        if self.day < lengths[usize::from(self.month - 1)] {
            Self {
                day: self.day + 1,
                ..self
            }
        } else if self.month < 12 {
            Self {
                month: self.month + 1,
                day: 1,
                ..self
            }
        } else {
            Self {
                year: self.year + 1,
                month: 1,
                day: 1,
            }
        }
    }

    /// Returns the preceding calendar day.
    pub fn previous(self) -> Self {
        if self.day > 1 {
            Self {
                day: self.day - 1,
                ..self
            }
        } else if self.month > 1 {
            let lengths = month_lengths(self.year);
            Self {
                month: self.month - 1,
                day: lengths[usize::from(self.month - 2)],
                ..self
            }
        } else {
            Self {
                year: self.year - 1,
                month: 12,
                day: 31,
            }
        }
    }
}

impl fmt::Display for GregorianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.month, self.day, self.year)
    }
}
