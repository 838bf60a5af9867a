//! Days of the week and their names.

use std::fmt;

use crate::error::CalendarError;

/// A day of the week, numbered from Sunday = 0 to Saturday = 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Weekday {
    Sunday = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
}

const NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

impl Weekday {
    /// All seven weekdays in index order, starting at Sunday.
    pub const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    /// Converts an index in 0..=6 into a `Weekday`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidWeekday`] if `index` is 7 or larger.
    pub fn from_index(index: u8) -> Result<Self, CalendarError> {
        Self::ALL
            .get(usize::from(index))
            .copied()
            .ok_or(CalendarError::InvalidWeekday { index })
    }

    /// Maps any integer onto a weekday by reducing it modulo 7 into 0..=6.
    pub(crate) fn from_offset(offset: i32) -> Self {
        // rem_euclid(7) is always in 0..=6
        Self::ALL[offset.rem_euclid(7) as usize]
    }

    /// Returns the index of this weekday (Sunday = 0).
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Returns the English name of this weekday.
    pub fn name(self) -> &'static str {
        NAMES[usize::from(self.index())]
    }

    /// Returns the following weekday, wrapping Saturday to Sunday.
    pub fn next(self) -> Self {
        Self::from_offset(i32::from(self.index()) + 1)
    }

    /// Returns the preceding weekday, wrapping Sunday to Saturday.
    pub fn previous(self) -> Self {
        Self::from_offset(i32::from(self.index()) - 1)
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for Weekday {
    type Error = CalendarError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::from_index(index)
    }
}

/// Returns the English name of `weekday`.
pub fn weekday_name(weekday: Weekday) -> &'static str {
    weekday.name()
}
