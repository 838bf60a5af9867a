//! Error types for the doomsday-calendar crate.

/// Error type for all fallible operations in the doomsday-calendar crate.
///
/// `InvalidDate` is the only failure a well-formed caller of
/// [`compute_weekday`](crate::compute_weekday) can observe. The other two
/// variants guard the lower-level table and formatter lookups.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum CalendarError {
    /// Returned when a (month, day, year) triple does not name an existing
    /// proleptic Gregorian date.
    #[error("invalid date: {month}/{day}/{year} does not exist")]
    InvalidDate {
        /// The month that was provided.
        month: i32,
        /// The day that was provided.
        day: i32,
        /// The year that was provided.
        year: i32,
    },

    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a weekday index is outside the valid range 0..=6.
    #[error("invalid weekday index: {index} (must be 0..=6)")]
    InvalidWeekday {
        /// The invalid weekday index that was provided.
        index: u8,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_date() {
        let err = CalendarError::InvalidDate {
            month: 2,
            day: 29,
            year: 1900,
        };
        assert_eq!(err.to_string(), "invalid date: 2/29/1900 does not exist");
    }

    #[test]
    fn error_invalid_month() {
        let err = CalendarError::InvalidMonth { month: 13 };
        assert_eq!(err.to_string(), "invalid month: 13 (must be 1..=12)");
    }

    #[test]
    fn error_invalid_weekday() {
        let err = CalendarError::InvalidWeekday { index: 7 };
        assert_eq!(err.to_string(), "invalid weekday index: 7 (must be 0..=6)");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_partial_eq() {
        let a = CalendarError::InvalidMonth { month: 0 };
        let b = CalendarError::InvalidMonth { month: 0 };
        assert_eq!(a, b);

        let c = CalendarError::InvalidMonth { month: 13 };
        assert_ne!(a, c);
    }
}
