//! Century and year anchor days.
//!
//! The year anchor is derived with the "odd + 11" shortcut: halve the last
//! two digits of the year (adding 11 first when odd), add 11 again if the
//! half is odd, and count forward from the century anchor by the distance
//! to the next multiple of 7.

use crate::weekday::Weekday;

/// Century anchors repeat with period 4 (400 years).
const CENTURY_ANCHORS: [Weekday; 4] = [
    Weekday::Tuesday,
    Weekday::Sunday,
    Weekday::Friday,
    Weekday::Wednesday,
];

/// Returns the anchor weekday of the century containing `year`.
///
/// The century is `floor(year / 100)`, so years before 0 stay on the same
/// 400-year cycle as positive years.
pub fn century_anchor_day(year: i32) -> Weekday {
    let century = year.div_euclid(100);
    CENTURY_ANCHORS[century.rem_euclid(4) as usize]
}

/// Returns the anchor weekday (the doomsday) of `year`.
pub fn year_anchor_day(year: i32) -> Weekday {
    let mut t = year.rem_euclid(100);
    if t % 2 == 1 {
        t += 11;
    }
    t /= 2;
    if t % 2 == 1 {
        t += 11;
    }
    // 7 - (t % 7) lands on 7 when t is a multiple of 7
    let offset = (7 - t % 7) % 7;

    let century = century_anchor_day(year);
    tracing::trace!(year, %century, offset, "year anchor");
    Weekday::from_offset(i32::from(century.index()) + offset)
}
