//! # doomsday-calendar
//!
//! Day-of-week computation for the proleptic Gregorian calendar using
//! Conway's Doomsday rule and the "odd + 11" year-anchor shortcut.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["(month, day, year)"] -->|"is_valid_date()"| B["GregorianDate"]
//!     Y["year"] -->|"century_anchor_day()"| C["century anchor"]
//!     C -->|"year_anchor_day()"| D["year anchor"]
//!     Y -->|"doomsday()"| E["doomsday of month"]
//!     B -->|"weekday_of()"| F["Weekday"]
//!     D --> F
//!     E --> F
//!     F -->|".name()"| G["&str"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use doomsday_calendar::{Weekday, compute_weekday, is_leap_year, year_anchor_day};
//!
//! assert!(is_leap_year(2000));
//! assert_eq!(year_anchor_day(2024), Weekday::Thursday);
//! assert_eq!(compute_weekday(12, 25, 2024).unwrap().name(), "Wednesday");
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `leap` | Leap-year rule and month lengths |
//! | `date` | Date validation and the validated date type |
//! | `anchor` | Century and year anchor days |
//! | `doomsday` | Per-month doomsday table |
//! | `compute` | Weekday computation and the fail-fast entry point |
//! | `weekday` | Weekday enum and names |
//! | `sequence` | Consecutive date generation |
//! | `error` | Error types |

mod anchor;
mod compute;
mod date;
mod doomsday;
mod error;
mod leap;
mod sequence;
mod weekday;

pub use anchor::{century_anchor_day, year_anchor_day};
pub use compute::{compute_weekday, weekday_of};
pub use date::{GregorianDate, is_valid_date};
pub use doomsday::{doomsday, doomsdays};
pub use error::CalendarError;
pub use leap::{days_in_month, is_leap_year};
pub use sequence::date_sequence;
pub use weekday::{Weekday, weekday_name};
