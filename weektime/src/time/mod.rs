//! Week-anchored time values.
//!
//! - [`WeekPoint`]: a `(day, hour, minute)` moment inside a 7-day cycle
//! - [`WeekInterval`]: a start/end pair of points

pub mod week_interval;
pub mod week_point;

#[cfg(test)]
mod week_interval_tests;

pub use week_interval::WeekInterval;
pub use week_point::{WeekPoint, MINUTES_PER_DAY, MINUTES_PER_WEEK};
