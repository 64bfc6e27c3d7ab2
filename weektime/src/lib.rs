//! Week-anchored time points and intervals for recurring weekly schedules.
//!
//! A [`WeekPoint`] is a moment such as "Tuesday 08:30" with no calendar date
//! attached; a [`WeekInterval`] is a start/end pair of them. Schedules such as
//! opening hours are parsed from compact text (`"08:00-12:00,13:30-16:45"`) or
//! from a JSON object keyed by day name, and candidate intervals are checked
//! against them with [`WeekInterval::is_within_any`].
//!
//! ```
//! use weektime::{WeekInterval, WeekPoint};
//!
//! let allowed = WeekInterval::parse_week_map(r#"{"Tue": "08:00-17:00"}"#).unwrap();
//! let visit = WeekInterval::new(
//!     WeekPoint::new(1, 9, 0).unwrap(),
//!     WeekPoint::new(1, 16, 30).unwrap(),
//! );
//! assert!(visit.is_within_any(&allowed));
//! ```

pub mod config;
pub mod error;
pub mod io;
pub mod parsing;
pub mod schedule;
pub mod time;

pub use config::ScheduleConfig;
pub use error::{Error, Result};
pub use schedule::WeeklySchedule;
pub use time::{WeekInterval, WeekPoint, MINUTES_PER_DAY, MINUTES_PER_WEEK};
