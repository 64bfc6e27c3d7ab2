//! Parsers for weekly schedule text formats.
//!
//! # Parsers
//!
//! - [`list_parser`]: one day's `"HH:MM-HH:MM,..."` list
//! - [`week_map_parser`]: a JSON object mapping day names to such lists
//!
//! # Example
//!
//! ```
//! use weektime::parsing::parse_week_map;
//!
//! let intervals = parse_week_map(r#"{"Mon": "08:00-12:00", "Wed": "13:30-16:45"}"#)
//!     .expect("Failed to parse week map");
//! assert_eq!(intervals.len(), 2);
//! assert_eq!(intervals[0].time_string(), "08:00-12:00");
//! ```

pub mod list_parser;
pub mod week_map_parser;


pub use list_parser::parse_delimited_list;
pub use week_map_parser::{
    day_index, intervals_from_day_entries, parse_week_map, parse_week_map_file, DayListValue,
    DAY_NAMES,
};
