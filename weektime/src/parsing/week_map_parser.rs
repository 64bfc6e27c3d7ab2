use log::{debug, trace};
use serde_json::Value;
use std::path::Path;

use super::list_parser::parse_delimited_list;
use crate::error::{Error, Result};
use crate::time::WeekInterval;

/// Day-name prefixes in day-index order (0 = Monday)
pub const DAY_NAMES: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// A week-map value that may hold an interval list string.
pub trait DayListValue {
    fn as_interval_list(&self) -> Option<&str>;
}

impl DayListValue for str {
    fn as_interval_list(&self) -> Option<&str> {
        Some(self)
    }
}

impl DayListValue for String {
    fn as_interval_list(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl DayListValue for Value {
    fn as_interval_list(&self) -> Option<&str> {
        self.as_str()
    }
}

impl DayListValue for toml::Value {
    fn as_interval_list(&self) -> Option<&str> {
        self.as_str()
    }
}

/// Day index for a week-map key.
///
/// Only the first three characters count and the match is case-sensitive,
/// so `"Monday"` and `"Mon"` both give `Some(0)` while `"mon"` gives `None`.
pub fn day_index(key: &str) -> Option<u32> {
    let prefix = key.get(..3)?;
    DAY_NAMES
        .iter()
        .position(|name| *name == prefix)
        .map(|i| i as u32)
}

/// Collect intervals from ordered `(day key, interval list)` entries
///
/// Keys that do not start with a day name are skipped. Matched values must
/// be interval-list strings and are parsed with [`parse_delimited_list`] on
/// the matched day. Output follows entry order, then list order.
pub fn intervals_from_day_entries<'a, K, V, I>(entries: I) -> Result<Vec<WeekInterval>>
where
    K: AsRef<str>,
    V: DayListValue + ?Sized + 'a,
    I: IntoIterator<Item = (K, &'a V)>,
{
    let mut intervals = Vec::new();

    for (key, value) in entries {
        let key = key.as_ref();
        let Some(day) = day_index(key) else {
            debug!("Skipping week map key '{}': not a day name", key);
            continue;
        };

        let text = value.as_interval_list().ok_or_else(|| {
            Error::MalformedInput(format!("value for '{}' must be an interval list string", key))
        })?;

        let parsed = parse_delimited_list(text, day)?;
        trace!("Week map key '{}' -> {} interval(s) on day {}", key, parsed.len(), day);
        intervals.extend(parsed);
    }

    Ok(intervals)
}

/// Parse intervals from a JSON object keyed by day name
///
/// ```
/// use weektime::parsing::parse_week_map;
///
/// let intervals = parse_week_map(r#"{"Mon": "08:00-12:00", "Wed": "13:30-16:45"}"#).unwrap();
/// assert_eq!(intervals[1].to_string(), "2d13:30-2d16:45");
/// ```
///
/// Valid JSON that is not an object has no day keys and yields no intervals.
///
/// # Errors
/// [`Error::MalformedInput`] if the text is not valid JSON or a day's value
/// is not a string; [`Error::InvalidFormat`] from the list parser.
pub fn parse_week_map(json: &str) -> Result<Vec<WeekInterval>> {
    let value: Value = serde_json::from_str(json)?;

    match value.as_object() {
        Some(map) => intervals_from_day_entries(map),
        None => {
            debug!("Week map is not a JSON object; no day keys to read");
            Ok(Vec::new())
        }
    }
}

/// Parse a week map from a JSON file
pub fn parse_week_map_file(path: &Path) -> Result<Vec<WeekInterval>> {
    let json = std::fs::read_to_string(path)?;
    parse_week_map(&json)
}
