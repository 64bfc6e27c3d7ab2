use crate::error::{Error, Result};
use crate::time::{WeekInterval, WeekPoint};

/// Parse one day's intervals from a comma-separated list
///
/// Expected format: `"HH:MM-HH:MM,HH:MM-HH:MM,..."` where each time follows
/// the [`WeekPoint`] grammar without a day prefix (bare hours such as
/// `"8-12"` are accepted). Every point is placed on `day`.
///
/// # Arguments
/// * `text` - The list of `start-end` pairs
/// * `day` - Day index (0 = Monday) applied to every point
///
/// # Returns
/// * `Vec<WeekInterval>` - Intervals in input order
///
/// # Errors
/// [`Error::InvalidFormat`] if a pair does not have exactly one `-` or a
/// side fails to parse. Nothing is returned for the valid pairs in that case.
///
/// # Example
/// ```
/// use weektime::parsing::parse_delimited_list;
///
/// let intervals = parse_delimited_list("08:00-12:00,13:30-16:45", 1).unwrap();
/// assert_eq!(intervals[0].to_string(), "1d08:00-1d12:00");
/// assert_eq!(intervals[1].to_string(), "1d13:30-1d16:45");
/// ```
pub fn parse_delimited_list(text: &str, day: u32) -> Result<Vec<WeekInterval>> {
    text.split(',').map(|pair| parse_pair(pair, day)).collect()
}

fn parse_pair(pair: &str, day: u32) -> Result<WeekInterval> {
    let mut sides = pair.split('-');
    match (sides.next(), sides.next(), sides.next()) {
        (Some(start), Some(end), None) => Ok(WeekInterval::new(
            WeekPoint::parse_time_of_day(start, day)?,
            WeekPoint::parse_time_of_day(end, day)?,
        )),
        _ => Err(Error::InvalidFormat(format!(
            "expected 'start-end' pair, got '{}'",
            pair
        ))),
    }
}
