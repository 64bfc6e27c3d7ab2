use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::week_point::WeekPoint;
use crate::error::{Error, Result};
use crate::parsing;

/// A span between two [`WeekPoint`]s.
///
/// The interval stores `start` and `end` exactly as given: nothing checks
/// that `start <= end`, so an interval running past Sunday night into Monday
/// can be represented. Containment compares the raw endpoints in
/// lexicographic order with no wraparound awareness (see
/// [`WeekInterval::is_within_any`]).
///
/// # Examples
///
/// ```
/// use weektime::{WeekInterval, WeekPoint};
///
/// let interval = WeekInterval::new(
///     WeekPoint::new(1, 9, 0).unwrap(),
///     WeekPoint::new(1, 16, 30).unwrap(),
/// );
/// assert_eq!(interval.to_string(), "1d09:00-1d16:30");
/// assert_eq!(interval.time_string(), "09:00-16:30");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WeekInterval {
    start: WeekPoint,
    end: WeekPoint,
}

impl WeekInterval {
    pub fn new(start: WeekPoint, end: WeekPoint) -> Self {
        Self { start, end }
    }

    pub fn start(&self) -> WeekPoint {
        self.start
    }

    pub fn end(&self) -> WeekPoint {
        self.end
    }

    /// `"HH:MM-HH:MM"` without days.
    pub fn time_string(&self) -> String {
        format!("{}-{}", self.start.time_string(), self.end.time_string())
    }

    /// True when `start` comes after `end`, i.e. the interval crosses the
    /// end of the week.
    pub fn is_wrapping(&self) -> bool {
        self.start > self.end
    }

    /// True if both endpoints lie inside `other`, inclusive.
    pub fn is_within(&self, other: &WeekInterval) -> bool {
        self.start >= other.start && self.end <= other.end
    }

    /// Returns `true` if this interval lies inside at least one of `intervals`.
    ///
    /// Each endpoint is compared independently (`start >= i.start` and
    /// `end <= i.end`). An empty set never contains anything.
    ///
    /// ```
    /// use weektime::WeekInterval;
    ///
    /// let allowed = WeekInterval::parse_list("08:00-17:00", 1).unwrap();
    /// let visit: WeekInterval = "1d09:00-1d16:30".parse().unwrap();
    /// assert!(visit.is_within_any(&allowed));
    ///
    /// let none: [WeekInterval; 0] = [];
    /// assert!(!visit.is_within_any(&none));
    /// ```
    pub fn is_within_any<'a, I>(&self, intervals: I) -> bool
    where
        I: IntoIterator<Item = &'a WeekInterval>,
    {
        intervals.into_iter().any(|i| self.is_within(i))
    }

    /// Parses a comma-separated list of `"HH:MM-HH:MM"` pairs for one day.
    ///
    /// See [`parsing::parse_delimited_list`].
    pub fn parse_list(text: &str, day: u32) -> Result<Vec<WeekInterval>> {
        parsing::parse_delimited_list(text, day)
    }

    /// Parses a JSON object mapping day names to interval lists.
    ///
    /// See [`parsing::parse_week_map`].
    pub fn parse_week_map(json: &str) -> Result<Vec<WeekInterval>> {
        parsing::parse_week_map(json)
    }
}

impl fmt::Display for WeekInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Parses the full `"{start}-{end}"` form produced by `Display`.
impl FromStr for WeekInterval {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.split('-').collect::<Vec<_>>().as_slice() {
            [start, end] => Ok(Self::new(WeekPoint::parse(start)?, WeekPoint::parse(end)?)),
            _ => Err(Error::InvalidFormat(format!(
                "expected 'start-end' interval, got '{}'",
                s
            ))),
        }
    }
}

impl TryFrom<String> for WeekInterval {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<WeekInterval> for String {
    fn from(i: WeekInterval) -> Self {
        i.to_string()
    }
}
