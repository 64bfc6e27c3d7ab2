//! Weekly schedules built from allowed intervals.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::parsing;
use crate::time::WeekInterval;

/// An ordered set of allowed windows within the week.
///
/// A `WeeklySchedule` answers one question: does a candidate interval fit
/// entirely inside one of the allowed windows? Windows are kept in the order
/// they were supplied and are never merged, so a candidate that straddles two
/// adjacent windows is rejected.
///
/// # Examples
///
/// ```
/// use weektime::{WeekInterval, WeeklySchedule};
///
/// let schedule = WeeklySchedule::from_week_map(
///     r#"{"Mon": "08:00-12:00,13:00-17:00", "Sat": "10:00-14:00"}"#,
/// ).unwrap();
///
/// let visit: WeekInterval = "0d09:00-0d11:30".parse().unwrap();
/// assert!(schedule.allows(&visit));
///
/// let over_lunch: WeekInterval = "0d11:00-0d14:00".parse().unwrap();
/// assert!(!schedule.allows(&over_lunch));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeeklySchedule {
    intervals: Vec<WeekInterval>,
}

impl WeeklySchedule {
    pub fn new(intervals: Vec<WeekInterval>) -> Self {
        Self { intervals }
    }

    /// Builds a schedule from a JSON day map (see [`parsing::parse_week_map`]).
    pub fn from_week_map(json: &str) -> Result<Self> {
        let intervals = parsing::parse_week_map(json)?;
        debug!("Loaded weekly schedule with {} interval(s)", intervals.len());
        Ok(Self::new(intervals))
    }

    pub fn intervals(&self) -> &[WeekInterval] {
        &self.intervals
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WeekInterval> {
        self.intervals.iter()
    }

    /// True if `candidate` lies inside at least one allowed window.
    pub fn allows(&self, candidate: &WeekInterval) -> bool {
        candidate.is_within_any(&self.intervals)
    }

    /// True if every candidate is allowed. Vacuously true for no candidates.
    pub fn allows_all<'a, I>(&self, candidates: I) -> bool
    where
        I: IntoIterator<Item = &'a WeekInterval>,
    {
        candidates.into_iter().all(|c| self.allows(c))
    }

    /// Windows whose start falls on `day` (0 = Monday), in schedule order.
    pub fn intervals_on(&self, day: u32) -> Vec<WeekInterval> {
        self.intervals
            .iter()
            .filter(|i| i.start().day() == day)
            .copied()
            .collect()
    }
}

impl From<Vec<WeekInterval>> for WeeklySchedule {
    fn from(intervals: Vec<WeekInterval>) -> Self {
        Self::new(intervals)
    }
}

impl<'a> IntoIterator for &'a WeeklySchedule {
    type Item = &'a WeekInterval;
    type IntoIter = std::slice::Iter<'a, WeekInterval>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schedule() -> WeeklySchedule {
        WeeklySchedule::from_week_map(r#"{"Tue": "08:00-17:00", "Wed": "10:00-15:00"}"#).unwrap()
    }

    fn interval(text: &str) -> WeekInterval {
        text.parse().unwrap()
    }

    #[test]
    fn test_allows() {
        let s = schedule();
        assert!(s.allows(&interval("1d09:00-1d16:30")));
        assert!(!s.allows(&interval("3d09:00-3d16:30")));
    }

    #[test]
    fn test_empty_schedule_allows_nothing() {
        let s = WeeklySchedule::default();
        assert!(s.is_empty());
        assert!(!s.allows(&interval("1d09:00-1d09:01")));
    }

    #[test]
    fn test_allows_all() {
        let s = schedule();
        let ok = vec![interval("1d08:00-1d09:00"), interval("2d10:00-2d15:00")];
        let mixed = vec![interval("1d08:00-1d09:00"), interval("2d09:00-2d15:00")];
        assert!(s.allows_all(&ok));
        assert!(!s.allows_all(&mixed));
        assert!(s.allows_all(&Vec::new()));
    }

    #[test]
    fn test_intervals_on() {
        let s = schedule();
        assert_eq!(s.len(), 2);
        assert_eq!(s.intervals_on(2), vec![interval("2d10:00-2d15:00")]);
        assert!(s.intervals_on(0).is_empty());
    }

    #[test]
    fn test_serde_transparent() {
        let s = schedule();
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(json, r#"["1d08:00-1d17:00","2d10:00-2d15:00"]"#);
        let back: WeeklySchedule = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }
}
