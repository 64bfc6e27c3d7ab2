use chrono::Weekday;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use crate::error::{Error, Result};

/// Minutes in one day.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Minutes in one week; the modulus of all point arithmetic.
pub const MINUTES_PER_WEEK: u32 = 7 * MINUTES_PER_DAY;

/// `[day "d"] hour [":" minute]`, matched against the whole input.
static POINT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:([0-6])d)?([01]?[0-9]|2[0-3])(:([0-5][0-9]))?$")
        .expect("point grammar is a valid regex")
});

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// A moment within a repeating 7-day week.
///
/// A `WeekPoint` is a `(day, hour, minute)` triple where day `0` is Monday and
/// day `6` is Sunday. Values are validated on construction and never change
/// afterwards; arithmetic returns new points and wraps around the week.
///
/// Ordering is lexicographic over `(day, hour, minute)`.
///
/// # Examples
///
/// ```
/// use weektime::WeekPoint;
///
/// let p: WeekPoint = "1d15:45".parse().unwrap();
/// assert_eq!((p.day(), p.hour(), p.minute()), (1, 15, 45));
/// assert_eq!(p.to_string(), "1d15:45");
/// assert_eq!(p.time_string(), "15:45");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WeekPoint {
    // Field order drives the derived ordering.
    day: u32,
    hour: u32,
    minute: u32,
}

impl WeekPoint {
    /// Monday 00:00.
    pub const START: WeekPoint = WeekPoint { day: 0, hour: 0, minute: 0 };

    /// Sunday 23:59.
    pub const END: WeekPoint = WeekPoint { day: 6, hour: 23, minute: 59 };

    /// Creates a new point.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `day > 6`, `hour > 23` or `minute > 59`.
    ///
    /// ```
    /// use weektime::WeekPoint;
    ///
    /// assert!(WeekPoint::new(6, 23, 59).is_ok());
    /// assert!(WeekPoint::new(0, 24, 0).is_err());
    /// ```
    pub fn new(day: u32, hour: u32, minute: u32) -> Result<Self> {
        if day > 6 || hour > 23 || minute > 59 {
            return Err(Error::OutOfRange { day, hour, minute });
        }
        Ok(Self { day, hour, minute })
    }

    /// Creates a point on the full hour.
    pub fn at(day: u32, hour: u32) -> Result<Self> {
        Self::new(day, hour, 0)
    }

    /// Creates a point from a `chrono` weekday.
    pub fn from_weekday(weekday: Weekday, hour: u32, minute: u32) -> Result<Self> {
        Self::new(weekday.num_days_from_monday(), hour, minute)
    }

    /// Parses `"{day}d{hour}:{minute}"`, `"{day}d{hour}"`, `"{hour}:{minute}"`
    /// or `"{hour}"`.
    ///
    /// The day defaults to `0` and the minute to `0` when omitted. The hour
    /// may be one or two digits, the minute is always two.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFormat`] unless the whole input matches.
    pub fn parse(text: &str) -> Result<Self> {
        let caps = POINT_RE
            .captures(text)
            .ok_or_else(|| Error::InvalidFormat(format!("invalid week time '{}'", text)))?;

        let day = match caps.get(1) {
            Some(m) => parse_component(m.as_str(), text)?,
            None => 0,
        };
        let hour = parse_component(&caps[2], text)?;
        let minute = match caps.get(4) {
            Some(m) => parse_component(m.as_str(), text)?,
            None => 0,
        };

        Self::new(day, hour, minute)
    }

    /// Parses an hour/minute string with the day supplied separately.
    ///
    /// Equivalent to `WeekPoint::parse(&format!("{day}d{text}"))`, so `text`
    /// must not carry its own day prefix.
    ///
    /// ```
    /// use weektime::WeekPoint;
    ///
    /// let p = WeekPoint::parse_time_of_day("08:30", 4).unwrap();
    /// assert_eq!(p.to_string(), "4d08:30");
    /// ```
    pub fn parse_time_of_day(text: &str, day: u32) -> Result<Self> {
        Self::parse(&format!("{}d{}", day, text))
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    /// Day of the week as a `chrono` weekday.
    pub fn weekday(&self) -> Weekday {
        WEEKDAYS[self.day as usize]
    }

    /// `"HH:MM"` without the day.
    pub fn time_string(&self) -> String {
        format!("{:02}:{:02}", self.hour, self.minute)
    }

    /// Minutes elapsed since Monday 00:00, in `0..MINUTES_PER_WEEK`.
    pub fn to_minutes(&self) -> u32 {
        self.day * MINUTES_PER_DAY + self.hour * 60 + self.minute
    }

    /// Rebuilds a point from a minute count since Monday 00:00.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] when `total` is not below
    /// [`MINUTES_PER_WEEK`]; no wrapping is applied here.
    pub fn from_minutes(total: u32) -> Result<Self> {
        let (day, hour, minute) = split_minutes(total);
        Self::new(day, hour, minute)
    }

    /// Week-cyclic sum of both minute counts.
    ///
    /// ```
    /// use weektime::WeekPoint;
    ///
    /// let a = WeekPoint::new(0, 10, 30).unwrap();
    /// let b = WeekPoint::new(1, 4, 45).unwrap();
    /// assert_eq!(a.plus(b).to_string(), "1d15:15");
    /// ```
    pub fn plus(self, other: WeekPoint) -> WeekPoint {
        from_wrapped_minutes(
            (self.to_minutes() + other.to_minutes() + MINUTES_PER_WEEK) % MINUTES_PER_WEEK,
        )
    }

    /// Week-cyclic difference; subtracting a later point wraps backwards
    /// across the week boundary instead of going negative.
    ///
    /// ```
    /// use weektime::WeekPoint;
    ///
    /// let a = WeekPoint::new(0, 0, 0).unwrap();
    /// let b = WeekPoint::new(0, 0, 1).unwrap();
    /// assert_eq!(a.minus(b).to_string(), "6d23:59");
    /// ```
    pub fn minus(self, other: WeekPoint) -> WeekPoint {
        from_wrapped_minutes(
            (self.to_minutes() + MINUTES_PER_WEEK - other.to_minutes()) % MINUTES_PER_WEEK,
        )
    }
}

fn parse_component(digits: &str, text: &str) -> Result<u32> {
    digits
        .parse::<u32>()
        .map_err(|e| Error::InvalidFormat(format!("invalid week time '{}': {}", text, e)))
}

fn split_minutes(total: u32) -> (u32, u32, u32) {
    (total / MINUTES_PER_DAY, (total / 60) % 24, total % 60)
}

/// Caller guarantees `total < MINUTES_PER_WEEK`.
fn from_wrapped_minutes(total: u32) -> WeekPoint {
    debug_assert!(total < MINUTES_PER_WEEK);
    let (day, hour, minute) = split_minutes(total);
    WeekPoint { day, hour, minute }
}

impl fmt::Display for WeekPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d{:02}:{:02}", self.day, self.hour, self.minute)
    }
}

impl FromStr for WeekPoint {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for WeekPoint {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(&s)
    }
}

impl From<WeekPoint> for String {
    fn from(p: WeekPoint) -> Self {
        p.to_string()
    }
}

impl Add for WeekPoint {
    type Output = WeekPoint;

    fn add(self, rhs: WeekPoint) -> WeekPoint {
        self.plus(rhs)
    }
}

impl Sub for WeekPoint {
    type Output = WeekPoint;

    fn sub(self, rhs: WeekPoint) -> WeekPoint {
        self.minus(rhs)
    }
}
