//! Schedule configuration file support.
//!
//! This module reads a weekly schedule from a TOML configuration file:
//!
//! ```toml
//! [schedule]
//! name = "front desk"
//!
//! [schedule.hours]
//! Mon = "08:00-12:00,13:00-17:00"
//! Sat = "10:00-14:00"
//! ```
//!
//! Keys under `[schedule.hours]` follow the same rules as a JSON week map:
//! the first three characters select the day and anything else is ignored.

use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::parsing::intervals_from_day_entries;
use crate::schedule::WeeklySchedule;

/// Schedule configuration from file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleConfig {
    pub schedule: ScheduleSettings,
}

/// Schedule settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScheduleSettings {
    #[serde(default)]
    pub name: Option<String>,
    /// Day key -> interval list, in file order.
    #[serde(default)]
    pub hours: toml::Table,
}

impl ScheduleConfig {
    /// Load schedule configuration from a TOML file.
    ///
    /// # Returns
    /// * `Ok(ScheduleConfig)` if successful
    /// * `Err(Error::Io)` if the file cannot be read
    /// * `Err(Error::MalformedInput)` if it is not valid configuration
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: ScheduleConfig = content.parse()?;
        debug!(
            "Read schedule config '{}' from {}",
            config.name(),
            path.as_ref().display()
        );
        Ok(config)
    }

    /// Schedule name, or `"unnamed"`.
    pub fn name(&self) -> &str {
        self.schedule.name.as_deref().unwrap_or("unnamed")
    }

    /// Build the schedule described by `[schedule.hours]`.
    ///
    /// # Errors
    /// [`Error::MalformedInput`] if a day's value is not a string, or
    /// [`Error::InvalidFormat`] if a list does not parse.
    pub fn to_schedule(&self) -> Result<WeeklySchedule> {
        let intervals = intervals_from_day_entries(&self.schedule.hours)?;
        Ok(WeeklySchedule::new(intervals))
    }
}

impl FromStr for ScheduleConfig {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }
}
