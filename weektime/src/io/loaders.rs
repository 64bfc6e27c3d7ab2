use anyhow::{Context, Result};
use log::info;
use std::path::Path;

use crate::config::ScheduleConfig;
use crate::parsing::week_map_parser;
use crate::schedule::WeeklySchedule;

/// Represents the source type of schedule data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleSourceType {
    /// JSON object keyed by day name
    WeekMap,
    /// TOML configuration with a `[schedule.hours]` table
    Config,
}

impl ScheduleSourceType {
    /// Detect the source type from a file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .context("File has no extension")?;

        match extension.to_lowercase().as_str() {
            "json" => Ok(Self::WeekMap),
            "toml" => Ok(Self::Config),
            _ => anyhow::bail!("Unsupported file format: {}", extension),
        }
    }
}

/// Unified interface for loading weekly schedules from JSON or TOML
pub struct ScheduleLoader;

impl ScheduleLoader {
    /// Load a schedule from a file (auto-detects JSON or TOML)
    pub fn load_from_file(path: &Path) -> Result<WeeklySchedule> {
        let schedule = match ScheduleSourceType::from_path(path)? {
            ScheduleSourceType::WeekMap => Self::load_from_json(path)?,
            ScheduleSourceType::Config => Self::load_from_toml(path)?,
        };

        info!(
            "Loaded {} schedule interval(s) from {}",
            schedule.len(),
            path.display()
        );
        Ok(schedule)
    }

    /// Load a schedule from a JSON week-map file
    pub fn load_from_json(path: &Path) -> Result<WeeklySchedule> {
        let intervals = week_map_parser::parse_week_map_file(path)
            .with_context(|| format!("Failed to parse week map file: {}", path.display()))?;

        Ok(WeeklySchedule::new(intervals))
    }

    /// Load a schedule from a JSON week-map string
    pub fn load_from_json_str(json_str: &str) -> Result<WeeklySchedule> {
        WeeklySchedule::from_week_map(json_str).context("Failed to parse week map string")
    }

    /// Load a schedule from a TOML configuration file
    pub fn load_from_toml(path: &Path) -> Result<WeeklySchedule> {
        let config = ScheduleConfig::from_file(path)
            .with_context(|| format!("Failed to read schedule config: {}", path.display()))?;

        config
            .to_schedule()
            .with_context(|| format!("Invalid hours in schedule '{}'", config.name()))
    }
}
