//! Error types for week point construction and schedule parsing.

/// Result type for weektime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for weektime operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A day/hour/minute component was outside its valid range.
    #[error("Out of range: day={day}, hour={hour}, minute={minute} (expected day 0-6, hour 0-23, minute 0-59)")]
    OutOfRange { day: u32, hour: u32, minute: u32 },

    /// Text did not match the point or interval-list grammar.
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// The outer structured document (JSON or TOML) could not be used.
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// Reading a schedule file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::MalformedInput(e.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::MalformedInput(e.to_string())
    }
}
