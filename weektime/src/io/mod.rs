//! High-level schedule loading utilities.
//!
//! These loaders combine file reading, format detection and parsing, and
//! attach file context to errors for application callers.
//!
//! # Example
//!
//! ```no_run
//! use weektime::io::ScheduleLoader;
//! use std::path::Path;
//!
//! let schedule = ScheduleLoader::load_from_file(Path::new("opening_hours.toml"))
//!     .expect("Failed to load");
//! println!("Loaded {} intervals", schedule.len());
//! ```

pub mod loaders;


pub use loaders::{ScheduleLoader, ScheduleSourceType};
