//! Configuration loading and management for the Roster Report Engine.
//!
//! This module provides functionality to load report settings and public
//! holidays from YAML files, and the validated [`ReportConfig`] threaded
//! through every calculation.
//!
//! # Example
//!
//! ```no_run
//! use roster_report::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/roster").unwrap();
//! println!("Default timezone: {}", loader.settings().timezone);
//! ```

mod holidays;
mod loader;
mod types;

pub use holidays::{HOLIDAY_DATE_FORMAT, parse_holiday_date, parse_holiday_entries, parse_holidays};
pub use loader::ConfigLoader;
pub use types::{
    DEFAULT_LATE_START_HOUR, HolidaysFile, ReportConfig, ReportOptions, ReportSettings,
    late_start_time, parse_timezone, resolve_report_month,
};
