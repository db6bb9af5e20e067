//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading default
//! report settings and the public holiday list from YAML files.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use chrono_tz::Tz;
use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::holidays::{parse_holiday_date, parse_holiday_entries};
use super::types::{
    HolidaysFile, ReportConfig, ReportOptions, ReportSettings, late_start_time, parse_timezone,
    resolve_report_month,
};

/// Loads and provides access to roster report configuration.
///
/// # Directory Structure
///
/// ```text
/// config/roster/
/// ├── settings.yaml   # timezone, late_start_hour, report_type
/// └── holidays.yaml   # optional list of public holiday dates
/// ```
///
/// The settings timezone and late-start hour are validated on load, so a
/// misconfigured deployment fails at startup rather than per request.
///
/// # Example
///
/// ```no_run
/// use roster_report::config::{ConfigLoader, ReportOptions};
///
/// let loader = ConfigLoader::load("./config/roster")?;
/// let config = loader.report_config(&ReportOptions {
///     report_month: Some(12),
///     ..Default::default()
/// })?;
/// println!("Reporting month {} in {}", config.report_month(), config.timezone());
/// # Ok::<(), roster_report::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    settings: ReportSettings,
    timezone: Tz,
    holidays: Vec<NaiveDate>,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if `settings.yaml` is missing or invalid, or if it
    /// names an unknown timezone or an out-of-range late-start hour. A missing
    /// `holidays.yaml` means no holidays; malformed holiday entries are dropped.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let settings = Self::load_yaml::<ReportSettings>(&path.join("settings.yaml"))?;

        let holidays_path = path.join("holidays.yaml");
        let holidays_file = if holidays_path.exists() {
            Self::load_yaml::<HolidaysFile>(&holidays_path)?
        } else {
            debug!(path = %holidays_path.display(), "No holiday file, continuing without holidays");
            HolidaysFile::default()
        };

        let holidays = holidays_file
            .holidays
            .iter()
            .filter_map(|entry| match entry.as_str() {
                Some(value) => parse_holiday_date(value),
                None => {
                    debug!(entry = ?entry, "Dropping non-string holiday entry");
                    None
                }
            })
            .collect();

        Self::from_settings(settings, holidays)
    }

    /// Creates a loader from settings that did not come from disk.
    pub fn from_settings(settings: ReportSettings, holidays: Vec<NaiveDate>) -> EngineResult<Self> {
        let timezone = parse_timezone(&settings.timezone)?;
        late_start_time(settings.late_start_hour)?;

        Ok(Self {
            settings,
            timezone,
            holidays,
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded settings.
    pub fn settings(&self) -> &ReportSettings {
        &self.settings
    }

    /// Returns the default timezone.
    pub fn timezone(&self) -> &Tz {
        &self.timezone
    }

    /// Returns the configured holidays.
    pub fn holidays(&self) -> &[NaiveDate] {
        &self.holidays
    }

    /// Builds the configuration for one report run.
    ///
    /// Options override the loaded settings field by field. Holiday entries
    /// supplied in the options replace the configured list.
    pub fn report_config(&self, options: &ReportOptions) -> EngineResult<ReportConfig> {
        let timezone = match &options.timezone {
            Some(name) => parse_timezone(name)?,
            None => self.timezone,
        };
        let report_month = resolve_report_month(options.report_month, &timezone);
        let late_start_hour = options
            .late_start_hour
            .unwrap_or(self.settings.late_start_hour);
        let holidays = match &options.holidays {
            Some(entries) => parse_holiday_entries(entries),
            None => self.holidays.clone(),
        };

        ReportConfig::with_timezone(report_month, timezone, late_start_hour, holidays)
    }
}
