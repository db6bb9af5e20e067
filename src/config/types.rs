//! Configuration types for roster reporting.
//!
//! [`ReportSettings`] and [`HolidaysFile`] are deserialized from YAML;
//! [`ReportConfig`] is the validated value threaded through every
//! calculation of a single report run.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::ReportType;

/// The default late-start hour (noon).
pub const DEFAULT_LATE_START_HOUR: u32 = 12;

fn default_late_start_hour() -> u32 {
    DEFAULT_LATE_START_HOUR
}

/// Default report settings loaded from `settings.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSettings {
    /// IANA timezone identifier used to localise event instants.
    pub timezone: String,
    /// A shift must start before this local hour for its first day to count.
    #[serde(default = "default_late_start_hour")]
    pub late_start_hour: u32,
    /// The report shape produced when a request does not ask for one.
    #[serde(default)]
    pub report_type: ReportType,
}

/// Holiday list file structure (`holidays.yaml`).
///
/// Entries are kept as raw YAML values so that a malformed entry can be
/// dropped without rejecting the rest of the file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HolidaysFile {
    /// The raw holiday entries.
    #[serde(default)]
    pub holidays: Vec<serde_yaml::Value>,
}

/// Per-report overrides of the loaded settings.
///
/// Any field left as `None` falls back to the loaded configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportOptions {
    /// The month to report on (1-12). `None` or `0` selects the current month.
    #[serde(default)]
    pub report_month: Option<u32>,
    /// Timezone override.
    #[serde(default)]
    pub timezone: Option<String>,
    /// Late-start hour override.
    #[serde(default)]
    pub late_start_hour: Option<u32>,
    /// Holiday entries replacing the configured list.
    #[serde(default)]
    pub holidays: Option<Vec<String>>,
}

/// Validated configuration for one report run.
///
/// Construction is the only place the timezone, month, and late-start hour
/// are checked, so an invalid configuration fails before any event is
/// processed.
///
/// # Example
///
/// ```
/// use roster_report::config::ReportConfig;
/// use chrono::NaiveDate;
///
/// let config = ReportConfig::new(
///     12,
///     "Pacific/Auckland",
///     12,
///     vec![NaiveDate::from_ymd_opt(2022, 12, 25).unwrap()],
/// )
/// .unwrap();
/// assert_eq!(config.report_month(), 12);
/// assert_eq!(config.late_start_hour(), 12);
///
/// assert!(ReportConfig::new(12, "New Zealand Standard Time", 12, vec![]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    report_month: u32,
    timezone: Tz,
    late_start: NaiveTime,
    holidays: BTreeSet<NaiveDate>,
}

impl ReportConfig {
    /// Creates a configuration, resolving `timezone` as an IANA identifier.
    pub fn new<I>(
        report_month: u32,
        timezone: &str,
        late_start_hour: u32,
        holidays: I,
    ) -> EngineResult<Self>
    where
        I: IntoIterator<Item = NaiveDate>,
    {
        let timezone = parse_timezone(timezone)?;
        Self::with_timezone(report_month, timezone, late_start_hour, holidays)
    }

    /// Creates a configuration from an already resolved timezone.
    pub fn with_timezone<I>(
        report_month: u32,
        timezone: Tz,
        late_start_hour: u32,
        holidays: I,
    ) -> EngineResult<Self>
    where
        I: IntoIterator<Item = NaiveDate>,
    {
        if !(1..=12).contains(&report_month) {
            return Err(EngineError::InvalidConfig {
                field: "report_month".to_string(),
                message: format!("must be between 1 and 12, got {}", report_month),
            });
        }

        let late_start = late_start_time(late_start_hour)?;

        Ok(Self {
            report_month,
            timezone,
            late_start,
            holidays: holidays.into_iter().collect(),
        })
    }

    /// The month being reported on (1-12).
    pub fn report_month(&self) -> u32 {
        self.report_month
    }

    /// The timezone events are localised to.
    pub fn timezone(&self) -> &Tz {
        &self.timezone
    }

    /// The late-start threshold hour.
    pub fn late_start_hour(&self) -> u32 {
        self.late_start.hour()
    }

    /// The late-start threshold as a time of day.
    pub fn late_start_time(&self) -> NaiveTime {
        self.late_start
    }

    /// The public holiday dates.
    pub fn holidays(&self) -> &BTreeSet<NaiveDate> {
        &self.holidays
    }
}

/// Resolves an IANA timezone identifier.
pub fn parse_timezone(timezone: &str) -> EngineResult<Tz> {
    timezone
        .trim()
        .parse::<Tz>()
        .map_err(|_| EngineError::UnknownTimezone {
            timezone: timezone.to_string(),
        })
}

/// Converts a late-start hour into a time of day, rejecting hours past 23.
pub fn late_start_time(late_start_hour: u32) -> EngineResult<NaiveTime> {
    NaiveTime::from_hms_opt(late_start_hour, 0, 0).ok_or_else(|| EngineError::InvalidConfig {
        field: "late_start_hour".to_string(),
        message: format!("must be between 0 and 23, got {}", late_start_hour),
    })
}

/// Resolves the report month, defaulting to the current month in `timezone`.
pub fn resolve_report_month(report_month: Option<u32>, timezone: &Tz) -> u32 {
    match report_month {
        Some(month) if month != 0 => month,
        _ => Utc::now().with_timezone(timezone).month(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_config() {
        let config = ReportConfig::new(12, "Pacific/Auckland", 12, vec![]).unwrap();
        assert_eq!(config.report_month(), 12);
        assert_eq!(config.timezone(), &chrono_tz::Pacific::Auckland);
        assert_eq!(config.late_start_hour(), 12);
        assert!(config.holidays().is_empty());
    }

    #[test]
    fn test_unknown_timezone_is_rejected() {
        let err = ReportConfig::new(12, "Mars/Olympus_Mons", 12, vec![]).unwrap_err();
        assert!(matches!(err, EngineError::UnknownTimezone { ref timezone } if timezone == "Mars/Olympus_Mons"));
    }

    #[test]
    fn test_month_out_of_range_is_rejected() {
        for month in [0, 13] {
            let err = ReportConfig::new(month, "UTC", 12, vec![]).unwrap_err();
            assert!(matches!(err, EngineError::InvalidConfig { ref field, .. } if field == "report_month"));
        }
    }

    #[test]
    fn test_late_start_hour_out_of_range_is_rejected() {
        let err = ReportConfig::new(12, "UTC", 24, vec![]).unwrap_err();
        assert!(matches!(err, EngineError::InvalidConfig { ref field, .. } if field == "late_start_hour"));
    }

    #[test]
    fn test_duplicate_holidays_are_collapsed() {
        let christmas = NaiveDate::from_ymd_opt(2022, 12, 25).unwrap();
        let config = ReportConfig::new(12, "UTC", 12, vec![christmas, christmas]).unwrap();
        assert_eq!(config.holidays().len(), 1);
    }

    #[test]
    fn test_resolve_explicit_month() {
        assert_eq!(resolve_report_month(Some(3), &chrono_tz::UTC), 3);
    }

    #[test]
    fn test_resolve_missing_month_uses_current_month() {
        let current = Utc::now().with_timezone(&chrono_tz::UTC).month();
        assert_eq!(resolve_report_month(None, &chrono_tz::UTC), current);
        assert_eq!(resolve_report_month(Some(0), &chrono_tz::UTC), current);
    }

    #[test]
    fn test_settings_default_late_start_hour() {
        let settings: ReportSettings = serde_yaml::from_str("timezone: UTC").unwrap();
        assert_eq!(settings.late_start_hour, DEFAULT_LATE_START_HOUR);
        assert_eq!(settings.report_type, ReportType::AttendeeSummary);
    }

    #[test]
    fn test_holidays_file_keeps_raw_entries() {
        let file: HolidaysFile =
            serde_yaml::from_str("holidays:\n  - 2022-12-25\n  - 20221226\n").unwrap();
        assert_eq!(file.holidays.len(), 2);
    }
}
