//! Error types for the Roster Report Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while building a roster report.

use chrono::NaiveDateTime;
use thiserror::Error;

/// The main error type for the Roster Report Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use roster_report::error::EngineError;
///
/// let error = EngineError::UnknownTimezone {
///     timezone: "Mars/Olympus_Mons".to_string(),
/// };
/// assert_eq!(error.to_string(), "Unknown timezone: Mars/Olympus_Mons");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The timezone identifier is not a known IANA timezone.
    #[error("Unknown timezone: {timezone}")]
    UnknownTimezone {
        /// The identifier that failed to resolve.
        timezone: String,
    },

    /// A report configuration value was out of range.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfig {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// An event was invalid or contained inconsistent data.
    #[error("Invalid event '{event_id}': {message}")]
    InvalidEvent {
        /// The ID of the invalid event.
        event_id: String,
        /// A description of what made the event invalid.
        message: String,
    },

    /// An event crosses more than two calendar months.
    #[error("Event from {start} to {end} crosses more than two calendar months")]
    UnsupportedEventSpan {
        /// The local start of the event.
        start: NaiveDateTime,
        /// The local end of the event.
        end: NaiveDateTime,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/settings.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/settings.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_unknown_timezone_displays_identifier() {
        let error = EngineError::UnknownTimezone {
            timezone: "New Zealand Standard Time".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Unknown timezone: New Zealand Standard Time"
        );
    }

    #[test]
    fn test_invalid_config_displays_field_and_message() {
        let error = EngineError::InvalidConfig {
            field: "report_month".to_string(),
            message: "must be between 1 and 12, got 13".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid configuration field 'report_month': must be between 1 and 12, got 13"
        );
    }

    #[test]
    fn test_invalid_event_displays_id_and_message() {
        let error = EngineError::InvalidEvent {
            event_id: "evt_001".to_string(),
            message: "end is before start".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid event 'evt_001': end is before start");
    }

    #[test]
    fn test_unsupported_event_span_displays_window() {
        let start = NaiveDateTime::parse_from_str("2022-11-28 08:30:00", "%Y-%m-%d %H:%M:%S")
            .unwrap();
        let end = NaiveDateTime::parse_from_str("2023-01-28 08:30:00", "%Y-%m-%d %H:%M:%S")
            .unwrap();
        let error = EngineError::UnsupportedEventSpan { start, end };
        assert_eq!(
            error.to_string(),
            "Event from 2022-11-28 08:30:00 to 2023-01-28 08:30:00 crosses more than two calendar months"
        );
    }

    #[test]
    fn test_calculation_error_displays_message() {
        let error = EngineError::CalculationError {
            message: "date out of range".to_string(),
        };
        assert_eq!(error.to_string(), "Calculation error: date out of range");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_unknown_timezone() -> EngineResult<()> {
            Err(EngineError::UnknownTimezone {
                timezone: "Nowhere/Special".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_unknown_timezone()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
