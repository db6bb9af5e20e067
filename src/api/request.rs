//! Request types for the roster report API.
//!
//! This module defines the JSON request structures for the `/roster` endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::ReportOptions;
use crate::models::{CalendarEvent, ReportType};

/// Request body for the `/roster` endpoint.
///
/// Contains the events to report on plus optional overrides of the
/// configured report settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterRequest {
    /// Overrides of the configured settings (month, timezone, late-start hour, holidays).
    #[serde(flatten)]
    pub options: ReportOptions,
    /// Only events attended by one of these labels are reported. Empty means all.
    #[serde(default)]
    pub attendees: Vec<String>,
    /// The report shape. Defaults to the configured report type.
    #[serde(default)]
    pub report_type: Option<ReportType>,
    /// The calendar events to report on.
    pub events: Vec<EventRequest>,
}

/// Calendar event information in a roster request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRequest {
    /// The event identifier.
    #[serde(default)]
    pub id: Option<String>,
    /// The start instant (RFC 3339).
    pub start: DateTime<Utc>,
    /// The end instant (RFC 3339).
    pub end: DateTime<Utc>,
    /// Attendee addresses.
    #[serde(default)]
    pub attendees: Vec<String>,
}

impl From<EventRequest> for CalendarEvent {
    fn from(req: EventRequest) -> Self {
        CalendarEvent {
            id: req.id.unwrap_or_default(),
            start: req.start,
            end: req.end,
            attendees: req.attendees,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_deserialize_roster_request() {
        let json = r#"{
            "report_month": 12,
            "timezone": "Pacific/Auckland",
            "holidays": ["2022-12-25", "2022-12-26"],
            "attendees": ["user.one@contoso.com"],
            "report_type": "attendee_summary_verbose",
            "events": [
                {
                    "id": "evt_001",
                    "start": "2022-12-01T00:00:00+13:00",
                    "end": "2022-12-08T00:00:00+13:00",
                    "attendees": ["mailto:user.one@contoso.com"]
                }
            ]
        }"#;

        let request: RosterRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.options.report_month, Some(12));
        assert_eq!(request.options.timezone.as_deref(), Some("Pacific/Auckland"));
        assert_eq!(request.options.holidays.as_ref().map(Vec::len), Some(2));
        assert_eq!(request.options.late_start_hour, None);
        assert_eq!(request.report_type, Some(ReportType::AttendeeSummaryVerbose));
        assert_eq!(request.attendees.len(), 1);
        assert_eq!(request.events.len(), 1);
        assert_eq!(
            request.events[0].start,
            Utc.with_ymd_and_hms(2022, 11, 30, 11, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_deserialize_minimal_request() {
        let json = r#"{ "events": [] }"#;

        let request: RosterRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.options, ReportOptions::default());
        assert!(request.attendees.is_empty());
        assert!(request.report_type.is_none());
    }

    #[test]
    fn test_missing_events_is_rejected() {
        let err = serde_json::from_str::<RosterRequest>(r#"{ "report_month": 12 }"#).unwrap_err();
        assert!(err.to_string().contains("missing field"));
    }

    #[test]
    fn test_event_conversion() {
        let req = EventRequest {
            id: None,
            start: Utc.with_ymd_and_hms(2022, 12, 1, 0, 0, 0).unwrap(),
            end: Utc.with_ymd_and_hms(2022, 12, 8, 0, 0, 0).unwrap(),
            attendees: vec!["mailto:user.one@contoso.com".to_string()],
        };

        let event: CalendarEvent = req.into();
        assert_eq!(event.id, "");
        assert_eq!(event.attendee_label(), "user.one@contoso.com");
    }
}
