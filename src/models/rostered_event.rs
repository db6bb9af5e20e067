//! Rostered event model.
//!
//! A [`RosteredEvent`] is a calendar event evaluated against one report
//! configuration: localised, clipped to the report month, and broken down
//! into weekday, weekend, and public holiday counts.

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::calculation::{
    AdjustedWindow, DayCounts, adjust_window, classify_days, duration_hours, effective_start,
    enumerate_midnights, intersect_holidays,
};
use crate::config::ReportConfig;
use crate::error::{EngineError, EngineResult};

use super::CalendarEvent;

/// A calendar event with its month-clipped, holiday-aware day counts.
///
/// Instances are immutable once constructed. The weekday, weekend, and
/// holiday counts always sum to the number of enumerated midnights.
///
/// # Example
///
/// ```
/// use roster_report::config::ReportConfig;
/// use roster_report::models::{CalendarEvent, RosteredEvent};
/// use chrono::{Duration, TimeZone, Utc};
///
/// let config = ReportConfig::new(12, "UTC", 12, vec![]).unwrap();
/// let event = CalendarEvent {
///     id: "evt_001".to_string(),
///     start: Utc.with_ymd_and_hms(2022, 12, 1, 0, 0, 0).unwrap(),
///     end: Utc.with_ymd_and_hms(2022, 12, 8, 0, 0, 0).unwrap(),
///     attendees: vec!["mailto:user.one@contoso.com".to_string()],
/// };
///
/// let rostered = RosteredEvent::new(&event, &config).unwrap();
/// assert_eq!(rostered.adjusted_duration(), Duration::days(7));
/// assert_eq!(rostered.weekday_count(), 5);
/// assert_eq!(rostered.weekend_count(), 2);
/// assert_eq!(rostered.holiday_count(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RosteredEvent {
    event_id: String,
    attendee_label: String,
    start_local: DateTime<FixedOffset>,
    end_local: DateTime<FixedOffset>,
    adjusted_start: NaiveDateTime,
    adjusted_end: NaiveDateTime,
    actual_hours: Decimal,
    adjusted_hours: Decimal,
    midnights: Vec<NaiveDate>,
    #[serde(flatten)]
    counts: DayCounts,
}

impl RosteredEvent {
    /// Evaluates `event` against `config`.
    ///
    /// # Errors
    ///
    /// - [`EngineError::InvalidEvent`] if the event ends before it starts.
    /// - [`EngineError::UnsupportedEventSpan`] if the event crosses more than
    ///   two calendar months in the configured timezone.
    pub fn new(event: &CalendarEvent, config: &ReportConfig) -> EngineResult<Self> {
        if event.end < event.start {
            return Err(EngineError::InvalidEvent {
                event_id: event.id.clone(),
                message: format!("end {} is before start {}", event.end, event.start),
            });
        }

        let start_local = event.start_in(config.timezone());
        let end_local = event.end_in(config.timezone());

        let window = adjust_window(
            start_local.naive_local(),
            end_local.naive_local(),
            config.report_month(),
            config.late_start_time(),
        )?;

        let first_counted = effective_start(window.start, config.late_start_hour());
        let midnights = enumerate_midnights(first_counted, window.end);
        let counts = intersect_holidays(&classify_days(&midnights), config.holidays());

        Ok(Self {
            event_id: event.id.clone(),
            attendee_label: event.attendee_label(),
            start_local,
            end_local,
            adjusted_start: window.start,
            adjusted_end: window.end,
            actual_hours: duration_hours(end_local - start_local),
            adjusted_hours: duration_hours(window.end - window.start),
            midnights: midnights.iter().map(NaiveDateTime::date).collect(),
            counts,
        })
    }

    /// The source event identifier.
    pub fn event_id(&self) -> &str {
        &self.event_id
    }

    /// The normalised attendee label.
    pub fn attendee_label(&self) -> &str {
        &self.attendee_label
    }

    /// The event start in the report timezone.
    pub fn start_local(&self) -> DateTime<FixedOffset> {
        self.start_local
    }

    /// The event end in the report timezone.
    pub fn end_local(&self) -> DateTime<FixedOffset> {
        self.end_local
    }

    /// The start after clipping to the report month (local wall-clock).
    pub fn adjusted_start(&self) -> NaiveDateTime {
        self.adjusted_start
    }

    /// The end after clipping to the report month (local wall-clock).
    pub fn adjusted_end(&self) -> NaiveDateTime {
        self.adjusted_end
    }

    /// The adjusted start and end as a window.
    pub fn adjusted_window(&self) -> AdjustedWindow {
        AdjustedWindow {
            start: self.adjusted_start,
            end: self.adjusted_end,
        }
    }

    /// The unclipped event duration.
    pub fn actual_duration(&self) -> Duration {
        self.end_local - self.start_local
    }

    /// The duration of the adjusted window.
    pub fn adjusted_duration(&self) -> Duration {
        self.adjusted_end - self.adjusted_start
    }

    /// The unclipped duration in decimal hours.
    pub fn actual_hours(&self) -> Decimal {
        self.actual_hours
    }

    /// The adjusted duration in decimal hours.
    pub fn adjusted_hours(&self) -> Decimal {
        self.adjusted_hours
    }

    /// The dates of the midnights credited to this event.
    pub fn midnights(&self) -> &[NaiveDate] {
        &self.midnights
    }

    /// All day counts.
    pub fn counts(&self) -> DayCounts {
        self.counts
    }

    /// Credited weekdays that are not public holidays.
    pub fn weekday_count(&self) -> u32 {
        self.counts.weekday_count
    }

    /// Credited weekend days that are not public holidays.
    pub fn weekend_count(&self) -> u32 {
        self.counts.weekend_count
    }

    /// Credited days that are public holidays.
    pub fn holiday_count(&self) -> u32 {
        self.counts.holiday_count
    }

    /// All credited days.
    pub fn total_days(&self) -> u32 {
        self.counts.total()
    }
}
