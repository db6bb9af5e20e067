//! Per-attendee roster summaries.

use serde::Serialize;

use crate::calculation::{AdjustedWindow, detect_overlaps};

use super::RosteredEvent;

/// Note attached to a summary whose events overlap.
pub const OVERLAP_NOTE: &str = "Events overlap.  Counts may be wrong.";

/// Aggregated day counts for one attendee label.
///
/// Events are ordered by adjusted start; events sharing a start keep their
/// input order. Overlap detection is advisory only and never changes the
/// totals.
///
/// # Example
///
/// ```
/// use roster_report::config::ReportConfig;
/// use roster_report::models::{AttendeeSummary, CalendarEvent, RosteredEvent};
/// use chrono::{TimeZone, Utc};
///
/// let config = ReportConfig::new(12, "UTC", 12, vec![]).unwrap();
/// let event = |start_day: u32, end_day: u32| CalendarEvent {
///     id: format!("evt_{}", start_day),
///     start: Utc.with_ymd_and_hms(2022, 12, start_day, 0, 0, 0).unwrap(),
///     end: Utc.with_ymd_and_hms(2022, 12, end_day, 0, 0, 0).unwrap(),
///     attendees: vec!["user.one@contoso.com".to_string()],
/// };
///
/// let events = vec![
///     RosteredEvent::new(&event(8, 15), &config).unwrap(),
///     RosteredEvent::new(&event(1, 8), &config).unwrap(),
/// ];
/// let summary = AttendeeSummary::new("user.one@contoso.com", events);
///
/// assert_eq!(summary.rostered_events()[0].event_id(), "evt_1");
/// assert_eq!(summary.total_days(), 14);
/// assert!(!summary.has_overlap());
/// assert_eq!(summary.notes(), "");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttendeeSummary {
    attendee: String,
    rostered_events: Vec<RosteredEvent>,
    weekday_count: u32,
    weekend_count: u32,
    public_holiday_count: u32,
    total_days: u32,
    has_overlap: bool,
    notes: String,
}

impl AttendeeSummary {
    /// Builds a summary for `attendee` from its rostered events.
    pub fn new(attendee: impl Into<String>, events: impl IntoIterator<Item = RosteredEvent>) -> Self {
        let mut rostered_events: Vec<RosteredEvent> = events.into_iter().collect();
        rostered_events.sort_by_key(RosteredEvent::adjusted_start);

        let windows: Vec<AdjustedWindow> = rostered_events
            .iter()
            .map(RosteredEvent::adjusted_window)
            .collect();
        let has_overlap = !detect_overlaps(&windows).is_empty();

        let weekday_count = rostered_events.iter().map(RosteredEvent::weekday_count).sum();
        let weekend_count = rostered_events.iter().map(RosteredEvent::weekend_count).sum();
        let public_holiday_count = rostered_events.iter().map(RosteredEvent::holiday_count).sum();
        let total_days = rostered_events.iter().map(RosteredEvent::total_days).sum();

        Self {
            attendee: attendee.into(),
            rostered_events,
            weekday_count,
            weekend_count,
            public_holiday_count,
            total_days,
            has_overlap,
            notes: if has_overlap {
                OVERLAP_NOTE.to_string()
            } else {
                String::new()
            },
        }
    }

    /// The attendee label.
    pub fn attendee(&self) -> &str {
        &self.attendee
    }

    /// Events ordered by adjusted start.
    pub fn rostered_events(&self) -> &[RosteredEvent] {
        &self.rostered_events
    }

    /// Weekdays worked, excluding public holidays.
    pub fn weekday_count(&self) -> u32 {
        self.weekday_count
    }

    /// Weekend days worked, excluding public holidays.
    pub fn weekend_count(&self) -> u32 {
        self.weekend_count
    }

    /// Public holidays worked.
    pub fn public_holiday_count(&self) -> u32 {
        self.public_holiday_count
    }

    /// All days worked.
    pub fn total_days(&self) -> u32 {
        self.total_days
    }

    /// True when any two consecutive events overlap.
    pub fn has_overlap(&self) -> bool {
        self.has_overlap
    }

    /// [`OVERLAP_NOTE`] when events overlap, otherwise empty.
    pub fn notes(&self) -> &str {
        &self.notes
    }
}
