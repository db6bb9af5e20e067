//! Roster building.
//!
//! Turns selected calendar events into rostered events and groups them into
//! per-attendee summaries.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::config::ReportConfig;
use crate::error::EngineResult;
use crate::models::{AttendeeSummary, CalendarEvent, RosteredEvent};

/// Rostered events and their per-attendee summaries for one report run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    /// One entry per input event, in input order.
    pub rostered_events: Vec<RosteredEvent>,
    /// Summaries ordered by attendee label.
    pub summaries: Vec<AttendeeSummary>,
}

/// Rosters every event in `events` and summarises them by attendee.
///
/// No filtering happens here; use [`select_events`](super::select_events)
/// first to restrict the run to one month or attendee.
///
/// # Errors
///
/// The first event that cannot be rostered fails the whole run.
///
/// # Example
///
/// ```
/// use roster_report::calculation::build_roster;
/// use roster_report::config::ReportConfig;
/// use roster_report::models::CalendarEvent;
/// use chrono::{TimeZone, Utc};
///
/// let config = ReportConfig::new(12, "UTC", 12, vec![]).unwrap();
/// let events = vec![CalendarEvent {
///     id: "evt_001".to_string(),
///     start: Utc.with_ymd_and_hms(2022, 12, 1, 0, 0, 0).unwrap(),
///     end: Utc.with_ymd_and_hms(2022, 12, 8, 0, 0, 0).unwrap(),
///     attendees: vec!["mailto:user.one@contoso.com".to_string()],
/// }];
///
/// let roster = build_roster(&events, &config).unwrap();
/// assert_eq!(roster.rostered_events.len(), 1);
/// assert_eq!(roster.summaries[0].attendee(), "user.one@contoso.com");
/// assert_eq!(roster.summaries[0].total_days(), 7);
/// ```
pub fn build_roster<'a, I>(events: I, config: &ReportConfig) -> EngineResult<Roster>
where
    I: IntoIterator<Item = &'a CalendarEvent>,
{
    let rostered_events = events
        .into_iter()
        .map(|event| -> EngineResult<RosteredEvent> {
            let rostered = RosteredEvent::new(event, config).inspect_err(|err| {
                warn!(event_id = %event.id, error = %err, "Event could not be rostered");
            })?;
            debug!(
                event_id = %rostered.event_id(),
                attendee = %rostered.attendee_label(),
                weekday_count = rostered.weekday_count(),
                weekend_count = rostered.weekend_count(),
                holiday_count = rostered.holiday_count(),
                "Event rostered"
            );
            Ok(rostered)
        })
        .collect::<EngineResult<Vec<_>>>()?;

    let summaries = summarize_by_attendee(&rostered_events);

    Ok(Roster {
        rostered_events,
        summaries,
    })
}

/// Groups rostered events by attendee label, ordered by label.
pub fn summarize_by_attendee(rostered_events: &[RosteredEvent]) -> Vec<AttendeeSummary> {
    let mut by_attendee: BTreeMap<&str, Vec<RosteredEvent>> = BTreeMap::new();
    for rostered in rostered_events {
        by_attendee
            .entry(rostered.attendee_label())
            .or_default()
            .push(rostered.clone());
    }

    by_attendee
        .into_iter()
        .map(|(attendee, events)| {
            let summary = AttendeeSummary::new(attendee, events);
            if summary.has_overlap() {
                warn!(attendee = %summary.attendee(), "Events overlap");
            }
            summary
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use chrono::{NaiveDate, NaiveDateTime, TimeZone, Utc};

    fn event(id: &str, start: &str, end: &str, attendee: &str) -> CalendarEvent {
        let parse = |s: &str| {
            Utc.from_utc_datetime(&NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap())
        };
        CalendarEvent {
            id: id.to_string(),
            start: parse(start),
            end: parse(end),
            attendees: vec![format!("mailto:{}", attendee)],
        }
    }

    fn december() -> ReportConfig {
        let holidays = ["2022-12-25", "2022-12-26", "2022-12-27"]
            .iter()
            .map(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap());
        ReportConfig::new(12, "UTC", 12, holidays).unwrap()
    }

    #[test]
    fn test_one_rostered_event_per_input_event() {
        let events = vec![
            event("evt_001", "2022-12-01 00:00", "2022-12-08 00:00", "b@contoso.com"),
            event("evt_002", "2022-12-08 00:00", "2022-12-15 00:00", "a@contoso.com"),
            event("evt_003", "2022-12-26 00:00", "2023-01-12 00:00", "b@contoso.com"),
        ];

        let roster = build_roster(&events, &december()).unwrap();

        let ids: Vec<&str> = roster
            .rostered_events
            .iter()
            .map(RosteredEvent::event_id)
            .collect();
        assert_eq!(ids, vec!["evt_001", "evt_002", "evt_003"]);
    }

    #[test]
    fn test_summaries_are_grouped_and_ordered_by_attendee() {
        let events = vec![
            event("evt_001", "2022-12-01 00:00", "2022-12-08 00:00", "b@contoso.com"),
            event("evt_002", "2022-12-08 00:00", "2022-12-15 00:00", "a@contoso.com"),
            event("evt_003", "2022-12-26 00:00", "2023-01-12 00:00", "b@contoso.com"),
        ];

        let roster = build_roster(&events, &december()).unwrap();

        assert_eq!(roster.summaries.len(), 2);
        assert_eq!(roster.summaries[0].attendee(), "a@contoso.com");
        assert_eq!(roster.summaries[0].total_days(), 7);

        let b = &roster.summaries[1];
        assert_eq!(b.attendee(), "b@contoso.com");
        assert_eq!(b.rostered_events().len(), 2);
        assert_eq!(b.weekday_count(), 5 + 3);
        assert_eq!(b.weekend_count(), 2 + 1);
        assert_eq!(b.public_holiday_count(), 2);
        assert!(!b.has_overlap());
    }

    #[test]
    fn test_invalid_event_fails_the_run() {
        let events = vec![
            event("evt_001", "2022-12-01 00:00", "2022-12-08 00:00", "a@contoso.com"),
            event("evt_bad", "2022-12-08 00:00", "2022-12-01 00:00", "a@contoso.com"),
        ];

        let err = build_roster(&events, &december()).unwrap_err();
        assert!(matches!(err, EngineError::InvalidEvent { ref event_id, .. } if event_id == "evt_bad"));
    }

    #[test]
    fn test_no_events() {
        let roster = build_roster(&[], &december()).unwrap();
        assert!(roster.rostered_events.is_empty());
        assert!(roster.summaries.is_empty());
    }

    #[test]
    fn test_overlap_is_flagged_per_attendee() {
        let events = vec![
            event("evt_001", "2022-12-01 00:00", "2022-12-07 00:00", "a@contoso.com"),
            event("evt_002", "2022-11-15 00:00", "2022-12-15 00:00", "a@contoso.com"),
            event("evt_003", "2022-12-01 00:00", "2022-12-07 00:00", "b@contoso.com"),
        ];

        let summaries = build_roster(&events, &december()).unwrap().summaries;
        assert!(summaries[0].has_overlap());
        assert!(!summaries[1].has_overlap());
    }
}
