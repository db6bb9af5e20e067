//! Event selection.
//!
//! Filters raw calendar events down to those relevant for one report run
//! before any of them are rostered.

use chrono::Datelike;
use chrono_tz::Tz;
use tracing::debug;

use crate::calculation::months_between;
use crate::models::{CalendarEvent, attendee_label};

/// Returns true when the event's local span covers any part of `report_month`.
///
/// An event running from a prior month straight through to a following month
/// is selected, so rostering rejects it instead of it being dropped.
pub fn occurs_in_month(event: &CalendarEvent, timezone: &Tz, report_month: u32) -> bool {
    let start = event.start_in(timezone).naive_local();
    let end = event.end_in(timezone).naive_local();
    let span = months_between(start, end);
    if span < 0 {
        // Inverted events are rejected during rostering
        return start.month() == report_month || end.month() == report_month;
    }

    (report_month as i32 - start.month() as i32).rem_euclid(12) <= span
}

/// Returns true when `attendees` is empty or contains the event's attendee label.
///
/// Filter entries are normalised the same way as event attendees, so
/// `mailto:User@Example.com` matches an event attended by `user@example.com`.
///
/// # Example
///
/// ```
/// use roster_report::calculation::attended_by;
/// use roster_report::models::CalendarEvent;
/// use chrono::{TimeZone, Utc};
///
/// let event = CalendarEvent {
///     id: "evt_001".to_string(),
///     start: Utc.with_ymd_and_hms(2022, 12, 1, 0, 0, 0).unwrap(),
///     end: Utc.with_ymd_and_hms(2022, 12, 8, 0, 0, 0).unwrap(),
///     attendees: vec!["mailto:user.one@contoso.com".to_string()],
/// };
///
/// assert!(attended_by(&event, &[]));
/// assert!(attended_by(&event, &["User.One@contoso.com".to_string()]));
/// assert!(!attended_by(&event, &["user.two@contoso.com".to_string()]));
/// ```
pub fn attended_by(event: &CalendarEvent, attendees: &[String]) -> bool {
    if attendees.is_empty() {
        return true;
    }

    let label = event.attendee_label();
    attendees
        .iter()
        .any(|attendee| attendee_label(std::slice::from_ref(attendee)) == label)
}

/// Keeps the events that occur in the report month and match the attendee filter.
///
/// Input order is preserved.
pub fn select_events<'a, I>(
    events: I,
    timezone: &Tz,
    report_month: u32,
    attendees: &[String],
) -> Vec<&'a CalendarEvent>
where
    I: IntoIterator<Item = &'a CalendarEvent>,
{
    events
        .into_iter()
        .filter(|event| {
            let selected =
                occurs_in_month(event, timezone, report_month) && attended_by(event, attendees);
            if !selected {
                debug!(event_id = %event.id, report_month, "Event not selected");
            }
            selected
        })
        .collect()
}
