//! Calendar event model and attendee normalisation.
//!
//! Events arrive already parsed from a calendar feed. Attendee addresses are
//! normalised into a single label so that events for the same attendee group
//! together regardless of how the feed spelled the address.

use chrono::{DateTime, FixedOffset, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// A calendar event as supplied by the calendar feed.
///
/// # Example
///
/// ```
/// use roster_report::models::CalendarEvent;
/// use chrono::{TimeZone, Utc};
///
/// let event = CalendarEvent {
///     id: "evt_001".to_string(),
///     start: Utc.with_ymd_and_hms(2022, 11, 30, 11, 0, 0).unwrap(),
///     end: Utc.with_ymd_and_hms(2022, 12, 7, 11, 0, 0).unwrap(),
///     attendees: vec!["mailto:User.One@contoso.com".to_string()],
/// };
/// assert_eq!(event.attendee_label(), "user.one@contoso.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    /// The event identifier (calendar UID), used in logs and errors.
    #[serde(default)]
    pub id: String,
    /// The start instant.
    pub start: DateTime<Utc>,
    /// The end instant.
    pub end: DateTime<Utc>,
    /// Attendee addresses in feed order.
    #[serde(default)]
    pub attendees: Vec<String>,
}

impl CalendarEvent {
    /// Returns the normalised, comma-joined attendee label.
    pub fn attendee_label(&self) -> String {
        attendee_label(&self.attendees)
    }

    /// Returns the start instant in `timezone`, keeping its UTC offset.
    pub fn start_in(&self, timezone: &Tz) -> DateTime<FixedOffset> {
        self.start.with_timezone(timezone).fixed_offset()
    }

    /// Returns the end instant in `timezone`, keeping its UTC offset.
    pub fn end_in(&self, timezone: &Tz) -> DateTime<FixedOffset> {
        self.end.with_timezone(timezone).fixed_offset()
    }
}

/// Normalises one attendee address.
///
/// A URI scheme prefix such as `mailto:` is removed, surrounding whitespace
/// is trimmed, and the address is lower-cased.
///
/// # Example
///
/// ```
/// use roster_report::models::sanitise_attendee;
///
/// assert_eq!(sanitise_attendee("MAILTO:User.One@Contoso.com"), "user.one@contoso.com");
/// assert_eq!(sanitise_attendee("user.two@contoso.com"), "user.two@contoso.com");
/// ```
pub fn sanitise_attendee(address: &str) -> String {
    let address = address.trim();
    let address = match address.split_once(':') {
        Some((scheme, rest)) if is_uri_scheme(scheme) => rest,
        _ => address,
    };
    address.trim().to_lowercase()
}

/// Normalises a list of attendee addresses into a single `", "` joined label.
pub fn attendee_label<S: AsRef<str>>(attendees: &[S]) -> String {
    attendees
        .iter()
        .map(|address| sanitise_attendee(address.as_ref()))
        .collect::<Vec<_>>()
        .join(", ")
}

fn is_uri_scheme(candidate: &str) -> bool {
    let mut chars = candidate.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}
