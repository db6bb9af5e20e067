//! Midnight enumeration.
//!
//! Days are credited by the local midnights a window spans: each midnight
//! in `[start, end)` counts as one day worked.

use chrono::{Days, NaiveDateTime, NaiveTime};

/// Enumerates the local midnights in `[effective_start, adjusted_end)`.
///
/// The cursor starts at `effective_start` and steps to the next calendar
/// day's midnight until it reaches `adjusted_end`. A midnight cursor strictly
/// before the end is recorded. A same-day window that does not start at
/// midnight yields nothing.
///
/// # Example
///
/// ```
/// use roster_report::calculation::enumerate_midnights;
/// use chrono::NaiveDateTime;
///
/// let parse = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap();
///
/// let midnights = enumerate_midnights(parse("2022-12-01 08:30"), parse("2022-12-05 08:30"));
/// assert_eq!(midnights.len(), 4);
/// assert_eq!(midnights[0], parse("2022-12-02 00:00"));
/// assert_eq!(midnights[3], parse("2022-12-05 00:00"));
/// ```
pub fn enumerate_midnights(
    effective_start: NaiveDateTime,
    adjusted_end: NaiveDateTime,
) -> Vec<NaiveDateTime> {
    let mut midnights = Vec::new();
    let mut cursor = effective_start;

    while cursor < adjusted_end {
        if cursor.time() == NaiveTime::MIN {
            midnights.push(cursor);
        }

        // Next calendar day at midnight
        match cursor
            .date()
            .checked_add_days(Days::new(1))
            .and_then(|date| date.and_hms_opt(0, 0, 0))
        {
            Some(next) => cursor = next,
            None => break,
        }
    }

    midnights
}
