//! Late shift start exclusion.
//!
//! An attendee has to be on shift for more than half a day to be credited
//! with that day. A shift starting at or after the late-start hour therefore
//! does not count its first, partial day.

use chrono::{Days, NaiveDateTime, Timelike};

/// Returns the instant day enumeration starts from.
///
/// If `adjusted_start` is at or after `late_start_hour` the enumeration moves
/// to the following midnight, otherwise it starts at `adjusted_start`. The
/// reported adjusted start itself is never changed.
///
/// # Example
///
/// ```
/// use roster_report::calculation::effective_start;
/// use chrono::NaiveDateTime;
///
/// let parse = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap();
///
/// assert_eq!(effective_start(parse("2022-12-01 08:30"), 12), parse("2022-12-01 08:30"));
/// assert_eq!(effective_start(parse("2022-12-01 13:00"), 12), parse("2022-12-02 00:00"));
/// ```
pub fn effective_start(adjusted_start: NaiveDateTime, late_start_hour: u32) -> NaiveDateTime {
    if adjusted_start.hour() < late_start_hour {
        return adjusted_start;
    }

    adjusted_start
        .date()
        .checked_add_days(Days::new(1))
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .unwrap_or(adjusted_start)
}
