//! Month clipping of event windows.
//!
//! Roster reports are produced one month at a time. An event that starts in
//! the previous month or ends in the following month is clipped so only the
//! days belonging to the report month are counted.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// An event window in local wall-clock time after month clipping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjustedWindow {
    /// The adjusted start.
    pub start: NaiveDateTime,
    /// The adjusted end.
    pub end: NaiveDateTime,
}

/// Clips a local event window to the report month.
///
/// - An event starting in an earlier month than it ends, where the report
///   month is not the start month, starts on the first day of the end month.
///   The time of day is the original start time, capped at the late-start
///   time.
/// - An event ending in a later month than it starts, where the report month
///   is not the end month, ends on the first day of the month after the start
///   month, at the earlier of the end hour and the late-start hour.
///
/// Both rules are independent. Events inside the report month are returned
/// unchanged, and clipping an already clipped window is a no-op.
///
/// # Errors
///
/// Returns [`EngineError::UnsupportedEventSpan`] for a window crossing more
/// than two calendar months.
///
/// # Example
///
/// ```
/// use roster_report::calculation::adjust_window;
/// use chrono::{NaiveDateTime, NaiveTime};
///
/// let parse = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap();
/// let noon = NaiveTime::from_hms_opt(12, 0, 0).unwrap();
///
/// // Starts in November, reported in December
/// let window = adjust_window(parse("2022-11-28 08:30"), parse("2022-12-05 08:30"), 12, noon).unwrap();
/// assert_eq!(window.start, parse("2022-12-01 08:30"));
/// assert_eq!(window.end, parse("2022-12-05 08:30"));
///
/// // Ends in January, reported in December
/// let window = adjust_window(parse("2022-12-26 00:00"), parse("2023-01-12 00:00"), 12, noon).unwrap();
/// assert_eq!(window.end, parse("2023-01-01 00:00"));
/// ```
pub fn adjust_window(
    start_local: NaiveDateTime,
    end_local: NaiveDateTime,
    report_month: u32,
    late_start: NaiveTime,
) -> EngineResult<AdjustedWindow> {
    if months_between(start_local, end_local) > 1 {
        return Err(EngineError::UnsupportedEventSpan {
            start: start_local,
            end: end_local,
        });
    }

    let start = if start_local.month() != report_month && start_local.month() != end_local.month()
    {
        let time = start_local.time().min(late_start);
        first_of_month(end_local.year(), end_local.month())?.and_time(time)
    } else {
        start_local
    };

    let end = if end_local.month() != report_month && end_local.month() != start_local.month() {
        let end_hour = on_the_hour(end_local.hour())?;
        let (year, month) = following_month(start_local.year(), start_local.month());
        first_of_month(year, month)?.and_time(end_hour.min(late_start))
    } else {
        end_local
    };

    Ok(AdjustedWindow { start, end })
}

/// Returns how many calendar months separate the start and end months.
///
/// An event inside one month returns 0, one crossing a single month boundary
/// returns 1.
pub fn months_between(start: NaiveDateTime, end: NaiveDateTime) -> i32 {
    month_index(end) - month_index(start)
}

fn month_index(datetime: NaiveDateTime) -> i32 {
    datetime.year() * 12 + datetime.month0() as i32
}

fn following_month(year: i32, month: u32) -> (i32, u32) {
    if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

fn first_of_month(year: i32, month: u32) -> EngineResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| EngineError::CalculationError {
        message: format!("no first day for month {} of year {}", month, year),
    })
}

fn on_the_hour(hour: u32) -> EngineResult<NaiveTime> {
    NaiveTime::from_hms_opt(hour, 0, 0).ok_or_else(|| EngineError::CalculationError {
        message: format!("invalid hour {}", hour),
    })
}
