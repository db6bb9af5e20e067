//! Duration rounding and labels.
//!
//! Durations are shown to people reviewing a roster, never used for day
//! counting. Rounding is done in [`Decimal`] so that half-day midpoints are
//! exact.

use chrono::Duration;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

const SECONDS_PER_DAY: i64 = 86_400;

/// Rounds a duration to the nearest whole day, half away from zero.
///
/// # Example
///
/// ```
/// use roster_report::calculation::round_to_nearest_day;
/// use chrono::Duration;
///
/// let span = Duration::days(6) + Duration::hours(12);
/// assert_eq!(round_to_nearest_day(span), Duration::days(7));
///
/// let span = Duration::days(6) + Duration::hours(11);
/// assert_eq!(round_to_nearest_day(span), Duration::days(6));
/// ```
pub fn round_to_nearest_day(duration: Duration) -> Duration {
    let days = Decimal::from(duration.num_seconds()) / Decimal::from(SECONDS_PER_DAY);
    let rounded = days
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .unwrap_or_default();
    Duration::days(rounded)
}

/// Converts a duration to decimal hours at minute precision.
///
/// # Example
///
/// ```
/// use roster_report::calculation::duration_hours;
/// use chrono::Duration;
/// use rust_decimal::Decimal;
///
/// assert_eq!(duration_hours(Duration::minutes(90)), Decimal::new(15, 1));
/// ```
pub fn duration_hours(duration: Duration) -> Decimal {
    Decimal::new(duration.num_minutes(), 0) / Decimal::new(60, 0)
}

/// Labels a duration in whole days after rounding, e.g. `"7 days"`.
pub fn humanize_days(duration: Duration) -> String {
    plural(round_to_nearest_day(duration).num_days(), "day")
}

/// Labels a duration with up to `precision` non-zero units.
///
/// Units are days, hours, and minutes, largest first. A zero duration is
/// labelled `"0 minutes"`.
///
/// # Example
///
/// ```
/// use roster_report::calculation::humanize_duration;
/// use chrono::Duration;
///
/// let span = Duration::days(6) + Duration::hours(23) + Duration::minutes(30);
/// assert_eq!(humanize_duration(span, 3), "6 days, 23 hours, 30 minutes");
/// assert_eq!(humanize_duration(span, 1), "6 days");
/// ```
pub fn humanize_duration(duration: Duration, precision: usize) -> String {
    let total_minutes = duration.num_minutes();
    let sign = if total_minutes < 0 { "-" } else { "" };
    let total_minutes = total_minutes.abs();

    let units = [
        (total_minutes / (24 * 60), "day"),
        (total_minutes / 60 % 24, "hour"),
        (total_minutes % 60, "minute"),
    ];

    let parts: Vec<String> = units
        .iter()
        .filter(|(value, _)| *value != 0)
        .take(precision)
        .map(|&(value, unit)| plural(value, unit))
        .collect();

    if parts.is_empty() {
        return plural(0, "minute");
    }

    format!("{}{}", sign, parts.join(", "))
}

fn plural(value: i64, unit: &str) -> String {
    if value.abs() == 1 {
        format!("{} {}", value, unit)
    } else {
        format!("{} {}s", value, unit)
    }
}
