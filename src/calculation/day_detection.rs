//! Day detection for enumerated midnights.
//!
//! This module labels days as weekday or weekend and partitions the
//! midnights spanned by an event into calendar-date sets, so they can be
//! compared against public holiday dates.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate, NaiveDateTime, Weekday};
use serde::{Deserialize, Serialize};

/// Represents the type of day for roster counting.
///
/// # Example
///
/// ```
/// use roster_report::calculation::DayType;
///
/// let day_type = DayType::Weekend;
/// assert_eq!(day_type.to_string(), "Weekend");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    /// Monday through Friday.
    Weekday,
    /// Saturday and Sunday.
    Weekend,
}

impl std::fmt::Display for DayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayType::Weekday => write!(f, "Weekday"),
            DayType::Weekend => write!(f, "Weekend"),
        }
    }
}

/// Determines the day type for a calendar date.
///
/// # Example
///
/// ```
/// use roster_report::calculation::{get_day_type, DayType};
/// use chrono::NaiveDate;
///
/// // 2022-12-03 is a Saturday
/// assert_eq!(get_day_type(NaiveDate::from_ymd_opt(2022, 12, 3).unwrap()), DayType::Weekend);
/// // 2022-12-05 is a Monday
/// assert_eq!(get_day_type(NaiveDate::from_ymd_opt(2022, 12, 5).unwrap()), DayType::Weekday);
/// ```
pub fn get_day_type(date: NaiveDate) -> DayType {
    match date.weekday() {
        Weekday::Sat | Weekday::Sun => DayType::Weekend,
        _ => DayType::Weekday,
    }
}

/// Enumerated days split by day type, keyed by calendar date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifiedDays {
    /// Dates falling Monday to Friday.
    pub weekdays: BTreeSet<NaiveDate>,
    /// Dates falling on Saturday or Sunday.
    pub weekends: BTreeSet<NaiveDate>,
}

impl ClassifiedDays {
    /// Total number of classified days.
    pub fn len(&self) -> usize {
        self.weekdays.len() + self.weekends.len()
    }

    /// Returns true when no days were classified.
    pub fn is_empty(&self) -> bool {
        self.weekdays.is_empty() && self.weekends.is_empty()
    }
}

/// Partitions midnights into weekday and weekend dates.
pub fn classify_days(midnights: &[NaiveDateTime]) -> ClassifiedDays {
    let mut days = ClassifiedDays::default();

    for midnight in midnights {
        let date = midnight.date();
        match get_day_type(date) {
            DayType::Weekday => days.weekdays.insert(date),
            DayType::Weekend => days.weekends.insert(date),
        };
    }

    days
}
