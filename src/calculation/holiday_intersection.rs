//! Public holiday intersection.
//!
//! Days that coincide with a public holiday are removed from the weekday and
//! weekend tallies and counted separately.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::day_detection::{ClassifiedDays, DayType, get_day_type};

/// Holidays split by the day of the week they fall on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidaySplit {
    /// Holidays falling Monday to Friday.
    pub weekday: BTreeSet<NaiveDate>,
    /// Holidays falling on Saturday or Sunday.
    pub weekend: BTreeSet<NaiveDate>,
}

/// Splits holiday dates into weekday and weekend holidays.
pub fn split_holidays<'a, I>(holidays: I) -> HolidaySplit
where
    I: IntoIterator<Item = &'a NaiveDate>,
{
    let mut split = HolidaySplit::default();

    for &holiday in holidays {
        match get_day_type(holiday) {
            DayType::Weekday => split.weekday.insert(holiday),
            DayType::Weekend => split.weekend.insert(holiday),
        };
    }

    split
}

/// Day tallies for one event.
///
/// The three counts always sum to the number of classified days.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCounts {
    /// Weekdays that are not public holidays.
    pub weekday_count: u32,
    /// Weekend days that are not public holidays.
    pub weekend_count: u32,
    /// Days that are public holidays.
    pub holiday_count: u32,
}

impl DayCounts {
    /// Sum of all three counts.
    pub fn total(&self) -> u32 {
        self.weekday_count + self.weekend_count + self.holiday_count
    }
}

/// Counts weekdays, weekend days, and holidays for a set of classified days.
///
/// # Example
///
/// ```
/// use roster_report::calculation::{classify_days, intersect_holidays};
/// use chrono::{NaiveDate, NaiveDateTime};
///
/// let date = |s: &str| NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap();
/// let midnights: Vec<NaiveDateTime> = ["2022-12-24", "2022-12-25", "2022-12-26", "2022-12-27"]
///     .iter()
///     .map(|s| date(*s).and_hms_opt(0, 0, 0).unwrap())
///     .collect();
/// let holidays = vec![date("2022-12-25"), date("2022-12-26"), date("2022-12-27")];
///
/// let counts = intersect_holidays(&classify_days(&midnights), &holidays);
/// assert_eq!(counts.weekday_count, 0);
/// assert_eq!(counts.weekend_count, 1);
/// assert_eq!(counts.holiday_count, 3);
/// ```
pub fn intersect_holidays<'a, I>(days: &ClassifiedDays, holidays: I) -> DayCounts
where
    I: IntoIterator<Item = &'a NaiveDate>,
{
    let split = split_holidays(holidays);

    let weekday_holidays = days.weekdays.intersection(&split.weekday).count();
    let weekend_holidays = days.weekends.intersection(&split.weekend).count();

    DayCounts {
        weekday_count: (days.weekdays.len() - weekday_holidays) as u32,
        weekend_count: (days.weekends.len() - weekend_holidays) as u32,
        holiday_count: (weekday_holidays + weekend_holidays) as u32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::day_detection::classify_days;
    use chrono::NaiveDateTime;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn midnights_from(start: &str, days: u64) -> Vec<NaiveDateTime> {
        let start = make_date(start);
        (0..days)
            .map(|offset| {
                (start + chrono::Days::new(offset))
                    .and_hms_opt(0, 0, 0)
                    .unwrap()
            })
            .collect()
    }

    fn christmas_holidays() -> Vec<NaiveDate> {
        ["2022-12-25", "2022-12-26", "2022-12-27", "2023-01-01", "2023-01-02", "2023-01-03"]
            .iter()
            .map(|s| make_date(s))
            .collect()
    }

    #[test]
    fn test_split_holidays_by_day_type() {
        let split = split_holidays(&christmas_holidays());

        // Sundays 2022-12-25 and 2023-01-01
        assert_eq!(split.weekend.len(), 2);
        assert_eq!(split.weekday.len(), 4);
        assert!(split.weekend.contains(&make_date("2022-12-25")));
    }

    #[test]
    fn test_no_holidays() {
        let days = classify_days(&midnights_from("2022-12-01", 7));
        let counts = intersect_holidays(&days, &[]);

        assert_eq!(
            counts,
            DayCounts {
                weekday_count: 5,
                weekend_count: 2,
                holiday_count: 0,
            }
        );
    }

    #[test]
    fn test_boxing_day_week() {
        // 2022-12-26 (Mon) to 2022-12-31 (Sat)
        let days = classify_days(&midnights_from("2022-12-26", 6));
        let counts = intersect_holidays(&days, &christmas_holidays());

        assert_eq!(counts.weekday_count, 3);
        assert_eq!(counts.weekend_count, 1);
        assert_eq!(counts.holiday_count, 2);
        assert_eq!(counts.total(), 6);
    }

    #[test]
    fn test_weekend_holiday_reduces_weekend_count() {
        // 2022-12-24 (Sat) and 2022-12-25 (Sun)
        let days = classify_days(&midnights_from("2022-12-24", 2));
        let counts = intersect_holidays(&days, &christmas_holidays());

        assert_eq!(counts.weekend_count, 1);
        assert_eq!(counts.holiday_count, 1);
        assert_eq!(counts.weekday_count, 0);
    }

    #[test]
    fn test_holidays_outside_window_are_ignored() {
        let days = classify_days(&midnights_from("2022-12-05", 5));
        let counts = intersect_holidays(&days, &christmas_holidays());

        assert_eq!(counts.weekday_count, 5);
        assert_eq!(counts.holiday_count, 0);
    }
}
