//! Lenient parsing of public holiday dates.
//!
//! Holiday lists come from hand-maintained files and command-line style
//! strings, so entries that do not parse are dropped instead of failing
//! the whole report.

use chrono::NaiveDate;
use tracing::debug;

/// The accepted holiday date format.
pub const HOLIDAY_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a single holiday entry.
///
/// Surrounding whitespace is ignored. Returns `None` for anything that is
/// not a `YYYY-MM-DD` calendar date.
///
/// # Example
///
/// ```
/// use roster_report::config::parse_holiday_date;
/// use chrono::NaiveDate;
///
/// assert_eq!(
///     parse_holiday_date(" 2022-12-25 "),
///     NaiveDate::from_ymd_opt(2022, 12, 25)
/// );
/// assert_eq!(parse_holiday_date("gobbledygook"), None);
/// ```
pub fn parse_holiday_date(entry: &str) -> Option<NaiveDate> {
    let entry = entry.trim();
    match NaiveDate::parse_from_str(entry, HOLIDAY_DATE_FORMAT) {
        Ok(date) => Some(date),
        Err(err) => {
            debug!(entry = %entry, error = %err, "Dropping malformed holiday entry");
            None
        }
    }
}

/// Parses a list of holiday entries, dropping malformed ones.
pub fn parse_holiday_entries<I, S>(entries: I) -> Vec<NaiveDate>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    entries
        .into_iter()
        .filter(|entry| !entry.as_ref().trim().is_empty())
        .filter_map(|entry| parse_holiday_date(entry.as_ref()))
        .collect()
}

/// Parses a comma or newline separated list of holiday dates.
///
/// # Example
///
/// ```
/// use roster_report::config::parse_holidays;
///
/// let holidays = parse_holidays("2022-12-25, 2022-12-26,not-a-date");
/// assert_eq!(holidays.len(), 2);
/// ```
pub fn parse_holidays(input: &str) -> Vec<NaiveDate> {
    parse_holiday_entries(input.split([',', '\n']))
}
