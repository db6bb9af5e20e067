//! Report shapes.
//!
//! A [`ReportType`] selects which row layout is produced from a set of
//! [`AttendeeSummary`] values. Rows are flat and display oriented: dates and
//! durations are pre-formatted, and the values for each of an attendee's
//! events are joined one per line.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculation::{humanize_days, humanize_duration};

use super::{AttendeeSummary, RosteredEvent};

/// Format of every date label in a report row, e.g. `Thu 01 Dec 22 08:30 AM`.
pub const DATE_LABEL_FORMAT: &str = "%a %d %b %y %H:%M %p";

/// Number of units shown for actual durations in the verbose report.
const ACTUAL_DURATION_PRECISION: usize = 3;

/// The available report layouts.
///
/// # Example
///
/// ```
/// use roster_report::models::ReportType;
///
/// assert_eq!(ReportType::default(), ReportType::AttendeeSummary);
/// let parsed: ReportType = serde_json::from_str("\"attendee_summary_verbose\"").unwrap();
/// assert_eq!(parsed, ReportType::AttendeeSummaryVerbose);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportType {
    /// One row per attendee with adjusted times and day counts.
    #[default]
    AttendeeSummary,
    /// As [`ReportType::AttendeeSummary`], adding actual times and approval columns.
    AttendeeSummaryVerbose,
}

impl ReportType {
    /// Shapes `summaries` into rows of this report type, one row per summary.
    pub fn build_rows(self, summaries: &[AttendeeSummary]) -> ReportRows {
        match self {
            ReportType::AttendeeSummary => {
                ReportRows::AttendeeSummary(summaries.iter().map(SummaryRow::from).collect())
            }
            ReportType::AttendeeSummaryVerbose => ReportRows::AttendeeSummaryVerbose(
                summaries.iter().map(VerboseRow::from).collect(),
            ),
        }
    }
}

/// A row of the attendee summary report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRow {
    /// The attendee label.
    pub attendee: String,
    /// Adjusted start of each event.
    pub adjusted_start: String,
    /// Adjusted end of each event.
    pub adjusted_end: String,
    /// Adjusted duration of each event, in whole days.
    pub adjusted_duration: String,
    /// Weekdays worked, excluding public holidays.
    pub weekdays: u32,
    /// Weekend days worked, excluding public holidays.
    pub weekends: u32,
    /// Public holidays worked.
    pub holidays: u32,
    /// All days worked.
    pub total_days: u32,
    /// The overlap note, if any.
    pub notes: String,
}

impl From<&AttendeeSummary> for SummaryRow {
    fn from(summary: &AttendeeSummary) -> Self {
        let events = summary.rostered_events();
        Self {
            attendee: summary.attendee().to_string(),
            adjusted_start: join_lines(events, |e| e.adjusted_start().format(DATE_LABEL_FORMAT).to_string()),
            adjusted_end: join_lines(events, |e| e.adjusted_end().format(DATE_LABEL_FORMAT).to_string()),
            adjusted_duration: join_lines(events, |e| humanize_days(e.adjusted_duration())),
            weekdays: summary.weekday_count(),
            weekends: summary.weekend_count(),
            holidays: summary.public_holiday_count(),
            total_days: summary.total_days(),
            notes: summary.notes().to_string(),
        }
    }
}

/// A row of the verbose attendee summary report.
///
/// `approved_by` and `approved_on` are always empty; they are columns for
/// the reviewer to fill in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerboseRow {
    /// The attendee label.
    pub attendee: String,
    /// Local start of each event.
    pub actual_start: String,
    /// Local end of each event.
    pub actual_end: String,
    /// Unclipped duration of each event.
    pub actual_duration: String,
    /// Adjusted start of each event.
    pub adjusted_start: String,
    /// Adjusted end of each event.
    pub adjusted_end: String,
    /// Adjusted duration of each event, in whole days.
    pub adjusted_duration: String,
    /// Weekdays worked, excluding public holidays.
    pub weekdays: u32,
    /// Weekend days worked, excluding public holidays.
    pub weekends: u32,
    /// Public holidays worked.
    pub holidays: u32,
    /// All days worked.
    pub total_days: u32,
    /// The overlap note, if any.
    pub notes: String,
    /// Reviewer name, left blank.
    pub approved_by: String,
    /// Review date, left blank.
    pub approved_on: String,
}

impl From<&AttendeeSummary> for VerboseRow {
    fn from(summary: &AttendeeSummary) -> Self {
        let events = summary.rostered_events();
        let row = SummaryRow::from(summary);
        Self {
            attendee: row.attendee,
            actual_start: join_lines(events, |e| e.start_local().format(DATE_LABEL_FORMAT).to_string()),
            actual_end: join_lines(events, |e| e.end_local().format(DATE_LABEL_FORMAT).to_string()),
            actual_duration: join_lines(events, |e| {
                humanize_duration(e.actual_duration(), ACTUAL_DURATION_PRECISION)
            }),
            adjusted_start: row.adjusted_start,
            adjusted_end: row.adjusted_end,
            adjusted_duration: row.adjusted_duration,
            weekdays: row.weekdays,
            weekends: row.weekends,
            holidays: row.holidays,
            total_days: row.total_days,
            notes: row.notes,
            approved_by: String::new(),
            approved_on: String::new(),
        }
    }
}

fn join_lines<F>(events: &[RosteredEvent], label: F) -> String
where
    F: Fn(&RosteredEvent) -> String,
{
    events.iter().map(label).collect::<Vec<_>>().join("\n")
}

/// Rows of one report, tagged with the report type that produced them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "rows", rename_all = "snake_case")]
pub enum ReportRows {
    /// Rows of [`ReportType::AttendeeSummary`].
    AttendeeSummary(Vec<SummaryRow>),
    /// Rows of [`ReportType::AttendeeSummaryVerbose`].
    AttendeeSummaryVerbose(Vec<VerboseRow>),
}

impl ReportRows {
    /// The report type these rows were shaped for.
    pub fn report_type(&self) -> ReportType {
        match self {
            ReportRows::AttendeeSummary(_) => ReportType::AttendeeSummary,
            ReportRows::AttendeeSummaryVerbose(_) => ReportType::AttendeeSummaryVerbose,
        }
    }

    /// The number of rows.
    pub fn len(&self) -> usize {
        match self {
            ReportRows::AttendeeSummary(rows) => rows.len(),
            ReportRows::AttendeeSummaryVerbose(rows) => rows.len(),
        }
    }

    /// True when there are no rows.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The complete output of one report run.
///
/// Contains every rostered event, the per-attendee summaries, and the rows
/// shaped for the requested report type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RosterReport {
    /// Unique identifier for this report run.
    pub report_id: Uuid,
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
    /// The version of the engine that produced the report.
    pub engine_version: String,
    /// The month reported on (1-12).
    pub report_month: u32,
    /// The IANA timezone events were localised to.
    pub timezone: String,
    /// Every selected event, in input order.
    pub rostered_events: Vec<RosteredEvent>,
    /// Per-attendee summaries ordered by attendee label.
    pub summaries: Vec<AttendeeSummary>,
    /// Rows shaped for the requested report type.
    pub rows: ReportRows,
    /// Time spent building the report, in microseconds.
    pub duration_us: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ReportConfig;
    use crate::models::CalendarEvent;
    use chrono::{NaiveDateTime, TimeZone};

    fn rostered(id: &str, start: &str, end: &str) -> RosteredEvent {
        let parse = |s: &str| {
            Utc.from_utc_datetime(&NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap())
        };
        let event = CalendarEvent {
            id: id.to_string(),
            start: parse(start),
            end: parse(end),
            attendees: vec!["mailto:user.one@contoso.com".to_string()],
        };
        let config = ReportConfig::new(12, "UTC", 12, vec![]).unwrap();
        RosteredEvent::new(&event, &config).unwrap()
    }

    fn summary() -> AttendeeSummary {
        AttendeeSummary::new(
            "user.one@contoso.com",
            vec![
                rostered("evt_001", "2022-11-28 08:30", "2022-12-05 08:30"),
                rostered("evt_002", "2022-12-12 00:00", "2022-12-19 00:00"),
            ],
        )
    }

    #[test]
    fn test_summary_rows() {
        let rows = ReportType::AttendeeSummary.build_rows(&[summary()]);

        let ReportRows::AttendeeSummary(rows) = rows else {
            panic!("expected summary rows");
        };
        assert_eq!(rows.len(), 1);

        let row = &rows[0];
        assert_eq!(row.attendee, "user.one@contoso.com");
        assert_eq!(
            row.adjusted_start,
            "Thu 01 Dec 22 08:30 AM\nMon 12 Dec 22 00:00 AM"
        );
        assert_eq!(
            row.adjusted_end,
            "Mon 05 Dec 22 08:30 AM\nMon 19 Dec 22 00:00 AM"
        );
        assert_eq!(row.adjusted_duration, "4 days\n7 days");
        assert_eq!(row.weekdays, 7);
        assert_eq!(row.weekends, 4);
        assert_eq!(row.holidays, 0);
        assert_eq!(row.total_days, 11);
        assert_eq!(row.notes, "");
    }

    #[test]
    fn test_verbose_rows() {
        let rows = ReportType::AttendeeSummaryVerbose.build_rows(&[summary()]);
        assert_eq!(rows.report_type(), ReportType::AttendeeSummaryVerbose);

        let ReportRows::AttendeeSummaryVerbose(rows) = rows else {
            panic!("expected verbose rows");
        };
        let row = &rows[0];
        assert_eq!(
            row.actual_start,
            "Mon 28 Nov 22 08:30 AM\nMon 12 Dec 22 00:00 AM"
        );
        assert_eq!(row.actual_duration, "7 days\n7 days");
        assert_eq!(row.adjusted_duration, "4 days\n7 days");
        assert_eq!(row.total_days, 11);
        assert!(row.approved_by.is_empty());
        assert!(row.approved_on.is_empty());
    }

    #[test]
    fn test_no_summaries_give_no_rows() {
        let rows = ReportType::AttendeeSummary.build_rows(&[]);
        assert!(rows.is_empty());
        assert_eq!(rows.report_type(), ReportType::AttendeeSummary);
    }

    #[test]
    fn test_rows_serialize_with_kind_tag() {
        let rows = ReportType::AttendeeSummary.build_rows(&[summary()]);
        let json = serde_json::to_value(&rows).unwrap();

        assert_eq!(json["kind"], "attendee_summary");
        assert_eq!(json["rows"][0]["total_days"], 11);
    }

    #[test]
    fn test_report_type_deserialization() {
        let report_type: ReportType = serde_yaml::from_str("attendee_summary").unwrap();
        assert_eq!(report_type, ReportType::AttendeeSummary);
        assert!(serde_json::from_str::<ReportType>("\"monthly\"").is_err());
    }
}
