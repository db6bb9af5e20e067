//! Core data models for the roster report engine.
//!
//! Events come in as [`CalendarEvent`], are evaluated into [`RosteredEvent`],
//! grouped into [`AttendeeSummary`], and shaped into a [`RosterReport`].

mod attendee_summary;
mod event;
mod report;
mod rostered_event;

pub use attendee_summary::{AttendeeSummary, OVERLAP_NOTE};
pub use event::{CalendarEvent, attendee_label, sanitise_attendee};
pub use report::{DATE_LABEL_FORMAT, ReportRows, ReportType, RosterReport, SummaryRow, VerboseRow};
pub use rostered_event::RosteredEvent;
