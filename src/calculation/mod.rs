//! Calculation logic for the roster report engine.
//!
//! This module contains the month clipping of event windows, the late-start
//! rule, midnight enumeration, weekday and weekend classification, public
//! holiday intersection, duration rounding and labels, overlap detection,
//! event selection, and roster building.

mod date_window;
mod day_detection;
mod day_enumeration;
mod duration;
mod event_filter;
mod holiday_intersection;
mod late_start;
mod overlap;
mod roster;

pub use date_window::{AdjustedWindow, adjust_window, months_between};
pub use day_detection::{ClassifiedDays, DayType, classify_days, get_day_type};
pub use day_enumeration::enumerate_midnights;
pub use duration::{duration_hours, humanize_days, humanize_duration, round_to_nearest_day};
pub use event_filter::{attended_by, occurs_in_month, select_events};
pub use holiday_intersection::{DayCounts, HolidaySplit, intersect_holidays, split_holidays};
pub use late_start::effective_start;
pub use overlap::{detect_overlaps, windows_overlap};
pub use roster::{Roster, build_roster, summarize_by_attendee};
