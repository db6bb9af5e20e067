//! Monthly on-call roster reporting from calendar events.
//!
//! This crate turns calendar events into per-attendee roster reports for a
//! month: events are clipped to the month, their days counted as weekdays,
//! weekend days, or public holidays, and overlapping events are flagged.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
