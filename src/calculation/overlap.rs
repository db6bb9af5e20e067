//! Overlap detection between adjusted event windows.

use super::date_window::AdjustedWindow;

/// Returns true when two half-open windows intersect.
///
/// Windows that only touch (one ends exactly when the next starts) do not
/// overlap.
pub fn windows_overlap(a: &AdjustedWindow, b: &AdjustedWindow) -> bool {
    a.start < b.end && a.end > b.start
}

/// Finds overlapping neighbours in a list of windows ordered by start.
///
/// Returns the index `i` of every adjacent pair `(i, i + 1)` that overlaps.
/// Only neighbours are compared, so the input must already be sorted.
///
/// # Example
///
/// ```
/// use roster_report::calculation::{AdjustedWindow, detect_overlaps};
/// use chrono::NaiveDateTime;
///
/// let parse = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap();
/// let windows = vec![
///     AdjustedWindow { start: parse("2022-12-01 00:00"), end: parse("2022-12-07 00:00") },
///     AdjustedWindow { start: parse("2022-12-05 00:00"), end: parse("2022-12-15 00:00") },
///     AdjustedWindow { start: parse("2022-12-15 00:00"), end: parse("2022-12-20 00:00") },
/// ];
///
/// assert_eq!(detect_overlaps(&windows), vec![0]);
/// ```
pub fn detect_overlaps(windows: &[AdjustedWindow]) -> Vec<usize> {
    windows
        .windows(2)
        .enumerate()
        .filter(|(_, pair)| windows_overlap(&pair[0], &pair[1]))
        .map(|(index, _)| index)
        .collect()
}
