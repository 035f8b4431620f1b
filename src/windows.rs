//! Date-range partitioning into feed-sized windows.
//!
//! A Google News search feed caps how many results it returns for a single
//! request, so a long date range is split into consecutive windows of at
//! most 30 days and fetched one window at a time. Window boundaries are
//! shared: each window starts on the date the previous one ended.

use chrono::{Duration, NaiveDate};

/// Maximum length of a single fetch window, in days.
pub const MAX_WINDOW_DAYS: i64 = 30;

/// Split `[start, end)` into consecutive windows of at most
/// [`MAX_WINDOW_DAYS`] days.
///
/// The final window is clamped to `end`. An empty range (`start == end`)
/// yields no windows.
pub fn partition_range(start: NaiveDate, end: NaiveDate) -> Vec<(NaiveDate, NaiveDate)> {
    let mut windows = Vec::new();
    let mut cursor = start;
    while cursor < end {
        let window_end = (cursor + Duration::days(MAX_WINDOW_DAYS)).min(end);
        windows.push((cursor, window_end));
        cursor = window_end;
    }
    windows
}
