//! Sort and window policy for the filtered rows.

use crate::models::criteria::FilterCriteria;
use crate::models::entry::LogEntry;
use crate::models::view::{PresentMode, Presentation};
use crate::utils::date::normalize;
use crate::utils::number::parse_leading_int;

/// Rows shown by default when nothing is filtered.
pub const BITACORA_LIMIT: usize = 50;

/// Order (and in windowed mode truncate) the filtered rows.
///
/// - any filter active → chronological, ties by index
/// - no filter, `show_all` → week, then date, then index
/// - no filter → the last `limit` rows by arrival, then week/date/index
pub fn present<'a>(
    filtered: Vec<&'a LogEntry>,
    total: usize,
    criteria: &FilterCriteria,
    limit: usize,
) -> Presentation<'a> {
    let matched = filtered.len();

    let (rows, mode) = if criteria.has_filters() {
        (sort_by_date(filtered), PresentMode::Filtered)
    } else if criteria.show_all {
        (sort_by_week_then_date(filtered), PresentMode::ShowAll)
    } else {
        let start = filtered.len().saturating_sub(limit);
        let window = filtered[start..].to_vec();
        (sort_by_week_then_date(window), PresentMode::Windowed)
    };

    Presentation {
        rows,
        mode,
        matched,
        total,
    }
}

/// Empty canonical dates sort first.
pub fn sort_by_date(mut rows: Vec<&LogEntry>) -> Vec<&LogEntry> {
    rows.sort_by_cached_key(|e| (normalize(&e.date), e.index));
    rows
}

/// Unparseable weeks sort last.
pub fn sort_by_week_then_date(mut rows: Vec<&LogEntry>) -> Vec<&LogEntry> {
    rows.sort_by_cached_key(|e| {
        let week = parse_leading_int(&e.week).unwrap_or(i64::MAX);
        (week, normalize(&e.date), e.index)
    });
    rows
}
