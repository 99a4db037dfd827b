//! Date utilities: tolerant normalization to `YYYY-MM-DD`, ISO week/year,
//! month labels used by aggregates and reports.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc};
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

static CANONICAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid canonical date regex"));

static US_DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{2})/(\d{2})/(\d{4})$").expect("valid MM/DD/YYYY regex")
});

/// Date-time layouts without an offset. They are read as UTC.
const NAIVE_DATETIME_FORMATS: [&str; 6] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

const DATE_FORMATS: [&str; 8] = [
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%d %B %Y",
    "%d %b %Y",
    "%a, %d %b %Y",
];

/// ISO 8601 week number together with its week-based year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IsoWeek {
    pub week: u32,
    pub year: i32,
}

/// Convert a raw date into `YYYY-MM-DD`, or `""` when it cannot be read.
///
/// - `YYYY-MM-DD` is returned as is
/// - `MM/DD/YYYY` is reordered without any calendar check
/// - anything else goes through the generic parsers and yields the UTC date
pub fn normalize(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    if CANONICAL_RE.is_match(trimmed) {
        return trimmed.to_string();
    }

    if let Some(caps) = US_DATE_RE.captures(trimmed) {
        return format!("{}-{}-{}", &caps[3], &caps[1], &caps[2]);
    }

    parse_generic(trimmed)
        .filter(|d| (0..=9999).contains(&d.year()))
        .map(format_canonical)
        .unwrap_or_default()
}

fn parse_generic(s: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc).date_naive());
    }

    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.with_timezone(&Utc).date_naive());
    }

    for fmt in NAIVE_DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}

pub fn format_canonical(d: NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

/// Parse a canonical date strictly (no overflow rolling).
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// ISO week of a canonical `YYYY-MM-DD` string.
///
/// Month and day overflow roll forward the same way a UTC calendar
/// constructor does (`2025-13-01` is January 2026, `2025-03-00` is the last
/// day of February). Wrong part count, non-numeric parts or parts too large
/// for a calendar date yield `None`.
pub fn iso_week_of(canonical: &str) -> Option<IsoWeek> {
    if canonical.is_empty() {
        return None;
    }

    let parts: Vec<&str> = canonical.split('-').collect();
    if parts.len() != 3 {
        return None;
    }

    let year = numeric_part(parts[0])?;
    let month = numeric_part(parts[1])?;
    let day = numeric_part(parts[2])?;

    utc_calendar_date(year, month, day).map(iso_week_for)
}

/// ISO week of an already-built date.
pub fn iso_week_for(d: NaiveDate) -> IsoWeek {
    let w = d.iso_week();
    IsoWeek {
        week: w.week(),
        year: w.year(),
    }
}

/// A date part: blank counts as zero, fractions are truncated.
fn numeric_part(s: &str) -> Option<i64> {
    let t = s.trim();
    if t.is_empty() {
        return Some(0);
    }
    let n: f64 = t.parse().ok()?;
    if !n.is_finite() {
        return None;
    }
    Some(n.trunc() as i64)
}

/// Years 0..=99 mean 1900..=1999, as in a UTC date constructor.
/// Out-of-range parts give `None` instead of overflowing.
fn utc_calendar_date(year: i64, month: i64, day: i64) -> Option<NaiveDate> {
    let year = if (0..=99).contains(&year) { year + 1900 } else { year };
    let month0 = month.checked_sub(1)?;
    let y = i32::try_from(year.checked_add(month0.div_euclid(12))?).ok()?;
    let m = u32::try_from(month0.rem_euclid(12) + 1).ok()?;

    let first = NaiveDate::from_ymd_opt(y, m, 1)?;
    first.checked_add_signed(chrono::Duration::try_days(day.checked_sub(1)?)?)
}

/// `"2025-07"` → `"Jul 2025"`; anything unreadable is returned unchanged.
pub fn month_label(month: &str) -> String {
    NaiveDate::parse_from_str(&format!("{month}-01"), "%Y-%m-%d")
        .map(|d| d.format("%b %Y").to_string())
        .unwrap_or_else(|_| month.to_string())
}

/// `YYYY-MM` key of a canonical date.
pub fn month_key(canonical: &str) -> Option<String> {
    parse_date(canonical).map(|d| d.format("%Y-%m").to_string())
}
