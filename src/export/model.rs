// src/export/model.rs

use crate::models::entry::{LogEntry, columns};

/// Header for CSV / XLSX / PDF: the stable index, then the data columns in
/// serialization order of `LogEntry`.
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "index",
        columns::DATE,
        columns::WEEK,
        columns::AREA,
        columns::CLASS,
        columns::DESCRIPTION,
        columns::OPERATOR,
        columns::SHIFT,
        columns::WAIT_TIME,
        columns::SOLUTION_TIME,
        columns::DEAD_TIME,
        columns::DEAD_TIME_IT,
        columns::ORIGINATOR,
    ]
}

/// Position of the date column in `get_headers()`.
pub(crate) const DATE_COLUMN: usize = 1;

/// One entry as a row of strings, matching `get_headers()`.
pub(crate) fn entry_to_row(e: &LogEntry) -> Vec<String> {
    vec![
        e.index.to_string(),
        e.date.clone(),
        e.week.clone(),
        e.area.clone(),
        e.class.clone(),
        e.description.clone(),
        e.operator.clone(),
        e.shift.clone(),
        e.wait_time.clone(),
        e.solution_time.clone(),
        e.dead_time.clone(),
        e.dead_time_it.clone(),
        e.originator.clone(),
    ]
}

pub(crate) fn entries_to_table(entries: &[&LogEntry]) -> Vec<Vec<String>> {
    entries.iter().map(|e| entry_to_row(e)).collect()
}
