// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{entries_to_table, get_headers};
use crate::export::notify_export_success;
use crate::models::entry::LogEntry;
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export JSON pretty-printed.
pub(crate) fn export_json(entries: &[&LogEntry], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(entries)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export CSV with header.
pub(crate) fn export_csv(entries: &[&LogEntry], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(get_headers())?;
    for row in entries_to_table(entries) {
        wtr.write_record(&row)?;
    }

    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}
