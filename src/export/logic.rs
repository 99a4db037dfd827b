// src/export/logic.rs

use crate::core::view::{PresentationSink, status_line};
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::pdf_export::export_pdf;
use crate::export::xlsx::export_xlsx;
use crate::models::criteria::FilterCriteria;
use crate::models::entry::LogEntry;
use crate::models::view::ViewStatus;
use crate::ui::messages::warning;
use std::path::{Path, PathBuf};

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Write `entries` in presentation order to `path`.
    ///
    /// `path` must be absolute; an existing file needs `force` or an
    /// interactive confirmation.
    pub fn export(
        entries: &[&LogEntry],
        format: ExportFormat,
        path: &Path,
        force: bool,
        title: &str,
    ) -> AppResult<()> {
        ensure_writable(path, force)?;

        match format {
            ExportFormat::Csv => export_csv(entries, path),
            ExportFormat::Json => export_json(entries, path),
            ExportFormat::Xlsx => export_xlsx(entries, path, title),
            ExportFormat::Pdf => export_pdf(entries, path, title),
        }
    }
}

/// Presentation sink that writes the current view to a file.
pub struct ExportSink {
    format: ExportFormat,
    path: PathBuf,
    force: bool,
    title: String,
    written: usize,
}

impl ExportSink {
    pub fn new(format: ExportFormat, path: impl Into<PathBuf>, force: bool, title: String) -> Self {
        Self {
            format,
            path: path.into(),
            force,
            title,
            written: 0,
        }
    }

    /// Rows written by the last `present` call.
    pub fn written(&self) -> usize {
        self.written
    }
}

impl PresentationSink for ExportSink {
    fn present(&mut self, rows: &[&LogEntry], status: &ViewStatus) -> AppResult<()> {
        if rows.is_empty() {
            warning(format!("{} Nothing exported.", status_line(status)));
            self.written = 0;
            return Ok(());
        }

        ExportLogic::export(rows, self.format, &self.path, self.force, &self.title)?;
        self.written = rows.len();
        Ok(())
    }
}

/// Document title describing the active filters.
pub fn build_export_title(criteria: &FilterCriteria) -> String {
    let mut parts: Vec<String> = Vec::new();

    if !criteria.date.is_empty() {
        parts.push(format!("date {}", criteria.date));
    }
    if !criteria.weeks.is_empty() {
        let weeks: Vec<String> = criteria.weeks.iter().map(|w| w.to_string()).collect();
        parts.push(format!("week {}", weeks.join(", ")));
    }
    if !criteria.areas.is_empty() {
        parts.push(format!("area {}", join_set(&criteria.areas)));
    }
    if !criteria.classes.is_empty() {
        parts.push(format!("class {}", join_set(&criteria.classes)));
    }

    if parts.is_empty() {
        "Incident log".to_string()
    } else {
        format!("Incident log ({})", parts.join("; "))
    }
}

fn join_set(set: &std::collections::BTreeSet<String>) -> String {
    set.iter().cloned().collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_lists_active_filters() {
        let c = FilterCriteria::new()
            .with_weeks(["27", "28"])
            .with_areas(["IT"]);
        assert_eq!(build_export_title(&c), "Incident log (week 27, 28; area IT)");
        assert_eq!(build_export_title(&FilterCriteria::new()), "Incident log");
    }
}
