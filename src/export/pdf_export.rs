// src/export/pdf_export.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{entries_to_table, get_headers};
use crate::export::notify_export_success;
use crate::export::pdf::PdfManager;
use crate::models::entry::LogEntry;
use crate::ui::messages::info;
use std::path::Path;

/// Export PDF: landscape multi-page table of the presented rows.
pub(crate) fn export_pdf(entries: &[&LogEntry], path: &Path, title: &str) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    let headers = get_headers();
    let data_vec = entries_to_table(entries);

    let mut pdf = PdfManager::new().landscape();
    pdf.write_table(title, &headers, &data_vec);

    pdf.save(path)
        .map_err(|e| AppError::Export(format!("PDF export error: {e}")))?;

    notify_export_success("PDF", path);
    Ok(())
}
