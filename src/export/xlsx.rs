// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::excel_date::{DATE_NUM_FORMAT, parse_to_excel_date};
use crate::export::model::{DATE_COLUMN, entry_to_row, get_headers};
use crate::export::notify_export_success;
use crate::models::entry::LogEntry;
use crate::ui::messages::info;
use crate::utils::number::parse_decimal;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// Upper bound for a column width, in characters.
const MAX_COL_WIDTH: usize = 60;

/// Export XLSX with a styled header, banded rows and auto-sized columns.
pub(crate) fn export_xlsx(entries: &[&LogEntry], path: &Path, title: &str) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Bitacora").map_err(to_app_error)?;

    if entries.is_empty() {
        worksheet
            .write(0, 0, "No data available")
            .map_err(to_app_error)?;
        workbook.save(path).map_err(to_app_error)?;
        notify_export_success("XLSX (empty dataset)", path);
        return Ok(());
    }

    let headers = get_headers();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_app_error)?;
    }

    worksheet.set_freeze_panes(1, 0).map_err(to_app_error)?;

    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    for (row_index, entry) in entries.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band_color = if row_index % 2 == 0 { band1 } else { band2 };

        for (col, value) in entry_to_row(entry).iter().enumerate() {
            write_xlsx_cell(worksheet, row, col, value, band_color)?;
            col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(value.as_str()));
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, (*w).min(MAX_COL_WIDTH) as f64 + 2.0)
            .map_err(to_app_error)?;
    }

    // title goes into the document properties, the sheet stays a plain table
    let props = rust_xlsxwriter::DocProperties::new().set_title(title);
    workbook.set_properties(&props);

    workbook.save(path).map_err(to_app_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

/// Write one cell: the date column as an Excel date, durations and the
/// index as numbers, everything else as text.
fn write_xlsx_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: usize,
    s: &str,
    bg: Color,
) -> AppResult<()> {
    let base = Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    if col == DATE_COLUMN
        && let Some(serial) = parse_to_excel_date(s)
    {
        let fmt = base.set_num_format(DATE_NUM_FORMAT);
        worksheet
            .write_with_format(row, col as u16, serial, &fmt)
            .map_err(to_app_error)?;
        return Ok(());
    }

    if col != DATE_COLUMN
        && let Some(num) = parse_decimal(s)
    {
        let fmt = base.set_align(FormatAlign::Right);
        worksheet
            .write_with_format(row, col as u16, num, &fmt)
            .map_err(to_app_error)?;
        return Ok(());
    }

    worksheet
        .write_with_format(row, col as u16, s, &base)
        .map_err(to_app_error)?;

    Ok(())
}

fn to_app_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
