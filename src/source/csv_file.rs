// src/source/csv_file.rs

use crate::errors::{AppError, AppResult};
use crate::models::entry::RawRecord;
use crate::source::{RowSet, RowSource};
use std::fs;
use std::path::{Path, PathBuf};

/// Header and cell grid of a CSV data file, as text.
#[derive(Debug, Clone, Default)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CsvTable {
    /// Positions of the columns worth keeping (named, not `Unnamed: n`).
    fn kept_columns(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .filter(|(_, h)| !h.is_empty() && !h.starts_with("Unnamed"))
            .map(|(i, _)| i)
            .collect()
    }

    /// Drop padding columns produced by stray trailing commas.
    pub fn without_unnamed(self) -> Self {
        let keep = self.kept_columns();
        let pick = |cells: &[String]| -> Vec<String> {
            keep.iter()
                .map(|&i| cells.get(i).cloned().unwrap_or_default())
                .collect()
        };
        Self {
            headers: pick(&self.headers),
            rows: self.rows.iter().map(|r| pick(r)).collect(),
        }
    }

    pub fn to_records(&self) -> Vec<RawRecord> {
        self.rows
            .iter()
            .map(|row| {
                RawRecord::from_fields(
                    self.headers
                        .iter()
                        .enumerate()
                        .map(|(i, h)| (h.as_str(), row.get(i).cloned().unwrap_or_default())),
                )
            })
            .collect()
    }
}

/// Decode file bytes as UTF-8, falling back to Latin-1.
pub fn decode_text(bytes: Vec<u8>) -> String {
    let text = match String::from_utf8(bytes) {
        Ok(s) => s,
        Err(e) => e.into_bytes().iter().map(|&b| b as char).collect(),
    };
    match text.strip_prefix('\u{feff}') {
        Some(rest) => rest.to_string(),
        None => text,
    }
}

/// Read a CSV data file into a trimmed text grid.
pub fn read_table(path: &Path) -> AppResult<CsvTable> {
    if !path.exists() {
        return Err(AppError::DataFileNotFound(path.display().to_string()));
    }

    let text = decode_text(fs::read(path)?);
    if text.trim().is_empty() {
        return Ok(CsvTable::default());
    }

    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();

    let mut rows = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        rows.push(rec.iter().map(str::to_string).collect());
    }

    Ok(CsvTable { headers, rows })
}

/// Rewrite a CSV data file (UTF-8) from a text grid.
pub fn write_table(path: &Path, table: &CsvTable) -> AppResult<()> {
    let mut wtr = csv::WriterBuilder::new().flexible(true).from_path(path)?;

    wtr.write_record(&table.headers)?;
    for row in &table.rows {
        wtr.write_record(row)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Incident log stored as CSV.
pub struct CsvSource {
    path: PathBuf,
}

impl CsvSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RowSource for CsvSource {
    fn fetch(&self) -> AppResult<RowSet> {
        let table = read_table(&self.path)?.without_unnamed();
        Ok(RowSet {
            rows: table.to_records(),
            columns: table.headers,
        })
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn is_writable(&self) -> bool {
        true
    }
}
