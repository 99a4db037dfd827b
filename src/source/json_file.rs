// src/source/json_file.rs

use crate::errors::{AppError, AppResult};
use crate::source::csv_file::decode_text;
use crate::source::{RowSet, RowSource};
use std::fs;
use std::path::{Path, PathBuf};

/// Incident log exported as `{ "columns": [...], "rows": [...] }`.
pub struct JsonSource {
    path: PathBuf,
}

impl JsonSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RowSource for JsonSource {
    fn fetch(&self) -> AppResult<RowSet> {
        if !self.path.exists() {
            return Err(AppError::DataFileNotFound(self.path.display().to_string()));
        }

        let text = decode_text(fs::read(&self.path)?);
        let set: RowSet = serde_json::from_str(&text)?;
        Ok(set)
    }

    fn path(&self) -> &Path {
        &self.path
    }
}
