// src/source/mod.rs

mod csv_file;
mod json_file;

pub use csv_file::{CsvSource, CsvTable, read_table, write_table};
pub use json_file::JsonSource;

use crate::core::store::RowStore;
use crate::errors::AppResult;
use crate::models::entry::RawRecord;
use serde::Deserialize;
use std::path::Path;

/// Result of one fetch of the incident log.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RowSet {
    #[serde(default)]
    pub columns: Vec<String>,
    #[serde(default)]
    pub rows: Vec<RawRecord>,
}

/// Where the incident log comes from.
pub trait RowSource {
    fn fetch(&self) -> AppResult<RowSet>;

    fn path(&self) -> &Path;

    /// Whether add/delete may rewrite the underlying file.
    fn is_writable(&self) -> bool {
        false
    }

    /// Fetch and build a fresh snapshot.
    fn load_store(&self) -> AppResult<RowStore> {
        Ok(RowStore::load(self.fetch()?.rows))
    }
}

/// Pick a reader by file extension: `.json` or CSV for anything else.
pub fn open_source(path: &Path) -> Box<dyn RowSource> {
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        Box::new(JsonSource::new(path))
    } else {
        Box::new(CsvSource::new(path))
    }
}
