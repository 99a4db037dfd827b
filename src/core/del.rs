use crate::errors::{AppError, AppResult};
use crate::source::{read_table, write_table};
use std::collections::BTreeSet;
use std::path::Path;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Remove the rows at `indices` from the CSV data file.
    ///
    /// Indices are arrival positions (`LogEntry::index`). Nothing is written
    /// when any of them is out of range.
    pub fn apply(path: &Path, indices: &[usize]) -> AppResult<usize> {
        if indices.is_empty() {
            return Err(AppError::NoIndices);
        }

        let mut table = read_table(path)?.without_unnamed();
        let count = table.rows.len();

        let invalid: Vec<usize> = indices.iter().copied().filter(|&i| i >= count).collect();
        if !invalid.is_empty() {
            return Err(AppError::InvalidIndices(invalid));
        }

        let doomed: BTreeSet<usize> = indices.iter().copied().collect();
        let mut position = 0;
        table.rows.retain(|_| {
            let keep = !doomed.contains(&position);
            position += 1;
            keep
        });

        write_table(path, &table)?;
        Ok(doomed.len())
    }
}
