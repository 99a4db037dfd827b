//! In-memory snapshot of the incident log.

use crate::models::entry::{LogEntry, RawRecord};

/// The full set of entries from one load.
///
/// A store is a value: a reload builds a new one and the holder swaps it in
/// whole, so nobody ever observes a partially loaded store.
#[derive(Debug, Clone, Default)]
pub struct RowStore {
    entries: Vec<LogEntry>,
}

impl RowStore {
    /// Stamp `index = position` on every record, starting at 0.
    pub fn load<I>(raw_rows: I) -> Self
    where
        I: IntoIterator<Item = RawRecord>,
    {
        let entries = raw_rows
            .into_iter()
            .enumerate()
            .map(|(index, raw)| LogEntry::from_raw(index, raw))
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve an index handed back by an edit/delete request.
    pub fn get(&self, index: usize) -> Option<&LogEntry> {
        // indices equal positions for the lifetime of a snapshot
        self.entries.get(index).filter(|e| e.index == index)
    }

    /// Indices of presented rows, in presentation order.
    pub fn indices_of(rows: &[&LogEntry]) -> Vec<usize> {
        rows.iter().map(|e| e.index).collect()
    }

    /// Requested indices with no entry in this snapshot, ascending.
    pub fn unknown_indices(&self, indices: &[usize]) -> Vec<usize> {
        let mut missing: Vec<usize> = indices
            .iter()
            .copied()
            .filter(|&i| self.get(i).is_none())
            .collect();
        missing.sort_unstable();
        missing.dedup();
        missing
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LogEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a RowStore {
    type Item = &'a LogEntry;
    type IntoIter = std::slice::Iter<'a, LogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(n: usize) -> RowStore {
        RowStore::load((0..n).map(|_| RawRecord::default()))
    }

    #[test]
    fn get_resolves_positions() {
        let s = store(3);
        assert_eq!(s.get(2).map(|e| e.index), Some(2));
        assert!(s.get(3).is_none());
    }

    #[test]
    fn unknown_indices_are_sorted_and_distinct() {
        let s = store(3);
        assert_eq!(s.unknown_indices(&[7, 0, 5, 7]), vec![5, 7]);
        assert!(s.unknown_indices(&[2, 1]).is_empty());
    }

    #[test]
    fn indices_of_keeps_presentation_order() {
        let s = store(4);
        let rows = vec![&s.entries()[3], &s.entries()[0], &s.entries()[2]];
        assert_eq!(RowStore::indices_of(&rows), vec![3, 0, 2]);
    }
}
