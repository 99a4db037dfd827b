//! Glue between the store, the filter, the sort policy and whatever draws
//! the result.

use crate::core::filter::FilterEngine;
use crate::core::present::{BITACORA_LIMIT, present};
use crate::core::store::RowStore;
use crate::errors::AppResult;
use crate::models::criteria::FilterCriteria;
use crate::models::entry::LogEntry;
use crate::models::view::{PresentMode, Presentation, ViewStatus};

/// Receiver of a computed view (terminal table, export file, ...).
pub trait PresentationSink {
    fn present(&mut self, rows: &[&LogEntry], status: &ViewStatus) -> AppResult<()>;
}

/// Filter then order an explicit snapshot.
pub fn assemble<'a>(
    store: &'a RowStore,
    criteria: &FilterCriteria,
    limit: usize,
) -> Presentation<'a> {
    let filtered = FilterEngine::apply(store, criteria);
    present(filtered, store.len(), criteria, limit)
}

/// Holder of the current snapshot.
///
/// Reloads replace the store whole; every refresh recomputes from scratch.
pub struct ViewAssembler {
    store: RowStore,
    limit: usize,
}

impl Default for ViewAssembler {
    fn default() -> Self {
        Self::new(BITACORA_LIMIT)
    }
}

impl ViewAssembler {
    pub fn new(limit: usize) -> Self {
        Self {
            store: RowStore::default(),
            limit,
        }
    }

    pub fn with_store(store: RowStore, limit: usize) -> Self {
        Self { store, limit }
    }

    /// Swap in a freshly loaded snapshot.
    pub fn replace(&mut self, store: RowStore) {
        self.store = store;
    }

    pub fn presentation(&self, criteria: &FilterCriteria) -> Presentation<'_> {
        assemble(&self.store, criteria, self.limit)
    }

    /// Recompute for `criteria` and hand rows plus status to `sink`.
    pub fn refresh<S: PresentationSink + ?Sized>(
        &self,
        criteria: &FilterCriteria,
        sink: &mut S,
    ) -> AppResult<ViewStatus> {
        let view = self.presentation(criteria);
        let status = view.status();
        sink.present(&view.rows, &status)?;
        Ok(status)
    }
}

/// Human-readable summary of what a view shows.
pub fn status_line(status: &ViewStatus) -> String {
    if status.matched == 0 {
        return "No results for the selected filters.".to_string();
    }

    match status.mode {
        PresentMode::Filtered => {
            format!("Showing {} entries matching the filters.", status.shown)
        }
        PresentMode::ShowAll => format!("Showing all {} available entries.", status.shown),
        PresentMode::Windowed => format!(
            "Showing the {} most recent entries (of {} total).",
            status.shown, status.matched
        ),
    }
}
