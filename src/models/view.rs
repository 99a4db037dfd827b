use super::entry::LogEntry;
use serde::Serialize;
use std::fmt;

/// Which sort/window policy produced a presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PresentMode {
    /// At least one filter is active: chronological order.
    Filtered,
    /// No filter, everything requested: week → date → index.
    ShowAll,
    /// No filter: the most recent slice only, week → date → index.
    Windowed,
}

impl PresentMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            PresentMode::Filtered => "filtered",
            PresentMode::ShowAll => "all",
            PresentMode::Windowed => "windowed",
        }
    }
}

impl fmt::Display for PresentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered rows ready for display plus the counts behind them.
#[derive(Debug, Clone)]
pub struct Presentation<'a> {
    pub rows: Vec<&'a LogEntry>,
    pub mode: PresentMode,
    /// Entries that survived the filter.
    pub matched: usize,
    /// Entries in the store.
    pub total: usize,
}

impl Presentation<'_> {
    pub fn status(&self) -> ViewStatus {
        ViewStatus {
            shown: self.rows.len(),
            matched: self.matched,
            total: self.total,
            mode: self.mode,
        }
    }
}

/// Status descriptor handed to the presentation sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ViewStatus {
    pub shown: usize,
    pub matched: usize,
    pub total: usize,
    pub mode: PresentMode,
}
