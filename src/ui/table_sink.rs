//! Terminal rendering of a presentation.

use crate::core::view::{PresentationSink, status_line};
use crate::errors::AppResult;
use crate::models::entry::LogEntry;
use crate::models::view::ViewStatus;
use crate::ui::messages::info;
use crate::utils::formatting::bold;
use crate::utils::table::{Column, Table};

/// Prints rows as a wrapped text table followed by the status line.
pub struct TableSink {
    separator: String,
}

impl TableSink {
    pub fn new(separator: &str) -> Self {
        Self {
            separator: separator.to_string(),
        }
    }

    fn table(&self, rows: &[&LogEntry]) -> Table {
        let mut table = Table::new(vec![
            Column::new("#", 5),
            Column::new("DATE", 10),
            Column::new("WEEK", 4),
            Column::new("AREA", 12),
            Column::new("CLASS", 14),
            Column::new("DESCRIPTION", 40),
            Column::new("WAIT", 6),
            Column::new("SOLVE", 6),
            Column::new("DOWN", 6),
            Column::new("DOWN IT", 7),
        ]);

        for e in rows {
            let date = e.canonical_date();
            table.add_row(vec![
                e.index.to_string(),
                if date.is_empty() { e.date.clone() } else { date },
                e.week.clone(),
                e.area.clone(),
                e.class.clone(),
                e.description.clone(),
                e.wait_time.clone(),
                e.solution_time.clone(),
                e.dead_time.clone(),
                e.dead_time_it.clone(),
            ]);
        }

        table
    }
}

impl PresentationSink for TableSink {
    fn present(&mut self, rows: &[&LogEntry], status: &ViewStatus) -> AppResult<()> {
        if !rows.is_empty() {
            println!("{}", self.table(rows).render(&self.separator));
        }

        info(bold(&status_line(status)));
        Ok(())
    }
}
