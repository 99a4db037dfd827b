//! Table rendering utilities for CLI outputs.

use crate::utils::formatting::pad_right;

pub struct Column {
    pub header: String,
    pub width: usize,
}

impl Column {
    pub fn new(header: &str, width: usize) -> Self {
        Self {
            header: header.to_string(),
            width,
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Render header, a rule made of `separator` and the rows; long cells
    /// wrap inside their column.
    pub fn render(&self, separator: &str) -> String {
        let mut out = String::new();

        let header: Vec<String> = self.columns.iter().map(|c| c.header.clone()).collect();
        self.render_row(&mut out, &header);

        let total: usize = self.columns.iter().map(|c| c.width + 1).sum();
        let sep = if separator.is_empty() { "-" } else { separator };
        out.push_str(&sep.repeat(total.saturating_sub(1) / sep.chars().count().max(1)));
        out.push('\n');

        for row in &self.rows {
            self.render_row(&mut out, row);
        }

        out
    }

    fn render_row(&self, out: &mut String, row: &[String]) {
        let cells: Vec<Vec<String>> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                let text = row.get(i).map(String::as_str).unwrap_or("");
                let lines: Vec<String> = textwrap::wrap(text, col.width.max(1))
                    .into_iter()
                    .map(|l| l.into_owned())
                    .collect();
                if lines.is_empty() { vec![String::new()] } else { lines }
            })
            .collect();

        let height = cells.iter().map(Vec::len).max().unwrap_or(1);

        for line in 0..height {
            let mut text = String::new();
            for (i, col) in self.columns.iter().enumerate() {
                let cell = cells[i].get(line).map(String::as_str).unwrap_or("");
                text.push_str(&pad_right(cell, col.width));
                text.push(' ');
            }
            out.push_str(text.trim_end());
            out.push('\n');
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_cells_wrap_inside_their_column() {
        let mut t = Table::new(vec![Column::new("A", 3), Column::new("B", 5)]);
        t.add_row(vec!["1".into(), "hello world".into()]);
        let out = t.render("-");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "A   B");
        assert_eq!(lines[1], "---------");
        assert_eq!(lines[2], "1   hello");
        assert_eq!(lines[3], "    world");
    }
}
