use crate::db::pool::DbPool;
use crate::errors::AppResult;
use ansi_term::Colour;
use regex::Regex;
use std::sync::LazyLock;

static ANSI_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("valid ANSI regex"));

const OP_WIDTH_MAX: usize = 60;

fn strip_ansi(s: &str) -> String {
    ANSI_RE.replace_all(s, "").into_owned()
}

/// ANSI colour of an operation name.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "del" => Colour::Red,
        "backup" => Colour::Blue,
        "export" => Colour::Cyan,
        "report" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

/// One row of the `log` table, ready for printing.
#[derive(Debug, Clone)]
pub struct LogLine {
    pub id: i64,
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

pub struct LogLogic;

impl LogLogic {
    pub fn lines(pool: &DbPool) -> AppResult<Vec<LogLine>> {
        let mut stmt = pool.conn.prepare_cached(
            "SELECT id, date, operation, target, message FROM log ORDER BY id ASC",
        )?;

        let rows = stmt.query_map([], |row| {
            let raw_date: String = row.get(1)?;
            let date = chrono::DateTime::parse_from_rfc3339(&raw_date)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or(raw_date);

            Ok(LogLine {
                id: row.get(0)?,
                date,
                operation: row.get(2)?,
                target: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
                message: row.get(4)?,
            })
        })?;

        let mut lines = Vec::new();
        for r in rows {
            lines.push(r?);
        }
        Ok(lines)
    }

    pub fn print_log(pool: &DbPool) -> AppResult<()> {
        let lines = Self::lines(pool)?;

        if lines.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let id_w = lines
            .iter()
            .map(|l| l.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = lines.iter().map(|l| l.date.len()).max().unwrap_or(10);
        let op_w = lines
            .iter()
            .map(|l| op_target(l).chars().count())
            .max()
            .unwrap_or(10)
            .min(OP_WIDTH_MAX);

        println!("📜 Internal log:\n");

        for line in &lines {
            let color = color_for_operation(&line.operation);

            // visible text is truncated first, then only the operation word is painted
            let visible = op_target(line);
            let visible = if visible.chars().count() > OP_WIDTH_MAX {
                let mut s: String = visible.chars().take(OP_WIDTH_MAX - 3).collect();
                s.push_str("...");
                s
            } else {
                visible
            };

            let painted = match visible.split_once(' ') {
                Some((op, rest)) => format!("{} {}", color.paint(op), rest),
                None => color.paint(visible.as_str()).to_string(),
            };

            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&painted).chars().count()));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                line.id,
                line.date,
                painted,
                padding,
                line.message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}

fn op_target(line: &LogLine) -> String {
    if line.target.is_empty() {
        line.operation.clone()
    } else {
        format!("{} ({})", line.operation, line.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_color_sequences() {
        let painted = Colour::Green.paint("add").to_string();
        assert_eq!(strip_ansi(&painted), "add");
    }

    #[test]
    fn target_is_shown_in_parentheses() {
        let line = LogLine {
            id: 1,
            date: String::new(),
            operation: "del".into(),
            target: "3".into(),
            message: String::new(),
        };
        assert_eq!(op_target(&line), "del (3)");
    }
}
