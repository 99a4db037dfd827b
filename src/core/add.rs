use crate::core::calculator::downtime::format_decimal;
use crate::errors::{AppError, AppResult};
use crate::models::entry::{LogEntry, RawRecord, columns};
use crate::models::new_entry::NewEntry;
use crate::source::{CsvTable, read_table, write_table};
use crate::utils::date::iso_week_for;
use crate::utils::number::parse_decimal;
use chrono::NaiveDate;
use std::path::Path;

/// Date layouts accepted from the user, tried in order.
const INPUT_DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%d/%m/%Y", "%m/%d/%Y"];

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Validate `input`, append it to the CSV data file at `path` and return
    /// the stored entry with the index it will get on the next load.
    pub fn apply(path: &Path, input: &NewEntry) -> AppResult<LogEntry> {
        let row = Self::build_row(input)?;

        let mut table = if path.exists() {
            read_table(path)?.without_unnamed()
        } else {
            CsvTable::default()
        };

        if table.headers.is_empty() {
            table.headers = columns::ALL.iter().map(|c| c.to_string()).collect();
        }

        let cells: Vec<String> = table
            .headers
            .iter()
            .map(|h| row_value(&row, h).to_string())
            .collect();

        let index = table.rows.len();
        let stored = RawRecord::from_fields(
            table
                .headers
                .iter()
                .map(String::as_str)
                .zip(cells.iter().cloned()),
        );

        table.rows.push(cells);
        write_table(path, &table)?;

        Ok(LogEntry::from_raw(index, stored))
    }

    /// Turn form input into the stored field values.
    pub fn build_row(input: &NewEntry) -> AppResult<RawRecord> {
        let required = [
            ("date", &input.date),
            ("class", &input.class),
            ("area", &input.area),
            ("wait time", &input.wait_time),
            ("solution time", &input.solution_time),
            ("description", &input.description),
        ];

        let missing: Vec<String> = required
            .iter()
            .filter(|(_, v)| v.trim().is_empty())
            .map(|(name, _)| name.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(AppError::MissingFields(missing));
        }

        let date = parse_input_date(&input.date)?;

        let wait = parse_duration("Wait time", &input.wait_time)?;
        let solve = parse_duration("Solution time", &input.solution_time)?;
        if wait < 0.0 || solve < 0.0 {
            return Err(AppError::NegativeDuration);
        }

        let dead_time_it = if input.dead_time_it.trim().is_empty() {
            String::new()
        } else {
            format_decimal(parse_duration("IT downtime", &input.dead_time_it)?)
        };

        Ok(RawRecord {
            date: date.format("%m/%d/%Y").to_string(),
            week: iso_week_for(date).week.to_string(),
            area: input.area.trim().to_string(),
            class: input.class.trim().to_string(),
            description: input.description.trim().to_string(),
            operator: input.operator.trim().to_string(),
            shift: input.shift.trim().to_string(),
            wait_time: format_decimal(wait),
            solution_time: format_decimal(solve),
            dead_time: format_decimal(wait + solve),
            dead_time_it,
            originator: input.originator.trim().to_string(),
        })
    }
}

fn parse_input_date(raw: &str) -> AppResult<NaiveDate> {
    let raw = raw.trim();
    INPUT_DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
        .ok_or_else(|| AppError::InvalidDate(raw.to_string()))
}

fn parse_duration(label: &str, raw: &str) -> AppResult<f64> {
    parse_decimal(raw).ok_or_else(|| AppError::InvalidNumber(label.to_string()))
}

/// Stored value for a header; unknown columns stay empty.
fn row_value<'a>(row: &'a RawRecord, header: &str) -> &'a str {
    match header {
        columns::DATE => &row.date,
        columns::SHIFT => &row.shift,
        columns::DESCRIPTION => &row.description,
        columns::OPERATOR => &row.operator,
        columns::CLASS => &row.class,
        columns::AREA => &row.area,
        columns::WEEK => &row.week,
        columns::WAIT_TIME => &row.wait_time,
        columns::SOLUTION_TIME => &row.solution_time,
        columns::DEAD_TIME => &row.dead_time,
        columns::DEAD_TIME_IT => &row.dead_time_it,
        columns::ORIGINATOR => &row.originator,
        _ => "",
    }
}
