// src/export/excel_date.rs

use crate::utils::date::{normalize, parse_date};
use chrono::NaiveDate;

pub(crate) const DATE_NUM_FORMAT: &str = "yyyy-mm-dd";

/// Excel serial number of a raw incident date, if it can be read.
pub(crate) fn parse_to_excel_date(raw: &str) -> Option<f64> {
    let date = parse_date(&normalize(raw))?;
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    Some((date - epoch).num_days() as f64)
}
