use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Column names of the incident log as they appear in the data file.
pub mod columns {
    pub const DATE: &str = "FECHA";
    pub const SHIFT: &str = "SHIFT";
    pub const DESCRIPTION: &str = "PROBLEM DESCRIPTION/SOLUTION";
    pub const OPERATOR: &str = "NOMBRE OPERADOR / USUARIOS";
    pub const CLASS: &str = "CLASS";
    pub const AREA: &str = "AREA";
    pub const WEEK: &str = "WEEK#";
    pub const WAIT_TIME: &str = "T. ESPERA";
    pub const SOLUTION_TIME: &str = "T. SOLUCION";
    pub const DEAD_TIME: &str = "T. MUERTO";
    pub const DEAD_TIME_IT: &str = "T. MUERTO TI";
    pub const ORIGINATOR: &str = "ORIGINADOR";

    /// Header written to a fresh data file.
    pub const ALL: [&str; 12] = [
        DATE,
        SHIFT,
        DESCRIPTION,
        OPERATOR,
        CLASS,
        AREA,
        WEEK,
        WAIT_TIME,
        SOLUTION_TIME,
        DEAD_TIME,
        DEAD_TIME_IT,
        ORIGINATOR,
    ];

    /// Keywords that identify the event/description column when the data
    /// file does not use the standard name.
    pub const DESCRIPTION_KEYWORDS: [&str; 4] = ["EVENT", "PROBLEM", "DESCRIPCION", "DESCRIPCIÓN"];
}

/// An incoming record with every field optional.
///
/// Absent or wrong-typed values resolve to `""`; numbers keep their plain
/// decimal rendering. Unknown columns are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct RawRecord {
    pub date: String,
    pub week: String,
    pub area: String,
    pub class: String,
    pub description: String,
    pub operator: String,
    pub shift: String,
    pub wait_time: String,
    pub solution_time: String,
    pub dead_time: String,
    pub dead_time_it: String,
    pub originator: String,
}

impl RawRecord {
    /// Build a record from `(column, value)` pairs.
    pub fn from_fields<'a, I>(fields: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, String)>,
    {
        let mut rec = RawRecord::default();
        let mut fallback_description: Option<String> = None;

        for (name, value) in fields {
            let name = name.trim();
            let slot = match name {
                columns::DATE => &mut rec.date,
                columns::WEEK => &mut rec.week,
                columns::AREA => &mut rec.area,
                columns::CLASS => &mut rec.class,
                columns::DESCRIPTION => &mut rec.description,
                columns::OPERATOR => &mut rec.operator,
                columns::SHIFT => &mut rec.shift,
                columns::WAIT_TIME => &mut rec.wait_time,
                columns::SOLUTION_TIME => &mut rec.solution_time,
                columns::DEAD_TIME => &mut rec.dead_time,
                columns::DEAD_TIME_IT => &mut rec.dead_time_it,
                columns::ORIGINATOR => &mut rec.originator,
                other => {
                    if fallback_description.is_none() && is_description_column(other) {
                        fallback_description = Some(value);
                    }
                    continue;
                }
            };
            *slot = value;
        }

        if rec.description.is_empty()
            && let Some(desc) = fallback_description
        {
            rec.description = desc;
        }

        rec
    }
}

fn is_description_column(name: &str) -> bool {
    let upper = name.to_uppercase();
    columns::DESCRIPTION_KEYWORDS
        .iter()
        .any(|k| upper.contains(k))
}

/// Render a JSON value the way a raw record stores it.
pub fn value_to_field(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    }
}

impl From<Map<String, Value>> for RawRecord {
    fn from(map: Map<String, Value>) -> Self {
        RawRecord::from_fields(map.iter().map(|(k, v)| (k.as_str(), value_to_field(v))))
    }
}

/// One incident of the log.
///
/// `index` is stamped at load time from the arrival position and travels
/// unchanged through filtering and sorting; it is the only handle used for
/// edit/delete requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    pub index: usize,
    #[serde(rename = "FECHA")]
    pub date: String,
    #[serde(rename = "WEEK#")]
    pub week: String,
    #[serde(rename = "AREA")]
    pub area: String,
    #[serde(rename = "CLASS")]
    pub class: String,
    #[serde(rename = "PROBLEM DESCRIPTION/SOLUTION")]
    pub description: String,
    #[serde(rename = "NOMBRE OPERADOR / USUARIOS")]
    pub operator: String,
    #[serde(rename = "SHIFT")]
    pub shift: String,
    #[serde(rename = "T. ESPERA")]
    pub wait_time: String,
    #[serde(rename = "T. SOLUCION")]
    pub solution_time: String,
    #[serde(rename = "T. MUERTO")]
    pub dead_time: String,
    #[serde(rename = "T. MUERTO TI")]
    pub dead_time_it: String,
    #[serde(rename = "ORIGINADOR")]
    pub originator: String,
}

impl LogEntry {
    pub fn from_raw(index: usize, raw: RawRecord) -> Self {
        Self {
            index,
            date: raw.date,
            week: raw.week,
            area: raw.area,
            class: raw.class,
            description: raw.description,
            operator: raw.operator,
            shift: raw.shift,
            wait_time: raw.wait_time,
            solution_time: raw.solution_time,
            dead_time: raw.dead_time,
            dead_time_it: raw.dead_time_it,
            originator: raw.originator,
        }
    }

    /// Canonical date of the entry (`""` when unreadable).
    pub fn canonical_date(&self) -> String {
        crate::utils::date::normalize(&self.date)
    }
}
