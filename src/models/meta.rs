use serde::Serialize;

/// Distinct values available to the filter selection surfaces.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Metadata {
    pub weeks: Vec<u32>,
    /// `YYYY-MM`
    pub months: Vec<String>,
    pub years: Vec<i32>,
    pub areas: Vec<String>,
    pub classes: Vec<String>,
}
