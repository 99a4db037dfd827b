use serde::Deserialize;

/// Form input for a new incident, as typed by the user.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewEntry {
    pub date: String,
    pub shift: String,
    pub area: String,
    pub class: String,
    pub description: String,
    pub operator: String,
    pub originator: String,
    pub wait_time: String,
    pub solution_time: String,
    pub dead_time_it: String,
}
