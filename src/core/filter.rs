//! Predicate evaluation over a store snapshot.

use crate::core::store::RowStore;
use crate::models::criteria::FilterCriteria;
use crate::models::entry::LogEntry;
use crate::utils::date::normalize;
use crate::utils::number::parse_leading_int;
use std::collections::BTreeSet;

pub struct FilterEngine;

impl FilterEngine {
    /// Entries surviving every active predicate, in store order.
    pub fn apply<'a>(store: &'a RowStore, criteria: &FilterCriteria) -> Vec<&'a LogEntry> {
        let areas = trimmed_set(&criteria.areas);
        let classes = trimmed_set(&criteria.classes);

        store
            .iter()
            .filter(|e| matches_date(e, &criteria.date))
            .filter(|e| matches_week(e, &criteria.weeks))
            .filter(|e| matches_member(&e.area, &areas))
            .filter(|e| matches_member(&e.class, &classes))
            .collect()
    }
}

fn trimmed_set(values: &BTreeSet<String>) -> BTreeSet<&str> {
    values.iter().map(|s| s.trim()).collect()
}

fn matches_date(entry: &LogEntry, date: &str) -> bool {
    date.is_empty() || normalize(&entry.date) == date
}

fn matches_week(entry: &LogEntry, weeks: &BTreeSet<i64>) -> bool {
    if weeks.is_empty() {
        return true;
    }
    parse_leading_int(&entry.week).is_some_and(|w| weeks.contains(&w))
}

fn matches_member(value: &str, set: &BTreeSet<&str>) -> bool {
    set.is_empty() || set.contains(value.trim())
}
