use crate::core::store::RowStore;
use crate::models::meta::Metadata;
use crate::utils::date::{month_key, normalize, parse_date};
use crate::utils::number::week_digits;
use chrono::Datelike;
use std::collections::BTreeSet;

pub struct MetaLogic;

impl MetaLogic {
    /// Distinct, sorted filter values present in a snapshot.
    pub fn from_store(store: &RowStore) -> Metadata {
        let mut weeks = BTreeSet::new();
        let mut months = BTreeSet::new();
        let mut years = BTreeSet::new();
        let mut areas = BTreeSet::new();
        let mut classes = BTreeSet::new();

        for e in store {
            if let Some(w) = week_digits(&e.week) {
                weeks.insert(w);
            }

            let canonical = normalize(&e.date);
            if let Some(d) = parse_date(&canonical) {
                years.insert(d.year());
            }
            if let Some(m) = month_key(&canonical) {
                months.insert(m);
            }

            insert_trimmed(&mut areas, &e.area);
            insert_trimmed(&mut classes, &e.class);
        }

        Metadata {
            weeks: weeks.into_iter().collect(),
            months: months.into_iter().collect(),
            years: years.into_iter().collect(),
            areas: areas.into_iter().collect(),
            classes: classes.into_iter().collect(),
        }
    }
}

fn insert_trimmed(set: &mut BTreeSet<String>, value: &str) {
    let v = value.trim();
    if !v.is_empty() {
        set.insert(v.to_string());
    }
}
