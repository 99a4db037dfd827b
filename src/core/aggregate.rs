//! Downtime analytics: top-N rankings and week/month series.
//!
//! Every function takes any iterator of entries, so callers can pass a whole
//! `&RowStore` or an already selected subset.

use crate::models::entry::LogEntry;
use crate::utils::date::{month_key, normalize};
use crate::utils::number::{parse_decimal, week_digits};
use clap::ValueEnum;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Grouping dimension for rankings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Area,
    Class,
    Event,
}

impl Dimension {
    pub fn label(&self) -> &'static str {
        match self {
            Dimension::Area => "Area",
            Dimension::Class => "Class",
            Dimension::Event => "Event / Problem",
        }
    }

    fn key<'a>(&self, e: &'a LogEntry) -> &'a str {
        match self {
            Dimension::Area => e.area.trim(),
            Dimension::Class => e.class.trim(),
            Dimension::Event => e.description.trim(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Aggregation {
    #[default]
    Sum,
    Max,
}

/// Which downtime column a monthly series adds up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DowntimeColumn {
    /// `T. MUERTO`
    Total,
    /// `T. MUERTO TI`
    It,
}

impl DowntimeColumn {
    fn value(&self, e: &LogEntry) -> Option<f64> {
        match self {
            DowntimeColumn::Total => parse_decimal(&e.dead_time),
            DowntimeColumn::It => parse_decimal(&e.dead_time_it),
        }
    }
}

/// One line of a ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ranked {
    pub label: String,
    pub value: f64,
}

/// Week-keyed series point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekValue {
    pub week: u32,
    pub value: f64,
}

/// Month-keyed series point (`YYYY-MM`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthValue {
    pub month: String,
    pub value: f64,
}

pub struct AggregateLogic;

impl AggregateLogic {
    /// Top `n` groups of `dimension` by downtime.
    ///
    /// Groups without a single numeric downtime are dropped; ties are broken
    /// by label so the ranking is stable.
    pub fn top_by<'a, I>(
        entries: I,
        dimension: Dimension,
        weeks: &BTreeSet<u32>,
        n: usize,
        agg: Aggregation,
    ) -> Vec<Ranked>
    where
        I: IntoIterator<Item = &'a LogEntry>,
    {
        let mut groups: BTreeMap<&str, f64> = BTreeMap::new();

        for e in entries.into_iter().filter(|e| in_weeks(e, weeks)) {
            let key = dimension.key(e);
            if key.is_empty() {
                continue;
            }
            let Some(v) = parse_decimal(&e.dead_time) else {
                continue;
            };
            groups
                .entry(key)
                .and_modify(|acc| match agg {
                    Aggregation::Sum => *acc += v,
                    Aggregation::Max => *acc = acc.max(v),
                })
                .or_insert(v);
        }

        let mut ranked: Vec<Ranked> = groups
            .into_iter()
            .map(|(label, value)| Ranked {
                label: label.to_string(),
                value,
            })
            .collect();

        ranked.sort_by(|a, b| b.value.total_cmp(&a.value).then_with(|| a.label.cmp(&b.label)));
        ranked.truncate(n);
        ranked
    }

    /// Total downtime per week, ascending week.
    pub fn downtime_per_week<'a, I>(entries: I, weeks: &BTreeSet<u32>) -> Vec<WeekValue>
    where
        I: IntoIterator<Item = &'a LogEntry>,
    {
        let mut series: BTreeMap<u32, f64> = BTreeMap::new();

        for e in entries {
            let Some(w) = week_digits(&e.week) else {
                continue;
            };
            if !weeks.is_empty() && !weeks.contains(&w) {
                continue;
            }
            if let Some(v) = parse_decimal(&e.dead_time) {
                *series.entry(w).or_insert(0.0) += v;
            }
        }

        series
            .into_iter()
            .map(|(week, value)| WeekValue { week, value })
            .collect()
    }

    /// Number of incidents per month, ascending month.
    pub fn frequency_per_month<'a, I>(entries: I, months: &BTreeSet<String>) -> Vec<MonthValue>
    where
        I: IntoIterator<Item = &'a LogEntry>,
    {
        let mut series: BTreeMap<String, f64> = BTreeMap::new();

        for (month, _) in dated(entries, months) {
            *series.entry(month).or_insert(0.0) += 1.0;
        }

        into_month_series(series)
    }

    /// Downtime per month from `column`, ascending month.
    pub fn downtime_per_month<'a, I>(
        entries: I,
        months: &BTreeSet<String>,
        column: DowntimeColumn,
    ) -> Vec<MonthValue>
    where
        I: IntoIterator<Item = &'a LogEntry>,
    {
        let mut series: BTreeMap<String, f64> = BTreeMap::new();

        for (month, e) in dated(entries, months) {
            if let Some(v) = column.value(e) {
                *series.entry(month).or_insert(0.0) += v;
            }
        }

        into_month_series(series)
    }
}

/// Least-squares line through `values` sampled at 0, 1, 2, ...
///
/// Fewer than two points are returned unchanged.
pub fn linear_trend(values: &[f64]) -> Vec<f64> {
    let n = values.len();
    if n < 2 {
        return values.to_vec();
    }

    let nf = n as f64;
    let mean_x = (nf - 1.0) / 2.0;
    let mean_y = values.iter().sum::<f64>() / nf;

    let (mut sxy, mut sxx) = (0.0, 0.0);
    for (i, y) in values.iter().enumerate() {
        let dx = i as f64 - mean_x;
        sxy += dx * (y - mean_y);
        sxx += dx * dx;
    }

    let slope = sxy / sxx;
    let intercept = mean_y - slope * mean_x;
    (0..n).map(|i| slope * i as f64 + intercept).collect()
}

fn in_weeks(e: &LogEntry, weeks: &BTreeSet<u32>) -> bool {
    weeks.is_empty() || week_digits(&e.week).is_some_and(|w| weeks.contains(&w))
}

/// Entries with a readable date, keyed by `YYYY-MM`, restricted to `months`.
fn dated<'a, I>(entries: I, months: &BTreeSet<String>) -> Vec<(String, &'a LogEntry)>
where
    I: IntoIterator<Item = &'a LogEntry>,
{
    entries
        .into_iter()
        .filter_map(|e| {
            let month = month_key(&normalize(&e.date))?;
            if months.is_empty() || months.contains(&month) {
                Some((month, e))
            } else {
                None
            }
        })
        .collect()
}

fn into_month_series(series: BTreeMap<String, f64>) -> Vec<MonthValue> {
    series
        .into_iter()
        .map(|(month, value)| MonthValue { month, value })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trend_of_a_line_is_the_line() {
        let t = linear_trend(&[1.0, 2.0, 3.0]);
        for (got, want) in t.iter().zip([1.0, 2.0, 3.0]) {
            assert!((got - want).abs() < 1e-9);
        }
    }

    #[test]
    fn trend_of_one_point_is_unchanged() {
        assert_eq!(linear_trend(&[7.0]), vec![7.0]);
        assert!(linear_trend(&[]).is_empty());
    }
}
