//! Four-page PDF support report over a week/year/month selection.

use crate::core::aggregate::{
    AggregateLogic, Aggregation, Dimension, DowntimeColumn, Ranked, linear_trend,
};
use crate::core::store::RowStore;
use crate::errors::{AppError, AppResult};
use crate::export::pdf::{BarChart, Block, PdfManager, Rgb, TableBlock};
use crate::models::entry::LogEntry;
use crate::utils::date::{month_key, month_label, normalize, parse_date};
use crate::utils::formatting::format_minutes;
use crate::utils::number::week_digits;
use chrono::Datelike;
use std::collections::BTreeSet;
use std::path::Path;

const AREA_COLOR: Rgb = Rgb::hex(0x2980B9);
const CLASS_COLOR: Rgb = Rgb::hex(0xD35400);
const EVENT_COLOR: Rgb = Rgb::hex(0x16A085);
const DETAIL_COLOR: Rgb = Rgb::hex(0x34495E);
const CRITICAL_COLOR: Rgb = Rgb::hex(0xC0392B);
const WEEK_COLOR: Rgb = Rgb::hex(0x3498DB);
const MONTH_COLOR: Rgb = Rgb::hex(0x8E44AD);
const FREQ_COLOR: Rgb = Rgb::hex(0x27AE60);

/// Which entries a report covers. Empty sets do not restrict.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportSelection {
    pub weeks: BTreeSet<u32>,
    pub years: BTreeSet<i32>,
    /// `YYYY-MM`
    pub months: BTreeSet<String>,
}

#[derive(Debug, Clone)]
pub struct ReportPage {
    pub title: String,
    pub blocks: Vec<Block>,
}

/// A laid-out report, ready to render.
#[derive(Debug, Clone)]
pub struct Report {
    pub period_label: String,
    pub pages: Vec<ReportPage>,
}

pub struct ReportLogic;

impl ReportLogic {
    /// Entries matching every non-empty part of `sel`.
    ///
    /// Year and month restrictions drop entries without a readable date.
    pub fn select<'a>(store: &'a RowStore, sel: &ReportSelection) -> Vec<&'a LogEntry> {
        store
            .iter()
            .filter(|e| {
                sel.weeks.is_empty()
                    || week_digits(&e.week).is_some_and(|w| sel.weeks.contains(&w))
            })
            .filter(|e| {
                if sel.years.is_empty() && sel.months.is_empty() {
                    return true;
                }
                let Some(date) = parse_date(&normalize(&e.date)) else {
                    return false;
                };
                let year_ok = sel.years.is_empty() || sel.years.contains(&date.year());
                let month_ok = sel.months.is_empty()
                    || month_key(&normalize(&e.date)).is_some_and(|m| sel.months.contains(&m));
                year_ok && month_ok
            })
            .collect()
    }

    /// `"Week #27"`, `"Weeks #27, 28"` or `"Week #N/A"`.
    pub fn period_label(entries: &[&LogEntry]) -> String {
        let weeks: BTreeSet<u32> = entries.iter().filter_map(|e| week_digits(&e.week)).collect();
        let list: Vec<String> = weeks.iter().map(|w| w.to_string()).collect();

        match list.len() {
            0 => "Week #N/A".to_string(),
            1 => format!("Week #{}", list[0]),
            _ => format!("Weeks #{}", list.join(", ")),
        }
    }

    /// Compute every table and series of the report.
    pub fn build(
        store: &RowStore,
        sel: &ReportSelection,
        top_n: usize,
        target: f64,
    ) -> AppResult<Report> {
        if store.is_empty() {
            return Err(AppError::NoData(
                "the incident log has no entries".to_string(),
            ));
        }

        let selected = Self::select(store, sel);
        if selected.is_empty() {
            return Err(AppError::NoData(
                "no entries for the selected filters".to_string(),
            ));
        }

        let period = Self::period_label(&selected);
        let all_weeks = BTreeSet::new();
        let top = |dim: Dimension, entries: &[&LogEntry]| {
            AggregateLogic::top_by(entries.iter().copied(), dim, &all_weeks, top_n, Aggregation::Sum)
        };

        let top_area = top(Dimension::Area, &selected);
        let top_class = top(Dimension::Class, &selected);
        let top_event = top(Dimension::Event, &selected);

        // page 1: rankings
        let analysis = ReportPage {
            title: format!("Top {top_n} Support Analysis {period}"),
            blocks: vec![
                ranked_table(&format!("Top {top_n} by Area"), "Area", &top_area, AREA_COLOR),
                ranked_table(&format!("Top {top_n} by Class"), "Failure type", &top_class, CLASS_COLOR),
                ranked_table(
                    &format!("Top {top_n} by Event"),
                    Dimension::Event.label(),
                    &top_event,
                    EVENT_COLOR,
                ),
            ],
        };

        // page 2: failure types and the worst events of each
        let mut failure_blocks = vec![ranked_table(
            &format!("Top {top_n} Failure Types"),
            "Description",
            &top_class,
            DETAIL_COLOR,
        )];
        for class in &top_class {
            let in_class: Vec<&LogEntry> = selected
                .iter()
                .copied()
                .filter(|e| e.class.trim() == class.label)
                .collect();
            let events = top(Dimension::Event, &in_class);
            failure_blocks.push(ranked_table(
                &format!("Top {top_n} {}", class.label),
                "Description",
                &events,
                DETAIL_COLOR,
            ));
        }
        let failures = ReportPage {
            title: format!("Failure Types {period}"),
            blocks: failure_blocks,
        };

        // page 3: trends
        let no_months = BTreeSet::new();
        let per_week = AggregateLogic::downtime_per_week(selected.iter().copied(), &all_weeks);
        let per_month = AggregateLogic::downtime_per_month(
            selected.iter().copied(),
            &no_months,
            DowntimeColumn::Total,
        );
        let freq = AggregateLogic::frequency_per_month(selected.iter().copied(), &no_months);

        let month_values: Vec<f64> = per_month.iter().map(|m| m.value).collect();
        let trend = ReportPage {
            title: format!("Top {top_n} Support Trend {period}"),
            blocks: vec![
                Block::Bars(BarChart {
                    title: "IT Downtime per Week".to_string(),
                    labels: per_week.iter().map(|w| format!("W{}", w.week)).collect(),
                    values: per_week.iter().map(|w| w.value).collect(),
                    color: WEEK_COLOR,
                    target: Some((target, format!("Target {} min", target.round() as i64))),
                    trend: None,
                }),
                Block::Bars(BarChart {
                    title: "IT Downtime per Month".to_string(),
                    labels: per_month.iter().map(|m| month_label(&m.month)).collect(),
                    trend: Some(linear_trend(&month_values)),
                    values: month_values,
                    color: MONTH_COLOR,
                    target: None,
                }),
                Block::Bars(BarChart {
                    title: "IT Frequency Issues per Month".to_string(),
                    labels: freq.iter().map(|m| month_label(&m.month)).collect(),
                    values: freq.iter().map(|m| m.value).collect(),
                    color: FREQ_COLOR,
                    target: None,
                    trend: None,
                }),
            ],
        };

        // page 4: critical events
        let critical = ReportPage {
            title: format!("Critical Failures to Address {period}"),
            blocks: vec![ranked_table(
                &format!("Top {top_n} {}", Dimension::Event.label()),
                "Description",
                &top_event,
                CRITICAL_COLOR,
            )],
        };

        Ok(Report {
            period_label: period,
            pages: vec![analysis, failures, trend, critical],
        })
    }

    /// Build the report and write it as PDF to `path`.
    pub fn generate(
        store: &RowStore,
        sel: &ReportSelection,
        path: &Path,
        top_n: usize,
        target: f64,
    ) -> AppResult<Report> {
        let report = Self::build(store, sel, top_n, target)?;

        let mut pdf = PdfManager::new();
        for page in &report.pages {
            pdf.write_page(&page.title, &page.blocks);
        }

        pdf.save(path)
            .map_err(|e| AppError::Export(format!("PDF report error: {e}")))?;

        Ok(report)
    }
}

/// Numbered ranking with a bold total row.
fn ranked_table(title: &str, header: &str, ranking: &[Ranked], accent: Rgb) -> Block {
    let mut rows: Vec<Vec<String>> = ranking
        .iter()
        .enumerate()
        .map(|(i, r)| vec![format!("{}. {}", i + 1, r.label), format_minutes(r.value)])
        .collect();

    if !rows.is_empty() {
        let total: f64 = ranking.iter().map(|r| r.value).sum();
        rows.push(vec!["Total".to_string(), format_minutes(total)]);
    }

    Block::Table(TableBlock {
        title: title.to_string(),
        headers: vec![header.to_string(), "Time".to_string()],
        rows,
        weights: vec![0.72, 0.28],
        accent,
        total_row: true,
    })
}
