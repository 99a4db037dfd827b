mod common;
use bitacora::core::aggregate::{AggregateLogic, Aggregation, Dimension, DowntimeColumn};
use bitacora::core::report::{ReportLogic, ReportSelection};
use bitacora::core::store::RowStore;
use bitacora::errors::AppError;
use bitacora::models::entry::RawRecord;
use bitacora::source::open_source;
use common::{setup_test_paths, store_of, temp_out, write_sample_csv};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

fn sample_store(name: &str) -> RowStore {
    let (data, _db) = setup_test_paths(name);
    write_sample_csv(&data);
    open_source(Path::new(&data)).load_store().unwrap()
}

#[test]
fn test_top_by_area_sums_and_truncates() {
    let store = sample_store("top_by_area");
    let top = AggregateLogic::top_by(&store, Dimension::Area, &BTreeSet::new(), 2, Aggregation::Sum);
    let labels: Vec<&str> = top.iter().map(|r| r.label.as_str()).collect();
    assert_eq!(labels, vec!["IT", "PROD"]);
    assert_eq!(top[0].value, 75.0);
    assert_eq!(top[1].value, 60.0);
}

#[test]
fn test_top_by_event_max_in_week() {
    let store = sample_store("top_by_event");
    let weeks: BTreeSet<u32> = [28].into_iter().collect();
    let top = AggregateLogic::top_by(&store, Dimension::Event, &weeks, 5, Aggregation::Max);
    assert_eq!(top.len(), 2);
    assert_eq!(top[0].label, "Network down");
    assert_eq!(top[0].value, 60.0);
    assert_eq!(top[1].label, "Badge reader");
}

#[test]
fn test_series_per_week_and_month() {
    let store = sample_store("series_week_month");
    let weeks = AggregateLogic::downtime_per_week(&store, &BTreeSet::new());
    assert_eq!(weeks.len(), 2);
    assert_eq!((weeks[0].week, weeks[0].value), (27, 90.0));
    assert_eq!((weeks[1].week, weeks[1].value), (28, 65.0));

    let freq = AggregateLogic::frequency_per_month(&store, &BTreeSet::new());
    assert_eq!(freq.len(), 1);
    assert_eq!(freq[0].month, "2025-07");
    assert_eq!(freq[0].value, 5.0);

    let it = AggregateLogic::downtime_per_month(&store, &BTreeSet::new(), DowntimeColumn::It);
    assert_eq!(it[0].value, 115.0);
}

#[test]
fn test_period_label() {
    let store = store_of(vec![
        RawRecord {
            week: "27".to_string(),
            ..Default::default()
        },
        RawRecord {
            week: "W28".to_string(),
            ..Default::default()
        },
        RawRecord::default(),
    ]);
    let all: Vec<_> = store.iter().collect();
    assert_eq!(ReportLogic::period_label(&all), "Weeks #27, 28");
    assert_eq!(ReportLogic::period_label(&all[..1]), "Week #27");
    assert_eq!(ReportLogic::period_label(&all[2..]), "Week #N/A");
}

#[test]
fn test_report_selection_by_week_and_month() {
    let store = sample_store("report_selection");
    let sel = ReportSelection {
        weeks: [28].into_iter().collect(),
        ..Default::default()
    };
    assert_eq!(ReportLogic::select(&store, &sel).len(), 2);

    let sel = ReportSelection {
        months: ["2025-08".to_string()].into_iter().collect(),
        ..Default::default()
    };
    assert!(ReportLogic::select(&store, &sel).is_empty());
}

#[test]
fn test_report_without_data() {
    let empty = store_of(Vec::new());
    let err = ReportLogic::build(&empty, &ReportSelection::default(), 3, 83.0).unwrap_err();
    assert!(matches!(err, AppError::NoData(_)));

    let store = sample_store("report_without_data");
    let sel = ReportSelection {
        years: [2019].into_iter().collect(),
        ..Default::default()
    };
    let err = ReportLogic::build(&store, &sel, 3, 83.0).unwrap_err();
    assert!(matches!(err, AppError::NoData(_)));
}

#[test]
fn test_report_pages_and_pdf() {
    let store = sample_store("report_pages_and_pdf");
    let out = temp_out("report_pages_and_pdf", "pdf");

    let report =
        ReportLogic::generate(&store, &ReportSelection::default(), Path::new(&out), 3, 83.0)
            .unwrap();
    assert_eq!(report.period_label, "Weeks #27, 28");
    assert_eq!(report.pages.len(), 4);
    assert!(report.pages[0].title.starts_with("Top 3 Support Analysis"));

    let bytes = fs::read(&out).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}
