mod common;
use bitacora::core::calculator::downtime::compute_total;
use bitacora::core::filter::FilterEngine;
use bitacora::core::present::{BITACORA_LIMIT, present};
use bitacora::core::store::RowStore;
use bitacora::core::view::{PresentationSink, ViewAssembler, assemble, status_line};
use bitacora::errors::AppResult;
use bitacora::models::criteria::FilterCriteria;
use bitacora::models::entry::LogEntry;
use bitacora::models::view::{PresentMode, ViewStatus};
use bitacora::utils::date::{IsoWeek, iso_week_of, normalize};
use common::{raw, store_of};

#[test]
fn test_normalize_known_forms() {
    assert_eq!(normalize("07/04/2025"), "2025-07-04");
    assert_eq!(normalize("2025-07-04"), "2025-07-04");
    assert_eq!(normalize(" 2025-07-04 "), "2025-07-04");
    assert_eq!(normalize("not a date"), "");
    assert_eq!(normalize(""), "");
    assert_eq!(normalize("2025-07-04T23:30:00-05:00"), "2025-07-05");
}

#[test]
fn test_normalize_is_idempotent() {
    for x in [
        "07/04/2025",
        "2025-07-04",
        "July 4, 2025",
        "2025-07-04T10:00:00Z",
        "13/45/2025",
        "garbage",
        "",
    ] {
        let once = normalize(x);
        assert_eq!(normalize(&once), once, "input {x:?}");
    }
}

#[test]
fn test_iso_week_boundaries() {
    assert_eq!(iso_week_of("2025-01-01"), Some(IsoWeek { week: 1, year: 2025 }));
    assert_eq!(iso_week_of("2024-12-31"), Some(IsoWeek { week: 1, year: 2025 }));
    assert_eq!(iso_week_of("2021-01-03"), Some(IsoWeek { week: 53, year: 2020 }));
    assert_eq!(iso_week_of("2026-12-31"), Some(IsoWeek { week: 53, year: 2026 }));
    assert_eq!(iso_week_of("2025-13-01"), Some(IsoWeek { week: 1, year: 2026 }));
    assert_eq!(iso_week_of("abc"), None);
    assert_eq!(iso_week_of(""), None);
}

#[test]
fn test_iso_week_out_of_range_parts() {
    assert_eq!(iso_week_of("1e300-1e300-01"), None);
    assert_eq!(iso_week_of("2025-01-1e300"), None);
    assert_eq!(iso_week_of("-1e300-01-01"), None);
    assert_eq!(iso_week_of("2025-01--1e300"), None);
}

#[test]
fn test_iso_week_two_digit_years_are_1900s() {
    assert_eq!(iso_week_of("0025-01-01"), Some(IsoWeek { week: 1, year: 1925 }));
    assert_eq!(iso_week_of("99-12-31"), Some(IsoWeek { week: 52, year: 1999 }));
    assert_eq!(iso_week_of("0100-01-04").map(|w| w.year), Some(100));
}

#[test]
fn test_compute_total() {
    assert_eq!(compute_total("", ""), "");
    assert_eq!(compute_total("2.5", "3.25"), "5.75");
    assert_eq!(compute_total("10", ""), "10");
    assert_eq!(compute_total("abc", "4"), "4");
    let t = compute_total("1.005", "");
    assert!(!t.is_empty());
    assert!(t.parse::<f64>().is_ok());
}

#[test]
fn test_empty_criteria_keep_store_order() {
    let store = store_of(vec![
        raw("2025-07-03", "27", "IT", "A"),
        raw("2025-07-01", "27", "HR", "B"),
        raw("", "", "", ""),
    ]);
    let rows = FilterEngine::apply(&store, &FilterCriteria::new());
    let idx: Vec<usize> = rows.iter().map(|e| e.index).collect();
    assert_eq!(idx, vec![0, 1, 2]);
}

#[test]
fn test_windowed_scenario_sixty_entries() {
    let records = (0..60)
        .map(|i| {
            let week = (i % 12) + 1;
            raw(&format!("2025-03-{:02}", (i % 28) + 1), &week.to_string(), "IT", "X")
        })
        .collect();
    let store = store_of(records);

    let view = assemble(&store, &FilterCriteria::new(), BITACORA_LIMIT);
    assert_eq!(view.mode, PresentMode::Windowed);
    assert_eq!(view.rows.len(), 50);

    let mut idx = RowStore::indices_of(&view.rows);
    idx.sort_unstable();
    assert_eq!(idx, (10..60).collect::<Vec<_>>());

    for pair in view.rows.windows(2) {
        let a: i64 = pair[0].week.parse().unwrap();
        let b: i64 = pair[1].week.parse().unwrap();
        assert!(a < b || (a == b && (normalize(&pair[0].date), pair[0].index) < (normalize(&pair[1].date), pair[1].index)));
    }
}

#[test]
fn test_show_all_returns_everything() {
    let records = (0..60).map(|i| raw("2025-03-01", &((i % 5) + 1).to_string(), "IT", "X")).collect();
    let store = store_of(records);
    let criteria = FilterCriteria::new().with_show_all(true);

    let view = assemble(&store, &criteria, BITACORA_LIMIT);
    assert_eq!(view.mode, PresentMode::ShowAll);
    assert_eq!(view.rows.len(), 60);
    assert_eq!(view.rows[0].week, "1");
    assert_eq!(view.rows[59].week, "5");
}

#[test]
fn test_area_filter_scenario() {
    let mut records = Vec::new();
    for d in [5, 3, 9, 1, 7] {
        records.push(raw(&format!("2025-06-{d:02}"), "23", "IT", "Net"));
        records.push(raw(&format!("2025-06-{d:02}"), "23", "HR", "Net"));
    }
    let store = store_of(records);
    let criteria = FilterCriteria::new().with_areas(["IT"]);

    let view = assemble(&store, &criteria, BITACORA_LIMIT);
    assert_eq!(view.mode, PresentMode::Filtered);
    assert_eq!(view.rows.len(), 5);
    assert!(view.rows.iter().all(|e| e.area == "IT"));

    let dates: Vec<String> = view.rows.iter().map(|e| normalize(&e.date)).collect();
    let mut sorted = dates.clone();
    sorted.sort();
    assert_eq!(dates, sorted);
}

#[test]
fn test_filtered_puts_undated_first_by_index() {
    let store = store_of(vec![
        raw("2025-07-02", "27", "IT", "A"),
        raw("", "27", "IT", "A"),
        raw("2025-07-01", "27", "IT", "A"),
        raw("bogus", "27", "IT", "A"),
    ]);
    let criteria = FilterCriteria::new().with_weeks(["27"]);
    let filtered = FilterEngine::apply(&store, &criteria);
    let view = present(filtered, store.len(), &criteria, BITACORA_LIMIT);
    assert_eq!(RowStore::indices_of(&view.rows), vec![1, 3, 2, 0]);
}

#[test]
fn test_week_filter_uses_leading_integer() {
    let store = store_of(vec![
        raw("2025-07-02", "30", "IT", "A"),
        raw("2025-07-02", "30.0", "IT", "A"),
        raw("2025-07-02", "W30", "IT", "A"),
        raw("2025-07-02", "31", "IT", "A"),
    ]);
    let criteria = FilterCriteria::new().with_weeks(["30", "x"]);
    let rows = FilterEngine::apply(&store, &criteria);
    let idx: Vec<usize> = rows.iter().map(|e| e.index).collect();
    assert_eq!(idx, vec![0, 1]);
}

#[test]
fn test_date_filter_matches_canonical_form() {
    let store = store_of(vec![
        raw("07/04/2025", "27", "IT", "A"),
        raw("2025-07-04", "27", "IT", "A"),
        raw("2025-07-05", "27", "IT", "A"),
    ]);
    let criteria = FilterCriteria::new().with_date("2025-07-04");
    assert_eq!(FilterEngine::apply(&store, &criteria).len(), 2);
}

#[test]
fn test_status_lines() {
    let status = |shown, matched, mode| ViewStatus {
        shown,
        matched,
        total: 60,
        mode,
    };
    assert_eq!(
        status_line(&status(0, 0, PresentMode::Filtered)),
        "No results for the selected filters."
    );
    assert_eq!(
        status_line(&status(5, 5, PresentMode::Filtered)),
        "Showing 5 entries matching the filters."
    );
    assert_eq!(
        status_line(&status(60, 60, PresentMode::ShowAll)),
        "Showing all 60 available entries."
    );
    assert_eq!(
        status_line(&status(50, 60, PresentMode::Windowed)),
        "Showing the 50 most recent entries (of 60 total)."
    );
}

struct Collector {
    indices: Vec<usize>,
    calls: usize,
}

impl PresentationSink for Collector {
    fn present(&mut self, rows: &[&LogEntry], _status: &ViewStatus) -> AppResult<()> {
        self.indices = rows.iter().map(|e| e.index).collect();
        self.calls += 1;
        Ok(())
    }
}

#[test]
fn test_assembler_recomputes_after_reload() {
    let mut view = ViewAssembler::new(2);
    let mut sink = Collector {
        indices: Vec::new(),
        calls: 0,
    };

    let status = view.refresh(&FilterCriteria::new(), &mut sink).unwrap();
    assert_eq!(status.shown, 0);
    assert_eq!(status_line(&status), "No results for the selected filters.");

    view.replace(store_of(vec![
        raw("2025-07-01", "27", "IT", "A"),
        raw("2025-07-02", "27", "IT", "A"),
        raw("2025-07-03", "26", "IT", "A"),
    ]));

    let status = view.refresh(&FilterCriteria::new(), &mut sink).unwrap();
    assert_eq!(status.shown, 2);
    assert_eq!(status.matched, 3);
    assert_eq!(sink.indices, vec![2, 1]);
    assert_eq!(sink.calls, 2);
}

fn mixed_week_store() -> RowStore {
    store_of(vec![
        raw("2025-07-01", "W3", "IT", "A"),
        raw("2025-07-01", "2", "IT", "A"),
        raw("2025-07-01", "", "IT", "A"),
        raw("2025-07-01", "1", "IT", "A"),
    ])
}

#[test]
fn test_show_all_puts_unparseable_weeks_last() {
    let store = mixed_week_store();
    let view = assemble(&store, &FilterCriteria::new().with_show_all(true), BITACORA_LIMIT);
    assert_eq!(view.mode, PresentMode::ShowAll);
    assert_eq!(RowStore::indices_of(&view.rows), vec![3, 1, 0, 2]);
}

#[test]
fn test_windowed_puts_unparseable_weeks_last() {
    let store = mixed_week_store();
    let view = assemble(&store, &FilterCriteria::new(), 3);
    assert_eq!(view.mode, PresentMode::Windowed);
    // window is the last three by arrival: 1, 2, 3
    assert_eq!(RowStore::indices_of(&view.rows), vec![3, 1, 2]);
}

#[test]
fn test_windowed_small_store_shows_everything() {
    let store = mixed_week_store();
    let view = assemble(&store, &FilterCriteria::new(), BITACORA_LIMIT);
    assert_eq!(view.mode, PresentMode::Windowed);
    assert_eq!(view.rows.len(), store.len().min(BITACORA_LIMIT));
    assert_eq!(view.matched, 4);
    assert_eq!(RowStore::indices_of(&view.rows), vec![3, 1, 0, 2]);
    assert_eq!(
        status_line(&view.status()),
        "Showing the 4 most recent entries (of 4 total)."
    );
}
