mod common;
use bitacora::core::add::AddLogic;
use bitacora::core::del::DeleteLogic;
use bitacora::core::meta::MetaLogic;
use bitacora::errors::AppError;
use bitacora::models::new_entry::NewEntry;
use bitacora::source::open_source;
use common::{setup_test_paths, write_sample_csv};
use std::fs;
use std::path::Path;

fn incident(date: &str, area: &str) -> NewEntry {
    NewEntry {
        date: date.to_string(),
        shift: "A".to_string(),
        area: area.to_string(),
        class: "Network".to_string(),
        description: "Switch reboot".to_string(),
        operator: "Ana".to_string(),
        originator: "Luis".to_string(),
        wait_time: "2,5".to_string(),
        solution_time: "3.25".to_string(),
        dead_time_it: String::new(),
    }
}

#[test]
fn test_csv_source_loads_sample() {
    let (data, _db) = setup_test_paths("csv_source_loads_sample");
    write_sample_csv(&data);

    let store = open_source(Path::new(&data)).load_store().unwrap();
    assert_eq!(store.len(), 5);
    assert_eq!(store.entries()[0].index, 0);
    assert_eq!(store.entries()[0].area, "IT");
    assert_eq!(store.entries()[3].dead_time_it, "45");
    assert_eq!(store.entries()[4].index, 4);
}

#[test]
fn test_csv_source_reads_latin1() {
    let (data, _db) = setup_test_paths("csv_source_reads_latin1");
    let mut bytes = b"FECHA,AREA,CLASS,WEEK#\n07/01/2025,Producci".to_vec();
    bytes.push(0xF3); // latin-1 'ó'
    bytes.extend_from_slice(b"n,Hardware,27\n");
    fs::write(&data, bytes).unwrap();

    let store = open_source(Path::new(&data)).load_store().unwrap();
    assert_eq!(store.len(), 1);
    assert_eq!(store.entries()[0].area, "Producción");
}

#[test]
fn test_json_source_loads_rows() {
    let mut path = std::env::temp_dir();
    path.push("json_source_loads_rows_bitacora.json");
    let body = r#"{
        "columns": ["FECHA", "WEEK#", "AREA", "T. MUERTO"],
        "rows": [
            {"FECHA": "2025-07-01", "WEEK#": 27, "AREA": "IT", "T. MUERTO": 15.5},
            {"FECHA": "2025-07-08", "WEEK#": "28", "AREA": null}
        ]
    }"#;
    fs::write(&path, body).unwrap();

    let source = open_source(&path);
    assert!(!source.is_writable());
    let store = source.load_store().unwrap();
    assert_eq!(store.len(), 2);
    assert_eq!(store.entries()[0].week, "27");
    assert_eq!(store.entries()[0].dead_time, "15.5");
    assert_eq!(store.entries()[1].area, "");
}

#[test]
fn test_missing_data_file_is_reported() {
    let (data, _db) = setup_test_paths("missing_data_file_is_reported");
    let err = open_source(Path::new(&data)).load_store().unwrap_err();
    assert!(matches!(err, AppError::DataFileNotFound(_)));
}

#[test]
fn test_add_appends_with_computed_fields() {
    let (data, _db) = setup_test_paths("add_appends_with_computed_fields");
    write_sample_csv(&data);

    let added = AddLogic::apply(Path::new(&data), &incident("2025-07-04", "IT")).unwrap();
    assert_eq!(added.index, 5);
    assert_eq!(added.date, "07/04/2025");
    assert_eq!(added.week, "27");
    assert_eq!(added.dead_time, "5.75");

    let store = open_source(Path::new(&data)).load_store().unwrap();
    assert_eq!(store.len(), 6);
    assert_eq!(store.entries()[5], added);
}

#[test]
fn test_add_creates_missing_file() {
    let (data, _db) = setup_test_paths("add_creates_missing_file");
    AddLogic::apply(Path::new(&data), &incident("2025-01-01", "HR")).unwrap();

    let content = fs::read_to_string(&data).unwrap();
    assert!(content.starts_with("FECHA,SHIFT,"));
    let store = open_source(Path::new(&data)).load_store().unwrap();
    assert_eq!(store.len(), 1);
    assert_eq!(store.entries()[0].week, "1");
}

#[test]
fn test_add_rejects_incomplete_input() {
    let (data, _db) = setup_test_paths("add_rejects_incomplete_input");
    write_sample_csv(&data);
    let before = fs::read_to_string(&data).unwrap();

    let mut input = incident("2025-07-04", "IT");
    input.area.clear();
    let err = AddLogic::apply(Path::new(&data), &input).unwrap_err();
    assert!(matches!(err, AppError::MissingFields(ref f) if f == &vec!["area".to_string()]));
    assert_eq!(fs::read_to_string(&data).unwrap(), before);
}

#[test]
fn test_delete_removes_rows() {
    let (data, _db) = setup_test_paths("delete_removes_rows");
    write_sample_csv(&data);

    let removed = DeleteLogic::apply(Path::new(&data), &[1, 3, 1]).unwrap();
    assert_eq!(removed, 2);

    let store = open_source(Path::new(&data)).load_store().unwrap();
    let descriptions: Vec<&str> = store.iter().map(|e| e.description.as_str()).collect();
    assert_eq!(descriptions, vec!["Printer jam", "Payroll error", "Badge reader"]);
    assert_eq!(store.entries()[2].index, 2);
}

#[test]
fn test_delete_out_of_range_leaves_file_untouched() {
    let (data, _db) = setup_test_paths("delete_out_of_range");
    write_sample_csv(&data);
    let before = fs::read_to_string(&data).unwrap();

    let err = DeleteLogic::apply(Path::new(&data), &[0, 7]).unwrap_err();
    assert!(matches!(err, AppError::InvalidIndices(ref v) if v == &vec![7]));

    let err = DeleteLogic::apply(Path::new(&data), &[]).unwrap_err();
    assert!(matches!(err, AppError::NoIndices));

    assert_eq!(fs::read_to_string(&data).unwrap(), before);
}

#[test]
fn test_metadata_from_sample() {
    let (data, _db) = setup_test_paths("metadata_from_sample");
    write_sample_csv(&data);
    let mut content = fs::read_to_string(&data).unwrap();
    content.push_str("2025-08-15,A,Scanner,Ana,Hardware, IT ,W30,1,1,2,,Luis\n");
    fs::write(&data, content).unwrap();

    let store = open_source(Path::new(&data)).load_store().unwrap();
    let meta = MetaLogic::from_store(&store);
    assert_eq!(meta.weeks, vec![27, 28, 30]);
    assert_eq!(meta.months, vec!["2025-07".to_string(), "2025-08".to_string()]);
    assert_eq!(meta.years, vec![2025]);
    assert_eq!(meta.areas, vec!["HR", "IT", "PROD"]);
    assert_eq!(meta.classes, vec!["Hardware", "Network", "Software"]);
}
