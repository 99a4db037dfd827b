mod common;
use common::{rti, setup_test_paths, temp_out, write_sample_csv};
use predicates::prelude::*;
use predicates::str::contains;
use std::fs;

#[test]
fn test_init_creates_data_file() {
    let (data, db) = setup_test_paths("init_creates_data_file");

    rti()
        .args(["--test", "--data", &data, "--db", &db, "init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    let content = fs::read_to_string(&data).unwrap();
    assert!(content.starts_with("FECHA,SHIFT,PROBLEM DESCRIPTION/SOLUTION"));
    assert!(fs::metadata(&db).is_ok());
}

#[test]
fn test_list_shows_recent_window() {
    let (data, db) = setup_test_paths("list_shows_recent_window");
    write_sample_csv(&data);

    rti()
        .args(["--data", &data, "--db", &db, "list"])
        .assert()
        .success()
        .stdout(contains("Network down"))
        .stdout(contains("Showing the 5 most recent entries (of 5 total)."));
}

#[test]
fn test_list_filters_by_area_and_week() {
    let (data, db) = setup_test_paths("list_filters_by_area_and_week");
    write_sample_csv(&data);

    rti()
        .args(["--data", &data, "--db", &db, "list", "--area", "HR", "--week", "28"])
        .assert()
        .success()
        .stdout(contains("Badge reader"))
        .stdout(contains("Payroll error").not())
        .stdout(contains("Showing 1 entries matching the filters."));

    rti()
        .args(["--data", &data, "--db", &db, "list", "--area", "NOPE"])
        .assert()
        .success()
        .stdout(contains("No results for the selected filters."));
}

#[test]
fn test_list_limit_must_be_positive() {
    let (data, db) = setup_test_paths("list_limit_must_be_positive");
    write_sample_csv(&data);

    rti()
        .args(["--data", &data, "--db", &db, "list", "--limit", "0"])
        .assert()
        .failure();

    rti()
        .args(["--data", &data, "--db", &db, "list", "--limit", "2"])
        .assert()
        .success()
        .stdout(contains("Showing the 2 most recent entries (of 5 total)."));
}

#[test]
fn test_list_rejects_unreadable_date() {
    let (data, db) = setup_test_paths("list_rejects_unreadable_date");
    write_sample_csv(&data);

    rti()
        .args(["--data", &data, "--db", &db, "list", "--date", "someday"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn test_week_command() {
    rti()
        .args(["week", "2024-12-31"])
        .assert()
        .success()
        .stdout(contains("1 (2025)"));

    rti().args(["week", "abc"]).assert().failure();
}

#[test]
fn test_total_command() {
    rti()
        .args(["total", "2.5", "3.25"])
        .assert()
        .success()
        .stdout(contains("5.75"));

    rti().args(["total", "x", "y"]).assert().failure();
}

#[test]
fn test_add_then_list() {
    let (data, db) = setup_test_paths("add_then_list");
    write_sample_csv(&data);

    rti()
        .args([
            "--data",
            &data,
            "--db",
            &db,
            "add",
            "--date",
            "2025-07-10",
            "--area",
            "IT",
            "--class",
            "Software",
            "--description",
            "ERP timeout",
            "--wait",
            "4",
            "--solve",
            "6",
        ])
        .assert()
        .success()
        .stdout(contains("Entry #5 added"));

    rti()
        .args(["--data", &data, "--db", &db, "list", "--date", "07/10/2025"])
        .assert()
        .success()
        .stdout(contains("ERP timeout"))
        .stdout(contains("Showing 1 entries matching the filters."));

    rti()
        .args(["--data", &data, "--db", &db, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("add"));
}

#[test]
fn test_add_missing_fields_fails() {
    let (data, db) = setup_test_paths("add_missing_fields_fails");
    write_sample_csv(&data);

    rti()
        .args(["--data", &data, "--db", &db, "add", "--date", "2025-07-10"])
        .assert()
        .failure()
        .stderr(contains("Missing required fields"));
}

#[test]
fn test_del_with_yes() {
    let (data, db) = setup_test_paths("del_with_yes");
    write_sample_csv(&data);

    rti()
        .args(["--data", &data, "--db", &db, "del", "0,2", "--yes"])
        .assert()
        .success()
        .stdout(contains("2 entries deleted."));

    let content = fs::read_to_string(&data).unwrap();
    assert!(!content.contains("Printer jam"));
    assert!(!content.contains("Payroll error"));
    assert!(content.contains("Badge reader"));

    rti()
        .args(["--data", &data, "--db", &db, "del", "1,9,4", "--yes"])
        .assert()
        .failure()
        .stderr(contains("Invalid indices: [4, 9]"));
    assert_eq!(fs::read_to_string(&data).unwrap(), content);
}

#[test]
fn test_meta_json() {
    let (data, db) = setup_test_paths("meta_json");
    write_sample_csv(&data);

    let output = rti()
        .args(["--data", &data, "--db", &db, "meta", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let meta: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(meta["weeks"], serde_json::json!([27, 28]));
    assert_eq!(meta["areas"], serde_json::json!(["HR", "IT", "PROD"]));
}

#[test]
fn test_top_by_class() {
    let (data, db) = setup_test_paths("top_by_class");
    write_sample_csv(&data);

    rti()
        .args(["--data", &data, "--db", &db, "top", "--by", "class", "-n", "1"])
        .assert()
        .success()
        .stdout(contains("Network"))
        .stdout(contains("Software").not());
}

#[test]
fn test_export_csv_and_json() {
    let (data, db) = setup_test_paths("export_csv_and_json");
    write_sample_csv(&data);

    let csv_out = temp_out("export_csv_and_json", "csv");
    rti()
        .args([
            "--data", &data, "--db", &db, "export", "--file", &csv_out, "--area", "IT", "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&csv_out).unwrap();
    assert!(content.starts_with("index,FECHA,WEEK#"));
    assert_eq!(content.lines().count(), 3);

    let json_out = temp_out("export_csv_and_json", "json");
    rti()
        .args(["--data", &data, "--db", &db, "export", "--file", &json_out, "--force"])
        .assert()
        .success();

    let rows: serde_json::Value = serde_json::from_str(&fs::read_to_string(&json_out).unwrap()).unwrap();
    assert_eq!(rows.as_array().map(Vec::len), Some(5));
}

#[test]
fn test_export_rejects_relative_path() {
    let (data, db) = setup_test_paths("export_rejects_relative_path");
    write_sample_csv(&data);

    rti()
        .args(["--data", &data, "--db", &db, "export", "--file", "out.csv"])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_export_xlsx_and_pdf() {
    let (data, db) = setup_test_paths("export_xlsx_and_pdf");
    write_sample_csv(&data);

    for ext in ["xlsx", "pdf"] {
        let out = temp_out("export_xlsx_and_pdf", ext);
        rti()
            .args(["--data", &data, "--db", &db, "export", "--file", &out, "--force"])
            .assert()
            .success();
        assert!(fs::metadata(&out).map(|m| m.len() > 0).unwrap_or(false));
    }
}

#[test]
fn test_report_pdf() {
    let (data, db) = setup_test_paths("report_pdf");
    write_sample_csv(&data);
    let out = temp_out("report_pdf", "pdf");

    rti()
        .args([
            "--data", &data, "--db", &db, "report", "--file", &out, "--week", "27", "--force",
        ])
        .assert()
        .success()
        .stdout(contains("Report for Week #27"));

    let bytes = fs::read(&out).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn test_backup_compressed_zip() {
    let (data, db) = setup_test_paths("backup_compressed_zip");
    write_sample_csv(&data);

    let dest = temp_out("backup_compressed_zip", "csv");
    let zip = temp_out("backup_compressed_zip", "zip");

    rti()
        .args(["--data", &data, "--db", &db, "backup", "--file", &dest, "--compress", "zip"])
        .assert()
        .success()
        .stdout(contains("Compressed"));

    assert!(fs::metadata(&zip).is_ok());
    assert!(fs::metadata(&dest).is_err());
}
