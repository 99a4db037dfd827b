#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use bitacora::core::store::RowStore;
use bitacora::models::entry::RawRecord;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rti() -> Command {
    cargo_bin_cmd!("bitacora")
}

/// Unique data file and log database paths inside the system temp dir,
/// with any previous file removed.
pub fn setup_test_paths(name: &str) -> (String, String) {
    let mut data: PathBuf = env::temp_dir();
    data.push(format!("{}_bitacora.csv", name));
    let mut db: PathBuf = env::temp_dir();
    db.push(format!("{}_bitacora.sqlite", name));

    let data = data.to_string_lossy().to_string();
    let db = db.to_string_lossy().to_string();
    fs::remove_file(&data).ok();
    fs::remove_file(&db).ok();
    (data, db)
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub const HEADER: &str = "FECHA,SHIFT,PROBLEM DESCRIPTION/SOLUTION,NOMBRE OPERADOR / USUARIOS,CLASS,AREA,WEEK#,T. ESPERA,T. SOLUCION,T. MUERTO,T. MUERTO TI,ORIGINADOR";

/// Small incident log: weeks 27/28 of 2025, areas IT/HR/PROD.
pub fn write_sample_csv(path: &str) {
    let rows = [
        "07/01/2025,A,Printer jam,Ana,Hardware,IT,27,5,10,15,10,Luis",
        "07/02/2025,B,Network down,Beto,Network,IT,27,20,40,60,60,Marta",
        "07/03/2025,A,Payroll error,Carla,Software,HR,27,10,5,15,,Pedro",
        "07/08/2025,C,Network down,Dani,Network,PROD,28,30,30,60,45,Luis",
        "07/09/2025,A,Badge reader,Eva,Hardware,HR,28,2,3,5,,Marta",
    ];
    let mut content = String::from(HEADER);
    content.push('\n');
    for r in rows {
        content.push_str(r);
        content.push('\n');
    }
    fs::write(path, content).expect("write sample csv");
}

/// Raw record with the fields the view model looks at.
pub fn raw(date: &str, week: &str, area: &str, class: &str) -> RawRecord {
    RawRecord {
        date: date.to_string(),
        week: week.to_string(),
        area: area.to_string(),
        class: class.to_string(),
        ..Default::default()
    }
}

pub fn store_of(records: Vec<RawRecord>) -> RowStore {
    RowStore::load(records)
}
