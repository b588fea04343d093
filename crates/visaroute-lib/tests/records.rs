mod common;

use std::fs;

use tempfile::TempDir;
use visaroute_lib::{load_records, read_records, Error, ErrorKind, RouteRecord};

use common::fixture_routes_path;

#[test]
fn fixture_table_loads() {
    let records = load_records(&fixture_routes_path()).expect("fixture loads");
    assert_eq!(records.len(), 19);
    assert_eq!(records[0], RouteRecord::new("CCS", "AUA", 40.0, false));
}

#[test]
fn columns_may_appear_in_any_order() {
    let table = "Requiere_Visa,Precio,Destino,Origen\n1,80,BON,CUR\n";
    let records = read_records(table.as_bytes()).expect("parses");
    assert_eq!(records, vec![RouteRecord::new("CUR", "BON", 80.0, true)]);
}

#[test]
fn fields_are_trimmed() {
    let table = "Origen,Destino,Precio,Requiere_Visa\n CCS , AUA , 40 , 0 \n";
    let records = read_records(table.as_bytes()).expect("parses");
    assert_eq!(records, vec![RouteRecord::new("CCS", "AUA", 40.0, false)]);
}

#[test]
fn missing_column_names_what_is_available() {
    let table = "Origen,Destino,Precio\nA,B,10\n";
    let err = read_records(table.as_bytes()).expect_err("no visa column");
    assert_eq!(err.kind(), ErrorKind::MalformedRecord);
    let message = err.to_string();
    assert!(message.contains("missing required columns: visa"));
    assert!(message.contains("Available: Origen, Destino, Precio"));
}

#[test]
fn negative_cost_is_rejected_with_row() {
    let table = "Origen,Destino,Precio,Requiere_Visa\nA,B,10,0\nB,C,-1,0\n";
    let err = read_records(table.as_bytes()).expect_err("negative");
    assert!(matches!(err, Error::MalformedRecord { row: Some(3), .. }));
}

#[test]
fn missing_file_is_reported() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("nope.csv");
    let err = load_records(&path).expect_err("missing");
    assert!(matches!(err, Error::DatasetNotFound { .. }));
    assert_eq!(err.kind(), ErrorKind::Io);
}

#[test]
fn file_on_disk_round_trips_through_loader() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("routes.csv");
    fs::write(&path, "Origen,Destino,Precio,Requiere_Visa\nX,Y,7,1\n").expect("write");

    let records = load_records(&path).expect("loads");
    assert_eq!(records, vec![RouteRecord::new("X", "Y", 7.0, true)]);
}
