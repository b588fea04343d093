//! Common test utilities and fixture helpers.

use std::path::PathBuf;

use visaroute_lib::{build_graph, load_records, Graph, RouteRecord};

/// Path to the fixtures directory shared by library and CLI tests.
#[allow(dead_code)]
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// Path to the Caribbean route table fixture.
#[allow(dead_code)]
pub fn fixture_routes_path() -> PathBuf {
    fixtures_dir().join("routes.csv")
}

/// Graph built from the checked-in route table.
#[allow(dead_code)]
pub fn fixture_graph() -> Graph {
    let records = load_records(&fixture_routes_path()).expect("load fixture routes.csv");
    build_graph(&records).expect("fixture builds")
}

/// A–B (100, visa-free), B–C (50, visa), A–C (200, visa-free).
#[allow(dead_code)]
pub fn triangle_records() -> Vec<RouteRecord> {
    vec![
        RouteRecord::new("A", "B", 100.0, false),
        RouteRecord::new("B", "C", 50.0, true),
        RouteRecord::new("A", "C", 200.0, false),
    ]
}

#[allow(dead_code)]
pub fn triangle_graph() -> Graph {
    build_graph(&triangle_records()).expect("triangle builds")
}
