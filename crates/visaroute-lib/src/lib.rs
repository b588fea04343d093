//! Visa-constrained flight route finder.
//!
//! This crate builds an undirected flight graph from route records and
//! answers "cheapest" or "fewest flights" queries for travellers with or
//! without a visa. Higher-level consumers (the CLI, any UI) should only depend
//! on the functions exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod eligibility;
pub mod error;
pub mod graph;
pub mod output;
pub mod path;
pub mod records;
pub mod routing;
pub mod store;

pub use eligibility::{VisaFilter, VisaPolicy};
pub use error::{Error, ErrorKind, Result};
pub use graph::{build_graph, Edge, ExportedEdge, Graph, GraphExport, Neighbour, NodeIndex};
pub use output::{RouteRenderMode, RouteSummary};
pub use path::{find_cheapest, find_fewest_hops, SearchOutcome};
pub use records::{load_records, read_records, RouteRecord};
pub use routing::{plan_route, Criterion, RouteLeg, RouteMetric, RoutePlan, RouteRequest};
pub use store::{GraphStore, LoadSummary};
