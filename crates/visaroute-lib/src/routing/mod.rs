//! Route query facade.
//!
//! This module provides:
//! - [`Criterion`] - Optimisation objective (cheapest or fewest flights)
//! - [`RouteRequest`] - One traveller's query
//! - [`RoutePlan`] - Successful answer with path, metric and per-leg details
//! - [`plan_route`] - Validate, dispatch and normalise a query
//!
//! # Example
//!
//! ```
//! use visaroute_lib::{build_graph, plan_route, Criterion, RouteRecord, RouteRequest, VisaPolicy};
//!
//! let graph = build_graph(&[
//!     RouteRecord::new("A", "B", 100.0, false),
//!     RouteRecord::new("B", "C", 50.0, true),
//!     RouteRecord::new("A", "C", 200.0, false),
//! ])?;
//! let request = RouteRequest::new("A", "C", true, Criterion::Cost);
//! let plan = plan_route(&graph, &request, VisaPolicy::EdgeGated)?;
//! assert_eq!(plan.path, vec!["A", "B", "C"]);
//! # Ok::<(), visaroute_lib::Error>(())
//! ```

mod planner;

pub use planner::{select_planner, CheapestPlanner, FewestHopsPlanner, RoutePlanner};

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::eligibility::VisaPolicy;
use crate::error::{Error, Result};
use crate::graph::Graph;

/// Optimisation objective for a route query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    /// Minimise the summed flight price.
    #[default]
    Cost,
    /// Minimise the number of flights.
    Hops,
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            Criterion::Cost => "cost",
            Criterion::Hops => "hops",
        };
        f.write_str(value)
    }
}

/// High-level route query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRequest {
    pub origin: String,
    pub destination: String,
    pub has_visa: bool,
    pub criterion: Criterion,
}

impl RouteRequest {
    pub fn new(
        origin: impl Into<String>,
        destination: impl Into<String>,
        has_visa: bool,
        criterion: Criterion,
    ) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            has_visa,
            criterion,
        }
    }
}

/// Optimised quantity reported with a plan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum RouteMetric {
    Cost(f64),
    Hops(usize),
}

/// One flight within a planned route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteLeg {
    pub from: String,
    pub to: String,
    pub cost: f64,
    pub requires_visa: bool,
}

/// Planned route returned by the library.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutePlan {
    pub criterion: Criterion,
    pub path: Vec<String>,
    pub metric: RouteMetric,
    pub legs: Vec<RouteLeg>,
}

impl RoutePlan {
    /// Number of flights in the route.
    pub fn hop_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Summed price of every leg, whatever the criterion.
    pub fn total_cost(&self) -> f64 {
        self.legs.iter().map(|leg| leg.cost).sum()
    }

    /// Whether any leg needs a visa.
    pub fn requires_visa(&self) -> bool {
        self.legs.iter().any(|leg| leg.requires_visa)
    }
}

/// Answer a route query against a loaded graph.
///
/// Identifiers are trimmed; blank identifiers are rejected with
/// [`Error::InvalidRequest`]. A query whose origin equals its destination is
/// answered with a single-airport route without searching.
pub fn plan_route(graph: &Graph, request: &RouteRequest, policy: VisaPolicy) -> Result<RoutePlan> {
    let origin = request.origin.trim();
    let destination = request.destination.trim();

    if origin.is_empty() {
        return Err(Error::InvalidRequest {
            message: "origin must not be empty".to_string(),
        });
    }
    if destination.is_empty() {
        return Err(Error::InvalidRequest {
            message: "destination must not be empty".to_string(),
        });
    }

    debug!(
        origin,
        destination,
        criterion = %request.criterion,
        policy = %policy,
        has_visa = request.has_visa,
        "planning route"
    );

    if origin == destination {
        let metric = match request.criterion {
            Criterion::Cost => RouteMetric::Cost(0.0),
            Criterion::Hops => RouteMetric::Hops(0),
        };
        return Ok(RoutePlan {
            criterion: request.criterion,
            path: vec![origin.to_string()],
            metric,
            legs: Vec::new(),
        });
    }

    let planner = select_planner(request.criterion);
    let (path, metric) =
        planner.find_path(graph, origin, destination, request.has_visa, policy)?;
    let legs = build_legs(graph, &path);

    Ok(RoutePlan {
        criterion: planner.criterion(),
        path,
        metric,
        legs,
    })
}

fn build_legs(graph: &Graph, path: &[String]) -> Vec<RouteLeg> {
    path.windows(2)
        .filter_map(|pair| {
            let a = graph.node_index(&pair[0])?;
            let b = graph.node_index(&pair[1])?;
            let edge = graph.edge_between(a, b)?;
            Some(RouteLeg {
                from: pair[0].clone(),
                to: pair[1].clone(),
                cost: edge.cost,
                requires_visa: edge.requires_visa,
            })
        })
        .collect()
}
