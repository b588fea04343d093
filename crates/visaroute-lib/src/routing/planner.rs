//! Route planning strategies, one per [`Criterion`].
//!
//! `plan_route` never inspects the criterion beyond [`select_planner`]; each
//! planner wraps one search from [`crate::path`] and reports its metric in the
//! shape the facade exposes.

use crate::eligibility::VisaPolicy;
use crate::error::Result;
use crate::graph::Graph;
use crate::path::{find_cheapest, find_fewest_hops};

use super::{Criterion, RouteMetric};

/// Trait for route planning strategies.
pub trait RoutePlanner: Send + Sync {
    /// The criterion this planner optimises.
    fn criterion(&self) -> Criterion;

    /// Search the graph, returning the airport sequence and its metric.
    fn find_path(
        &self,
        graph: &Graph,
        origin: &str,
        destination: &str,
        has_visa: bool,
        policy: VisaPolicy,
    ) -> Result<(Vec<String>, RouteMetric)>;
}

/// Dijkstra-based planner minimising the summed flight price.
#[derive(Debug, Clone, Default)]
pub struct CheapestPlanner;

impl RoutePlanner for CheapestPlanner {
    fn criterion(&self) -> Criterion {
        Criterion::Cost
    }

    fn find_path(
        &self,
        graph: &Graph,
        origin: &str,
        destination: &str,
        has_visa: bool,
        policy: VisaPolicy,
    ) -> Result<(Vec<String>, RouteMetric)> {
        let outcome = find_cheapest(graph, origin, destination, has_visa, policy)?;
        Ok((outcome.path, RouteMetric::Cost(outcome.metric)))
    }
}

/// Breadth-first planner minimising the number of flights.
#[derive(Debug, Clone, Default)]
pub struct FewestHopsPlanner;

impl RoutePlanner for FewestHopsPlanner {
    fn criterion(&self) -> Criterion {
        Criterion::Hops
    }

    fn find_path(
        &self,
        graph: &Graph,
        origin: &str,
        destination: &str,
        has_visa: bool,
        policy: VisaPolicy,
    ) -> Result<(Vec<String>, RouteMetric)> {
        let outcome = find_fewest_hops(graph, origin, destination, has_visa, policy)?;
        Ok((outcome.path, RouteMetric::Hops(outcome.metric)))
    }
}

/// Select the planner for a criterion.
pub fn select_planner(criterion: Criterion) -> Box<dyn RoutePlanner> {
    match criterion {
        Criterion::Cost => Box::new(CheapestPlanner),
        Criterion::Hops => Box::new(FewestHopsPlanner),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_planner_matches_criterion() {
        for criterion in [Criterion::Cost, Criterion::Hops] {
            assert_eq!(select_planner(criterion).criterion(), criterion);
        }
    }
}
