//! Visa eligibility filtering.
//!
//! Two policies exist and they do not agree on reachability:
//!
//! - [`VisaPolicy::EdgeGated`] decides per flight: a visa-gated flight is
//!   usable only by travellers holding a visa.
//! - [`VisaPolicy::NodeQuarantine`] decides per airport: for travellers without
//!   a visa, any airport other than the origin that has at least one visa-gated
//!   flight is removed from the graph, and the remaining airports keep all of
//!   their flights between each other.
//!
//! A search uses exactly one policy through a [`VisaFilter`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::graph::{Edge, Graph, NodeIndex};

/// How the visa requirement restricts traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VisaPolicy {
    /// Filter individual flights at traversal time.
    #[default]
    EdgeGated,
    /// Exclude whole airports touched by any visa-gated flight.
    NodeQuarantine,
}

impl fmt::Display for VisaPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            VisaPolicy::EdgeGated => "edge-gated",
            VisaPolicy::NodeQuarantine => "node-quarantine",
        };
        f.write_str(value)
    }
}

/// Traversal predicate bound to one traveller, one graph and one origin.
#[derive(Debug, Clone)]
pub struct VisaFilter {
    policy: VisaPolicy,
    has_visa: bool,
    /// Per-node exclusion flags; empty unless quarantine applies.
    quarantined: Vec<bool>,
}

impl VisaFilter {
    /// Prepare the filter for a search starting at `origin`.
    pub fn new(graph: &Graph, policy: VisaPolicy, has_visa: bool, origin: NodeIndex) -> Self {
        let quarantined = match policy {
            VisaPolicy::NodeQuarantine if !has_visa => (0..graph.node_count())
                .map(|node| {
                    node != origin
                        && graph
                            .neighbours(node)
                            .iter()
                            .any(|edge| edge.requires_visa)
                })
                .collect(),
            _ => Vec::new(),
        };

        Self {
            policy,
            has_visa,
            quarantined,
        }
    }

    /// Policy in force for this filter.
    pub fn policy(&self) -> VisaPolicy {
        self.policy
    }

    /// Whether the node is part of the searchable graph at all.
    pub fn admits(&self, node: NodeIndex) -> bool {
        !self.quarantined.get(node).copied().unwrap_or(false)
    }

    /// Whether `edge`, leaving `current`, may be taken.
    pub fn allows(&self, current: NodeIndex, edge: &Edge) -> bool {
        match self.policy {
            VisaPolicy::EdgeGated => self.has_visa || !edge.requires_visa,
            VisaPolicy::NodeQuarantine => self.admits(current) && self.admits(edge.target),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::build_graph;
    use crate::records::RouteRecord;

    fn triangle() -> Graph {
        build_graph(&[
            RouteRecord::new("A", "B", 100.0, false),
            RouteRecord::new("B", "C", 50.0, true),
            RouteRecord::new("A", "C", 200.0, false),
        ])
        .expect("valid records")
    }

    #[test]
    fn edge_gated_blocks_only_visa_flights() {
        let graph = triangle();
        let a = graph.node_index("A").unwrap();
        let b = graph.node_index("B").unwrap();
        let filter = VisaFilter::new(&graph, VisaPolicy::EdgeGated, false, a);

        let from_b: Vec<bool> = graph
            .neighbours(b)
            .iter()
            .map(|edge| filter.allows(b, edge))
            .collect();
        assert_eq!(from_b, vec![true, false]);
        assert!(filter.admits(b));
    }

    #[test]
    fn visa_holders_are_never_restricted() {
        let graph = triangle();
        let a = graph.node_index("A").unwrap();
        for policy in [VisaPolicy::EdgeGated, VisaPolicy::NodeQuarantine] {
            let filter = VisaFilter::new(&graph, policy, true, a);
            for node in 0..graph.node_count() {
                assert!(filter.admits(node));
                assert!(graph
                    .neighbours(node)
                    .iter()
                    .all(|edge| filter.allows(node, edge)));
            }
        }
    }

    #[test]
    fn quarantine_spares_the_origin() {
        let graph = triangle();
        let b = graph.node_index("B").unwrap();
        let c = graph.node_index("C").unwrap();
        let a = graph.node_index("A").unwrap();

        let filter = VisaFilter::new(&graph, VisaPolicy::NodeQuarantine, false, b);
        assert!(filter.admits(b));
        assert!(!filter.admits(c));
        assert!(filter.admits(a));
    }

    #[test]
    fn policy_display_matches_cli_names() {
        assert_eq!(VisaPolicy::EdgeGated.to_string(), "edge-gated");
        assert_eq!(VisaPolicy::NodeQuarantine.to_string(), "node-quarantine");
    }
}
