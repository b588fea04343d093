use std::collections::HashMap;

use serde::Serialize;
use tracing::warn;

use crate::error::{Error, Result};
use crate::records::{validate_record, RouteRecord};

/// Dense index of an airport within a [`Graph`].
pub type NodeIndex = usize;

/// Directed view of an undirected flight, as seen from one endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub target: NodeIndex,
    pub cost: f64,
    pub requires_visa: bool,
}

/// Neighbour of an airport, resolved to its identifier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbour<'a> {
    pub airport: &'a str,
    pub cost: f64,
    pub requires_visa: bool,
}

/// Immutable undirected flight graph.
///
/// Airports are indexed in first-appearance order and each adjacency list keeps
/// edge insertion order, so every traversal over the same input is
/// reproducible.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    names: Vec<String>,
    index: HashMap<String, NodeIndex>,
    adjacency: Vec<Vec<Edge>>,
    pairs: Vec<(NodeIndex, NodeIndex)>,
}

impl Graph {
    /// Number of airports.
    pub fn node_count(&self) -> usize {
        self.names.len()
    }

    /// Number of distinct undirected flights.
    pub fn edge_count(&self) -> usize {
        self.pairs.len()
    }

    /// Lookup an airport index by its identifier.
    pub fn node_index(&self, airport: &str) -> Option<NodeIndex> {
        self.index.get(airport).copied()
    }

    /// Lookup an airport identifier by index.
    pub fn node_name(&self, node: NodeIndex) -> Option<&str> {
        self.names.get(node).map(String::as_str)
    }

    /// Whether the airport is part of this graph.
    pub fn contains(&self, airport: &str) -> bool {
        self.index.contains_key(airport)
    }

    /// Airport identifiers in first-appearance order.
    pub fn airports(&self) -> impl Iterator<Item = &str> + '_ {
        self.names.iter().map(String::as_str)
    }

    /// Return the edges leaving a node; empty for unknown indices.
    pub fn neighbours(&self, node: NodeIndex) -> &[Edge] {
        self.adjacency
            .get(node)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Neighbours of an airport by identifier. Isolated or unknown airports
    /// yield nothing.
    pub fn neighbours_of<'a>(&'a self, airport: &str) -> impl Iterator<Item = Neighbour<'a>> + 'a {
        let edges = self
            .node_index(airport)
            .map(|node| self.neighbours(node))
            .unwrap_or(&[]);
        edges.iter().map(move |edge| Neighbour {
            airport: self.names[edge.target].as_str(),
            cost: edge.cost,
            requires_visa: edge.requires_visa,
        })
    }

    /// The edge between two nodes, if one exists.
    pub fn edge_between(&self, a: NodeIndex, b: NodeIndex) -> Option<&Edge> {
        self.neighbours(a).iter().find(|edge| edge.target == b)
    }

    /// Closest airport identifiers to `name`, best first.
    pub fn fuzzy_matches(&self, name: &str, limit: usize) -> Vec<String> {
        let needle = name.to_ascii_uppercase();
        let mut scored: Vec<(f64, &str)> = self
            .names
            .iter()
            .map(|candidate| {
                let score = strsim::jaro_winkler(&needle, &candidate.to_ascii_uppercase());
                (score, candidate.as_str())
            })
            .filter(|(score, _)| *score >= 0.7)
            .collect();
        scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, candidate)| candidate.to_string())
            .collect()
    }

    /// Read-only export for diagram renderers.
    pub fn export(&self) -> GraphExport {
        let edges = self
            .pairs
            .iter()
            .filter_map(|&(a, b)| {
                self.edge_between(a, b).map(|edge| ExportedEdge {
                    a: self.names[a].clone(),
                    b: self.names[b].clone(),
                    cost: edge.cost,
                    requires_visa: edge.requires_visa,
                })
            })
            .collect();

        GraphExport {
            nodes: self.names.clone(),
            edges,
        }
    }

    fn intern(&mut self, airport: &str) -> NodeIndex {
        if let Some(&node) = self.index.get(airport) {
            return node;
        }
        let node = self.names.len();
        self.names.push(airport.to_string());
        self.index.insert(airport.to_string(), node);
        self.adjacency.push(Vec::new());
        node
    }

    fn upsert_edge(&mut self, a: NodeIndex, b: NodeIndex, cost: f64, requires_visa: bool) -> bool {
        let mut replaced = false;
        for (from, to) in [(a, b), (b, a)] {
            let list = &mut self.adjacency[from];
            if let Some(existing) = list.iter_mut().find(|edge| edge.target == to) {
                existing.cost = cost;
                existing.requires_visa = requires_visa;
                replaced = true;
            } else {
                list.push(Edge {
                    target: to,
                    cost,
                    requires_visa,
                });
            }
            if a == b {
                break;
            }
        }
        if !replaced {
            self.pairs.push((a, b));
        }
        replaced
    }
}

/// Undirected flight as exported for rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportedEdge {
    pub a: String,
    pub b: String,
    pub cost: f64,
    pub requires_visa: bool,
}

/// Snapshot of a graph sufficient to lay out and label a diagram.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphExport {
    pub nodes: Vec<String>,
    pub edges: Vec<ExportedEdge>,
}

/// Build a flight graph from route records.
///
/// Later records overwrite earlier ones for the same unordered airport pair.
/// Any malformed record aborts the build; the reported row is the 1-based
/// position of the record in `records`, not a line of the table it came from
/// (tables are validated with line numbers by [`crate::records::read_records`]).
///
/// The summed price of all flights must stay finite so no route cost can
/// overflow.
pub fn build_graph(records: &[RouteRecord]) -> Result<Graph> {
    let mut graph = Graph::default();
    for (position, record) in records.iter().enumerate() {
        validate_record(record, Some(position + 1))?;

        let a = graph.intern(record.origin.trim());
        let b = graph.intern(record.destination.trim());
        if graph.upsert_edge(a, b, record.cost, record.requires_visa) {
            warn!(
                origin = %record.origin,
                destination = %record.destination,
                "duplicate route overwrites earlier record"
            );
        }
    }

    let total: f64 = graph
        .pairs
        .iter()
        .filter_map(|&(a, b)| graph.edge_between(a, b))
        .map(|edge| edge.cost)
        .sum();
    if !total.is_finite() {
        return Err(Error::malformed(
            None,
            "summed flight prices overflow; route costs cannot be represented",
        ));
    }
    Ok(graph)
}
