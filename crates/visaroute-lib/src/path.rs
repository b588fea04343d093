use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

use tracing::debug;

use crate::eligibility::{VisaFilter, VisaPolicy};
use crate::error::{Error, Result};
use crate::graph::{Graph, NodeIndex};

/// Successful search result in terms of airport identifiers.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome<M> {
    pub path: Vec<String>,
    pub metric: M,
}

/// Find the cheapest route between two airports.
///
/// Fails with [`Error::NodeNotFound`] when either endpoint is missing (or
/// quarantined) and with [`Error::NoPathExists`] when nothing connects them.
pub fn find_cheapest(
    graph: &Graph,
    origin: &str,
    destination: &str,
    has_visa: bool,
    policy: VisaPolicy,
) -> Result<SearchOutcome<f64>> {
    let (start, goal, filter) = prepare(graph, origin, destination, has_visa, policy)?;
    let (steps, cost) = find_route_dijkstra(graph, &filter, start, goal)
        .ok_or_else(|| no_path(origin, destination))?;
    debug!(origin, destination, cost, hops = steps.len() - 1, "cheapest route found");
    Ok(SearchOutcome {
        path: resolve_names(graph, &steps),
        metric: cost,
    })
}

/// Find the route with the fewest flights between two airports.
///
/// Failure conditions match [`find_cheapest`].
pub fn find_fewest_hops(
    graph: &Graph,
    origin: &str,
    destination: &str,
    has_visa: bool,
    policy: VisaPolicy,
) -> Result<SearchOutcome<usize>> {
    let (start, goal, filter) = prepare(graph, origin, destination, has_visa, policy)?;
    let steps =
        find_route_bfs(graph, &filter, start, goal).ok_or_else(|| no_path(origin, destination))?;
    let hops = steps.len() - 1;
    debug!(origin, destination, hops, "fewest-hops route found");
    Ok(SearchOutcome {
        path: resolve_names(graph, &steps),
        metric: hops,
    })
}

/// Run breadth-first search under the given filter.
///
/// Each node is discovered at most once; the first discovery is on a path with
/// the minimal number of edges.
pub fn find_route_bfs(
    graph: &Graph,
    filter: &VisaFilter,
    start: NodeIndex,
    goal: NodeIndex,
) -> Option<Vec<NodeIndex>> {
    if !filter.admits(start) || !filter.admits(goal) {
        return None;
    }
    if start == goal {
        return Some(vec![start]);
    }

    let mut parents: Vec<Option<NodeIndex>> = vec![None; graph.node_count()];
    let mut visited = vec![false; graph.node_count()];
    let mut queue = VecDeque::new();

    visited[start] = true;
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        for edge in graph.neighbours(current) {
            let next = edge.target;
            if visited[next] {
                continue;
            }
            if !filter.allows(current, edge) {
                continue;
            }

            visited[next] = true;
            parents[next] = Some(current);
            if next == goal {
                return Some(reconstruct_path(&parents, start, goal));
            }
            queue.push_back(next);
        }
    }

    None
}

/// Run Dijkstra's algorithm under the given filter, returning the path and its
/// total cost.
///
/// Frontier ties on cost are broken by insertion order so identical inputs
/// always produce identical paths.
pub fn find_route_dijkstra(
    graph: &Graph,
    filter: &VisaFilter,
    start: NodeIndex,
    goal: NodeIndex,
) -> Option<(Vec<NodeIndex>, f64)> {
    if !filter.admits(start) || !filter.admits(goal) {
        return None;
    }
    if start == goal {
        return Some((vec![start], 0.0));
    }

    // f64::INFINITY marks "unreached" and never escapes this function.
    let mut distances = vec![f64::INFINITY; graph.node_count()];
    let mut parents: Vec<Option<NodeIndex>> = vec![None; graph.node_count()];
    let mut settled = vec![false; graph.node_count()];
    let mut queue = BinaryHeap::new();
    let mut sequence = 0u64;

    distances[start] = 0.0;
    queue.push(QueueEntry::new(start, 0.0, sequence));

    while let Some(entry) = queue.pop() {
        let current = entry.node;
        if settled[current] {
            continue;
        }
        settled[current] = true;

        if current == goal {
            return Some((reconstruct_path(&parents, start, goal), distances[goal]));
        }

        let current_distance = distances[current];
        for edge in graph.neighbours(current) {
            let next = edge.target;
            if settled[next] || !filter.allows(current, edge) {
                continue;
            }

            let next_cost = current_distance + edge.cost;
            if next_cost < distances[next] {
                distances[next] = next_cost;
                parents[next] = Some(current);
                sequence += 1;
                queue.push(QueueEntry::new(next, next_cost, sequence));
            }
        }
    }

    None
}

fn prepare(
    graph: &Graph,
    origin: &str,
    destination: &str,
    has_visa: bool,
    policy: VisaPolicy,
) -> Result<(NodeIndex, NodeIndex, VisaFilter)> {
    let start = resolve_node(graph, origin)?;
    let goal = resolve_node(graph, destination)?;
    let filter = VisaFilter::new(graph, policy, has_visa, start);
    if !filter.admits(goal) {
        return Err(Error::NodeNotFound {
            name: destination.to_string(),
            suggestions: Vec::new(),
        });
    }
    Ok((start, goal, filter))
}

fn resolve_node(graph: &Graph, name: &str) -> Result<NodeIndex> {
    graph.node_index(name).ok_or_else(|| Error::NodeNotFound {
        name: name.to_string(),
        suggestions: graph.fuzzy_matches(name, 3),
    })
}

fn no_path(origin: &str, destination: &str) -> Error {
    Error::NoPathExists {
        origin: origin.to_string(),
        destination: destination.to_string(),
    }
}

fn resolve_names(graph: &Graph, steps: &[NodeIndex]) -> Vec<String> {
    steps
        .iter()
        .filter_map(|&node| graph.node_name(node))
        .map(str::to_string)
        .collect()
}

fn reconstruct_path(
    parents: &[Option<NodeIndex>],
    start: NodeIndex,
    goal: NodeIndex,
) -> Vec<NodeIndex> {
    let mut path = Vec::new();
    let mut current = Some(goal);
    while let Some(node) = current {
        path.push(node);
        if node == start {
            break;
        }
        current = parents[node];
    }
    path.reverse();
    path
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry {
    node: NodeIndex,
    cost: FloatOrd,
    sequence: u64,
}

impl QueueEntry {
    fn new(node: NodeIndex, cost: f64, sequence: u64) -> Self {
        Self {
            node,
            cost: FloatOrd(cost),
            sequence,
        }
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost, then by
        // insertion order.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
