//! Swappable graph storage shared by concurrent queries.
//!
//! A [`GraphStore`] publishes immutable [`Graph`] snapshots behind an `Arc`.
//! Reloading builds the new graph completely before swapping the pointer, so a
//! query sees either the old graph or the new one, never a partial build. A
//! failed reload leaves the previous graph in place.

use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};
use std::thread::{self, JoinHandle};

use serde::Serialize;
use tracing::{info, warn};

use crate::eligibility::VisaPolicy;
use crate::error::{Error, Result};
use crate::graph::{build_graph, Graph, GraphExport};
use crate::records::{load_records, RouteRecord};
use crate::routing::{plan_route, RoutePlan, RouteRequest};

/// Counts reported after a successful load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LoadSummary {
    pub nodes: usize,
    pub edges: usize,
}

/// Shared, reloadable route graph with a fixed visa policy.
#[derive(Debug, Default)]
pub struct GraphStore {
    policy: VisaPolicy,
    current: RwLock<Option<Arc<Graph>>>,
}

impl GraphStore {
    /// Create an empty store; queries fail with [`Error::GraphNotLoaded`]
    /// until a load succeeds.
    pub fn new(policy: VisaPolicy) -> Self {
        Self {
            policy,
            current: RwLock::new(None),
        }
    }

    /// Visa policy applied to every query against this store.
    pub fn policy(&self) -> VisaPolicy {
        self.policy
    }

    /// Whether a graph has been published.
    pub fn is_loaded(&self) -> bool {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Build a graph from records and publish it, replacing any previous one.
    pub fn load_records(&self, records: &[RouteRecord]) -> Result<LoadSummary> {
        let graph = match build_graph(records) {
            Ok(graph) => graph,
            Err(err) => {
                warn!(error = %err, "route graph rebuild rejected; keeping previous graph");
                return Err(err);
            }
        };
        let summary = LoadSummary {
            nodes: graph.node_count(),
            edges: graph.edge_count(),
        };
        self.publish(Arc::new(graph));
        info!(nodes = summary.nodes, edges = summary.edges, "route graph loaded");
        Ok(summary)
    }

    /// Read a route table from disk and publish the resulting graph.
    pub fn load_path(&self, path: &Path) -> Result<LoadSummary> {
        let records = load_records(path).inspect_err(|err| {
            warn!(path = %path.display(), error = %err, "failed to read route table");
        })?;
        self.load_records(&records)
    }

    /// Load a route table on a background thread. The handle yields the
    /// outcome once the new graph is published (or rejected).
    pub fn spawn_load(
        self: &Arc<Self>,
        path: impl Into<PathBuf>,
    ) -> JoinHandle<Result<LoadSummary>> {
        let store = Arc::clone(self);
        let path = path.into();
        thread::spawn(move || store.load_path(&path))
    }

    /// The currently published graph.
    pub fn snapshot(&self) -> Result<Arc<Graph>> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
            .ok_or(Error::GraphNotLoaded)
    }

    /// Answer a route query against the current snapshot.
    pub fn query(&self, request: &RouteRequest) -> Result<RoutePlan> {
        let graph = self.snapshot()?;
        plan_route(&graph, request, self.policy)
    }

    /// Export the current snapshot for rendering.
    pub fn export(&self) -> Result<GraphExport> {
        Ok(self.snapshot()?.export())
    }

    fn publish(&self, graph: Arc<Graph>) {
        let mut slot = self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *slot = Some(graph);
    }
}
