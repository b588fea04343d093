// CLI subcommand handlers. main.rs parses arguments and dispatches here.

pub mod graph;
pub mod route;

use std::path::Path;

use anyhow::{Context, Result};
use visaroute_lib::{GraphStore, VisaPolicy};

/// Build a store for `policy` and load the CSV at `data` into it.
pub fn open_store(data: &Path, policy: VisaPolicy) -> Result<GraphStore> {
    let store = GraphStore::new(policy);
    let summary = store
        .load_path(data)
        .with_context(|| format!("failed to load route data from {}", data.display()))?;
    tracing::info!(
        nodes = summary.nodes,
        edges = summary.edges,
        policy = %policy,
        "route graph ready"
    );
    Ok(store)
}
