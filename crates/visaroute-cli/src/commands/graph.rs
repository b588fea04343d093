//! Graph command handler: dumps the loaded airports and flights.

use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use visaroute_lib::VisaPolicy;

use visaroute_cli::output::{write_graph, OutputFormat};

pub fn handle_graph_command(data: &Path, policy: VisaPolicy, format: OutputFormat) -> Result<()> {
    let store = super::open_store(data, policy)?;
    let export = store.export()?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_graph(&mut handle, &export, format).context("failed to write graph")?;
    handle.flush()?;
    Ok(())
}
