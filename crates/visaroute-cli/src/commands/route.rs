//! Route command handler.

use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use visaroute_lib::{Criterion, RouteRequest, RouteSummary, VisaPolicy};

use visaroute_cli::output::{write_route, OutputFormat};

/// Arguments for the route command.
#[derive(Debug, Clone)]
pub struct RouteCommandArgs {
    /// Origin airport code.
    pub from: String,
    /// Destination airport code.
    pub to: String,
    /// Whether the traveller holds a visa.
    pub visa: bool,
    pub criterion: Criterion,
    pub format: OutputFormat,
}

impl RouteCommandArgs {
    /// Convert CLI args to a library RouteRequest.
    pub fn to_request(&self) -> RouteRequest {
        RouteRequest::new(&self.from, &self.to, self.visa, self.criterion)
    }
}

pub fn handle_route_command(
    data: &Path,
    policy: VisaPolicy,
    args: &RouteCommandArgs,
) -> Result<()> {
    let store = super::open_store(data, policy)?;
    let plan = store.query(&args.to_request())?;
    let summary = RouteSummary::from_plan(&plan);

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_route(&mut handle, &summary, args.format).context("failed to write route")?;
    handle.flush()?;
    Ok(())
}
