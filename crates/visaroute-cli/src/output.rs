//! Stdout rendering for route plans and graph exports.

use std::io::{self, Write};

use clap::ValueEnum;
use visaroute_lib::{GraphExport, RouteRenderMode, RouteSummary};

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

impl OutputFormat {
    fn render_mode(self) -> RouteRenderMode {
        match self {
            OutputFormat::Text => RouteRenderMode::PlainText,
            OutputFormat::Json => RouteRenderMode::Json,
        }
    }
}

/// Write a route summary to `out`.
pub fn write_route<W: Write>(
    out: &mut W,
    summary: &RouteSummary,
    format: OutputFormat,
) -> io::Result<()> {
    let rendered = summary
        .render(format.render_mode())
        .map_err(io::Error::other)?;
    writeln!(out, "{}", rendered.trim_end())
}

/// Write the loaded graph to `out`.
pub fn write_graph<W: Write>(
    out: &mut W,
    export: &GraphExport,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, export).map_err(io::Error::other)?;
            out.write_all(b"\n")
        }
        OutputFormat::Text => render_graph_text(out, export),
    }
}

fn render_graph_text<W: Write>(out: &mut W, export: &GraphExport) -> io::Result<()> {
    writeln!(
        out,
        "{} airports, {} flights",
        export.nodes.len(),
        export.edges.len()
    )?;
    writeln!(out, "Airports: {}", export.nodes.join(", "))?;
    for edge in &export.edges {
        let visa = if edge.requires_visa {
            "visa required"
        } else {
            "visa-free"
        };
        writeln!(out, "  {} -- {} ${:.2} ({})", edge.a, edge.b, edge.cost, visa)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use visaroute_lib::{build_graph, RouteRecord};

    fn export() -> GraphExport {
        build_graph(&[
            RouteRecord::new("A", "B", 50.0, true),
            RouteRecord::new("B", "C", 100.0, false),
        ])
        .expect("valid graph")
        .export()
    }

    #[test]
    fn graph_text_lists_every_flight() {
        let mut buffer = Vec::new();
        write_graph(&mut buffer, &export(), OutputFormat::Text).expect("written");
        let text = String::from_utf8(buffer).expect("utf8");

        assert!(text.starts_with("3 airports, 2 flights\n"));
        assert!(text.contains("Airports: A, B, C"));
        assert!(text.contains("  A -- B $50.00 (visa required)"));
        assert!(text.contains("  B -- C $100.00 (visa-free)"));
    }

    #[test]
    fn graph_json_is_parseable() {
        let mut buffer = Vec::new();
        write_graph(&mut buffer, &export(), OutputFormat::Json).expect("written");
        let value: serde_json::Value = serde_json::from_slice(&buffer).expect("json");

        assert_eq!(value["nodes"].as_array().map(Vec::len), Some(3));
        assert_eq!(value["edges"][0]["a"], "A");
        assert_eq!(value["edges"][0]["requires_visa"], true);
    }
}
