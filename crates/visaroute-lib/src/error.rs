use std::fmt;
use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

/// Convenient result alias for the route finder library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// A route record could not be turned into a graph edge.
    ///
    /// `row` is the table line (header = 1) when read from CSV, or the 1-based
    /// record position when records are passed to the graph builder directly.
    #[error("malformed route record{}: {message}", format_row(.row))]
    MalformedRecord { row: Option<usize>, message: String },

    /// The query itself was unusable (blank identifiers).
    #[error("invalid route request: {message}")]
    InvalidRequest { message: String },

    /// Origin or destination is not part of the searchable graph.
    #[error("unknown airport: {name}{}", format_suggestions(.suggestions))]
    NodeNotFound {
        name: String,
        suggestions: Vec<String>,
    },

    /// Both endpoints exist but nothing traversable connects them.
    #[error("no route available between {origin} and {destination}")]
    NoPathExists { origin: String, destination: String },

    /// A query arrived before any route table was loaded.
    #[error("no route graph has been loaded yet")]
    GraphNotLoaded,

    /// Route table could not be located at the given path.
    #[error("route data not found at {path}")]
    DatasetNotFound { path: PathBuf },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for CSV parsing errors.
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

/// Coarse classification of an [`Error`], stable across payload changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    MalformedRecord,
    InvalidRequest,
    NodeNotFound,
    NoPathExists,
    GraphNotLoaded,
    Io,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            ErrorKind::MalformedRecord => "malformed_record",
            ErrorKind::InvalidRequest => "invalid_request",
            ErrorKind::NodeNotFound => "node_not_found",
            ErrorKind::NoPathExists => "no_path_exists",
            ErrorKind::GraphNotLoaded => "graph_not_loaded",
            ErrorKind::Io => "io",
        };
        f.write_str(value)
    }
}

impl Error {
    /// Classify this error into the taxonomy exposed to callers.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::MalformedRecord { .. } | Error::Csv(_) => ErrorKind::MalformedRecord,
            Error::InvalidRequest { .. } => ErrorKind::InvalidRequest,
            Error::NodeNotFound { .. } => ErrorKind::NodeNotFound,
            Error::NoPathExists { .. } => ErrorKind::NoPathExists,
            Error::GraphNotLoaded => ErrorKind::GraphNotLoaded,
            Error::DatasetNotFound { .. } | Error::Io(_) => ErrorKind::Io,
        }
    }

    pub(crate) fn malformed(row: Option<usize>, message: impl Into<String>) -> Self {
        Error::MalformedRecord {
            row,
            message: message.into(),
        }
    }
}

fn format_row(row: &Option<usize>) -> String {
    match row {
        Some(row) => format!(" at row {row}"),
        None => String::new(),
    }
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
