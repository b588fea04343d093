//! Route table loading.
//!
//! Route tables are headed CSV files with one flight per row. The canonical
//! header is `Origen,Destino,Precio,Requiere_Visa`; English synonyms are also
//! accepted so hand-written fixtures stay readable.

use std::collections::BTreeMap;
use std::fs;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};

/// A single flight as read from a route table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteRecord {
    pub origin: String,
    pub destination: String,
    pub cost: f64,
    pub requires_visa: bool,
}

impl RouteRecord {
    /// Convenience constructor used heavily by tests and programmatic callers.
    pub fn new(
        origin: impl Into<String>,
        destination: impl Into<String>,
        cost: f64,
        requires_visa: bool,
    ) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            cost,
            requires_visa,
        }
    }
}

/// Load route records from a CSV file on disk.
pub fn load_records(path: &Path) -> Result<Vec<RouteRecord>> {
    if !path.exists() {
        return Err(Error::DatasetNotFound {
            path: path.to_path_buf(),
        });
    }

    let file = fs::File::open(path)?;
    let records = read_records(file)?;
    debug!(path = %path.display(), records = records.len(), "read route table");
    Ok(records)
}

/// Parse route records from any reader (file, in-memory buffer, ...).
pub fn read_records<R: Read>(reader: R) -> Result<Vec<RouteRecord>> {
    let mut csv_reader = ReaderBuilder::new().trim(Trim::Fields).from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|err| Error::malformed(Some(1), format!("failed to read headers: {err}")))?
        .clone();

    let normalize = |s: &str| {
        s.to_ascii_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
            .collect::<String>()
    };
    let normalized_headers: Vec<String> = headers.iter().map(normalize).collect();

    let synonyms: &[(&str, &[&str])] = &[
        ("origin", &["origen", "origin", "from"]),
        ("destination", &["destino", "destination", "to"]),
        ("cost", &["precio", "price", "cost"]),
        ("visa", &["requiere_visa", "requires_visa", "visa"]),
    ];

    let mut index_map: BTreeMap<&str, usize> = BTreeMap::new();
    for (canon, alts) in synonyms {
        if let Some(i) = normalized_headers
            .iter()
            .position(|h| alts.contains(&h.as_str()))
        {
            index_map.insert(*canon, i);
        }
    }

    let missing: Vec<&str> = synonyms
        .iter()
        .map(|(canon, _)| *canon)
        .filter(|canon| !index_map.contains_key(canon))
        .collect();
    if !missing.is_empty() {
        return Err(Error::malformed(
            Some(1),
            format!(
                "missing required columns: {}. Available: {}",
                missing.join(", "),
                headers.iter().collect::<Vec<_>>().join(", ")
            ),
        ));
    }

    let mut records = Vec::new();
    for (offset, result) in csv_reader.records().enumerate() {
        let record = result?;
        // file line of the record, header on line 1; blank lines are skipped
        // by the reader but still counted here
        let row = record
            .position()
            .and_then(|position| usize::try_from(position.line()).ok())
            .unwrap_or(offset + 2);

        let get = |field: &str| {
            index_map
                .get(field)
                .and_then(|&i| record.get(i))
                .unwrap_or("")
        };

        let cost_raw = get("cost");
        let cost = cost_raw.parse::<f64>().map_err(|err| {
            Error::malformed(Some(row), format!("invalid cost '{cost_raw}': {err}"))
        })?;
        let requires_visa = parse_visa_flag(get("visa")).ok_or_else(|| {
            Error::malformed(
                Some(row),
                format!("invalid visa flag '{}'; expected 0 or 1", get("visa")),
            )
        })?;

        let route = RouteRecord::new(get("origin"), get("destination"), cost, requires_visa);
        validate_record(&route, Some(row))?;
        records.push(route);
    }

    Ok(records)
}

/// Check the invariants the graph builder relies on.
pub(crate) fn validate_record(record: &RouteRecord, row: Option<usize>) -> Result<()> {
    if record.origin.trim().is_empty() {
        return Err(Error::malformed(row, "origin is empty"));
    }
    if record.destination.trim().is_empty() {
        return Err(Error::malformed(row, "destination is empty"));
    }
    if !record.cost.is_finite() || record.cost < 0.0 {
        return Err(Error::malformed(
            row,
            format!("cost must be a finite non-negative number, got {}", record.cost),
        ));
    }
    Ok(())
}

fn parse_visa_flag(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "0" | "false" => Some(false),
        "1" | "true" => Some(true),
        _ => None,
    }
}
