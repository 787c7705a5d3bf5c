//! The six JSON documents: writing and post-write checks.
//!
//! Each document is a pretty-printed JSON array (two-space indent, non-ASCII
//! kept as-is, no trailing newline). Writing the same atlas twice produces
//! byte-identical files.

use crate::error::Result;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use traceatlas_domain::Atlas;
use tracing::{debug, info};

/// `claims.json`
pub const CLAIMS: &str = "claims.json";
/// `traditions.json`
pub const TRADITIONS: &str = "traditions.json";
/// `sources.json`
pub const SOURCES: &str = "sources.json";
/// `nodes.json`
pub const NODES: &str = "nodes.json";
/// `edges.json`
pub const EDGES: &str = "edges.json";
/// `interpretations.json`
pub const INTERPRETATIONS: &str = "interpretations.json";

/// Every document, in write order
pub const DOCUMENT_NAMES: [&str; 6] = [CLAIMS, TRADITIONS, SOURCES, NODES, EDGES, INTERPRETATIONS];

/// A document that was written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenDocument {
    /// File name
    pub name: &'static str,
    /// Full path
    pub path: PathBuf,
    /// Number of records in the array
    pub records: usize,
}

/// Outcome of re-reading one document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentCheck {
    /// File name
    pub name: &'static str,
    /// Record count, or why the file did not pass
    pub outcome: std::result::Result<usize, String>,
}

impl DocumentCheck {
    /// Whether the file parsed as a JSON array
    pub fn passed(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Serialize records as a pretty-printed JSON array.
pub fn to_json<T: Serialize>(records: &[T]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Write all six documents into `dir`, creating it if needed.
pub fn write_atlas(atlas: &Atlas, dir: &Path) -> Result<Vec<WrittenDocument>> {
    fs::create_dir_all(dir)?;
    info!("Writing documents to {}", dir.display());

    Ok(vec![
        write_document(dir, CLAIMS, &atlas.claims)?,
        write_document(dir, TRADITIONS, &atlas.traditions)?,
        write_document(dir, SOURCES, &atlas.sources)?,
        write_document(dir, NODES, &atlas.nodes)?,
        write_document(dir, EDGES, &atlas.edges)?,
        write_document(dir, INTERPRETATIONS, &atlas.interpretations)?,
    ])
}

fn write_document<T: Serialize>(dir: &Path, name: &'static str, records: &[T]) -> Result<WrittenDocument> {
    let path = dir.join(name);
    fs::write(&path, to_json(records)?)?;
    info!("Wrote {} records to {}", records.len(), path.display());

    Ok(WrittenDocument {
        name,
        path,
        records: records.len(),
    })
}

/// Re-read every document in `dir`; all six are checked even after a failure.
pub fn check_documents(dir: &Path) -> Vec<DocumentCheck> {
    DOCUMENT_NAMES
        .iter()
        .map(|&name| {
            let outcome = check_document(&dir.join(name));
            match &outcome {
                Ok(count) => debug!("{} passed with {} records", name, count),
                Err(reason) => debug!("{} failed: {}", name, reason),
            }
            DocumentCheck { name, outcome }
        })
        .collect()
}

fn check_document(path: &Path) -> std::result::Result<usize, String> {
    let contents = fs::read_to_string(path).map_err(|e| e.to_string())?;
    let value: serde_json::Value = serde_json::from_str(&contents).map_err(|e| e.to_string())?;
    value
        .as_array()
        .map(Vec::len)
        .ok_or_else(|| "not a JSON array".to_string())
}
