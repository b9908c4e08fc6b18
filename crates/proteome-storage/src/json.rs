//! JSON snapshot directory source
//!
//! A snapshot is four files, one per batch. Files ending in `.json` hold
//! a single array of objects; any other extension is read as JSON Lines.

use crate::error::{StorageError, StorageResult};
use crate::traits::RecordSource;
use async_trait::async_trait;
use proteome_core::{RecordBatches, RecordKind};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::path::{Path, PathBuf};

pub const DEFAULT_PROTEIN_NODES: &str = "protein_nodes.jsonl";
pub const DEFAULT_GO_TERM_NODES: &str = "go_term_nodes.jsonl";
pub const DEFAULT_EDGES: &str = "edges.jsonl";
pub const DEFAULT_ID_RECORDS: &str = "protein_id_records.jsonl";

/// Locations of the four batch files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchPaths {
    pub proteins: PathBuf,
    pub go_terms: PathBuf,
    pub edges: PathBuf,
    pub id_records: PathBuf,
}

impl BatchPaths {
    /// Default file names inside `dir`
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            proteins: dir.join(DEFAULT_PROTEIN_NODES),
            go_terms: dir.join(DEFAULT_GO_TERM_NODES),
            edges: dir.join(DEFAULT_EDGES),
            id_records: dir.join(DEFAULT_ID_RECORDS),
        }
    }

    pub fn path(&self, kind: RecordKind) -> &Path {
        match kind {
            RecordKind::Protein => &self.proteins,
            RecordKind::GoTerm => &self.go_terms,
            RecordKind::Edge => &self.edges,
            RecordKind::IdRecord => &self.id_records,
        }
    }

    fn all(&self) -> [(RecordKind, &Path); 4] {
        [
            (RecordKind::Protein, self.proteins.as_path()),
            (RecordKind::GoTerm, self.go_terms.as_path()),
            (RecordKind::Edge, self.edges.as_path()),
            (RecordKind::IdRecord, self.id_records.as_path()),
        ]
    }
}

/// Record source reading a JSON snapshot from disk
#[derive(Debug, Clone)]
pub struct JsonSource {
    paths: BatchPaths,
}

impl JsonSource {
    pub fn new(paths: BatchPaths) -> Self {
        Self { paths }
    }

    /// Snapshot directory with the default file names
    pub fn open(dir: impl AsRef<Path>) -> Self {
        Self::new(BatchPaths::in_dir(dir))
    }

    pub fn paths(&self) -> &BatchPaths {
        &self.paths
    }

    async fn read_batch<T: DeserializeOwned>(&self, kind: RecordKind) -> StorageResult<Vec<T>> {
        let path = self.paths.path(kind);
        let contents = tokio::fs::read_to_string(path).await?;
        let records = decode(kind, path, &contents)?;
        tracing::debug!("Read {} {} records from {:?}", records.len(), kind, path);
        Ok(records)
    }
}

fn is_json_array(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

fn decode<T: DeserializeOwned>(
    kind: RecordKind,
    path: &Path,
    contents: &str,
) -> StorageResult<Vec<T>> {
    let malformed = |position: usize, source: serde_json::Error| StorageError::MalformedRecord {
        kind,
        path: path.to_path_buf(),
        position,
        source,
    };

    if is_json_array(path) {
        let values: Vec<Value> =
            serde_json::from_str(contents).map_err(|e| malformed(e.line(), e))?;
        values
            .into_iter()
            .enumerate()
            .map(|(i, value)| serde_json::from_value(value).map_err(|e| malformed(i + 1, e)))
            .collect()
    } else {
        contents
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(i, line)| serde_json::from_str(line).map_err(|e| malformed(i + 1, e)))
            .collect()
    }
}

#[async_trait]
impl RecordSource for JsonSource {
    fn describe(&self) -> String {
        match self.paths.proteins.parent() {
            Some(dir) => format!("JSON snapshot at {}", dir.display()),
            None => "JSON snapshot".to_string(),
        }
    }

    async fn load(&self) -> StorageResult<RecordBatches> {
        // Check every batch up front so nothing is read from a partial snapshot
        for (kind, path) in self.paths.all() {
            if !tokio::fs::try_exists(path).await? {
                return Err(StorageError::MissingBatch {
                    kind,
                    path: path.to_path_buf(),
                });
            }
        }

        Ok(RecordBatches {
            proteins: self.read_batch(RecordKind::Protein).await?,
            go_terms: self.read_batch(RecordKind::GoTerm).await?,
            edges: self.read_batch(RecordKind::Edge).await?,
            id_records: self.read_batch(RecordKind::IdRecord).await?,
        })
    }
}
