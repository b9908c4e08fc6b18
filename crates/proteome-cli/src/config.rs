//! CLI configuration

use std::path::{Path, PathBuf};

use anyhow::Context;
use proteome_core::{DEFAULT_GO_TERM_LIMIT, DEFAULT_SEARCH_LIMIT};
use proteome_storage::json::{
    DEFAULT_EDGES, DEFAULT_GO_TERM_NODES, DEFAULT_ID_RECORDS, DEFAULT_PROTEIN_NODES,
};
use proteome_storage::BatchPaths;
use serde::{Deserialize, Serialize};

/// Get default snapshot directory
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("proteome")
}

/// Get default config file location
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("proteome")
        .join("config.toml")
}

/// Configuration for the CLI, stored as TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Snapshot directory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,

    /// Batch file names, relative to the snapshot directory
    pub protein_nodes: String,
    pub go_term_nodes: String,
    pub edges: String,
    pub id_records: String,

    pub search_limit: usize,
    pub go_term_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            protein_nodes: DEFAULT_PROTEIN_NODES.to_string(),
            go_term_nodes: DEFAULT_GO_TERM_NODES.to_string(),
            edges: DEFAULT_EDGES.to_string(),
            id_records: DEFAULT_ID_RECORDS.to_string(),
            search_limit: DEFAULT_SEARCH_LIMIT,
            go_term_limit: DEFAULT_GO_TERM_LIMIT,
        }
    }
}

impl Config {
    /// Load from `path`; a missing file yields defaults
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            tracing::debug!("No config file at {:?}, using defaults", path);
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn keys() -> &'static [&'static str] {
        &[
            "data_dir",
            "protein_nodes",
            "go_term_nodes",
            "edges",
            "id_records",
            "search_limit",
            "go_term_limit",
        ]
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "data_dir" => Some(
                self.data_dir
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "(not set)".to_string()),
            ),
            "protein_nodes" => Some(self.protein_nodes.clone()),
            "go_term_nodes" => Some(self.go_term_nodes.clone()),
            "edges" => Some(self.edges.clone()),
            "id_records" => Some(self.id_records.clone()),
            "search_limit" => Some(self.search_limit.to_string()),
            "go_term_limit" => Some(self.go_term_limit.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        match key {
            "data_dir" => self.data_dir = Some(PathBuf::from(value)),
            "protein_nodes" => self.protein_nodes = value.to_string(),
            "go_term_nodes" => self.go_term_nodes = value.to_string(),
            "edges" => self.edges = value.to_string(),
            "id_records" => self.id_records = value.to_string(),
            "search_limit" => {
                self.search_limit = value
                    .parse()
                    .with_context(|| format!("search_limit must be a number, got '{}'", value))?
            }
            "go_term_limit" => {
                self.go_term_limit = value
                    .parse()
                    .with_context(|| format!("go_term_limit must be a number, got '{}'", value))?
            }
            _ => anyhow::bail!(
                "Unknown config key: {}. Available keys: {}",
                key,
                Self::keys().join(", ")
            ),
        }
        Ok(())
    }

    /// Batch file locations; `data_dir` overrides the configured directory
    pub fn batch_paths(&self, data_dir: Option<&Path>) -> BatchPaths {
        let dir = data_dir
            .map(Path::to_path_buf)
            .or_else(|| self.data_dir.clone())
            .unwrap_or_else(default_data_dir);
        BatchPaths {
            proteins: dir.join(&self.protein_nodes),
            go_terms: dir.join(&self.go_term_nodes),
            edges: dir.join(&self.edges),
            id_records: dir.join(&self.id_records),
        }
    }
}
