//! Build pass diagnostics

use serde::{Deserialize, Serialize};

/// Outcome of folding the edge batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeStats {
    pub annotations: usize,
    pub interactions: usize,
    /// Annotation edges whose GO term is not loaded
    pub dropped_annotations: usize,
    /// Edges of an unindexed relationship family
    pub ignored: usize,
}

/// Record counts observed while building an index
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildStats {
    pub protein_records: usize,
    pub duplicate_proteins: usize,
    pub go_term_records: usize,
    pub duplicate_go_terms: usize,
    pub id_records_applied: usize,
    /// Alias records whose external id matched no protein
    pub id_records_unmatched: usize,
    pub edges: EdgeStats,
}

/// Size of a built index
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexStats {
    pub proteins: usize,
    pub go_terms: usize,
    pub external_ids: usize,
    pub secondary_ids: usize,
    pub ambiguous_ids: usize,
    pub annotations: usize,
    pub interactions: usize,
    pub build: BuildStats,
}
