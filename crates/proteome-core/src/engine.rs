//! Public read operations over a built index

use crate::annotation::{FunctionalAnnotation, ProteinInteraction};
use crate::index::ProteinIndex;
use crate::protein::Protein;
use crate::query::{GoTermQuery, SearchQuery};
use crate::search;
use crate::stats::IndexStats;
use serde::Serialize;
use std::sync::Arc;

/// A protein annotated with a GO term, with its relevance score
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GoTermHit<'a> {
    pub protein: &'a Protein,
    pub score: f64,
}

/// Read operations every protein backend provides
///
/// Unknown identifiers are never errors: they produce `None` or an
/// empty result.
pub trait ProteinDatabase: Send + Sync {
    /// Case-insensitive substring search, best matches first
    fn search(&self, query: &str, limit: usize) -> Vec<&Protein>;

    /// Get a protein by any of its identifiers
    fn get_protein(&self, identifier: &str) -> Option<&Protein>;

    /// Get the functional annotations of a protein
    fn get_functional_annotations(&self, identifier: &str) -> &[FunctionalAnnotation];

    /// Get the interactions a protein is the source of
    fn get_protein_interactions(&self, identifier: &str) -> &[ProteinInteraction];

    /// Get proteins annotated with a GO term, highest score first
    fn get_proteins_by_go_term(
        &self,
        go_term: &str,
        min_score: f64,
        limit: usize,
    ) -> Vec<GoTermHit<'_>>;

    fn run_search(&self, query: &SearchQuery) -> Vec<&Protein> {
        self.search(&query.text, query.limit)
    }

    fn run_go_term(&self, query: &GoTermQuery) -> Vec<GoTermHit<'_>> {
        self.get_proteins_by_go_term(&query.go_term, query.min_score, query.limit)
    }
}

/// Query engine over a shared, immutable [`ProteinIndex`]
#[derive(Debug, Clone)]
pub struct QueryEngine {
    index: Arc<ProteinIndex>,
}

impl QueryEngine {
    pub fn new(index: Arc<ProteinIndex>) -> Self {
        Self { index }
    }

    pub fn index(&self) -> &ProteinIndex {
        &self.index
    }

    /// Resolve a protein identifier to its primary id
    pub fn resolve_protein(&self, identifier: &str) -> Option<&str> {
        self.index.identifiers().resolve_protein(identifier)
    }

    /// Every protein an ambiguous alias could mean
    pub fn ambiguous_candidates(&self, alias: &str) -> Vec<&Protein> {
        let identifiers = self.index.identifiers();
        identifiers
            .ambiguous_candidates(alias)
            .into_iter()
            .filter_map(|id| identifiers.protein(id))
            .collect()
    }

    pub fn stats(&self) -> IndexStats {
        self.index.stats()
    }
}

impl From<ProteinIndex> for QueryEngine {
    fn from(index: ProteinIndex) -> Self {
        Self::new(Arc::new(index))
    }
}

impl ProteinDatabase for QueryEngine {
    fn search(&self, query: &str, limit: usize) -> Vec<&Protein> {
        let results = search::rank(self.index.identifiers().proteins(), query, limit);
        tracing::debug!("Search '{}' returned {} proteins", query, results.len());
        results
    }

    fn get_protein(&self, identifier: &str) -> Option<&Protein> {
        let identifiers = self.index.identifiers();
        identifiers
            .resolve_protein(identifier)
            .and_then(|id| identifiers.protein(id))
    }

    fn get_functional_annotations(&self, identifier: &str) -> &[FunctionalAnnotation] {
        match self.resolve_protein(identifier) {
            Some(id) => self.index.relationships().annotations(id),
            None => &[],
        }
    }

    fn get_protein_interactions(&self, identifier: &str) -> &[ProteinInteraction] {
        match self.resolve_protein(identifier) {
            Some(id) => self.index.relationships().interactions(id),
            None => &[],
        }
    }

    fn get_proteins_by_go_term(
        &self,
        go_term: &str,
        min_score: f64,
        limit: usize,
    ) -> Vec<GoTermHit<'_>> {
        let identifiers = self.index.identifiers();
        let go_term_id = identifiers.resolve_go_term(go_term);

        let mut hits: Vec<GoTermHit<'_>> = self
            .index
            .relationships()
            .proteins_for_go_term(go_term_id)
            .iter()
            .filter(|scored| scored.score >= min_score)
            .filter_map(|scored| {
                identifiers.protein(&scored.protein_id).map(|protein| GoTermHit {
                    protein,
                    score: scored.score,
                })
            })
            .collect();

        hits.sort_by(|a, b| b.score.total_cmp(&a.score));
        hits.truncate(limit);
        hits
    }
}
