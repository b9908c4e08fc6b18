//! Build pass: record batches in, frozen [`ProteinIndex`] out

use crate::edge::Edge;
use crate::error::{Error, RecordKind, Result};
use crate::go_term::GoTerm;
use crate::id_record::IdRecord;
use crate::identifier::{IdentifierIndex, IdentifierIndexBuilder};
use crate::protein::ProteinRecord;
use crate::relationship::RelationshipIndex;
use crate::stats::{BuildStats, IndexStats};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// The four ordered batches a record source hands to the build pass
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordBatches {
    pub proteins: Vec<ProteinRecord>,
    pub go_terms: Vec<GoTerm>,
    pub edges: Vec<Edge>,
    pub id_records: Vec<IdRecord>,
}

impl RecordBatches {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_protein(mut self, record: ProteinRecord) -> Self {
        self.proteins.push(record);
        self
    }

    pub fn with_go_term(mut self, term: GoTerm) -> Self {
        self.go_terms.push(term);
        self
    }

    pub fn with_edge(mut self, edge: Edge) -> Self {
        self.edges.push(edge);
        self
    }

    pub fn with_id_record(mut self, record: IdRecord) -> Self {
        self.id_records.push(record);
        self
    }

    pub fn record_count(&self) -> usize {
        self.proteins.len() + self.go_terms.len() + self.edges.len() + self.id_records.len()
    }
}

/// Mutable build phase
///
/// Proteins and GO terms are registered as they arrive. Alias records
/// and edges are buffered and applied by [`IndexBuilder::finish`], once
/// every node is known.
#[derive(Debug, Default)]
pub struct IndexBuilder {
    identifiers: IdentifierIndexBuilder,
    id_records: Vec<IdRecord>,
    edges: Vec<Edge>,
    stats: BuildStats,
}

impl IndexBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_protein(&mut self, record: ProteinRecord) -> Result<()> {
        let position = self.stats.protein_records;
        if record.id.trim().is_empty() {
            return Err(Error::invalid_record(
                RecordKind::Protein,
                position,
                "empty primary id",
            ));
        }
        self.stats.protein_records += 1;
        let id = record.id.clone();
        if self.identifiers.add_protein(record) {
            tracing::warn!("Duplicate protein id {}, keeping the later record", id);
            self.stats.duplicate_proteins += 1;
        }
        Ok(())
    }

    pub fn add_proteins(&mut self, records: impl IntoIterator<Item = ProteinRecord>) -> Result<()> {
        records.into_iter().try_for_each(|record| self.add_protein(record))
    }

    pub fn add_go_term(&mut self, term: GoTerm) -> Result<()> {
        let position = self.stats.go_term_records;
        if term.id.trim().is_empty() {
            return Err(Error::invalid_record(
                RecordKind::GoTerm,
                position,
                "empty primary id",
            ));
        }
        self.stats.go_term_records += 1;
        let id = term.id.clone();
        if self.identifiers.add_go_term(term) {
            tracing::warn!("Duplicate GO term id {}, keeping the later record", id);
            self.stats.duplicate_go_terms += 1;
        }
        Ok(())
    }

    pub fn add_go_terms(&mut self, terms: impl IntoIterator<Item = GoTerm>) -> Result<()> {
        terms.into_iter().try_for_each(|term| self.add_go_term(term))
    }

    pub fn add_id_records(&mut self, records: impl IntoIterator<Item = IdRecord>) {
        self.id_records.extend(records);
    }

    pub fn add_edges(&mut self, edges: impl IntoIterator<Item = Edge>) {
        self.edges.extend(edges);
    }

    /// Apply aliases, fold edges, and freeze
    pub fn finish(self) -> ProteinIndex {
        let started = Instant::now();
        let Self {
            mut identifiers,
            id_records,
            edges,
            mut stats,
        } = self;

        for record in &id_records {
            if identifiers.apply_id_record(record) {
                stats.id_records_applied += 1;
            } else {
                tracing::debug!(
                    "Skipping alias record with unknown external id {:?}",
                    record.external_id
                );
                stats.id_records_unmatched += 1;
            }
        }

        let identifiers = identifiers.finish();
        let (relationships, edge_stats) = RelationshipIndex::build(edges, &identifiers);
        stats.edges = edge_stats;

        tracing::info!(
            "Built index: {} proteins, {} GO terms, {} annotations, {} interactions in {:?}",
            identifiers.protein_count(),
            identifiers.go_term_count(),
            edge_stats.annotations,
            edge_stats.interactions,
            started.elapsed()
        );
        if edge_stats.dropped_annotations > 0 || stats.id_records_unmatched > 0 {
            tracing::info!(
                "Skipped {} annotations with unknown GO terms and {} unmatched alias records",
                edge_stats.dropped_annotations,
                stats.id_records_unmatched
            );
        }

        ProteinIndex {
            identifiers,
            relationships,
            stats,
        }
    }
}

/// Immutable, fully built index; safe to share across threads
#[derive(Debug, Default)]
pub struct ProteinIndex {
    identifiers: IdentifierIndex,
    relationships: RelationshipIndex,
    stats: BuildStats,
}

impl ProteinIndex {
    /// Run the whole build pass over a set of batches
    pub fn build(batches: RecordBatches) -> Result<Self> {
        let RecordBatches {
            proteins,
            go_terms,
            edges,
            id_records,
        } = batches;

        let mut builder = IndexBuilder::new();
        builder.add_proteins(proteins)?;
        builder.add_go_terms(go_terms)?;
        builder.add_id_records(id_records);
        builder.add_edges(edges);
        Ok(builder.finish())
    }

    pub fn identifiers(&self) -> &IdentifierIndex {
        &self.identifiers
    }

    pub fn relationships(&self) -> &RelationshipIndex {
        &self.relationships
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            proteins: self.identifiers.protein_count(),
            go_terms: self.identifiers.go_term_count(),
            external_ids: self.identifiers.external_id_count(),
            secondary_ids: self.identifiers.secondary_id_count(),
            ambiguous_ids: self.identifiers.ambiguous_id_count(),
            annotations: self.relationships.annotation_count(),
            interactions: self.relationships.interaction_count(),
            build: self.stats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edge::PROTEIN_INTERACTION;

    #[test]
    fn test_empty_protein_id_is_fatal() {
        let batches = RecordBatches::new()
            .with_protein(ProteinRecord::new("P1"))
            .with_protein(ProteinRecord::new("  "));

        let err = ProteinIndex::build(batches).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidRecord {
                kind: RecordKind::Protein,
                position: 1,
                ..
            }
        ));
    }

    #[test]
    fn test_empty_go_term_id_is_fatal() {
        let batches = RecordBatches::new().with_go_term(GoTerm::new("", "nameless"));
        assert!(ProteinIndex::build(batches).is_err());
    }

    #[test]
    fn test_build_stats() {
        let batches = RecordBatches::new()
            .with_protein(ProteinRecord::new("P1").with_external_id("E1"))
            .with_protein(ProteinRecord::new("P2"))
            .with_protein(ProteinRecord::new("P2"))
            .with_go_term(GoTerm::new("G1", "ATP binding"))
            .with_id_record(IdRecord::new("E1").with_secondary_id("S1"))
            .with_id_record(IdRecord::new("E404"))
            .with_edge(Edge::new("P1", "G1", "Protein-GOFunctionalAnnotation"))
            .with_edge(Edge::new("P1", "G2", "Protein-GOFunctionalAnnotation"))
            .with_edge(Edge::new("P1", "P2", PROTEIN_INTERACTION))
            .with_edge(Edge::new("P1", "P2", "Protein-Gene-Encodes"));
        assert_eq!(batches.record_count(), 10);

        let index = ProteinIndex::build(batches).unwrap();
        let stats = index.stats();

        assert_eq!(stats.proteins, 2);
        assert_eq!(stats.go_terms, 1);
        assert_eq!(stats.secondary_ids, 1);
        assert_eq!(stats.annotations, 1);
        assert_eq!(stats.interactions, 1);
        assert_eq!(stats.build.protein_records, 3);
        assert_eq!(stats.build.duplicate_proteins, 1);
        assert_eq!(stats.build.id_records_applied, 1);
        assert_eq!(stats.build.id_records_unmatched, 1);
        assert_eq!(stats.build.edges.dropped_annotations, 1);
        assert_eq!(stats.build.edges.ignored, 1);
    }

    #[test]
    fn test_batch_order_does_not_matter() {
        let mut builder = IndexBuilder::new();
        builder.add_id_records(vec![IdRecord::new("E1").with_secondary_id("S1")]);
        builder.add_edges(vec![Edge::new("P1", "G1", "Protein-GOFunctionalAnnotation")]);
        builder
            .add_proteins(vec![ProteinRecord::new("P1").with_external_id("E1")])
            .unwrap();
        builder.add_go_terms(vec![GoTerm::new("G1", "ATP binding")]).unwrap();

        let index = builder.finish();
        assert_eq!(index.identifiers().resolve_protein("S1"), Some("P1"));
        assert_eq!(index.relationships().annotations("P1").len(), 1);
    }

    #[test]
    fn test_index_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ProteinIndex>();
    }
}
