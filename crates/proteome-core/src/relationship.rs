//! Edge classification into annotation and interaction lookups

use crate::annotation::{FunctionalAnnotation, ProteinInteraction, ScoredProtein};
use crate::edge::{Edge, RelationshipKind};
use crate::identifier::IdentifierIndex;
use crate::stats::EdgeStats;
use std::collections::HashMap;

/// Per-protein and per-GO-term relationship lookups
///
/// Keys are the raw edge endpoints. Nothing is de-duplicated: repeated
/// edges (e.g. one per dataset) all stay visible.
#[derive(Debug, Default)]
pub struct RelationshipIndex {
    annotations_by_protein: HashMap<String, Vec<FunctionalAnnotation>>,
    proteins_by_go_term: HashMap<String, Vec<ScoredProtein>>,
    interactions_by_protein: HashMap<String, Vec<ProteinInteraction>>,
}

impl RelationshipIndex {
    /// Fold the edge batch into lookups
    ///
    /// GO terms and proteins must already be registered in `identifiers`.
    /// Annotation edges pointing at an unknown GO term are dropped;
    /// edges of any other relationship family are ignored.
    pub fn build<I>(edges: I, identifiers: &IdentifierIndex) -> (Self, EdgeStats)
    where
        I: IntoIterator<Item = Edge>,
    {
        edges.into_iter().fold(
            (Self::default(), EdgeStats::default()),
            |(mut index, mut stats), edge| {
                index.ingest(edge, identifiers, &mut stats);
                (index, stats)
            },
        )
    }

    fn ingest(&mut self, edge: Edge, identifiers: &IdentifierIndex, stats: &mut EdgeStats) {
        match edge.kind() {
            RelationshipKind::FunctionalAnnotation => {
                let Some(go_term) = identifiers.go_term(&edge.target) else {
                    tracing::debug!(
                        "Dropping annotation {} -> {}: unknown GO term",
                        edge.source,
                        edge.target
                    );
                    stats.dropped_annotations += 1;
                    return;
                };

                let scored = ScoredProtein {
                    protein_id: edge.source.clone(),
                    score: edge.relevance_score(),
                };
                self.proteins_by_go_term
                    .entry(edge.target.clone())
                    .or_default()
                    .push(scored);

                let annotation = FunctionalAnnotation::from_edge(edge, go_term.name.clone());
                self.annotations_by_protein
                    .entry(annotation.protein_id.clone())
                    .or_default()
                    .push(annotation);
                stats.annotations += 1;
            }
            RelationshipKind::ProteinInteraction => {
                let target_name = identifiers
                    .protein(&edge.target)
                    .and_then(|p| p.name.clone());
                let interaction = ProteinInteraction::from_edge(edge, target_name);
                self.interactions_by_protein
                    .entry(interaction.source_protein_id.clone())
                    .or_default()
                    .push(interaction);
                stats.interactions += 1;
            }
            RelationshipKind::Other => {
                tracing::trace!("Ignoring edge with relationship {}", edge.relationship);
                stats.ignored += 1;
            }
        }
    }

    /// Annotations keyed by primary protein id
    pub fn annotations(&self, protein_id: &str) -> &[FunctionalAnnotation] {
        self.annotations_by_protein
            .get(protein_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Interactions where `protein_id` is the source
    pub fn interactions(&self, protein_id: &str) -> &[ProteinInteraction] {
        self.interactions_by_protein
            .get(protein_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Scored proteins annotated with a GO term, in edge order
    pub fn proteins_for_go_term(&self, go_term_id: &str) -> &[ScoredProtein] {
        self.proteins_by_go_term
            .get(go_term_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn annotation_count(&self) -> usize {
        self.annotations_by_protein.values().map(Vec::len).sum()
    }

    pub fn interaction_count(&self) -> usize {
        self.interactions_by_protein.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edge::PROTEIN_INTERACTION;
    use crate::go_term::GoTerm;
    use crate::identifier::IdentifierIndexBuilder;
    use crate::protein::ProteinRecord;

    fn identifiers() -> IdentifierIndex {
        let mut builder = IdentifierIndexBuilder::new();
        builder.add_protein(ProteinRecord::new("P1").with_name("Kinase A"));
        builder.add_protein(ProteinRecord::new("P2").with_name("Kinase B"));
        builder.add_go_term(GoTerm::new("G1", "ATP binding"));
        builder.finish()
    }

    #[test]
    fn test_annotation_edges() {
        let ids = identifiers();
        let edges = vec![
            Edge::new("P1", "G1", "Protein-GOFunctionalAnnotation").with_ml_score(0.8),
            Edge::new("P1", "G1", "Protein-GOFunctionalAnnotation")
                .with_combined_score(0.3)
                .with_dataset("STRING"),
            Edge::new("P1", "G404", "Protein-GOFunctionalAnnotation"),
        ];

        let (index, stats) = RelationshipIndex::build(edges, &ids);

        let annotations = index.annotations("P1");
        assert_eq!(annotations.len(), 2);
        assert_eq!(annotations[0].go_term_name.as_deref(), Some("ATP binding"));
        assert_eq!(annotations[0].ml_prediction_score, Some(0.8));

        let scored = index.proteins_for_go_term("G1");
        assert_eq!(scored.len(), 2);
        assert_eq!(scored[0].score, 0.8);
        assert_eq!(scored[1].score, 0.3);
        assert!(index.proteins_for_go_term("G404").is_empty());

        assert_eq!(stats.annotations, 2);
        assert_eq!(stats.dropped_annotations, 1);
    }

    #[test]
    fn test_interaction_edges() {
        let ids = identifiers();
        let edges = vec![
            Edge::new("P1", "P2", PROTEIN_INTERACTION).with_combined_score(0.9),
            Edge::new("P1", "P9", PROTEIN_INTERACTION),
        ];

        let (index, stats) = RelationshipIndex::build(edges, &ids);

        let interactions = index.interactions("P1");
        assert_eq!(interactions.len(), 2);
        assert_eq!(interactions[0].target_protein_name.as_deref(), Some("Kinase B"));
        assert!(interactions[1].target_protein_name.is_none());
        assert!(index.interactions("P2").is_empty());
        assert_eq!(stats.interactions, 2);
    }

    #[test]
    fn test_other_edges_ignored() {
        let ids = identifiers();
        let edges = vec![Edge::new("P1", "P2", "Protein-Gene-Encodes")];

        let (index, stats) = RelationshipIndex::build(edges, &ids);

        assert_eq!(index.annotation_count(), 0);
        assert_eq!(index.interaction_count(), 0);
        assert_eq!(stats.ignored, 1);
    }
}
