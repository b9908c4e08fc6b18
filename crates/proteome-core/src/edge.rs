//! Generic edges and their classification

use crate::fields;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Relationship tags ending with this suffix link a protein to a GO term
pub const FUNCTIONAL_ANNOTATION_SUFFIX: &str = "FunctionalAnnotation";

/// Exact relationship tag linking two proteins
pub const PROTEIN_INTERACTION: &str = "Protein-Protein-ProteinProteinInteraction";

/// Relationship family of an edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationshipKind {
    /// Protein -> GO term
    FunctionalAnnotation,
    /// Protein -> protein
    ProteinInteraction,
    /// Not indexed
    Other,
}

impl RelationshipKind {
    pub fn classify(relationship: &str) -> Self {
        if relationship.ends_with(FUNCTIONAL_ANNOTATION_SUFFIX) {
            Self::FunctionalAnnotation
        } else if relationship == PROTEIN_INTERACTION {
            Self::ProteinInteraction
        } else {
            Self::Other
        }
    }
}

/// An edge from the snapshot's edge list
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Edge {
    pub source: String,

    pub target: String,

    pub relationship: String,

    #[serde(default, deserialize_with = "fields::text")]
    pub go_code: Option<String>,

    #[serde(
        rename = "ML_prediction_score",
        default,
        deserialize_with = "fields::score"
    )]
    pub ml_prediction_score: Option<f64>,

    #[serde(default, deserialize_with = "fields::score")]
    pub string_combined_score: Option<f64>,

    #[serde(default, deserialize_with = "fields::dataset")]
    pub dataset: Option<String>,

    #[serde(default, deserialize_with = "fields::date")]
    pub date: Option<DateTime<Utc>>,
}

impl Edge {
    pub fn new(
        source: impl Into<String>,
        target: impl Into<String>,
        relationship: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            relationship: relationship.into(),
            ..Default::default()
        }
    }

    pub fn with_ml_score(mut self, score: f64) -> Self {
        self.ml_prediction_score = Some(score);
        self
    }

    pub fn with_combined_score(mut self, score: f64) -> Self {
        self.string_combined_score = Some(score);
        self
    }

    pub fn with_dataset(mut self, dataset: impl Into<String>) -> Self {
        self.dataset = Some(dataset.into());
        self
    }

    pub fn kind(&self) -> RelationshipKind {
        RelationshipKind::classify(&self.relationship)
    }

    /// ML prediction score, else combined score, else 0.0
    pub fn relevance_score(&self) -> f64 {
        self.ml_prediction_score
            .filter(|s| !s.is_nan())
            .or(self.string_combined_score.filter(|s| !s.is_nan()))
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_classify() {
        assert_eq!(
            RelationshipKind::classify("Protein-GOFunctionalAnnotation"),
            RelationshipKind::FunctionalAnnotation
        );
        assert_eq!(
            RelationshipKind::classify("Protein-GO-PredictedFunctionalAnnotation"),
            RelationshipKind::FunctionalAnnotation
        );
        assert_eq!(
            RelationshipKind::classify(PROTEIN_INTERACTION),
            RelationshipKind::ProteinInteraction
        );
        assert_eq!(
            RelationshipKind::classify("protein-protein-proteinproteininteraction"),
            RelationshipKind::Other
        );
        assert_eq!(
            RelationshipKind::classify("FunctionalAnnotationOf"),
            RelationshipKind::Other
        );
    }

    #[test]
    fn test_relevance_score_precedence() {
        let edge = Edge::new("P1", "G1", "Protein-GOFunctionalAnnotation");
        assert_eq!(edge.relevance_score(), 0.0);

        let edge = edge.with_combined_score(0.4);
        assert_eq!(edge.relevance_score(), 0.4);

        let edge = edge.with_ml_score(0.9);
        assert_eq!(edge.relevance_score(), 0.9);
    }

    #[test]
    fn test_zero_ml_score_is_present() {
        let edge = Edge::new("P1", "G1", "Protein-GOFunctionalAnnotation")
            .with_ml_score(0.0)
            .with_combined_score(0.7);
        assert_eq!(edge.relevance_score(), 0.0);
    }

    #[test]
    fn test_missing_ml_score_falls_back() {
        let edge: Edge = serde_json::from_value(json!({
            "source": "P1",
            "target": "G1",
            "relationship": "Protein-GOFunctionalAnnotation",
            "ML_prediction_score": "NaN",
            "string_combined_score": 0.55,
            "dataset": ["STRING"]
        }))
        .unwrap();

        assert!(edge.ml_prediction_score.is_none());
        assert_eq!(edge.relevance_score(), 0.55);
        assert_eq!(edge.dataset.as_deref(), Some("STRING"));
    }
}
