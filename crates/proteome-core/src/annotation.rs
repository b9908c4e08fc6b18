//! Derived, read-only relationship records

use crate::edge::Edge;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A protein's link to a GO term
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionalAnnotation {
    pub protein_id: String,

    pub go_term_id: String,

    /// Copied from the GO term at build time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub go_term_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub go_code: Option<String>,

    #[serde(rename = "ML_prediction_score", skip_serializing_if = "Option::is_none")]
    pub ml_prediction_score: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub string_combined_score: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
}

impl FunctionalAnnotation {
    pub fn from_edge(edge: Edge, go_term_name: Option<String>) -> Self {
        Self {
            protein_id: edge.source,
            go_term_id: edge.target,
            go_term_name,
            go_code: edge.go_code,
            ml_prediction_score: edge.ml_prediction_score,
            string_combined_score: edge.string_combined_score,
            dataset: edge.dataset,
            date: edge.date,
        }
    }
}

/// An interaction between two proteins, seen from the source side
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProteinInteraction {
    pub source_protein_id: String,

    pub target_protein_id: String,

    /// Copied from the target protein at build time, if it is loaded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_protein_name: Option<String>,

    #[serde(rename = "ML_prediction_score", skip_serializing_if = "Option::is_none")]
    pub ml_prediction_score: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub string_combined_score: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
}

impl ProteinInteraction {
    pub fn from_edge(edge: Edge, target_protein_name: Option<String>) -> Self {
        Self {
            source_protein_id: edge.source,
            target_protein_id: edge.target,
            target_protein_name,
            ml_prediction_score: edge.ml_prediction_score,
            string_combined_score: edge.string_combined_score,
            dataset: edge.dataset,
            date: edge.date,
        }
    }
}

/// A (protein, relevance score) pair attached to a GO term
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredProtein {
    pub protein_id: String,
    pub score: f64,
}
