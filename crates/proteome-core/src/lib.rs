//! Proteome Core - In-memory protein index
//!
//! This crate turns protein, GO-term, edge and identifier-alias batches
//! into a read-only index, and exposes lookups over it: ranked search,
//! identifier resolution across alias tiers, functional annotations,
//! protein interactions and GO-term membership.

pub mod annotation;
pub mod edge;
pub mod engine;
pub mod error;
pub mod fields;
pub mod go_term;
pub mod id_record;
pub mod identifier;
pub mod index;
pub mod protein;
pub mod query;
pub mod relationship;
pub mod search;
pub mod stats;

pub use annotation::{FunctionalAnnotation, ProteinInteraction, ScoredProtein};
pub use edge::{Edge, RelationshipKind, FUNCTIONAL_ANNOTATION_SUFFIX, PROTEIN_INTERACTION};
pub use engine::{GoTermHit, ProteinDatabase, QueryEngine};
pub use error::{Error, RecordKind, Result};
pub use go_term::GoTerm;
pub use id_record::IdRecord;
pub use identifier::{IdentifierIndex, IdentifierIndexBuilder};
pub use index::{IndexBuilder, ProteinIndex, RecordBatches};
pub use protein::{Protein, ProteinDraft, ProteinRecord};
pub use query::{
    GoTermQuery, SearchQuery, DEFAULT_GO_TERM_LIMIT, DEFAULT_MIN_SCORE, DEFAULT_SEARCH_LIMIT,
};
pub use relationship::RelationshipIndex;
pub use search::{MatchTier, Needle};
pub use stats::{BuildStats, EdgeStats, IndexStats};
