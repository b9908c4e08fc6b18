//! Query parameter types with the service defaults

use serde::{Deserialize, Serialize};

/// Default number of search results
pub const DEFAULT_SEARCH_LIMIT: usize = 10;

/// Default number of proteins returned per GO term
pub const DEFAULT_GO_TERM_LIMIT: usize = 10;

/// Default minimum relevance score for GO-term lookups
pub const DEFAULT_MIN_SCORE: f64 = 0.0;

/// Protein search parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchQuery {
    pub text: String,

    #[serde(default = "default_search_limit")]
    pub limit: usize,
}

fn default_search_limit() -> usize {
    DEFAULT_SEARCH_LIMIT
}

impl SearchQuery {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            limit: DEFAULT_SEARCH_LIMIT,
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
}

/// Parameters for listing proteins annotated with a GO term
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoTermQuery {
    /// Primary or external GO-term id
    pub go_term: String,

    #[serde(default = "default_min_score")]
    pub min_score: f64,

    #[serde(default = "default_go_term_limit")]
    pub limit: usize,
}

fn default_min_score() -> f64 {
    DEFAULT_MIN_SCORE
}

fn default_go_term_limit() -> usize {
    DEFAULT_GO_TERM_LIMIT
}

impl GoTermQuery {
    pub fn new(go_term: impl Into<String>) -> Self {
        Self {
            go_term: go_term.into(),
            min_score: DEFAULT_MIN_SCORE,
            limit: DEFAULT_GO_TERM_LIMIT,
        }
    }

    pub fn with_min_score(mut self, min_score: f64) -> Self {
        self.min_score = min_score;
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
}
