//! CLI command implementations

pub mod completions;
pub mod config;
pub mod go_term;
pub mod protein;
pub mod search;
pub mod stats;
