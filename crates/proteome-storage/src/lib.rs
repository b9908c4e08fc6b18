//! Proteome Storage - Record sources for the index build pass
//!
//! A record source hands the four snapshot batches to
//! [`proteome_core::ProteinIndex::build`]. Any failure to read a batch is
//! fatal: no index is built from a partial snapshot.

pub mod error;
pub mod json;
pub mod memory;
pub mod traits;

pub use error::{StorageError, StorageResult};
pub use json::{BatchPaths, JsonSource};
pub use memory::MemorySource;
pub use traits::RecordSource;
