//! Record source trait definitions

use crate::error::StorageResult;
use async_trait::async_trait;
use proteome_core::{ProteinIndex, RecordBatches};
use std::time::Instant;

/// Trait for anything that can supply a snapshot's record batches
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Human-readable origin, for logs
    fn describe(&self) -> String;

    /// Read all four batches
    async fn load(&self) -> StorageResult<RecordBatches>;

    /// Read all four batches and run the build pass over them
    async fn load_index(&self) -> StorageResult<ProteinIndex> {
        let started = Instant::now();
        let batches = self.load().await?;
        tracing::info!(
            "Loaded {} records from {} in {:?}",
            batches.record_count(),
            self.describe(),
            started.elapsed()
        );
        Ok(ProteinIndex::build(batches)?)
    }
}
