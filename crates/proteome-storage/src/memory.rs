//! In-memory record source

use crate::error::StorageResult;
use crate::traits::RecordSource;
use async_trait::async_trait;
use proteome_core::RecordBatches;

/// Record source over batches already in memory
///
/// Useful for testing and for embedding the index in another process.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    batches: RecordBatches,
}

impl MemorySource {
    pub fn new(batches: RecordBatches) -> Self {
        Self { batches }
    }
}

impl From<RecordBatches> for MemorySource {
    fn from(batches: RecordBatches) -> Self {
        Self::new(batches)
    }
}

#[async_trait]
impl RecordSource for MemorySource {
    fn describe(&self) -> String {
        "memory".to_string()
    }

    async fn load(&self) -> StorageResult<RecordBatches> {
        Ok(self.batches.clone())
    }
}
