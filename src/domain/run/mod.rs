pub mod error;
pub mod model;

pub use error::StoreError;
pub use model::{AnyRecordPolicy, RunRecord, Stage, SPEECH_FAILED};

use async_trait::async_trait;

/// Append-only log of pipeline runs
#[async_trait]
pub trait RunStore: Send + Sync {
    /// Insert one record, creating the storage on first use
    async fn append(&self, record: &RunRecord) -> Result<(), StoreError>;

    /// Most recent value of `stage`'s column.
    ///
    /// Records whose query equals `query` win; without a match (or without a
    /// query) any record is eligible. Returns `None` on an empty store.
    async fn latest_for_stage(
        &self,
        stage: Stage,
        query: Option<&str>,
    ) -> Result<Option<String>, StoreError>;
}
