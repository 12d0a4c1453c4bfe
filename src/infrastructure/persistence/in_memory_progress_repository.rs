use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::ChunkingProgress;
use crate::domain::repositories::{ProgressRepository, progress_repository::ProgressRepositoryError};

/// Process-local progress store, one record per document.
pub struct InMemoryProgressRepository {
    records: RwLock<HashMap<Uuid, ChunkingProgress>>,
}

impl InMemoryProgressRepository {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryProgressRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProgressRepository for InMemoryProgressRepository {
    async fn upsert(&self, progress: &ChunkingProgress) -> Result<(), ProgressRepositoryError> {
        let mut records = self.records.write().await;
        records.insert(progress.document_id(), progress.clone());
        Ok(())
    }

    async fn find_by_document_id(
        &self,
        document_id: Uuid,
    ) -> Result<Option<ChunkingProgress>, ProgressRepositoryError> {
        let records = self.records.read().await;
        Ok(records.get(&document_id).cloned())
    }

    async fn find_incomplete(&self) -> Result<Vec<ChunkingProgress>, ProgressRepositoryError> {
        let records = self.records.read().await;
        Ok(records
            .values()
            .filter(|p| !p.is_complete())
            .cloned()
            .collect())
    }

    async fn delete_by_document_id(
        &self,
        document_id: Uuid,
    ) -> Result<bool, ProgressRepositoryError> {
        let mut records = self.records.write().await;
        Ok(records.remove(&document_id).is_some())
    }
}
