use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::ChunkingProgress;

#[derive(Debug)]
pub enum ProgressRepositoryError {
    StorageError(String),
}

impl std::fmt::Display for ProgressRepositoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProgressRepositoryError::StorageError(msg) => write!(f, "Storage error: {}", msg),
        }
    }
}

impl std::error::Error for ProgressRepositoryError {}

#[async_trait]
pub trait ProgressRepository: Send + Sync {
    /// Insert or replace the single progress record of a document.
    async fn upsert(&self, progress: &ChunkingProgress) -> Result<(), ProgressRepositoryError>;

    async fn find_by_document_id(
        &self,
        document_id: Uuid,
    ) -> Result<Option<ChunkingProgress>, ProgressRepositoryError>;

    /// Progress records whose completion flag is still false, for crash
    /// recovery at startup.
    async fn find_incomplete(&self) -> Result<Vec<ChunkingProgress>, ProgressRepositoryError>;

    async fn delete_by_document_id(
        &self,
        document_id: Uuid,
    ) -> Result<bool, ProgressRepositoryError>;
}
