use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::DocumentChunk;

#[derive(Debug)]
pub enum ChunkRepositoryError {
    StorageError(String),
}

impl std::fmt::Display for ChunkRepositoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChunkRepositoryError::StorageError(msg) => write!(f, "Storage error: {}", msg),
        }
    }
}

impl std::error::Error for ChunkRepositoryError {}

#[async_trait]
pub trait ChunkRepository: Send + Sync {
    /// Persist one chunk. Saves are idempotent on `(document_id, chunk_index)`
    /// so a retried pipeline step cannot produce duplicate indices.
    async fn save(&self, chunk: &DocumentChunk) -> Result<(), ChunkRepositoryError>;

    /// All chunks of one document, ordered by chunk index.
    async fn find_by_document_id(
        &self,
        document_id: Uuid,
    ) -> Result<Vec<DocumentChunk>, ChunkRepositoryError>;

    /// Every stored chunk, in insertion order.
    async fn find_all(&self) -> Result<Vec<DocumentChunk>, ChunkRepositoryError>;

    async fn delete_by_document_id(&self, document_id: Uuid)
    -> Result<i64, ChunkRepositoryError>;

    async fn count_by_document_id(&self, document_id: Uuid)
    -> Result<i64, ChunkRepositoryError>;
}
