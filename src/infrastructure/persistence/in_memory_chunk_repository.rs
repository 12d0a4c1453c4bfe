use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::DocumentChunk;
use crate::domain::repositories::{ChunkRepository, chunk_repository::ChunkRepositoryError};

/// Process-local chunk store. Insertion order is preserved so unscoped
/// searches see a stable candidate order.
pub struct InMemoryChunkRepository {
    chunks: RwLock<Vec<DocumentChunk>>,
}

impl InMemoryChunkRepository {
    pub fn new() -> Self {
        Self {
            chunks: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryChunkRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChunkRepository for InMemoryChunkRepository {
    async fn save(&self, chunk: &DocumentChunk) -> Result<(), ChunkRepositoryError> {
        let mut chunks = self.chunks.write().await;
        match chunks.iter_mut().find(|existing| {
            existing.document_id() == chunk.document_id()
                && existing.chunk_index() == chunk.chunk_index()
        }) {
            Some(existing) => *existing = chunk.clone(),
            None => chunks.push(chunk.clone()),
        }
        Ok(())
    }

    async fn find_by_document_id(
        &self,
        document_id: Uuid,
    ) -> Result<Vec<DocumentChunk>, ChunkRepositoryError> {
        let chunks = self.chunks.read().await;
        let mut matching: Vec<DocumentChunk> = chunks
            .iter()
            .filter(|chunk| chunk.belongs_to(document_id))
            .cloned()
            .collect();
        matching.sort_by_key(|chunk| chunk.chunk_index());
        Ok(matching)
    }

    async fn find_all(&self) -> Result<Vec<DocumentChunk>, ChunkRepositoryError> {
        let chunks = self.chunks.read().await;
        Ok(chunks.clone())
    }

    async fn delete_by_document_id(
        &self,
        document_id: Uuid,
    ) -> Result<i64, ChunkRepositoryError> {
        let mut chunks = self.chunks.write().await;
        let before = chunks.len();
        chunks.retain(|chunk| !chunk.belongs_to(document_id));
        Ok((before - chunks.len()) as i64)
    }

    async fn count_by_document_id(
        &self,
        document_id: Uuid,
    ) -> Result<i64, ChunkRepositoryError> {
        let chunks = self.chunks.read().await;
        Ok(chunks.iter().filter(|c| c.belongs_to(document_id)).count() as i64)
    }
}
