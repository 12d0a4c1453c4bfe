use std::sync::Arc;

use uuid::Uuid;

use crate::domain::repositories::chunk_repository::ChunkRepositoryError;
use crate::domain::repositories::document_repository::DocumentRepositoryError;
use crate::domain::repositories::progress_repository::ProgressRepositoryError;
use crate::domain::repositories::{ChunkRepository, DocumentRepository, ProgressRepository};

#[derive(Debug)]
pub enum DeleteDocumentError {
    NotFound(Uuid),
    RepositoryError(String),
}

impl std::fmt::Display for DeleteDocumentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeleteDocumentError::NotFound(id) => write!(f, "Document not found: {}", id),
            DeleteDocumentError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for DeleteDocumentError {}

impl From<DocumentRepositoryError> for DeleteDocumentError {
    fn from(error: DocumentRepositoryError) -> Self {
        DeleteDocumentError::RepositoryError(error.to_string())
    }
}

impl From<ChunkRepositoryError> for DeleteDocumentError {
    fn from(error: ChunkRepositoryError) -> Self {
        DeleteDocumentError::RepositoryError(error.to_string())
    }
}

impl From<ProgressRepositoryError> for DeleteDocumentError {
    fn from(error: ProgressRepositoryError) -> Self {
        DeleteDocumentError::RepositoryError(error.to_string())
    }
}

#[derive(Debug, Clone)]
pub struct DeleteDocumentResponse {
    pub document_id: Uuid,
    pub deleted_chunks: i64,
}

/// Removes a document together with its chunks and progress record. A
/// pipeline step still in flight for the document lands on a missing
/// document and abandons itself.
pub struct DeleteDocumentUseCase {
    document_repository: Arc<dyn DocumentRepository>,
    chunk_repository: Arc<dyn ChunkRepository>,
    progress_repository: Arc<dyn ProgressRepository>,
}

impl DeleteDocumentUseCase {
    pub fn new(
        document_repository: Arc<dyn DocumentRepository>,
        chunk_repository: Arc<dyn ChunkRepository>,
        progress_repository: Arc<dyn ProgressRepository>,
    ) -> Self {
        Self {
            document_repository,
            chunk_repository,
            progress_repository,
        }
    }

    pub async fn execute(
        &self,
        document_id: Uuid,
    ) -> Result<DeleteDocumentResponse, DeleteDocumentError> {
        let deleted = self.document_repository.delete(document_id).await?;
        if !deleted {
            return Err(DeleteDocumentError::NotFound(document_id));
        }

        let deleted_chunks = self.chunk_repository.delete_by_document_id(document_id).await?;
        self.progress_repository.delete_by_document_id(document_id).await?;

        tracing::info!(
            "document {} deleted along with {} chunks",
            document_id,
            deleted_chunks
        );

        Ok(DeleteDocumentResponse {
            document_id,
            deleted_chunks,
        })
    }
}
