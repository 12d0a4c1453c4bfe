use std::sync::Arc;

use uuid::Uuid;

use crate::domain::repositories::chunk_repository::ChunkRepositoryError;
use crate::domain::repositories::document_repository::DocumentRepositoryError;
use crate::domain::repositories::progress_repository::ProgressRepositoryError;
use crate::domain::repositories::{ChunkRepository, DocumentRepository, ProgressRepository};

#[derive(Debug)]
pub enum GetDocumentStatusError {
    NotFound(Uuid),
    RepositoryError(String),
}

impl std::fmt::Display for GetDocumentStatusError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GetDocumentStatusError::NotFound(id) => write!(f, "Document not found: {}", id),
            GetDocumentStatusError::RepositoryError(msg) => {
                write!(f, "Repository error: {}", msg)
            }
        }
    }
}

impl std::error::Error for GetDocumentStatusError {}

impl From<DocumentRepositoryError> for GetDocumentStatusError {
    fn from(error: DocumentRepositoryError) -> Self {
        GetDocumentStatusError::RepositoryError(error.to_string())
    }
}

impl From<ChunkRepositoryError> for GetDocumentStatusError {
    fn from(error: ChunkRepositoryError) -> Self {
        GetDocumentStatusError::RepositoryError(error.to_string())
    }
}

impl From<ProgressRepositoryError> for GetDocumentStatusError {
    fn from(error: ProgressRepositoryError) -> Self {
        GetDocumentStatusError::RepositoryError(error.to_string())
    }
}

#[derive(Debug, Clone)]
pub struct DocumentStatus {
    pub document_id: Uuid,
    pub chunk_count: i64,
    pub position: usize,
    pub total_length: usize,
    pub is_complete: bool,
}

/// Reports how far a document's chunking pipeline has progressed.
pub struct GetDocumentStatusUseCase {
    document_repository: Arc<dyn DocumentRepository>,
    chunk_repository: Arc<dyn ChunkRepository>,
    progress_repository: Arc<dyn ProgressRepository>,
}

impl GetDocumentStatusUseCase {
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

    pub async fn execute(&self, document_id: Uuid) -> Result<DocumentStatus, GetDocumentStatusError> {
        let document = self
            .document_repository
            .find_by_id(document_id)
            .await?
            .ok_or(GetDocumentStatusError::NotFound(document_id))?;

        let chunk_count = self.chunk_repository.count_by_document_id(document_id).await?;
        let progress = self.progress_repository.find_by_document_id(document_id).await?;

        let (position, is_complete) = match progress {
            Some(progress) => (progress.position(), progress.is_complete()),
            None => (0, false),
        };

        Ok(DocumentStatus {
            document_id,
            chunk_count,
            position,
            total_length: document.content_length(),
            is_complete,
        })
    }
}
