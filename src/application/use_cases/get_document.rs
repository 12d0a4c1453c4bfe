use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::Document;
use crate::domain::repositories::{DocumentRepository, document_repository::DocumentRepositoryError};

#[derive(Debug)]
pub enum GetDocumentError {
    NotFound(Uuid),
    RepositoryError(String),
}

impl std::fmt::Display for GetDocumentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GetDocumentError::NotFound(id) => write!(f, "Document not found: {}", id),
            GetDocumentError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for GetDocumentError {}

impl From<DocumentRepositoryError> for GetDocumentError {
    fn from(error: DocumentRepositoryError) -> Self {
        GetDocumentError::RepositoryError(error.to_string())
    }
}

pub struct GetDocumentUseCase {
    document_repository: Arc<dyn DocumentRepository>,
}

impl GetDocumentUseCase {
    pub fn new(document_repository: Arc<dyn DocumentRepository>) -> Self {
        Self {
            document_repository,
        }
    }

    pub async fn execute(&self, document_id: Uuid) -> Result<Document, GetDocumentError> {
        self.document_repository
            .find_by_id(document_id)
            .await?
            .ok_or(GetDocumentError::NotFound(document_id))
    }
}
