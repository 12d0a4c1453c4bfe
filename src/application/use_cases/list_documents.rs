use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::repositories::{DocumentRepository, document_repository::DocumentRepositoryError};

#[derive(Debug)]
pub enum ListDocumentsError {
    RepositoryError(String),
}

impl std::fmt::Display for ListDocumentsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListDocumentsError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for ListDocumentsError {}

impl From<DocumentRepositoryError> for ListDocumentsError {
    fn from(error: DocumentRepositoryError) -> Self {
        ListDocumentsError::RepositoryError(error.to_string())
    }
}

#[derive(Debug, Clone)]
pub struct DocumentSummary {
    pub document_id: Uuid,
    pub filename: String,
    pub content_length: usize,
    pub uploaded_at: DateTime<Utc>,
}

pub struct ListDocumentsUseCase {
    document_repository: Arc<dyn DocumentRepository>,
}

impl ListDocumentsUseCase {
    pub fn new(document_repository: Arc<dyn DocumentRepository>) -> Self {
        Self {
            document_repository,
        }
    }

    pub async fn execute(&self) -> Result<Vec<DocumentSummary>, ListDocumentsError> {
        let documents = self.document_repository.find_all().await?;
        Ok(documents
            .into_iter()
            .map(|document| DocumentSummary {
                document_id: document.id(),
                filename: document.filename().to_string(),
                content_length: document.content_length(),
                uploaded_at: document.uploaded_at(),
            })
            .collect())
    }
}
