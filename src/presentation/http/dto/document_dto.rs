use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::use_cases::get_document_status::DocumentStatus;
use crate::application::use_cases::list_documents::DocumentSummary;
use crate::application::use_cases::upload_document::UploadDocumentResponse;
use crate::domain::entities::Document;

#[derive(Debug, Deserialize)]
pub struct UploadDocumentDto {
    pub filename: String,
    #[serde(default = "default_content_type")]
    pub content_type: String,
    pub content: String,
}

fn default_content_type() -> String {
    "text/plain".to_string()
}

#[derive(Debug, Serialize)]
pub struct UploadResponseDto {
    pub document_id: Uuid,
    pub filename: String,
    pub content_length: usize,
}

impl From<UploadDocumentResponse> for UploadResponseDto {
    fn from(response: UploadDocumentResponse) -> Self {
        Self {
            document_id: response.document_id,
            filename: response.filename,
            content_length: response.content_length,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DocumentSummaryDto {
    pub document_id: Uuid,
    pub filename: String,
    pub content_length: usize,
    pub uploaded_at: DateTime<Utc>,
}

impl From<DocumentSummary> for DocumentSummaryDto {
    fn from(summary: DocumentSummary) -> Self {
        Self {
            document_id: summary.document_id,
            filename: summary.filename,
            content_length: summary.content_length,
            uploaded_at: summary.uploaded_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DocumentDetailDto {
    pub document_id: Uuid,
    pub filename: String,
    pub content_type: String,
    pub content: String,
    pub uploaded_at: DateTime<Utc>,
}

impl From<Document> for DocumentDetailDto {
    fn from(document: Document) -> Self {
        Self {
            document_id: document.id(),
            filename: document.filename().to_string(),
            content_type: document.content_type().to_string(),
            content: document.content().to_string(),
            uploaded_at: document.uploaded_at(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DocumentStatusDto {
    pub document_id: Uuid,
    pub chunk_count: i64,
    pub position: usize,
    pub total_length: usize,
    pub is_complete: bool,
}

impl From<DocumentStatus> for DocumentStatusDto {
    fn from(status: DocumentStatus) -> Self {
        Self {
            document_id: status.document_id,
            chunk_count: status.chunk_count,
            position: status.position,
            total_length: status.total_length,
            is_complete: status.is_complete,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DeleteResponseDto {
    pub document_id: Uuid,
    pub deleted_chunks: i64,
}
