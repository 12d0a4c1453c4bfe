use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::application::use_cases::delete_document::DeleteDocumentError;
use crate::application::use_cases::get_document::GetDocumentError;
use crate::application::use_cases::get_document_status::GetDocumentStatusError;
use crate::application::use_cases::upload_document::{UploadDocumentError, UploadDocumentRequest};
use crate::application::use_cases::{
    DeleteDocumentUseCase, GetDocumentStatusUseCase, GetDocumentUseCase, ListDocumentsUseCase,
    UploadDocumentUseCase,
};
use crate::presentation::http::dto::{
    ApiResponse, DeleteResponseDto, DocumentDetailDto, DocumentStatusDto, DocumentSummaryDto,
    UploadDocumentDto, UploadResponseDto,
};

pub struct DocumentHandler {
    upload_use_case: Arc<UploadDocumentUseCase>,
    list_use_case: Arc<ListDocumentsUseCase>,
    get_use_case: Arc<GetDocumentUseCase>,
    status_use_case: Arc<GetDocumentStatusUseCase>,
    delete_use_case: Arc<DeleteDocumentUseCase>,
}

impl DocumentHandler {
    pub fn new(
        upload_use_case: Arc<UploadDocumentUseCase>,
        list_use_case: Arc<ListDocumentsUseCase>,
        get_use_case: Arc<GetDocumentUseCase>,
        status_use_case: Arc<GetDocumentStatusUseCase>,
        delete_use_case: Arc<DeleteDocumentUseCase>,
    ) -> Self {
        Self {
            upload_use_case,
            list_use_case,
            get_use_case,
            status_use_case,
            delete_use_case,
        }
    }

    pub async fn upload_document(
        State(handler): State<Arc<DocumentHandler>>,
        Json(payload): Json<UploadDocumentDto>,
    ) -> impl IntoResponse {
        let request = UploadDocumentRequest {
            filename: payload.filename,
            content_type: payload.content_type,
            data: payload.content.into_bytes(),
        };

        match handler.upload_use_case.execute(request).await {
            Ok(response) => (
                StatusCode::CREATED,
                Json(ApiResponse::success(UploadResponseDto::from(response))),
            ),
            Err(e) => {
                let (status, code) = match &e {
                    UploadDocumentError::UnsupportedFileType(_) => {
                        (StatusCode::UNSUPPORTED_MEDIA_TYPE, "UNSUPPORTED_FILE_TYPE")
                    }
                    UploadDocumentError::ValidationError(_) => {
                        (StatusCode::BAD_REQUEST, "VALIDATION_ERROR")
                    }
                    UploadDocumentError::ExtractionFailed(_) => {
                        (StatusCode::BAD_REQUEST, "EXTRACTION_FAILED")
                    }
                    _ => (StatusCode::INTERNAL_SERVER_ERROR, "UPLOAD_FAILED"),
                };
                (
                    status,
                    Json(ApiResponse::error(code.to_string(), e.to_string(), None)),
                )
            }
        }
    }

    pub async fn list_documents(
        State(handler): State<Arc<DocumentHandler>>,
    ) -> impl IntoResponse {
        match handler.list_use_case.execute().await {
            Ok(summaries) => {
                let dtos: Vec<DocumentSummaryDto> =
                    summaries.into_iter().map(DocumentSummaryDto::from).collect();
                (StatusCode::OK, Json(ApiResponse::success(dtos)))
            }
            Err(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(
                    "LIST_FAILED".to_string(),
                    e.to_string(),
                    None,
                )),
            ),
        }
    }

    pub async fn get_document(
        State(handler): State<Arc<DocumentHandler>>,
        Path(document_id): Path<Uuid>,
    ) -> impl IntoResponse {
        match handler.get_use_case.execute(document_id).await {
            Ok(document) => (
                StatusCode::OK,
                Json(ApiResponse::success(DocumentDetailDto::from(document))),
            ),
            Err(GetDocumentError::NotFound(id)) => (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::error(
                    "DOCUMENT_NOT_FOUND".to_string(),
                    format!("Document not found: {}", id),
                    None,
                )),
            ),
            Err(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(
                    "GET_FAILED".to_string(),
                    e.to_string(),
                    None,
                )),
            ),
        }
    }

    pub async fn get_document_status(
        State(handler): State<Arc<DocumentHandler>>,
        Path(document_id): Path<Uuid>,
    ) -> impl IntoResponse {
        match handler.status_use_case.execute(document_id).await {
            Ok(status) => (
                StatusCode::OK,
                Json(ApiResponse::success(DocumentStatusDto::from(status))),
            ),
            Err(GetDocumentStatusError::NotFound(id)) => (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::error(
                    "DOCUMENT_NOT_FOUND".to_string(),
                    format!("Document not found: {}", id),
                    None,
                )),
            ),
            Err(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(
                    "STATUS_FAILED".to_string(),
                    e.to_string(),
                    None,
                )),
            ),
        }
    }

    pub async fn delete_document(
        State(handler): State<Arc<DocumentHandler>>,
        Path(document_id): Path<Uuid>,
    ) -> impl IntoResponse {
        match handler.delete_use_case.execute(document_id).await {
            Ok(response) => (
                StatusCode::OK,
                Json(ApiResponse::success(DeleteResponseDto {
                    document_id: response.document_id,
                    deleted_chunks: response.deleted_chunks,
                })),
            ),
            Err(DeleteDocumentError::NotFound(id)) => (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::error(
                    "DOCUMENT_NOT_FOUND".to_string(),
                    format!("Document not found: {}", id),
                    None,
                )),
            ),
            Err(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(
                    "DELETE_FAILED".to_string(),
                    e.to_string(),
                    None,
                )),
            ),
        }
    }
}
