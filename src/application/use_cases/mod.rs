pub mod answer_query;
pub mod delete_document;
pub mod get_document;
pub mod get_document_status;
pub mod get_recent_queries;
pub mod list_documents;
pub mod upload_document;

pub use answer_query::AnswerQueryUseCase;
pub use delete_document::DeleteDocumentUseCase;
pub use get_document::GetDocumentUseCase;
pub use get_document_status::GetDocumentStatusUseCase;
pub use get_recent_queries::GetRecentQueriesUseCase;
pub use list_documents::ListDocumentsUseCase;
pub use upload_document::UploadDocumentUseCase;
