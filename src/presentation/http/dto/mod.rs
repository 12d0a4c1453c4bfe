pub mod document_dto;
pub mod query_dto;
pub mod response_dto;

pub use document_dto::{
    DeleteResponseDto, DocumentDetailDto, DocumentStatusDto, DocumentSummaryDto,
    UploadDocumentDto, UploadResponseDto,
};
pub use query_dto::{QueryRecordDto, QueryRequestDto, QueryResponseDto, RecentQueriesParamsDto};
pub use response_dto::{ApiError, ApiResponse, HealthResponseDto};
