use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::services::query_service::QueryAnswer;
use crate::domain::entities::QueryRecord;

#[derive(Debug, Deserialize)]
pub struct QueryRequestDto {
    pub query: String,
    pub document_id: Option<Uuid>,
}

#[derive(Debug, Serialize)]
pub struct QueryResponseDto {
    pub response: String,
    pub context: String,
}

impl From<QueryAnswer> for QueryResponseDto {
    fn from(answer: QueryAnswer) -> Self {
        Self {
            response: answer.response,
            context: answer.context,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RecentQueriesParamsDto {
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct QueryRecordDto {
    pub id: Uuid,
    pub query: String,
    pub response: String,
    pub document_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl From<QueryRecord> for QueryRecordDto {
    fn from(record: QueryRecord) -> Self {
        Self {
            id: record.id(),
            query: record.query().to_string(),
            response: record.response().to_string(),
            document_id: record.document_id(),
            created_at: record.created_at(),
        }
    }
}
