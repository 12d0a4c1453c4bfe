use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use std::sync::Arc;

use crate::application::use_cases::answer_query::{AnswerQueryError, AnswerQueryRequest};
use crate::application::use_cases::{AnswerQueryUseCase, GetRecentQueriesUseCase};
use crate::presentation::http::dto::{
    ApiResponse, QueryRecordDto, QueryRequestDto, QueryResponseDto, RecentQueriesParamsDto,
};

pub struct QueryHandler {
    answer_use_case: Arc<AnswerQueryUseCase>,
    recent_use_case: Arc<GetRecentQueriesUseCase>,
}

impl QueryHandler {
    pub fn new(
        answer_use_case: Arc<AnswerQueryUseCase>,
        recent_use_case: Arc<GetRecentQueriesUseCase>,
    ) -> Self {
        Self {
            answer_use_case,
            recent_use_case,
        }
    }

    pub async fn answer_query(
        State(handler): State<Arc<QueryHandler>>,
        Json(payload): Json<QueryRequestDto>,
    ) -> impl IntoResponse {
        let request = AnswerQueryRequest {
            query: payload.query,
            document_id: payload.document_id,
        };

        match handler.answer_use_case.execute(request).await {
            Ok(answer) => (
                StatusCode::OK,
                Json(ApiResponse::success(QueryResponseDto::from(answer))),
            ),
            Err(AnswerQueryError::ValidationError(msg)) => (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::error("EMPTY_QUERY".to_string(), msg, None)),
            ),
        }
    }

    pub async fn recent_queries(
        State(handler): State<Arc<QueryHandler>>,
        Query(params): Query<RecentQueriesParamsDto>,
    ) -> impl IntoResponse {
        match handler.recent_use_case.execute(params.limit).await {
            Ok(records) => {
                let dtos: Vec<QueryRecordDto> =
                    records.into_iter().map(QueryRecordDto::from).collect();
                (StatusCode::OK, Json(ApiResponse::success(dtos)))
            }
            Err(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(
                    "QUERY_LOG_FAILED".to_string(),
                    e.to_string(),
                    None,
                )),
            ),
        }
    }
}
