use std::sync::Arc;

use uuid::Uuid;

use crate::application::services::QueryService;
use crate::application::services::query_service::QueryAnswer;

#[derive(Debug)]
pub enum AnswerQueryError {
    ValidationError(String),
}

impl std::fmt::Display for AnswerQueryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnswerQueryError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
        }
    }
}

impl std::error::Error for AnswerQueryError {}

#[derive(Debug, Clone)]
pub struct AnswerQueryRequest {
    pub query: String,
    pub document_id: Option<Uuid>,
}

pub struct AnswerQueryUseCase {
    query_service: Arc<QueryService>,
}

impl AnswerQueryUseCase {
    pub fn new(query_service: Arc<QueryService>) -> Self {
        Self { query_service }
    }

    pub async fn execute(&self, request: AnswerQueryRequest) -> Result<QueryAnswer, AnswerQueryError> {
        if request.query.trim().is_empty() {
            return Err(AnswerQueryError::ValidationError(
                "Query cannot be empty".to_string(),
            ));
        }

        Ok(self
            .query_service
            .answer(request.query.trim(), request.document_id)
            .await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use async_trait::async_trait;

    use crate::application::ports::completion_provider::{
        CompletionProvider, CompletionProviderError,
    };
    use crate::application::ports::embedding_provider::{
        EmbeddingProvider, EmbeddingProviderError,
    };
    use crate::application::services::RetrievalService;
    use crate::infrastructure::persistence::{InMemoryChunkRepository, InMemoryQueryRepository};

    struct StubEmbedder;

    #[async_trait]
    impl EmbeddingProvider for StubEmbedder {
        async fn embed(&self, _text: &str) -> Result<Vec<f32>, EmbeddingProviderError> {
            Ok(vec![1.0, 0.0])
        }

        fn embedding_dimension(&self) -> usize {
            2
        }
    }

    struct StubCompleter;

    #[async_trait]
    impl CompletionProvider for StubCompleter {
        async fn complete(
            &self,
            _system_prompt: &str,
            _user_prompt: &str,
        ) -> Result<String, CompletionProviderError> {
            Ok("stub answer".to_string())
        }
    }

    fn use_case() -> AnswerQueryUseCase {
        let service = QueryService::new(
            Arc::new(StubEmbedder),
            Arc::new(StubCompleter),
            Arc::new(RetrievalService::new(Arc::new(
                InMemoryChunkRepository::new(),
            ))),
            Arc::new(InMemoryQueryRepository::new()),
        );
        AnswerQueryUseCase::new(Arc::new(service))
    }

    #[tokio::test]
    async fn test_blank_query_is_rejected() {
        let result = use_case()
            .execute(AnswerQueryRequest {
                query: "   ".to_string(),
                document_id: None,
            })
            .await;
        assert!(matches!(result, Err(AnswerQueryError::ValidationError(_))));
    }

    #[tokio::test]
    async fn test_query_is_trimmed_before_answering() {
        let answer = use_case()
            .execute(AnswerQueryRequest {
                query: "  skills?  ".to_string(),
                document_id: None,
            })
            .await
            .unwrap();
        assert_eq!(answer.response, "stub answer");
    }
}
