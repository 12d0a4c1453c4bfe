use std::sync::Arc;

use uuid::Uuid;

use crate::application::ports::completion_provider::CompletionProvider;
use crate::application::ports::embedding_provider::EmbeddingProvider;
use crate::application::services::retrieval_service::{RetrievalService, SearchScope};
use crate::domain::entities::QueryRecord;
use crate::domain::repositories::QueryRepository;

/// How many chunks feed the completion prompt.
const RETRIEVAL_LIMIT: usize = 5;

const SYSTEM_PROMPT: &str = "You are a helpful resume analyst. Use the provided resume \
     context to answer the user's question accurately. If the answer is not present in \
     the context, say that you don't have enough information.";

const FALLBACK_RESPONSE: &str =
    "Sorry, there was an error processing your query. Please try again.";

#[derive(Debug)]
enum QueryServiceError {
    EmbeddingError(String),
    RetrievalError(String),
    CompletionError(String),
    RepositoryError(String),
}

impl std::fmt::Display for QueryServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueryServiceError::EmbeddingError(msg) => write!(f, "Embedding error: {}", msg),
            QueryServiceError::RetrievalError(msg) => write!(f, "Retrieval error: {}", msg),
            QueryServiceError::CompletionError(msg) => write!(f, "Completion error: {}", msg),
            QueryServiceError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct QueryAnswer {
    pub response: String,
    pub context: String,
}

/// Composes query answering: embed the question, retrieve the closest chunks,
/// prompt the completion model with them, log the exchange.
///
/// Query answering never propagates provider failures; one failure anywhere
/// degrades to a fixed fallback answer with empty context and no logged
/// record.
pub struct QueryService {
    embedding_provider: Arc<dyn EmbeddingProvider>,
    completion_provider: Arc<dyn CompletionProvider>,
    retrieval_service: Arc<RetrievalService>,
    query_repository: Arc<dyn QueryRepository>,
}

impl QueryService {
    pub fn new(
        embedding_provider: Arc<dyn EmbeddingProvider>,
        completion_provider: Arc<dyn CompletionProvider>,
        retrieval_service: Arc<RetrievalService>,
        query_repository: Arc<dyn QueryRepository>,
    ) -> Self {
        Self {
            embedding_provider,
            completion_provider,
            retrieval_service,
            query_repository,
        }
    }

    pub async fn answer(&self, question: &str, document_id: Option<Uuid>) -> QueryAnswer {
        match self.try_answer(question, document_id).await {
            Ok(answer) => answer,
            Err(e) => {
                tracing::error!("error processing query: {}", e);
                QueryAnswer {
                    response: FALLBACK_RESPONSE.to_string(),
                    context: String::new(),
                }
            }
        }
    }

    async fn try_answer(
        &self,
        question: &str,
        document_id: Option<Uuid>,
    ) -> Result<QueryAnswer, QueryServiceError> {
        let query_embedding = self
            .embedding_provider
            .embed(question)
            .await
            .map_err(|e| QueryServiceError::EmbeddingError(e.to_string()))?;

        let scope = match document_id {
            Some(id) => SearchScope::Document(id),
            None => SearchScope::All,
        };

        let results = self
            .retrieval_service
            .search(&query_embedding, scope, RETRIEVAL_LIMIT)
            .await
            .map_err(|e| QueryServiceError::RetrievalError(e.to_string()))?;

        let context = results
            .iter()
            .map(|result| result.chunk.text())
            .collect::<Vec<_>>()
            .join("\n\n");

        let user_prompt = format!(
            "Context from resume:\n{}\n\nQuestion: {}",
            context, question
        );

        let response = self
            .completion_provider
            .complete(SYSTEM_PROMPT, &user_prompt)
            .await
            .map_err(|e| QueryServiceError::CompletionError(e.to_string()))?;

        let record = QueryRecord::new(question.to_string(), response.clone(), document_id);
        self.query_repository
            .save(&record)
            .await
            .map_err(|e| QueryServiceError::RepositoryError(e.to_string()))?;

        Ok(QueryAnswer { response, context })
    }
}
