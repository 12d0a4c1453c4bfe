use std::sync::Arc;

use crate::domain::entities::QueryRecord;
use crate::domain::repositories::{QueryRepository, query_repository::QueryRepositoryError};

const DEFAULT_LIMIT: usize = 10;

#[derive(Debug)]
pub enum GetRecentQueriesError {
    RepositoryError(String),
}

impl std::fmt::Display for GetRecentQueriesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GetRecentQueriesError::RepositoryError(msg) => {
                write!(f, "Repository error: {}", msg)
            }
        }
    }
}

impl std::error::Error for GetRecentQueriesError {}

impl From<QueryRepositoryError> for GetRecentQueriesError {
    fn from(error: QueryRepositoryError) -> Self {
        GetRecentQueriesError::RepositoryError(error.to_string())
    }
}

pub struct GetRecentQueriesUseCase {
    query_repository: Arc<dyn QueryRepository>,
}

impl GetRecentQueriesUseCase {
    pub fn new(query_repository: Arc<dyn QueryRepository>) -> Self {
        Self { query_repository }
    }

    pub async fn execute(
        &self,
        limit: Option<usize>,
    ) -> Result<Vec<QueryRecord>, GetRecentQueriesError> {
        let limit = limit.unwrap_or(DEFAULT_LIMIT);
        Ok(self.query_repository.find_recent(limit).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::infrastructure::persistence::InMemoryQueryRepository;

    #[tokio::test]
    async fn test_default_limit_caps_results() {
        let queries = Arc::new(InMemoryQueryRepository::new());
        for i in 0..15 {
            queries
                .save(&QueryRecord::new(
                    format!("question {}", i),
                    "answer".to_string(),
                    None,
                ))
                .await
                .unwrap();
        }

        let use_case = GetRecentQueriesUseCase::new(queries);

        let recent = use_case.execute(None).await.unwrap();
        assert_eq!(recent.len(), 10);
        assert_eq!(recent[0].query(), "question 14");

        let recent = use_case.execute(Some(3)).await.unwrap();
        assert_eq!(recent.len(), 3);
    }
}
