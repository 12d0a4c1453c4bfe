use async_trait::async_trait;

use crate::domain::entities::QueryRecord;

#[derive(Debug)]
pub enum QueryRepositoryError {
    StorageError(String),
}

impl std::fmt::Display for QueryRepositoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueryRepositoryError::StorageError(msg) => write!(f, "Storage error: {}", msg),
        }
    }
}

impl std::error::Error for QueryRepositoryError {}

#[async_trait]
pub trait QueryRepository: Send + Sync {
    async fn save(&self, record: &QueryRecord) -> Result<(), QueryRepositoryError>;

    /// Most recent records first.
    async fn find_recent(&self, limit: usize) -> Result<Vec<QueryRecord>, QueryRepositoryError>;
}
