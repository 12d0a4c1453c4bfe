use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::QueryRecord;
use crate::domain::repositories::{QueryRepository, query_repository::QueryRepositoryError};

/// Append-only query log kept in insertion order.
pub struct InMemoryQueryRepository {
    records: RwLock<Vec<QueryRecord>>,
}

impl InMemoryQueryRepository {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryQueryRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl QueryRepository for InMemoryQueryRepository {
    async fn save(&self, record: &QueryRecord) -> Result<(), QueryRepositoryError> {
        let mut records = self.records.write().await;
        records.push(record.clone());
        Ok(())
    }

    async fn find_recent(&self, limit: usize) -> Result<Vec<QueryRecord>, QueryRepositoryError> {
        let records = self.records.read().await;
        Ok(records.iter().rev().take(limit).cloned().collect())
    }
}
