use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::Document;
use crate::domain::repositories::{DocumentRepository, document_repository::DocumentRepositoryError};

/// Process-local document store keyed by id.
pub struct InMemoryDocumentRepository {
    documents: RwLock<HashMap<Uuid, Document>>,
}

impl InMemoryDocumentRepository {
    pub fn new() -> Self {
        Self {
            documents: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryDocumentRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentRepository for InMemoryDocumentRepository {
    async fn save(&self, document: &Document) -> Result<(), DocumentRepositoryError> {
        let mut documents = self.documents.write().await;
        documents.insert(document.id(), document.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Document>, DocumentRepositoryError> {
        let documents = self.documents.read().await;
        Ok(documents.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Document>, DocumentRepositoryError> {
        let documents = self.documents.read().await;
        let mut all: Vec<Document> = documents.values().cloned().collect();
        all.sort_by_key(|d| d.uploaded_at());
        Ok(all)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DocumentRepositoryError> {
        let mut documents = self.documents.write().await;
        Ok(documents.remove(&id).is_some())
    }

    async fn count(&self) -> Result<i64, DocumentRepositoryError> {
        let documents = self.documents.read().await;
        Ok(documents.len() as i64)
    }
}
