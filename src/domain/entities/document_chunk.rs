use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A bounded span of a document's text together with its embedding vector.
/// Chunk indices are zero-based and contiguous within a completed document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentChunk {
    id: Uuid,
    document_id: Uuid,
    chunk_index: i32,
    text: String,
    embedding: Vec<f32>,
    created_at: DateTime<Utc>,
}

impl DocumentChunk {
    pub fn new(document_id: Uuid, chunk_index: i32, text: String, embedding: Vec<f32>) -> Self {
        Self {
            id: Uuid::new_v4(),
            document_id,
            chunk_index,
            text,
            embedding,
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn document_id(&self) -> Uuid {
        self.document_id
    }

    pub fn chunk_index(&self) -> i32 {
        self.chunk_index
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn embedding(&self) -> &[f32] {
        &self.embedding
    }

    pub fn dimension(&self) -> usize {
        self.embedding.len()
    }

    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }

    pub fn belongs_to(&self, document_id: Uuid) -> bool {
        self.document_id == document_id
    }
}
