use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A logged question and its generated answer. Append-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryRecord {
    id: Uuid,
    query: String,
    response: String,
    document_id: Option<Uuid>,
    created_at: DateTime<Utc>,
}

impl QueryRecord {
    pub fn new(query: String, response: String, document_id: Option<Uuid>) -> Self {
        Self {
            id: Uuid::new_v4(),
            query,
            response,
            document_id,
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn response(&self) -> &str {
        &self.response
    }

    pub fn document_id(&self) -> Option<Uuid> {
        self.document_id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_creation() {
        let document_id = Uuid::new_v4();
        let record = QueryRecord::new(
            "What skills are listed?".to_string(),
            "Go and Rust.".to_string(),
            Some(document_id),
        );

        assert_eq!(record.query(), "What skills are listed?");
        assert_eq!(record.response(), "Go and Rust.");
        assert_eq!(record.document_id(), Some(document_id));
    }
}
