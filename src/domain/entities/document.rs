use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An uploaded resume: the raw extracted text plus upload metadata.
/// Immutable once created; deletion cascades to its chunks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    id: Uuid,
    filename: String,
    content_type: String,
    content: String,
    uploaded_at: DateTime<Utc>,
}

impl Document {
    pub fn new(filename: String, content_type: String, content: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            filename,
            content_type,
            content,
            uploaded_at: Utc::now(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn uploaded_at(&self) -> DateTime<Utc> {
        self.uploaded_at
    }

    /// Length of the content in characters. Chunking cursors are char
    /// offsets, not byte offsets.
    pub fn content_length(&self) -> usize {
        self.content.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.content.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_creation() {
        let document = Document::new(
            "resume.txt".to_string(),
            "text/plain".to_string(),
            "Skilled in Go and Rust.".to_string(),
        );

        assert_eq!(document.filename(), "resume.txt");
        assert_eq!(document.content_type(), "text/plain");
        assert_eq!(document.content_length(), 23);
        assert!(!document.is_empty());
    }

    #[test]
    fn test_content_length_counts_chars_not_bytes() {
        let document = Document::new(
            "cv.txt".to_string(),
            "text/plain".to_string(),
            "étudié".to_string(),
        );

        assert_eq!(document.content_length(), 6);
        assert!(document.content().len() > 6);
    }
}
