use async_trait::async_trait;

use crate::application::ports::text_extractor::{ExtractionError, TextExtractor};

const SUPPORTED_TYPES: &[&str] = &["text/plain", "text/markdown"];

/// Extractor for plain-text uploads. Resumes arrive as text or markdown;
/// anything else is rejected up front.
pub struct PlainTextExtractor;

impl PlainTextExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PlainTextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TextExtractor for PlainTextExtractor {
    fn supports(&self, content_type: &str) -> bool {
        SUPPORTED_TYPES.contains(&content_type)
    }

    async fn extract(&self, data: &[u8], content_type: &str) -> Result<String, ExtractionError> {
        if !self.supports(content_type) {
            return Err(ExtractionError::UnsupportedFileType(
                content_type.to_string(),
            ));
        }

        String::from_utf8(data.to_vec())
            .map_err(|e| ExtractionError::ExtractionFailed(format!("invalid UTF-8: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_extracts_plain_text() {
        let extractor = PlainTextExtractor::new();
        let text = extractor
            .extract(b"Five years of Rust.", "text/plain")
            .await
            .unwrap();
        assert_eq!(text, "Five years of Rust.");
    }

    #[tokio::test]
    async fn test_rejects_unsupported_type() {
        let extractor = PlainTextExtractor::new();
        assert!(!extractor.supports("application/pdf"));
        assert!(matches!(
            extractor.extract(b"%PDF-1.4", "application/pdf").await,
            Err(ExtractionError::UnsupportedFileType(_))
        ));
    }

    #[tokio::test]
    async fn test_invalid_utf8_fails_extraction() {
        let extractor = PlainTextExtractor::new();
        assert!(matches!(
            extractor.extract(&[0xff, 0xfe], "text/plain").await,
            Err(ExtractionError::ExtractionFailed(_))
        ));
    }
}
