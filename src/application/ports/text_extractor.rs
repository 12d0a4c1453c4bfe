use async_trait::async_trait;

#[derive(Debug)]
pub enum ExtractionError {
    UnsupportedFileType(String),
    ExtractionFailed(String),
}

impl std::fmt::Display for ExtractionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExtractionError::UnsupportedFileType(content_type) => {
                write!(f, "Unsupported file type: {}", content_type)
            }
            ExtractionError::ExtractionFailed(msg) => write!(f, "Extraction failed: {}", msg),
        }
    }
}

impl std::error::Error for ExtractionError {}

/// Turns uploaded bytes into plain text for chunking.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    fn supports(&self, content_type: &str) -> bool;

    async fn extract(&self, data: &[u8], content_type: &str) -> Result<String, ExtractionError>;
}
