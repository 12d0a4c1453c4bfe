use std::sync::Arc;
use std::time::Duration;

use uuid::Uuid;

use crate::application::ports::TextExtractor;
use crate::application::ports::step_scheduler::StepScheduler;
use crate::application::ports::text_extractor::ExtractionError;
use crate::application::services::EmbeddingPipeline;
use crate::domain::entities::Document;
use crate::domain::repositories::{DocumentRepository, document_repository::DocumentRepositoryError};

#[derive(Debug)]
pub enum UploadDocumentError {
    UnsupportedFileType(String),
    ExtractionFailed(String),
    ValidationError(String),
    RepositoryError(String),
    SchedulerError(String),
}

impl std::fmt::Display for UploadDocumentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UploadDocumentError::UnsupportedFileType(content_type) => {
                write!(f, "Unsupported file type: {}", content_type)
            }
            UploadDocumentError::ExtractionFailed(msg) => write!(f, "Extraction failed: {}", msg),
            UploadDocumentError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            UploadDocumentError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
            UploadDocumentError::SchedulerError(msg) => write!(f, "Scheduler error: {}", msg),
        }
    }
}

impl std::error::Error for UploadDocumentError {}

impl From<DocumentRepositoryError> for UploadDocumentError {
    fn from(error: DocumentRepositoryError) -> Self {
        UploadDocumentError::RepositoryError(error.to_string())
    }
}

#[derive(Debug, Clone)]
pub struct UploadDocumentRequest {
    pub filename: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

#[derive(Debug, Clone)]
pub struct UploadDocumentResponse {
    pub document_id: Uuid,
    pub filename: String,
    pub content_length: usize,
}

/// Accepts an upload, extracts its text, stores the document, and kicks off
/// the chunking pipeline with an immediately scheduled first step.
pub struct UploadDocumentUseCase {
    text_extractor: Arc<dyn TextExtractor>,
    document_repository: Arc<dyn DocumentRepository>,
    pipeline: Arc<EmbeddingPipeline>,
    scheduler: Arc<dyn StepScheduler>,
}

impl UploadDocumentUseCase {
    pub fn new(
        text_extractor: Arc<dyn TextExtractor>,
        document_repository: Arc<dyn DocumentRepository>,
        pipeline: Arc<EmbeddingPipeline>,
        scheduler: Arc<dyn StepScheduler>,
    ) -> Self {
        Self {
            text_extractor,
            document_repository,
            pipeline,
            scheduler,
        }
    }

    pub async fn execute(
        &self,
        request: UploadDocumentRequest,
    ) -> Result<UploadDocumentResponse, UploadDocumentError> {
        if request.filename.trim().is_empty() {
            return Err(UploadDocumentError::ValidationError(
                "Filename cannot be empty".to_string(),
            ));
        }

        let content = self
            .text_extractor
            .extract(&request.data, &request.content_type)
            .await
            .map_err(|e| match e {
                ExtractionError::UnsupportedFileType(content_type) => {
                    UploadDocumentError::UnsupportedFileType(content_type)
                }
                ExtractionError::ExtractionFailed(msg) => {
                    UploadDocumentError::ExtractionFailed(msg)
                }
            })?;

        if content.trim().is_empty() {
            return Err(UploadDocumentError::ValidationError(
                "Document contains no text".to_string(),
            ));
        }

        let document = Document::new(request.filename.clone(), request.content_type, content);
        let content_length = document.content_length();
        self.document_repository.save(&document).await?;

        let step = self
            .pipeline
            .start(document.id())
            .await
            .map_err(|e| UploadDocumentError::RepositoryError(e.to_string()))?;

        self.scheduler
            .schedule_after(Duration::ZERO, step)
            .await
            .map_err(|e| UploadDocumentError::SchedulerError(e.to_string()))?;

        tracing::info!(
            "document {} uploaded ({} chars), chunking scheduled",
            document.id(),
            content_length
        );

        Ok(UploadDocumentResponse {
            document_id: document.id(),
            filename: request.filename,
            content_length,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use async_trait::async_trait;
    use tokio::sync::Mutex;

    use crate::application::ports::embedding_provider::{
        EmbeddingProvider, EmbeddingProviderError,
    };
    use crate::application::ports::step_scheduler::{PipelineStep, SchedulerError};
    use crate::infrastructure::external_services::PlainTextExtractor;
    use crate::infrastructure::persistence::{
        InMemoryChunkRepository, InMemoryDocumentRepository, InMemoryProgressRepository,
    };

    struct StubEmbedder;

    #[async_trait]
    impl EmbeddingProvider for StubEmbedder {
        async fn embed(&self, _text: &str) -> Result<Vec<f32>, EmbeddingProviderError> {
            Ok(vec![0.0; 4])
        }

        fn embedding_dimension(&self) -> usize {
            4
        }
    }

    #[derive(Default)]
    struct RecordingScheduler {
        scheduled: Mutex<Vec<PipelineStep>>,
    }

    #[async_trait]
    impl StepScheduler for RecordingScheduler {
        async fn schedule_after(
            &self,
            _delay: Duration,
            step: PipelineStep,
        ) -> Result<(), SchedulerError> {
            self.scheduled.lock().await.push(step);
            Ok(())
        }
    }

    fn use_case() -> (
        UploadDocumentUseCase,
        Arc<InMemoryDocumentRepository>,
        Arc<RecordingScheduler>,
    ) {
        let documents = Arc::new(InMemoryDocumentRepository::new());
        let pipeline = Arc::new(EmbeddingPipeline::new(
            documents.clone(),
            Arc::new(InMemoryChunkRepository::new()),
            Arc::new(InMemoryProgressRepository::new()),
            Arc::new(StubEmbedder),
        ));
        let scheduler = Arc::new(RecordingScheduler::default());
        let use_case = UploadDocumentUseCase::new(
            Arc::new(PlainTextExtractor::new()),
            documents.clone(),
            pipeline,
            scheduler.clone(),
        );
        (use_case, documents, scheduler)
    }

    #[tokio::test]
    async fn test_upload_stores_document_and_schedules_first_step() {
        let (use_case, documents, scheduler) = use_case();

        let response = use_case
            .execute(UploadDocumentRequest {
                filename: "resume.txt".to_string(),
                content_type: "text/plain".to_string(),
                data: b"Ten years of systems programming.".to_vec(),
            })
            .await
            .unwrap();

        let stored = documents
            .find_by_id(response.document_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.content(), "Ten years of systems programming.");

        let scheduled = scheduler.scheduled.lock().await;
        assert_eq!(scheduled.len(), 1);
        assert_eq!(scheduled[0], PipelineStep::initial(response.document_id));
    }

    #[tokio::test]
    async fn test_unsupported_content_type_is_rejected() {
        let (use_case, documents, _) = use_case();

        let result = use_case
            .execute(UploadDocumentRequest {
                filename: "resume.pdf".to_string(),
                content_type: "application/pdf".to_string(),
                data: b"%PDF-1.4".to_vec(),
            })
            .await;

        assert!(matches!(
            result,
            Err(UploadDocumentError::UnsupportedFileType(_))
        ));
        assert_eq!(documents.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_empty_text_is_rejected() {
        let (use_case, _, scheduler) = use_case();

        let result = use_case
            .execute(UploadDocumentRequest {
                filename: "blank.txt".to_string(),
                content_type: "text/plain".to_string(),
                data: b"   \n  ".to_vec(),
            })
            .await;

        assert!(matches!(result, Err(UploadDocumentError::ValidationError(_))));
        assert!(scheduler.scheduled.lock().await.is_empty());
    }

    #[tokio::test]
    async fn test_empty_filename_is_rejected() {
        let (use_case, _, _) = use_case();

        let result = use_case
            .execute(UploadDocumentRequest {
                filename: "  ".to_string(),
                content_type: "text/plain".to_string(),
                data: b"text".to_vec(),
            })
            .await;

        assert!(matches!(result, Err(UploadDocumentError::ValidationError(_))));
    }
}
