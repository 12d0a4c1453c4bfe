use std::sync::Arc;

use uuid::Uuid;

use crate::application::ports::embedding_provider::EmbeddingProvider;
use crate::application::ports::step_scheduler::PipelineStep;
use crate::domain::chunking::{self, DEFAULT_CHUNK_SIZE, DEFAULT_LOOKAHEAD};
use crate::domain::entities::{ChunkingProgress, DocumentChunk};
use crate::domain::repositories::{ChunkRepository, DocumentRepository, ProgressRepository};

#[derive(Debug)]
pub enum PipelineError {
    DocumentNotFound(Uuid),
    RepositoryError(String),
}

impl std::fmt::Display for PipelineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PipelineError::DocumentNotFound(id) => write!(f, "Document not found: {}", id),
            PipelineError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for PipelineError {}

/// What one step produced and what the scheduler should do next.
#[derive(Debug, Clone, PartialEq)]
pub enum StepOutcome {
    /// Step succeeded; schedule the successor after the normal step delay.
    Continue(PipelineStep),
    /// Transient failure; re-run the same step after the backoff delay.
    /// Nothing was advanced, so the chunk is neither lost nor duplicated.
    Retry(PipelineStep),
    /// The whole document is chunked and the progress record is terminal.
    Completed,
    /// The document disappeared (deleted mid-flight) or the step is stale;
    /// terminate silently without scheduling anything.
    Abandoned,
}

/// Drives a document from raw text to a complete set of persisted
/// (chunk, embedding) pairs, one bounded step at a time.
///
/// Each step reads a small window at the current cursor, cuts one
/// word-boundary chunk, embeds it remotely, persists the chunk and then the
/// advanced checkpoint. Interruptions at any point resume from the last
/// persisted (position, chunk index) pair.
pub struct EmbeddingPipeline {
    document_repository: Arc<dyn DocumentRepository>,
    chunk_repository: Arc<dyn ChunkRepository>,
    progress_repository: Arc<dyn ProgressRepository>,
    embedding_provider: Arc<dyn EmbeddingProvider>,
    chunk_size: usize,
    lookahead: usize,
}

impl EmbeddingPipeline {
    pub fn new(
        document_repository: Arc<dyn DocumentRepository>,
        chunk_repository: Arc<dyn ChunkRepository>,
        progress_repository: Arc<dyn ProgressRepository>,
        embedding_provider: Arc<dyn EmbeddingProvider>,
    ) -> Self {
        Self {
            document_repository,
            chunk_repository,
            progress_repository,
            embedding_provider,
            chunk_size: DEFAULT_CHUNK_SIZE,
            lookahead: DEFAULT_LOOKAHEAD,
        }
    }

    pub fn with_chunk_size(mut self, chunk_size: usize, lookahead: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self.lookahead = lookahead;
        self
    }

    /// Initialize the progress checkpoint for a freshly uploaded document and
    /// hand back the first step for the scheduler.
    pub async fn start(&self, document_id: Uuid) -> Result<PipelineStep, PipelineError> {
        let document = self
            .document_repository
            .find_by_id(document_id)
            .await
            .map_err(|e| PipelineError::RepositoryError(e.to_string()))?;

        if document.is_none() {
            return Err(PipelineError::DocumentNotFound(document_id));
        }

        let progress = ChunkingProgress::new(document_id);
        self.progress_repository
            .upsert(&progress)
            .await
            .map_err(|e| PipelineError::RepositoryError(e.to_string()))?;

        Ok(PipelineStep::initial(document_id))
    }

    /// Steps for every document whose checkpoint is not yet complete, so a
    /// restarted process picks up where the previous one stopped.
    pub async fn resume_steps(&self) -> Result<Vec<PipelineStep>, PipelineError> {
        let incomplete = self
            .progress_repository
            .find_incomplete()
            .await
            .map_err(|e| PipelineError::RepositoryError(e.to_string()))?;

        Ok(incomplete
            .iter()
            .map(|progress| PipelineStep {
                document_id: progress.document_id(),
                position: progress.position(),
                chunk_index: progress.chunk_index(),
            })
            .collect())
    }

    /// Execute exactly one unit of work. Never panics and never surfaces an
    /// error to the caller; failures come back as [`StepOutcome::Retry`].
    pub async fn execute_step(&self, step: PipelineStep) -> StepOutcome {
        let document = match self.document_repository.find_by_id(step.document_id).await {
            Ok(Some(document)) => document,
            Ok(None) => {
                tracing::debug!(
                    "document {} no longer exists, abandoning chunking step",
                    step.document_id
                );
                return StepOutcome::Abandoned;
            }
            Err(e) => {
                tracing::warn!("failed to load document {}: {}", step.document_id, e);
                return StepOutcome::Retry(step);
            }
        };

        let total_length = document.content_length();

        if step.position >= total_length {
            return self.finish(step).await;
        }

        let window: String = document
            .content()
            .chars()
            .skip(step.position)
            .take(self.chunk_size + self.lookahead)
            .collect();

        let cut = chunking::next_chunk(&window, self.chunk_size, self.lookahead);

        if cut.text.is_empty() {
            // Run of delimiters: skip past them without assigning an index.
            let next = PipelineStep {
                document_id: step.document_id,
                position: step.position + cut.consumed,
                chunk_index: step.chunk_index,
            };
            return match self.checkpoint(step, &next).await {
                Ok(()) => StepOutcome::Continue(next),
                Err(outcome) => outcome,
            };
        }

        let embedding = match self.embedding_provider.embed(&cut.text).await {
            Ok(embedding) => embedding,
            Err(e) => {
                tracing::warn!(
                    "embedding failed for document {} at position {}: {}",
                    step.document_id,
                    step.position,
                    e
                );
                return StepOutcome::Retry(step);
            }
        };

        let expected = self.embedding_provider.embedding_dimension();
        if embedding.len() != expected {
            tracing::warn!(
                "embedding dimension {} does not match expected {}, retrying",
                embedding.len(),
                expected
            );
            return StepOutcome::Retry(step);
        }

        let chunk = DocumentChunk::new(
            step.document_id,
            step.chunk_index,
            cut.text.clone(),
            embedding,
        );

        if let Err(e) = self.chunk_repository.save(&chunk).await {
            tracing::warn!(
                "failed to save chunk {} of document {}: {}",
                step.chunk_index,
                step.document_id,
                e
            );
            return StepOutcome::Retry(step);
        }

        tracing::info!(
            "processed chunk {} of document {} at position {} ({} chars)",
            step.chunk_index,
            step.document_id,
            step.position,
            cut.text.chars().count()
        );

        let next = PipelineStep {
            document_id: step.document_id,
            position: step.position + cut.consumed,
            chunk_index: step.chunk_index + 1,
        };

        match self.checkpoint(step, &next).await {
            Ok(()) => StepOutcome::Continue(next),
            // The chunk save is idempotent on (document_id, chunk_index), so
            // retrying the same step cannot duplicate it.
            Err(outcome) => outcome,
        }
    }

    async fn finish(&self, step: PipelineStep) -> StepOutcome {
        let mut progress = match self.load_progress(step).await {
            Ok(progress) => progress,
            Err(outcome) => return outcome,
        };

        if progress.is_complete() {
            return StepOutcome::Abandoned;
        }

        if let Err(e) = progress.advance(step.position, step.chunk_index) {
            tracing::debug!("stale completion step for {}: {}", step.document_id, e);
            return StepOutcome::Abandoned;
        }
        if let Err(e) = progress.complete() {
            tracing::debug!("stale completion step for {}: {}", step.document_id, e);
            return StepOutcome::Abandoned;
        }

        if let Err(e) = self.progress_repository.upsert(&progress).await {
            tracing::warn!("failed to persist completion for {}: {}", step.document_id, e);
            return StepOutcome::Retry(step);
        }

        tracing::info!(
            "completed chunking for document {} with {} chunks",
            step.document_id,
            step.chunk_index
        );
        StepOutcome::Completed
    }

    async fn checkpoint(&self, step: PipelineStep, next: &PipelineStep) -> Result<(), StepOutcome> {
        let mut progress = self.load_progress(step).await?;

        if let Err(e) = progress.advance(next.position, next.chunk_index) {
            // A checkpoint ahead of this step means the step was duplicated
            // or replayed; drop it rather than rewind.
            tracing::debug!("stale step for document {}: {}", next.document_id, e);
            return Err(StepOutcome::Abandoned);
        }

        self.progress_repository.upsert(&progress).await.map_err(|e| {
            tracing::warn!("failed to persist progress for {}: {}", next.document_id, e);
            StepOutcome::Retry(step)
        })
    }

    async fn load_progress(&self, step: PipelineStep) -> Result<ChunkingProgress, StepOutcome> {
        match self
            .progress_repository
            .find_by_document_id(step.document_id)
            .await
        {
            Ok(Some(progress)) => Ok(progress),
            // The record is created by start(); a missing one after a wipe is
            // recreated from scratch rather than treated as fatal.
            Ok(None) => Ok(ChunkingProgress::new(step.document_id)),
            Err(e) => {
                tracing::warn!("failed to load progress for {}: {}", step.document_id, e);
                Err(StepOutcome::Retry(step))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use crate::application::ports::embedding_provider::EmbeddingProviderError;
    use crate::domain::entities::Document;
    use crate::infrastructure::persistence::{
        InMemoryChunkRepository, InMemoryDocumentRepository, InMemoryProgressRepository,
    };

    const DIMENSION: usize = 8;

    fn strip_whitespace(s: &str) -> String {
        s.chars().filter(|c| !c.is_whitespace()).collect()
    }

    fn concat_texts(chunks: &[DocumentChunk]) -> String {
        chunks.iter().map(|c| c.text()).collect()
    }

    /// Deterministic embedder that fails the first `failures` calls.
    struct FlakyEmbedder {
        failures: AtomicUsize,
        calls: AtomicUsize,
    }

    impl FlakyEmbedder {
        fn reliable() -> Self {
            Self::failing(0)
        }

        fn failing(failures: usize) -> Self {
            Self {
                failures: AtomicUsize::new(failures),
                calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl EmbeddingProvider for FlakyEmbedder {
        async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingProviderError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self
                .failures
                .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |f| f.checked_sub(1))
                .is_ok()
            {
                return Err(EmbeddingProviderError::NetworkError(
                    "connection reset".to_string(),
                ));
            }
            let mut vector = vec![0.0; DIMENSION];
            vector[0] = text.chars().count() as f32;
            Ok(vector)
        }

        fn embedding_dimension(&self) -> usize {
            DIMENSION
        }
    }

    struct Fixture {
        documents: Arc<InMemoryDocumentRepository>,
        chunks: Arc<InMemoryChunkRepository>,
        progress: Arc<InMemoryProgressRepository>,
        embedder: Arc<FlakyEmbedder>,
        pipeline: EmbeddingPipeline,
    }

    fn fixture(embedder: FlakyEmbedder, chunk_size: usize, lookahead: usize) -> Fixture {
        let documents = Arc::new(InMemoryDocumentRepository::new());
        let chunks = Arc::new(InMemoryChunkRepository::new());
        let progress = Arc::new(InMemoryProgressRepository::new());
        let embedder = Arc::new(embedder);

        let pipeline = EmbeddingPipeline::new(
            documents.clone(),
            chunks.clone(),
            progress.clone(),
            embedder.clone(),
        )
        .with_chunk_size(chunk_size, lookahead);

        Fixture {
            documents,
            chunks,
            progress,
            embedder,
            pipeline,
        }
    }

    async fn upload(fixture: &Fixture, content: &str) -> PipelineStep {
        let document = Document::new(
            "resume.txt".to_string(),
            "text/plain".to_string(),
            content.to_string(),
        );
        fixture.documents.save(&document).await.unwrap();
        fixture.pipeline.start(document.id()).await.unwrap()
    }

    /// Drive the pipeline to a terminal outcome, re-running retries in place.
    async fn run_to_completion(fixture: &Fixture, mut step: PipelineStep) -> StepOutcome {
        for _ in 0..1000 {
            match fixture.pipeline.execute_step(step).await {
                StepOutcome::Continue(next) => step = next,
                StepOutcome::Retry(same) => step = same,
                terminal => return terminal,
            }
        }
        panic!("pipeline did not terminate");
    }

    #[tokio::test]
    async fn test_single_chunk_document() {
        let fixture = fixture(FlakyEmbedder::reliable(), 200, 20);
        let step = upload(&fixture, "Hello world. This is a test.").await;
        let document_id = step.document_id;

        // First step emits the only chunk, the following step completes.
        let outcome = fixture.pipeline.execute_step(step).await;
        let next = match outcome {
            StepOutcome::Continue(next) => next,
            other => panic!("expected Continue, got {:?}", other),
        };
        assert_eq!(
            fixture.pipeline.execute_step(next).await,
            StepOutcome::Completed
        );

        let chunks = fixture.chunks.find_by_document_id(document_id).await.unwrap();
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].text(), "Hello world. This is a test.");
        assert_eq!(chunks[0].chunk_index(), 0);

        let progress = fixture
            .progress
            .find_by_document_id(document_id)
            .await
            .unwrap()
            .unwrap();
        assert!(progress.is_complete());
    }

    #[tokio::test]
    async fn test_indices_are_contiguous() {
        let fixture = fixture(FlakyEmbedder::reliable(), 40, 10);
        let content = "Built search infrastructure at scale. Designed ranking models \
                       and evaluation harnesses. Mentored junior engineers across \
                       three teams while shipping quarterly releases.";
        let step = upload(&fixture, content).await;
        let document_id = step.document_id;

        assert_eq!(
            run_to_completion(&fixture, step).await,
            StepOutcome::Completed
        );

        let chunks = fixture.chunks.find_by_document_id(document_id).await.unwrap();
        assert!(chunks.len() > 1);
        for (expected, chunk) in chunks.iter().enumerate() {
            assert_eq!(chunk.chunk_index(), expected as i32);
            assert_eq!(chunk.dimension(), DIMENSION);
            assert!(!chunk.text().trim().is_empty());
        }

        // Nothing is lost beyond the whitespace consumed at each cut.
        assert_eq!(strip_whitespace(&concat_texts(&chunks)), strip_whitespace(content));
    }

    #[tokio::test]
    async fn test_transient_failure_retries_same_position() {
        let fixture = fixture(FlakyEmbedder::failing(2), 200, 20);
        let step = upload(&fixture, "Skilled in Go and Rust.").await;
        let document_id = step.document_id;

        // Two failed attempts keep the step (and checkpoint) in place.
        let retry = match fixture.pipeline.execute_step(step).await {
            StepOutcome::Retry(same) => same,
            other => panic!("expected Retry, got {:?}", other),
        };
        assert_eq!(retry, step);

        let retry = match fixture.pipeline.execute_step(retry).await {
            StepOutcome::Retry(same) => same,
            other => panic!("expected Retry, got {:?}", other),
        };
        assert_eq!(retry, step);

        let progress = fixture
            .progress
            .find_by_document_id(document_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(progress.position(), 0);
        assert_eq!(progress.chunk_index(), 0);
        assert!(fixture.chunks.find_by_document_id(document_id).await.unwrap().is_empty());

        // Third attempt succeeds; the chunk is persisted exactly once.
        assert_eq!(
            run_to_completion(&fixture, retry).await,
            StepOutcome::Completed
        );
        let chunks = fixture.chunks.find_by_document_id(document_id).await.unwrap();
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].chunk_index(), 0);
        assert_eq!(fixture.embedder.calls(), 3);
    }

    #[tokio::test]
    async fn test_deleted_document_abandons_step() {
        let fixture = fixture(FlakyEmbedder::reliable(), 200, 20);
        let step = upload(&fixture, "Some resume content.").await;

        fixture.documents.delete(step.document_id).await.unwrap();

        assert_eq!(
            fixture.pipeline.execute_step(step).await,
            StepOutcome::Abandoned
        );
        assert_eq!(fixture.embedder.calls(), 0);
    }

    #[tokio::test]
    async fn test_delimiter_runs_do_not_consume_indices() {
        let fixture = fixture(FlakyEmbedder::reliable(), 10, 4);
        let content = format!("First part.{}Second part.", " ".repeat(30));
        let step = upload(&fixture, &content).await;
        let document_id = step.document_id;

        assert_eq!(
            run_to_completion(&fixture, step).await,
            StepOutcome::Completed
        );

        let chunks = fixture.chunks.find_by_document_id(document_id).await.unwrap();
        for (expected, chunk) in chunks.iter().enumerate() {
            assert_eq!(chunk.chunk_index(), expected as i32);
        }
        assert_eq!(
            strip_whitespace(&concat_texts(&chunks)),
            strip_whitespace(&content)
        );
    }

    #[tokio::test]
    async fn test_resume_steps_lists_incomplete_documents() {
        let fixture = fixture(FlakyEmbedder::reliable(), 200, 20);
        let finished = upload(&fixture, "Short one.").await;
        let unfinished = upload(&fixture, "Another resume body.").await;

        assert_eq!(
            run_to_completion(&fixture, finished).await,
            StepOutcome::Completed
        );

        let steps = fixture.pipeline.resume_steps().await.unwrap();
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].document_id, unfinished.document_id);
        assert_eq!(steps[0].position, 0);
        assert_eq!(steps[0].chunk_index, 0);
    }

    #[tokio::test]
    async fn test_start_unknown_document_fails() {
        let fixture = fixture(FlakyEmbedder::reliable(), 200, 20);
        let missing = Uuid::new_v4();
        match fixture.pipeline.start(missing).await {
            Err(PipelineError::DocumentNotFound(id)) => assert_eq!(id, missing),
            other => panic!("expected DocumentNotFound, got {:?}", other),
        }
    }
}
