use std::sync::Arc;

use crate::{
    application::{
        ports::{CompletionProvider, EmbeddingProvider, StepScheduler, TextExtractor},
        services::{EmbeddingPipeline, QueryService, RetrievalService},
        use_cases::{
            AnswerQueryUseCase, DeleteDocumentUseCase, GetDocumentStatusUseCase,
            GetDocumentUseCase, GetRecentQueriesUseCase, ListDocumentsUseCase,
            UploadDocumentUseCase,
        },
    },
    domain::repositories::{
        ChunkRepository, DocumentRepository, ProgressRepository, QueryRepository,
    },
    infrastructure::{
        external_services::{OpenAiClient, PlainTextExtractor},
        messaging::{MpscStepQueue, PipelineWorker},
        persistence::{
            InMemoryChunkRepository, InMemoryDocumentRepository, InMemoryProgressRepository,
            InMemoryQueryRepository,
        },
    },
    presentation::http::handlers::{DocumentHandler, QueryHandler},
};

/// Wires repositories, providers, services, use cases, and handlers
/// together. Built once at startup.
pub struct AppContainer {
    // Repositories
    pub document_repository: Arc<dyn DocumentRepository>,
    pub chunk_repository: Arc<dyn ChunkRepository>,
    pub progress_repository: Arc<dyn ProgressRepository>,
    pub query_repository: Arc<dyn QueryRepository>,

    // External services
    pub embedding_provider: Arc<dyn EmbeddingProvider>,
    pub completion_provider: Arc<dyn CompletionProvider>,
    pub text_extractor: Arc<dyn TextExtractor>,

    // Pipeline plumbing
    pub scheduler: Arc<dyn StepScheduler>,
    pub pipeline: Arc<EmbeddingPipeline>,
    pub pipeline_worker: PipelineWorker,

    // Application services
    pub retrieval_service: Arc<RetrievalService>,
    pub query_service: Arc<QueryService>,

    // HTTP handlers
    pub document_handler: Arc<DocumentHandler>,
    pub query_handler: Arc<QueryHandler>,
}

impl AppContainer {
    pub fn new() -> Result<Self, Box<dyn std::error::Error>> {
        // Repositories
        let document_repository: Arc<dyn DocumentRepository> =
            Arc::new(InMemoryDocumentRepository::new());
        let chunk_repository: Arc<dyn ChunkRepository> = Arc::new(InMemoryChunkRepository::new());
        let progress_repository: Arc<dyn ProgressRepository> =
            Arc::new(InMemoryProgressRepository::new());
        let query_repository: Arc<dyn QueryRepository> = Arc::new(InMemoryQueryRepository::new());

        // External services
        let openai_client = OpenAiClient::from_env()?;
        let embedding_provider: Arc<dyn EmbeddingProvider> = Arc::new(openai_client.clone());
        let completion_provider: Arc<dyn CompletionProvider> = Arc::new(openai_client);
        let text_extractor: Arc<dyn TextExtractor> = Arc::new(PlainTextExtractor::new());

        // Pipeline plumbing
        let (step_queue, step_receiver) = MpscStepQueue::create_pair();
        let scheduler: Arc<dyn StepScheduler> = Arc::new(step_queue);

        let pipeline = Arc::new(EmbeddingPipeline::new(
            document_repository.clone(),
            chunk_repository.clone(),
            progress_repository.clone(),
            embedding_provider.clone(),
        ));

        let pipeline_worker =
            PipelineWorker::new(step_receiver, scheduler.clone(), pipeline.clone());

        // Application services
        let retrieval_service = Arc::new(RetrievalService::new(chunk_repository.clone()));
        let query_service = Arc::new(QueryService::new(
            embedding_provider.clone(),
            completion_provider.clone(),
            retrieval_service.clone(),
            query_repository.clone(),
        ));

        // Use cases
        let upload_use_case = Arc::new(UploadDocumentUseCase::new(
            text_extractor.clone(),
            document_repository.clone(),
            pipeline.clone(),
            scheduler.clone(),
        ));
        let list_use_case = Arc::new(ListDocumentsUseCase::new(document_repository.clone()));
        let get_use_case = Arc::new(GetDocumentUseCase::new(document_repository.clone()));
        let status_use_case = Arc::new(GetDocumentStatusUseCase::new(
            document_repository.clone(),
            chunk_repository.clone(),
            progress_repository.clone(),
        ));
        let delete_use_case = Arc::new(DeleteDocumentUseCase::new(
            document_repository.clone(),
            chunk_repository.clone(),
            progress_repository.clone(),
        ));
        let answer_use_case = Arc::new(AnswerQueryUseCase::new(query_service.clone()));
        let recent_use_case = Arc::new(GetRecentQueriesUseCase::new(query_repository.clone()));

        // HTTP handlers
        let document_handler = Arc::new(DocumentHandler::new(
            upload_use_case,
            list_use_case,
            get_use_case,
            status_use_case,
            delete_use_case,
        ));
        let query_handler = Arc::new(QueryHandler::new(answer_use_case, recent_use_case));

        Ok(Self {
            document_repository,
            chunk_repository,
            progress_repository,
            query_repository,
            embedding_provider,
            completion_provider,
            text_extractor,
            scheduler,
            pipeline,
            pipeline_worker,
            retrieval_service,
            query_service,
            document_handler,
            query_handler,
        })
    }
}
