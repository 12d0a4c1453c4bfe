pub mod in_memory_chunk_repository;
pub mod in_memory_document_repository;
pub mod in_memory_progress_repository;
pub mod in_memory_query_repository;

pub use in_memory_chunk_repository::InMemoryChunkRepository;
pub use in_memory_document_repository::InMemoryDocumentRepository;
pub use in_memory_progress_repository::InMemoryProgressRepository;
pub use in_memory_query_repository::InMemoryQueryRepository;
