pub mod chunk_repository;
pub mod document_repository;
pub mod progress_repository;
pub mod query_repository;

pub use chunk_repository::ChunkRepository;
pub use document_repository::DocumentRepository;
pub use progress_repository::ProgressRepository;
pub use query_repository::QueryRepository;
