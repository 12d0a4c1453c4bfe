pub mod embedding_pipeline;
pub mod query_service;
pub mod retrieval_service;

pub use embedding_pipeline::EmbeddingPipeline;
pub use query_service::QueryService;
pub use retrieval_service::RetrievalService;
