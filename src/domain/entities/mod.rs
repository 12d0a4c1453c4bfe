pub mod chunking_progress;
pub mod document;
pub mod document_chunk;
pub mod query_record;

pub use chunking_progress::ChunkingProgress;
pub use document::Document;
pub use document_chunk::DocumentChunk;
pub use query_record::QueryRecord;
