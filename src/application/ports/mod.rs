pub mod completion_provider;
pub mod embedding_provider;
pub mod step_scheduler;
pub mod text_extractor;

pub use completion_provider::CompletionProvider;
pub use embedding_provider::EmbeddingProvider;
pub use step_scheduler::StepScheduler;
pub use text_extractor::TextExtractor;
