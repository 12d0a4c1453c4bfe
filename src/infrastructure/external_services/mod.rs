pub mod openai_client;
pub mod text_extractors;

pub use openai_client::{OpenAiClient, OpenAiClientConfig};
pub use text_extractors::PlainTextExtractor;
