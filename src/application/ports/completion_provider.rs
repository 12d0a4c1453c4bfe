use async_trait::async_trait;

#[derive(Debug)]
pub enum CompletionProviderError {
    NetworkError(String),
    ApiError(String),
}

impl std::fmt::Display for CompletionProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompletionProviderError::NetworkError(msg) => write!(f, "Network error: {}", msg),
            CompletionProviderError::ApiError(msg) => write!(f, "API error: {}", msg),
        }
    }
}

impl std::error::Error for CompletionProviderError {}

/// Remote chat-completion model.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, CompletionProviderError>;
}
