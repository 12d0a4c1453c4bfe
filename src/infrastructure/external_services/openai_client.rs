use std::env;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Error as ReqwestError};
use serde::{Deserialize, Serialize};

use crate::application::ports::completion_provider::{
    CompletionProvider, CompletionProviderError,
};
use crate::application::ports::embedding_provider::{EmbeddingProvider, EmbeddingProviderError};

const COMPLETION_TEMPERATURE: f32 = 0.5;
const COMPLETION_MAX_TOKENS: u32 = 500;
const DEFAULT_COMPLETION: &str = "Sorry, I couldn't generate a response.";

#[derive(Serialize)]
struct EmbeddingsRequest<'a> {
    model: &'a str,
    input: &'a str,
}

#[derive(Deserialize)]
struct EmbeddingsResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Deserialize)]
struct EmbeddingData {
    embedding: Vec<f32>,
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Clone)]
pub struct OpenAiClientConfig {
    pub base_url: String,
    pub api_key: String,
    pub embedding_model: String,
    pub chat_model: String,
    pub embedding_dimension: usize,
    pub timeout_secs: u64,
}

impl Default for OpenAiClientConfig {
    fn default() -> Self {
        let base_url = env::var("OPENAI_BASE_URL")
            .unwrap_or_else(|_| "https://api.openai.com/v1".to_string());
        let api_key = env::var("OPENAI_API_KEY").unwrap_or_default();
        let embedding_model =
            env::var("EMBEDDING_MODEL").unwrap_or_else(|_| "text-embedding-ada-002".to_string());
        let chat_model = env::var("CHAT_MODEL").unwrap_or_else(|_| "gpt-4".to_string());
        let embedding_dimension = env::var("EMBEDDING_DIMENSION")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(1536);

        Self {
            base_url,
            api_key,
            embedding_model,
            chat_model,
            embedding_dimension,
            timeout_secs: 30,
        }
    }
}

/// Client for the OpenAI embeddings and chat completions endpoints. Serves
/// as both the embedding and the completion provider.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    client: Client,
    config: OpenAiClientConfig,
}

impl OpenAiClient {
    pub fn new(config: OpenAiClientConfig) -> Result<Self, ReqwestError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { client, config })
    }

    pub fn from_env() -> Result<Self, ReqwestError> {
        Self::new(OpenAiClientConfig::default())
    }
}

#[async_trait]
impl EmbeddingProvider for OpenAiClient {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingProviderError> {
        let request = EmbeddingsRequest {
            model: &self.config.embedding_model,
            input: text,
        };

        let response = self
            .client
            .post(format!("{}/embeddings", self.config.base_url))
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| EmbeddingProviderError::NetworkError(e.without_url().to_string()))?;

        if !response.status().is_success() {
            return Err(EmbeddingProviderError::ApiError(format!(
                "embeddings request failed with status {}",
                response.status()
            )));
        }

        let body: EmbeddingsResponse = response
            .json()
            .await
            .map_err(|e| EmbeddingProviderError::ApiError(e.without_url().to_string()))?;

        body.data
            .into_iter()
            .next()
            .map(|d| d.embedding)
            .ok_or_else(|| {
                EmbeddingProviderError::ApiError("embeddings response was empty".to_string())
            })
    }

    fn embedding_dimension(&self) -> usize {
        self.config.embedding_dimension
    }
}

#[async_trait]
impl CompletionProvider for OpenAiClient {
    async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, CompletionProviderError> {
        let request = ChatCompletionRequest {
            model: &self.config.chat_model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: user_prompt,
                },
            ],
            temperature: COMPLETION_TEMPERATURE,
            max_tokens: COMPLETION_MAX_TOKENS,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.config.base_url))
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| CompletionProviderError::NetworkError(e.without_url().to_string()))?;

        if !response.status().is_success() {
            return Err(CompletionProviderError::ApiError(format!(
                "chat completion failed with status {}",
                response.status()
            )));
        }

        let body: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| CompletionProviderError::ApiError(e.without_url().to_string()))?;

        let content = body
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_else(|| DEFAULT_COMPLETION.to_string());

        Ok(content)
    }
}
