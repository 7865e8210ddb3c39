/// Model Client: the single point of entry for all model-backend calls.
///
/// ARCHITECTURAL RULE: No other module may talk to the model backend over HTTP.
/// The pipeline depends only on the `EmbeddingBackend` and `ChatBackend` traits;
/// `OllamaClient` is the production implementation of both.
///
/// No retries: a failed call is reported once and the request fails.
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

const EMBED_PATH: &str = "/api/embed";
const CHAT_PATH: &str = "/api/chat";

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Backend returned no embedding")]
    EmptyEmbedding,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

#[derive(Debug, Serialize)]
struct EmbedRequest<'a> {
    model: &'a str,
    input: &'a str,
}

#[derive(Debug, Deserialize)]
struct EmbedResponse {
    #[serde(default)]
    embeddings: Vec<Vec<f32>>,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    message: Option<ResponseMessage>,
    eval_count: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: String,
}

#[derive(Debug, Deserialize)]
struct OllamaError {
    error: String,
}

/// Produces a vector representation of text.
#[async_trait]
pub trait EmbeddingBackend: Send + Sync {
    async fn embed(&self, model: &str, input: &str) -> Result<Vec<f32>, LlmError>;
}

/// Runs one non-streaming chat completion and returns the assistant's text.
/// An empty string is a valid return; callers decide what it means.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    async fn chat(&self, model: &str, messages: &[ChatMessage]) -> Result<String, LlmError>;
}

/// Client for an Ollama-compatible HTTP API.
#[derive(Clone)]
pub struct OllamaClient {
    client: Client,
    base_url: String,
}

impl OllamaClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, LlmError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        let response = self.client.post(&url).json(body).send().await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            // Ollama reports failures as {"error": "..."}
            let message = serde_json::from_str::<OllamaError>(&text)
                .map(|e| e.error)
                .unwrap_or(text);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(serde_json::from_str(&text)?)
    }
}

#[async_trait]
impl EmbeddingBackend for OllamaClient {
    async fn embed(&self, model: &str, input: &str) -> Result<Vec<f32>, LlmError> {
        let response: EmbedResponse = self
            .post_json(EMBED_PATH, &EmbedRequest { model, input })
            .await?;

        let embedding = response
            .embeddings
            .into_iter()
            .next()
            .filter(|v| !v.is_empty())
            .ok_or(LlmError::EmptyEmbedding)?;

        debug!(model, dimensions = embedding.len(), "Embedding call succeeded");
        Ok(embedding)
    }
}

#[async_trait]
impl ChatBackend for OllamaClient {
    async fn chat(&self, model: &str, messages: &[ChatMessage]) -> Result<String, LlmError> {
        let response: ChatResponse = self
            .post_json(
                CHAT_PATH,
                &ChatRequest {
                    model,
                    messages,
                    stream: false,
                },
            )
            .await?;

        debug!(
            model,
            eval_count = response.eval_count.unwrap_or_default(),
            "Chat call succeeded"
        );

        Ok(response.message.map(|m| m.content).unwrap_or_default())
    }
}
