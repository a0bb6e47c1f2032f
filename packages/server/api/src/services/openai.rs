use crate::config::OpenAiConfig;
use crate::error::{FaqError, FaqResult};
use crate::services::completion::Completer;
use crate::services::search::embedding::{ensure_embeddable, Embedder};
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Client for an OpenAI-compatible API, serving both the embedding and the
/// chat-completion endpoints with one credential.
pub struct OpenAiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    embedding_model: String,
    completion_model: String,
}

#[derive(Serialize)]
struct EmbeddingRequest<'a> {
    model: &'a str,
    input: [&'a str; 1],
}

#[derive(Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Deserialize)]
struct EmbeddingData {
    embedding: Vec<f32>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
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

#[derive(Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    message: String,
}

impl OpenAiClient {
    pub fn new(config: &OpenAiConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            embedding_model: config.embedding_model.clone(),
            completion_model: config.completion_model.clone(),
        })
    }

    /// POSTs `body` to `path` and decodes the JSON reply. Errors are plain
    /// strings so each endpoint can wrap them in its own error kind.
    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, String>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| format!("request to {} failed: {}", path, e))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| format!("failed to read response from {}: {}", path, e))?;

        if !status.is_success() {
            let detail = serde_json::from_str::<ApiErrorBody>(&text)
                .map(|b| b.error.message)
                .unwrap_or(text);
            return Err(format!("{} returned {}: {}", path, status, detail));
        }

        serde_json::from_str(&text).map_err(|e| format!("malformed response from {}: {}", path, e))
    }
}

#[async_trait]
impl Embedder for OpenAiClient {
    async fn embed(&self, text: &str) -> FaqResult<Vec<f32>> {
        ensure_embeddable(text)?;

        let request = EmbeddingRequest {
            model: &self.embedding_model,
            input: [text],
        };
        let response: EmbeddingResponse = self
            .post_json("/embeddings", &request)
            .await
            .map_err(FaqError::EmbeddingService)?;

        let vector = response
            .data
            .into_iter()
            .next()
            .map(|d| d.embedding)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| {
                FaqError::EmbeddingService("response contained no embedding".to_string())
            })?;

        tracing::debug!(
            "Generated {}-dim embedding for {} chars",
            vector.len(),
            text.len()
        );
        Ok(vector)
    }
}

#[async_trait]
impl Completer for OpenAiClient {
    async fn complete(&self, system_prompt: &str, user_message: &str) -> FaqResult<String> {
        let request = ChatCompletionRequest {
            model: &self.completion_model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: user_message,
                },
            ],
        };
        let response: ChatCompletionResponse = self
            .post_json("/chat/completions", &request)
            .await
            .map_err(FaqError::CompletionService)?;

        response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| {
                FaqError::CompletionService("response contained no message content".to_string())
            })
    }
}
