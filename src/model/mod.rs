pub mod prompt;

use async_trait::async_trait;
use log::{debug, info};
use reqwest::Client;
use serde_json::{json, Value};
use thiserror::Error;

use crate::web::models::{Message, Role};

pub use prompt::build_messages;

pub const CHAT_MODEL: &str = "google/gemini-flash-1.5-8b";
pub const TEMPERATURE: f64 = 0.7;
pub const MAX_TOKENS: u32 = 1000;

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("Error code: {status} - {body}")]
    Api { status: u16, body: String },

    #[error("completion response has no message content")]
    MissingContent,
}

/// A hosted chat-completion endpoint.
#[async_trait]
pub trait ChatCompletion: Send + Sync {
    async fn complete(&self, messages: &[Message]) -> Result<String, CompletionError>;
}

// OpenRouter's OpenAI-compatible API
pub struct OpenRouterClient {
    api_key: String,
    base_url: String,
    client: Client,
}

impl OpenRouterClient {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        info!("Using completion API at: {}", base_url);

        Self {
            api_key: api_key.into(),
            base_url,
            client: Client::new(),
        }
    }

    fn url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }

    /// Sends a single user message and hands back the raw status and body.
    pub async fn probe(&self, model: &str, prompt: &str) -> Result<(u16, String), CompletionError> {
        let payload = json!({
            "model": model,
            "messages": [Message { role: Role::User, content: prompt.to_string() }],
        });

        let response = self
            .client
            .post(self.url())
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok((status, body))
    }
}

#[async_trait]
impl ChatCompletion for OpenRouterClient {
    async fn complete(&self, messages: &[Message]) -> Result<String, CompletionError> {
        let payload = json!({
            "model": CHAT_MODEL,
            "messages": messages,
            "temperature": TEMPERATURE,
            "max_tokens": MAX_TOKENS,
        });

        info!(
            "Sending {} messages to {} (max_tokens: {})",
            messages.len(),
            CHAT_MODEL,
            MAX_TOKENS
        );
        debug!("Payload: {}", payload);

        let response = self
            .client
            .post(self.url())
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            return Err(CompletionError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let response_json: Value = response.json().await?;
        debug!("Response JSON: {}", response_json);

        let content = extract_content(&response_json)?;
        info!("Response length: {} characters", content.chars().count());
        Ok(content)
    }
}

fn extract_content(response: &Value) -> Result<String, CompletionError> {
    response
        .get("choices")
        .and_then(|choices| choices.get(0))
        .and_then(|choice| choice.get("message"))
        .and_then(|message| message.get("content"))
        .and_then(|content| content.as_str())
        .map(str::to_string)
        .ok_or(CompletionError::MissingContent)
}
