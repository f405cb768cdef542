//! LLM (DeepSeek) API client module
//!
//! DeepSeek speaks the OpenAI chat-completions protocol, so the prompt is
//! assembled with `openai-api-rs` message types and sent as plain JSON.

use async_trait::async_trait;
use openai_api_rs::v1::chat_completion::{ChatCompletionMessage, Content, MessageRole};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::info;

use super::{MessageComposer, error_body};
use crate::core::config::AppConfig;
use crate::errors::ShareError;
use crate::prompt::build_promo_prompt;

const COMPLETIONS_PATH: &str = "/v1/chat/completions";

/// Balance between creativity and focus
pub const TEMPERATURE: f64 = 0.7;

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    message: CompletionMessage,
}

#[derive(Debug, Deserialize)]
struct CompletionMessage {
    content: Option<String>,
}

/// LLM API client for drafting promotional messages
pub struct LlmClient {
    client: Client,
    api_key: String,
    model_name: String,
    base_url: String,
}

impl LlmClient {
    #[must_use]
    pub fn new(client: Client, api_key: String, model_name: String, base_url: String) -> Self {
        Self {
            client,
            api_key,
            model_name,
            base_url,
        }
    }

    /// Returns `None` when no composer key is configured.
    #[must_use]
    pub fn from_config(client: Client, config: &AppConfig) -> Option<Self> {
        config.deepseek_api_key.as_ref().map(|key| {
            Self::new(
                client,
                key.clone(),
                config.model_name().to_string(),
                config.endpoints.deepseek.clone(),
            )
        })
    }

    #[must_use]
    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    #[must_use]
    pub fn completions_url(&self) -> String {
        format!("{}{COMPLETIONS_PATH}", self.base_url)
    }

    #[must_use]
    pub fn build_prompt(&self, title: &str, description: Option<&str>) -> Vec<ChatCompletionMessage> {
        vec![ChatCompletionMessage {
            role: MessageRole::user,
            content: Content::Text(build_promo_prompt(title, description)),
            name: None,
            tool_calls: None,
            tool_call_id: None,
        }]
    }
}

/// Wire body for a chat-completions request.
#[must_use]
pub fn build_request_body(model: &str, prompt: &[ChatCompletionMessage]) -> Value {
    let messages: Vec<Value> = prompt
        .iter()
        .filter_map(|msg| {
            let role_str = match msg.role {
                MessageRole::system => "system",
                MessageRole::user => "user",
                MessageRole::assistant => "assistant",
                MessageRole::function => "function",
                MessageRole::tool => "tool",
            };
            match &msg.content {
                Content::Text(text) => Some(json!({
                    "role": role_str,
                    "content": text
                })),
                Content::ImageUrl(_) => None,
            }
        })
        .collect();

    json!({
        "model": model,
        "messages": messages,
        "temperature": TEMPERATURE
    })
}

/// Extracts the first completion's text.
pub fn parse_completion(status: StatusCode, body: &str) -> Result<String, ShareError> {
    if !status.is_success() {
        return Err(ShareError::Upstream {
            status: status.as_u16(),
            body: body.to_string(),
        });
    }

    let response: CompletionResponse = serde_json::from_str(body)?;
    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| ShareError::EmptyResult("no choices returned".to_string()))?;

    choice
        .message
        .content
        .ok_or_else(|| ShareError::EmptyResult("first choice has no content".to_string()))
}

#[async_trait]
impl MessageComposer for LlmClient {
    async fn compose(&self, title: &str, description: Option<&str>) -> Result<String, ShareError> {
        let prompt = self.build_prompt(title, description);

        #[cfg(feature = "debug-logs")]
        info!("Using DeepSeek prompt:\n{:?}", prompt);

        #[cfg(not(feature = "debug-logs"))]
        info!(
            "Composing message for \"{}\" with model {}",
            title, self.model_name
        );

        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(&self.api_key)
            .json(&build_request_body(&self.model_name, &prompt))
            .send()
            .await?;

        let status = response.status();
        let body = if status.is_success() {
            response.text().await?
        } else {
            error_body(response).await
        };

        parse_completion(status, &body)
    }
}
