//! Client modules for external API interactions

pub mod discord_client;
pub mod llm_client;
pub mod youtube_client;

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::core::models::Video;
use crate::errors::ShareError;

pub use discord_client::DiscordClient;
pub use llm_client::LlmClient;
pub use youtube_client::YouTubeClient;

/// Source of the most recent upload for a channel.
#[async_trait]
pub trait VideoSource: Send + Sync {
    async fn fetch_latest(&self, channel_id: &str) -> Result<Video, ShareError>;
}

/// Drafts a promotional message for a video. Failures are soft.
#[async_trait]
pub trait MessageComposer: Send + Sync {
    async fn compose(&self, title: &str, description: Option<&str>) -> Result<String, ShareError>;
}

/// Delivers a finished message to a channel.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, channel_id: &str, content: &str) -> Result<(), ShareError>;
}

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Shared HTTP client with a bounded per-request timeout.
pub fn build_http_client(timeout: Duration) -> Result<Client, ShareError> {
    Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| ShareError::Transport(format!("Failed to build HTTP client: {e}")))
}

/// Reads the body of a non-success response for error reporting.
pub(crate) async fn error_body(response: reqwest::Response) -> String {
    response
        .text()
        .await
        .unwrap_or_else(|_| "<failed to read body>".to_string())
}
