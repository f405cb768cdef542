//! Discord REST client module
//!
//! Posts a single message to a channel as a bot user.

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Client, StatusCode};
use serde_json::{Value, json};
use tracing::{error, info};

use super::{Notifier, error_body};
use crate::core::config::AppConfig;
use crate::errors::ShareError;

const API_VERSION_PATH: &str = "/api/v10";

/// Discord requires bot requests to carry a `DiscordBot (...)` user agent.
pub const DISCORD_USER_AGENT: &str = concat!(
    "DiscordBot (",
    env!("CARGO_PKG_NAME"),
    ", ",
    env!("CARGO_PKG_VERSION"),
    ")"
);

/// Discord rejects message content longer than this.
pub const MAX_MESSAGE_CHARS: usize = 2000;

pub struct DiscordClient {
    client: Client,
    token: String,
    base_url: String,
}

/// Authenticated view of the client, valid for the requests of one run.
pub struct DiscordSession<'a> {
    client: &'a Client,
    headers: HeaderMap,
    base_url: &'a str,
}

impl DiscordClient {
    #[must_use]
    pub fn new(client: Client, token: String, base_url: String) -> Self {
        Self {
            client,
            token,
            base_url,
        }
    }

    #[must_use]
    pub fn from_config(client: Client, config: &AppConfig) -> Self {
        Self::new(
            client,
            config.discord_token.clone(),
            config.endpoints.discord.clone(),
        )
    }

    pub fn open_session(&self) -> Result<DiscordSession<'_>, ShareError> {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, bot_authorization(&self.token)?);
        headers.insert(USER_AGENT, HeaderValue::from_static(DISCORD_USER_AGENT));
        Ok(DiscordSession {
            client: &self.client,
            headers,
            base_url: &self.base_url,
        })
    }
}

impl DiscordSession<'_> {
    pub async fn post_message(&self, channel_id: &str, content: &str) -> Result<(), ShareError> {
        let response = self
            .client
            .post(message_endpoint(self.base_url, channel_id))
            .headers(self.headers.clone())
            .json(&create_message_payload(content))
            .send()
            .await
            .map_err(|e| ShareError::Delivery(format!("Discord request failed: {e}")))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = error_body(response).await;
        error!("Discord message post failed: status={} body={}", status, body);
        Err(classify_failure(status, &body))
    }
}

/// `Bot <token>` authorization header value.
pub fn bot_authorization(token: &str) -> Result<HeaderValue, ShareError> {
    let token = token.trim();
    if token.is_empty() {
        return Err(ShareError::Auth("bot token is empty".to_string()));
    }
    let mut value = HeaderValue::from_str(&format!("Bot {token}"))
        .map_err(|e| ShareError::Auth(format!("invalid bot token: {e}")))?;
    value.set_sensitive(true);
    Ok(value)
}

#[must_use]
pub fn message_endpoint(base_url: &str, channel_id: &str) -> String {
    format!(
        "{base_url}{API_VERSION_PATH}/channels/{}/messages",
        urlencoding::encode(channel_id)
    )
}

#[must_use]
pub fn create_message_payload(content: &str) -> Value {
    json!({ "content": content })
}

/// Rejects content Discord would refuse anyway.
pub fn validate_content(content: &str) -> Result<(), ShareError> {
    if content.trim().is_empty() {
        return Err(ShareError::Delivery("message content is empty".to_string()));
    }
    let len = content.chars().count();
    if len > MAX_MESSAGE_CHARS {
        return Err(ShareError::Delivery(format!(
            "message has {len} characters, Discord allows {MAX_MESSAGE_CHARS}"
        )));
    }
    Ok(())
}

/// Maps a failed post to an error kind; rejected credentials are `Auth`.
#[must_use]
pub fn classify_failure(status: StatusCode, body: &str) -> ShareError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            ShareError::Auth(format!("Discord rejected credentials ({status}): {body}"))
        }
        _ => ShareError::Delivery(format!("Discord returned {status}: {body}")),
    }
}

#[async_trait]
impl Notifier for DiscordClient {
    async fn send(&self, channel_id: &str, content: &str) -> Result<(), ShareError> {
        if channel_id.trim().is_empty() {
            return Err(ShareError::Config(
                "Discord channel id must not be empty".to_string(),
            ));
        }
        validate_content(content)?;

        let session = self.open_session()?;
        session.post_message(channel_id, content).await?;
        info!("Message posted to Discord channel {}", channel_id);
        Ok(())
    }
}
