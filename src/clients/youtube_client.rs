//! YouTube Data API v3 client
//!
//! Only the search endpoint is used, to find a channel's newest upload.

use async_trait::async_trait;
use chrono::DateTime;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, info};

use super::{VideoSource, error_body};
use crate::core::config::AppConfig;
use crate::core::models::{VIDEO_URL_BASE, Video};
use crate::errors::ShareError;

const SEARCH_PATH: &str = "/youtube/v3/search";

#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
pub struct SearchItem {
    pub id: SearchItemId,
    pub snippet: SearchSnippet,
}

#[derive(Debug, Deserialize)]
pub struct SearchItemId {
    #[serde(rename = "videoId")]
    pub video_id: String,
}

#[derive(Debug, Deserialize)]
pub struct SearchSnippet {
    pub title: String,
    #[serde(rename = "publishedAt")]
    pub published_at: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone)]
pub struct YouTubeClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl YouTubeClient {
    #[must_use]
    pub fn new(client: Client, api_key: String, base_url: String) -> Self {
        Self {
            client,
            api_key,
            base_url,
        }
    }

    #[must_use]
    pub fn from_config(client: Client, config: &AppConfig) -> Self {
        Self::new(
            client,
            config.youtube_api_key.clone(),
            config.endpoints.youtube.clone(),
        )
    }

    #[must_use]
    pub fn search_url(&self) -> String {
        format!("{}{SEARCH_PATH}", self.base_url)
    }
}

/// Query parameters asking for the single newest video of a channel.
#[must_use]
pub fn search_query(api_key: &str, channel_id: &str) -> Vec<(&'static str, String)> {
    vec![
        ("key", api_key.to_string()),
        ("channelId", channel_id.to_string()),
        ("part", "snippet".to_string()),
        ("order", "date".to_string()),
        ("maxResults", "1".to_string()),
        ("type", "video".to_string()),
    ]
}

/// Turns a raw search response into the newest `Video`.
pub fn parse_search_response(
    status: StatusCode,
    body: &str,
    channel_id: &str,
) -> Result<Video, ShareError> {
    if !status.is_success() {
        return Err(ShareError::Upstream {
            status: status.as_u16(),
            body: body.to_string(),
        });
    }

    let response: SearchResponse = serde_json::from_str(body)?;
    let item = response
        .items
        .into_iter()
        .next()
        .ok_or_else(|| ShareError::NotFound(channel_id.to_string()))?;

    let published_at = DateTime::parse_from_rfc3339(&item.snippet.published_at)?;
    let description = Some(item.snippet.description).filter(|d| !d.is_empty());

    Ok(Video {
        title: item.snippet.title,
        url: format!("{VIDEO_URL_BASE}{}", item.id.video_id),
        published_at,
        description,
    })
}

#[async_trait]
impl VideoSource for YouTubeClient {
    async fn fetch_latest(&self, channel_id: &str) -> Result<Video, ShareError> {
        if channel_id.trim().is_empty() {
            return Err(ShareError::Config(
                "YouTube channel id must not be empty".to_string(),
            ));
        }

        info!("Searching latest video for channel {}", channel_id);

        let response = self
            .client
            .get(self.search_url())
            .query(&search_query(&self.api_key, channel_id))
            .send()
            .await
            .map_err(|e| ShareError::Transport(e.without_url().to_string()))?;

        let status = response.status();
        debug!("YouTube search responded with {}", status);

        let body = if status.is_success() {
            response
                .text()
                .await
                .map_err(|e| ShareError::Transport(e.without_url().to_string()))?
        } else {
            error_body(response).await
        };

        parse_search_response(status, &body, channel_id)
    }
}
