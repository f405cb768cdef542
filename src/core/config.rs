use std::env;
use std::time::Duration;

use chrono_tz::Tz;
use url::Url;

use crate::errors::ShareError;

pub const DEFAULT_YOUTUBE_API_BASE: &str = "https://www.googleapis.com";
pub const DEFAULT_DEEPSEEK_API_BASE: &str = "https://api.deepseek.com";
pub const DEFAULT_DISCORD_API_BASE: &str = "https://discord.com";
pub const DEFAULT_DEEPSEEK_MODEL: &str = "deepseek-chat";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Base URLs for the three upstream APIs, without trailing slashes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiEndpoints {
    pub youtube: String,
    pub deepseek: String,
    pub discord: String,
}

impl Default for ApiEndpoints {
    fn default() -> Self {
        Self {
            youtube: DEFAULT_YOUTUBE_API_BASE.to_string(),
            deepseek: DEFAULT_DEEPSEEK_API_BASE.to_string(),
            discord: DEFAULT_DISCORD_API_BASE.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub youtube_api_key: String,
    pub youtube_channel_id: String,
    pub discord_token: String,
    pub discord_channel_id: String,
    pub deepseek_api_key: Option<String>,
    pub deepseek_model: Option<String>,
    pub http_timeout: Duration,
    pub display_timezone: Option<Tz>,
    pub endpoints: ApiEndpoints,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ShareError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup so tests don't have to
    /// touch the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ShareError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or_else(|| ShareError::Config(format!("{key} must be set")))
        };
        let optional = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let http_timeout = match optional("HTTP_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw
                    .parse()
                    .map_err(|e| ShareError::Config(format!("HTTP_TIMEOUT_SECS: {e}")))?;
                if secs == 0 {
                    return Err(ShareError::Config(
                        "HTTP_TIMEOUT_SECS must be greater than zero".to_string(),
                    ));
                }
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        };

        let display_timezone = optional("DISPLAY_TIMEZONE")
            .map(|raw| {
                raw.parse::<Tz>()
                    .map_err(|e| ShareError::Config(format!("DISPLAY_TIMEZONE: {e}")))
            })
            .transpose()?;

        let endpoint = |key: &str, default: &str| base_url(optional(key), default, key);
        let endpoints = ApiEndpoints {
            youtube: endpoint("YOUTUBE_API_BASE", DEFAULT_YOUTUBE_API_BASE)?,
            deepseek: endpoint("DEEPSEEK_API_BASE", DEFAULT_DEEPSEEK_API_BASE)?,
            discord: endpoint("DISCORD_API_BASE", DEFAULT_DISCORD_API_BASE)?,
        };

        Ok(Self {
            youtube_api_key: required("API_KEY_YOUTUBE")?,
            youtube_channel_id: required("ID_CHANNEL_YOUTUBE")?,
            discord_token: required("TOKEN_DISCORD")?,
            discord_channel_id: required("ID_CHANNEL_DISCORD")?,
            deepseek_api_key: optional("API_KEY_DEEPSEEK"),
            deepseek_model: optional("DEEPSEEK_MODEL"),
            http_timeout,
            display_timezone,
            endpoints,
        })
    }

    #[must_use]
    pub fn composer_enabled(&self) -> bool {
        self.deepseek_api_key.is_some()
    }

    #[must_use]
    pub fn model_name(&self) -> &str {
        self.deepseek_model.as_deref().unwrap_or(DEFAULT_DEEPSEEK_MODEL)
    }
}

fn base_url(raw: Option<String>, default: &str, key: &str) -> Result<String, ShareError> {
    let Some(raw) = raw else {
        return Ok(default.to_string());
    };
    let parsed = Url::parse(&raw).map_err(|e| ShareError::Config(format!("{key}: {e}")))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ShareError::Config(format!(
            "{key} must be an http(s) URL, got {}",
            parsed.scheme()
        )));
    }
    Ok(raw.trim_end_matches('/').to_string())
}
