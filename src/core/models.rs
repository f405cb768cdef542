use chrono::{DateTime, FixedOffset};

pub const VIDEO_URL_BASE: &str = "https://youtu.be/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Video {
    pub title: String,
    pub url: String,
    pub published_at: DateTime<FixedOffset>,
    pub description: Option<String>,
}

/// Where the delivered message text came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageSource {
    Composed,
    /// No composer configured.
    Default,
    /// Composer configured but failed; carries the error text.
    Fallback { reason: String },
}

#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub video: Video,
    pub message: String,
    pub source: MessageSource,
}
