//! Final message text for Discord.

use chrono_tz::Tz;

use crate::core::models::Video;

pub const MENTION: &str = "@everyone";
pub const LINK_LABEL: &str = "🔗 Enlace: ";
const DATE_FORMAT: &str = "%d/%m/%Y %H:%M";

/// Publish date as `dd/mm/yyyy HH:MM`, in the timestamp's own offset unless a
/// display timezone is given.
#[must_use]
pub fn format_published_at(video: &Video, display_tz: Option<Tz>) -> String {
    match display_tz {
        Some(tz) => video
            .published_at
            .with_timezone(&tz)
            .format(DATE_FORMAT)
            .to_string(),
        None => video.published_at.format(DATE_FORMAT).to_string(),
    }
}

/// Deterministic template used when no composed text is available.
#[must_use]
pub fn format_default_message(video: &Video, display_tz: Option<Tz>) -> String {
    format!(
        "🎥 **Nuevo vídeo disponible!**\n\n\
         **{}**\n\n\
         📅 Publicado: {}\n\
         {LINK_LABEL}{}\n\n\
         ¡No te lo pierdas! 👀\n\n {MENTION}",
        video.title,
        format_published_at(video, display_tz),
        video.url,
    )
}

/// Appends the link and mention to model-composed text.
#[must_use]
pub fn format_composed_message(composed: &str, url: &str) -> String {
    format!("{composed}\n\n{LINK_LABEL}{url}\n\n {MENTION}")
}
