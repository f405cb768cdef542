use chrono_tz::Tz;
use tracing::{info, warn};

use crate::clients::MessageComposer;
use crate::clients::discord_client::validate_content;
use crate::core::models::{MessageSource, Video};
use crate::errors::ShareError;
use crate::message_formatter::{format_composed_message, format_default_message};

/// Picks the message text for a video.
///
/// Never fails: a missing or failing composer yields the default template,
/// and so does a composed message too long to post.
pub async fn build_message(
    video: &Video,
    composer: Option<&dyn MessageComposer>,
    display_tz: Option<Tz>,
) -> (String, MessageSource) {
    let Some(composer) = composer else {
        info!("No composer configured, using default message");
        return (
            format_default_message(video, display_tz),
            MessageSource::Default,
        );
    };

    match compose_postable(video, composer).await {
        Ok(message) => {
            info!("Message composed by model");
            (message, MessageSource::Composed)
        }
        Err(e) => {
            warn!("Could not compose message, falling back to default: {}", e);
            (
                format_default_message(video, display_tz),
                MessageSource::Fallback {
                    reason: e.to_string(),
                },
            )
        }
    }
}

async fn compose_postable(
    video: &Video,
    composer: &dyn MessageComposer,
) -> Result<String, ShareError> {
    let composed = composer
        .compose(&video.title, video.description.as_deref())
        .await?;
    let message = format_composed_message(&composed, &video.url);
    validate_content(&message)?;
    Ok(message)
}
