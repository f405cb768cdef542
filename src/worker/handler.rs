use tracing::{Instrument, error, info, info_span};
use uuid::Uuid;

use super::compose::build_message;
use crate::clients::{
    DiscordClient, LlmClient, MessageComposer, Notifier, VideoSource, YouTubeClient,
    build_http_client,
};
use crate::core::config::AppConfig;
use crate::core::models::RunOutcome;
use crate::errors::ShareError;

/// Runs the pipeline against injected collaborators.
///
/// Fetch and delivery errors abort the run; composer errors never do.
pub async fn run_pipeline(
    config: &AppConfig,
    source: &dyn VideoSource,
    composer: Option<&dyn MessageComposer>,
    notifier: &dyn Notifier,
) -> Result<RunOutcome, ShareError> {
    let video = source
        .fetch_latest(&config.youtube_channel_id)
        .await
        .inspect_err(|e| error!("Failed to fetch latest video: {}", e))?;
    info!("Latest video: {} ({})", video.title, video.url);

    let (message, source) = build_message(&video, composer, config.display_timezone).await;

    notifier
        .send(&config.discord_channel_id, &message)
        .await
        .inspect_err(|e| error!("Failed to deliver message: {}", e))?;
    info!("Message delivered to Discord");

    Ok(RunOutcome {
        video,
        message,
        source,
    })
}

/// Builds the real clients from config and runs once.
pub async fn run(config: &AppConfig) -> Result<RunOutcome, ShareError> {
    let run_id = Uuid::new_v4();
    let span = info_span!("share_run", %run_id);

    async move {
        let http = build_http_client(config.http_timeout)?;
        let youtube = YouTubeClient::from_config(http.clone(), config);
        let llm = LlmClient::from_config(http.clone(), config);
        let discord = DiscordClient::from_config(http, config);

        if let Some(llm) = &llm {
            info!("Composer enabled with model {}", llm.model_name());
        }

        run_pipeline(
            config,
            &youtube,
            llm.as_ref().map(|c| c as &dyn MessageComposer),
            &discord,
        )
        .await
    }
    .instrument(span)
    .await
}
