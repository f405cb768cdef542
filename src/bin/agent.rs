use anyhow::Context;
use yt_share_agent::core::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    yt_share_agent::setup_logging();

    let config = AppConfig::from_env().context("Failed to load configuration")?;
    let outcome = yt_share_agent::worker::run(&config)
        .await
        .context("Notification run failed")?;

    println!("{}", outcome.message);
    Ok(())
}
