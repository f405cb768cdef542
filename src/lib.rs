/// yt-share-agent - announces a YouTube channel's newest video on Discord.
///
/// A single run looks up the latest upload through the YouTube Data API,
/// optionally asks DeepSeek to draft a promotional blurb, and posts the
/// result to a Discord channel. Scheduling is left to cron or similar.
///
/// # Architecture
///
/// - `clients` wraps the three upstream APIs behind small async traits
/// - `worker` runs the pipeline and owns the fallback policy: a failing
///   composer degrades to the default template, it never blocks delivery
/// - `message_formatter` builds the final Discord text
///
/// # Example
///
/// ```no_run
/// use yt_share_agent::core::config::AppConfig;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     yt_share_agent::setup_logging();
///
///     let config = AppConfig::from_env()?;
///     let outcome = yt_share_agent::worker::run(&config).await?;
///     println!("{}", outcome.message);
///     Ok(())
/// }
/// ```
pub mod clients;
pub mod core;
pub mod errors;
pub mod message_formatter;
pub mod prompt;
pub mod worker;

pub use errors::ShareError;

/// Configure structured logging on stderr.
///
/// Stdout is reserved for the final message. `RUST_LOG` controls the filter
/// (default `info`); `LOG_FORMAT=json` switches to JSON lines. Calling this
/// more than once is harmless.
///
/// # Example
///
/// ```
/// yt_share_agent::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));
    let registry = tracing_subscriber::registry().with(filter);

    let installed = if json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    } else {
        registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init()
    };
    if installed.is_err() {
        tracing::debug!("Tracing subscriber already installed, keeping it");
    }
}
