//! Structured logging infrastructure for TourDesk.
//!
//! Logs go to stderr: stdout belongs to the console window.

use crate::config::LoggingConfig;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Build the level filter. `RUST_LOG` wins over the configured level.
pub fn filter(config: &LoggingConfig) -> EnvFilter {
    let env_directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    build_filter(env_directives.as_deref(), &config.level)
}

fn build_filter(env_directives: Option<&str>, level: &str) -> EnvFilter {
    env_directives
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .or_else(|| EnvFilter::try_new(level).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

/// Initialize the logging system, plain or JSON depending on `config.json`.
///
/// # Example
/// ```no_run
/// use tourdesk_core::{config::LoggingConfig, logging};
///
/// logging::init(&LoggingConfig::default());
/// tracing::info!("Application started");
/// ```
pub fn init(config: &LoggingConfig) {
    let filter = filter(config);

    if config.json {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .init();
    }
}
