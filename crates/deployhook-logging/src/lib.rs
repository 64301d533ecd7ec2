//! Log configuration.

use deployhook_config::Config;
use thiserror::Error;
use std::io::Stdout;

use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_error::ErrorLayer;
use tracing_log::LogTracer;
use tracing_subscriber::{layer::SubscriberExt, EnvFilter};
use tracing_tree::HierarchicalLayer;

const DEFAULT_FILTER: &str = "info,deployhook=debug";

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Could not install the tracing subscriber: {source}")]
    SetGlobalDefault {
        source: tracing::dispatcher::SetGlobalDefaultError,
    },
    #[error("Could not bridge `log` records: {source}")]
    LogTracer {
        source: tracing_log::log::SetLoggerError,
    },
    #[error("Invalid log filter '{filter}': {source}")]
    InvalidFilter {
        filter: String,
        source: tracing_subscriber::filter::ParseError,
    },
}

/// Install the global subscriber.
///
/// Logs go to a hierarchical tree on stderr, plus bunyan JSON on stdout when
/// `DEPLOYHOOK_LOGGING_USE_BUNYAN` is set.
pub fn configure_logging(config: &Config) -> Result<(), LoggingError> {
    LogTracer::init().map_err(|source| LoggingError::LogTracer { source })?;

    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_FILTER.to_string());
    let subscriber = tracing_subscriber::registry()
        .with(ErrorLayer::default())
        .with(
            HierarchicalLayer::new(2)
                .with_targets(true)
                .with_bracketed_fields(true),
        )
        .with(parse_filter(&filter)?)
        .with(config.logging.use_bunyan.then_some(JsonStorageLayer))
        .with(bunyan_layer(config));

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|source| LoggingError::SetGlobalDefault { source })
}

fn parse_filter(filter: &str) -> Result<EnvFilter, LoggingError> {
    EnvFilter::try_new(filter).map_err(|source| LoggingError::InvalidFilter {
        filter: filter.to_owned(),
        source,
    })
}

fn bunyan_layer(config: &Config) -> Option<BunyanFormattingLayer<fn() -> Stdout>> {
    config.logging.use_bunyan.then(|| {
        let app_name = format!("{}-{}", config.name, config.version);
        BunyanFormattingLayer::new(app_name, std::io::stdout as fn() -> Stdout)
    })
}
