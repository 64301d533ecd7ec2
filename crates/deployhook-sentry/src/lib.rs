//! Sentry integration.

use std::{future::Future, str::FromStr};

use deployhook_config::Config;
pub use sentry;
use sentry::{types::Dsn, ClientOptions};
use tracing::{info, warn};

/// Configure Sentry integration by wrapping a function.
pub async fn with_sentry_configuration<T, Fut, E>(config: &Config, func: T) -> Result<(), E>
where
    T: FnOnce() -> Fut,
    Fut: Future<Output = Result<(), E>>,
{
    let _guard = build_client_options(config).map(|options| {
        info!("Sentry integration enabled.");
        sentry::init(options)
    });

    func().await
}

fn build_client_options(config: &Config) -> Option<ClientOptions> {
    if config.sentry.url.is_empty() {
        return None;
    }

    let dsn = match Dsn::from_str(&config.sentry.url) {
        Ok(dsn) => dsn,
        Err(e) => {
            warn!(error = %e, message = "Invalid Sentry URL, integration disabled");
            return None;
        }
    };

    let mut options = ClientOptions::new();
    options.dsn = Some(dsn);
    options.default_integrations = true;
    options.in_app_exclude.push("actix_http");
    options.in_app_exclude.push("actix_rt");
    options.in_app_exclude.push("actix_server");
    options.in_app_exclude.push("actix_service");
    options.in_app_exclude.push("actix_web");
    options.in_app_exclude.push("sentry_actix");
    options.in_app_exclude.push("sentry_backtrace");
    options.in_app_exclude.push("sentry_core");
    options.in_app_exclude.push("tokio");
    options.release = Some(config.version.clone().into());
    options.attach_stacktrace = true;
    options.traces_sample_rate = config.sentry.traces_sample_rate;
    options.debug = false;

    Some(options)
}
