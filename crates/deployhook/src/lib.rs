//! Deploy hook command line.

use anyhow::Result;
use args::{Args, CommandExecutor};
use clap::Parser;
use deployhook_config::Config;
use deployhook_logging::configure_logging;
use shadow_rs::shadow;
use tracing::info;

pub(crate) mod args;
mod commands;
mod config_validator;
#[cfg(test)]
mod testutils;

shadow!(build);

/// Version line with the build branch and short commit.
pub fn get_version_data() -> String {
    format!(
        "{} {} ({}@{}, built {})",
        build::PROJECT_NAME,
        build::PKG_VERSION,
        build::BRANCH,
        build::SHORT_COMMIT,
        build::BUILD_TIME_3339
    )
}

/// Parse arguments, load the configuration, then run the command.
///
/// Arguments come first so `--help` works without a valid environment.
pub fn initialize_command_line() -> Result<()> {
    let args = Args::parse();
    let config = load_configuration()?;

    info!(
        version = %get_version_data(),
        dispatch_driver = %config.dispatch.driver_kind,
        target_branch = %config.deploy.target_branch,
        message = "Starting deployhook"
    );

    CommandExecutor::parse_args(config, args)
}

fn load_configuration() -> Result<Config> {
    // A missing `.env` file is fine, variables may come from the environment.
    let _ = dotenv::dotenv();

    let config = Config::from_env(env!("CARGO_PKG_VERSION").to_string());
    configure_logging(&config)?;
    config_validator::validate_configuration(&config)?;

    Ok(config)
}
