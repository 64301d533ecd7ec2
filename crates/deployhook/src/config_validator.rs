//! Validation utilities.

use deployhook_config::Config;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Errors on environment variables:\n{}", errors)]
    EnvVarsError { errors: String },
}

fn validate_env_vars(config: &Config) -> Result<(), ValidationError> {
    #[inline]
    fn _missing(error: &mut String, name: &str) {
        error.push_str(&format!("\n  - Missing env. var.: {name}"));
    }

    #[inline]
    fn _invalid(error: &mut String, name: &str, reason: impl std::fmt::Display) {
        error.push_str(&format!("\n  - Invalid env. var.: {name} ({reason})"));
    }

    let mut error = String::new();

    // Check server configuration
    if config.server.bind_ip.is_empty() {
        _missing(&mut error, "DEPLOYHOOK_SERVER_BIND_IP");
    }
    if config.server.bind_port == 0 {
        _missing(&mut error, "DEPLOYHOOK_SERVER_BIND_PORT");
    }
    if config.name.is_empty() {
        _missing(&mut error, "DEPLOYHOOK_NAME");
    }

    // Check deploy configuration
    if config.deploy.target_branch.is_empty() {
        _missing(&mut error, "DEPLOYHOOK_DEPLOY_TARGET_BRANCH");
    }
    if config.deploy.shell_path_template.is_empty()
        && config.deploy.notify_command_template.is_empty()
    {
        _missing(
            &mut error,
            "DEPLOYHOOK_DEPLOY_SHELL_PATH_TEMPLATE or DEPLOYHOOK_DEPLOY_NOTIFY_COMMAND_TEMPLATE",
        );
    }

    // Check dispatch configuration
    if let Err(e) = config.dispatch.driver() {
        _invalid(&mut error, "DEPLOYHOOK_DISPATCH_DRIVER", e);
    }

    if error.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::EnvVarsError { errors: error })
    }
}

/// Validate configuration.
pub fn validate_configuration(config: &Config) -> Result<(), ValidationError> {
    validate_env_vars(config)
}
