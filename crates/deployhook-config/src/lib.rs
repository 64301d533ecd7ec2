//! Config module.

mod drivers;

use std::{env, str::FromStr};

pub use drivers::{DispatchDriver, DriverError};

/// Placeholder replaced by the project name in command templates.
pub const PROJECT_NAME_PLACEHOLDER: &str = "{projectName}";
/// Placeholder replaced by the triggering email in command templates.
pub const EMAIL_PLACEHOLDER: &str = "{email}";

#[derive(Debug, Clone)]
pub struct DeployConfig {
    /// Branch name which triggers automatic deploys.
    pub target_branch: String,
    /// Deploy command template, containing a `{projectName}` placeholder.
    pub shell_path_template: String,
    /// Notification command template, containing `{projectName}` and `{email}` placeholders.
    pub notify_command_template: String,
    /// Email used by manual deploys when none is given.
    pub default_email: String,
    /// Maximum number of deploy commands running at the same time.
    pub max_concurrent_dispatches: usize,
    /// Projects with their hook enabled at startup.
    pub initial_hook_projects: Vec<String>,
    /// Users allowed to deploy at startup.
    pub initial_users: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct DispatchConfig {
    /// Dispatch driver name, as read from the environment.
    pub driver_kind: String,
}

impl DispatchConfig {
    /// Parse the dispatch driver.
    pub fn driver(&self) -> Result<DispatchDriver, DriverError> {
        DispatchDriver::from_str(&self.driver_kind)
    }
}

#[derive(Debug, Clone)]
pub struct SentryConfig {
    /// Sentry URL.
    pub url: String,
    /// Traces sample rate (between 0 and 1) for Sentry
    pub traces_sample_rate: f32,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Use bunyan logging.
    pub use_bunyan: bool,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Server bind IP.
    pub bind_ip: String,
    /// Server bind port.
    pub bind_port: u16,
    /// Server workers count.
    pub workers_count: Option<u16>,
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Application name.
    pub name: String,
    /// Deploy options.
    pub deploy: DeployConfig,
    /// Dispatch options.
    pub dispatch: DispatchConfig,
    /// Logging options.
    pub logging: LoggingConfig,
    /// Sentry options.
    pub sentry: SentryConfig,
    /// Server options.
    pub server: ServerConfig,
    /// App version
    pub version: String,
}

impl Config {
    /// Create configuration from environment.
    pub fn from_env(version: String) -> Config {
        Config {
            name: env_to_str("DEPLOYHOOK_NAME", "deployhook"),
            deploy: DeployConfig {
                target_branch: env_to_str("DEPLOYHOOK_DEPLOY_TARGET_BRANCH", "deploy-test"),
                shell_path_template: env_to_str("DEPLOYHOOK_DEPLOY_SHELL_PATH_TEMPLATE", ""),
                notify_command_template: env_to_str(
                    "DEPLOYHOOK_DEPLOY_NOTIFY_COMMAND_TEMPLATE",
                    "done_deploy_send_email.sh {projectName} {email}",
                ),
                default_email: env_to_str("DEPLOYHOOK_DEPLOY_DEFAULT_EMAIL", "deploy@localhost"),
                max_concurrent_dispatches: env_to_usize(
                    "DEPLOYHOOK_DEPLOY_MAX_CONCURRENT_DISPATCHES",
                    4,
                ),
                initial_hook_projects: env_to_list("DEPLOYHOOK_DEPLOY_INITIAL_HOOK_PROJECTS"),
                initial_users: env_to_list("DEPLOYHOOK_DEPLOY_INITIAL_USERS"),
            },
            dispatch: DispatchConfig {
                driver_kind: env_to_str("DEPLOYHOOK_DISPATCH_DRIVER", "process"),
            },
            logging: LoggingConfig {
                use_bunyan: env_to_bool("DEPLOYHOOK_LOGGING_USE_BUNYAN", false),
            },
            sentry: SentryConfig {
                url: env_to_str("DEPLOYHOOK_SENTRY_URL", ""),
                traces_sample_rate: env_to_f32("DEPLOYHOOK_SENTRY_TRACES_SAMPLE_RATE", 0.0),
            },
            server: ServerConfig {
                bind_ip: env_to_str("DEPLOYHOOK_SERVER_BIND_IP", "127.0.0.1"),
                bind_port: env_to_u16("DEPLOYHOOK_SERVER_BIND_PORT", 8080),
                workers_count: env_to_optional_u16("DEPLOYHOOK_SERVER_WORKERS_COUNT", None),
            },
            version,
        }
    }

    pub fn from_env_no_version() -> Self {
        Self::from_env("0.0.0".into())
    }
}

fn env_to_u16(name: &str, default: u16) -> u16 {
    env::var(name)
        .map(|e| e.parse().unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_optional_u16(name: &str, default: Option<u16>) -> Option<u16> {
    env::var(name)
        .map(|e| e.parse::<u16>().map(Some).unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_usize(name: &str, default: usize) -> usize {
    env::var(name)
        .map(|e| e.parse().unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_f32(name: &str, default: f32) -> f32 {
    env::var(name)
        .map(|e| e.parse().unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_bool(name: &str, default: bool) -> bool {
    env::var(name).map(|e| !e.is_empty()).unwrap_or(default)
}

fn env_to_str(name: &str, default: &str) -> String {
    env::var(name)
        .unwrap_or_else(|_e| default.to_string())
        .replace("\\n", "\n")
}

fn env_to_list(name: &str) -> Vec<String> {
    split_list(&env_to_str(name, ""))
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}
