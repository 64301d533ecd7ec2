//! Dispatch interfaces.

use async_trait::async_trait;
use deployhook_models::DeployCommand;

use crate::DispatchError;

/// Deploy command runner.
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait DeployService: Send + Sync {
    /// Submits a deploy command.
    ///
    /// Returns as soon as the command is handed over, without waiting for
    /// the process. Failures happening after submission go to the
    /// implementation's failure sink.
    async fn dispatch(&self, command: DeployCommand) -> Result<(), DispatchError>;
    /// Health check
    async fn health_check(&self) -> Result<(), DispatchError>;
}
