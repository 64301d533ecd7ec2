use async_trait::async_trait;
use deployhook_dispatch_interface::{DeployService, DispatchError};
use deployhook_models::DeployCommand;
use tracing::info;

/// Dispatch service which only logs commands.
#[derive(Clone, Default)]
pub struct NullDeployService {
    _private: (),
}

impl NullDeployService {
    /// Creates a null dispatch service.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

#[async_trait]
impl DeployService for NullDeployService {
    #[tracing::instrument(skip(self))]
    async fn dispatch(&self, command: DeployCommand) -> Result<(), DispatchError> {
        info!(
            project = %command.project,
            command = %command,
            message = "Skipping deploy command (null driver)"
        );
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn health_check(&self) -> Result<(), DispatchError> {
        Ok(())
    }
}
