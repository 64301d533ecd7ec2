use async_trait::async_trait;
use deployhook_models::DeployCommand;
use shaku::{Component, HasComponent, Interface};
use tracing::{error, info};

use super::ResolveDeployCommandInterface;
use crate::{CoreContext, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait DispatchDeployInterface: Interface {
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        project: &str,
        email: &str,
    ) -> Result<DeployCommand>;
}

/// Hands the project deploy command to the deploy service.
///
/// Callers are expected to have authorized the deploy. Dispatch failures are
/// logged and never returned.
#[derive(Component)]
#[shaku(interface = DispatchDeployInterface)]
pub struct DispatchDeploy;

#[async_trait]
impl DispatchDeployInterface for DispatchDeploy {
    #[tracing::instrument(skip(self, ctx))]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        project: &str,
        email: &str,
    ) -> Result<DeployCommand> {
        let resolve_deploy_command: &dyn ResolveDeployCommandInterface =
            ctx.core_module.resolve_ref();
        let command = resolve_deploy_command.run(ctx, project, email).await?;

        match ctx.deploy_service.dispatch(command.clone()).await {
            Ok(()) => info!(
                project = %project,
                command = %command,
                message = "Deploy dispatched"
            ),
            Err(e) => error!(
                project = %project,
                command = %command,
                error = %e,
                message = "error_reDeploy"
            ),
        }

        Ok(command)
    }
}
