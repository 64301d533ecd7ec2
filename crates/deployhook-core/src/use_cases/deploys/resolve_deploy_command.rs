use async_trait::async_trait;
use deployhook_config::{EMAIL_PLACEHOLDER, PROJECT_NAME_PLACEHOLDER};
use deployhook_models::DeployCommand;
use shaku::{Component, Interface};

use crate::{CoreContext, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait ResolveDeployCommandInterface: Interface {
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        project: &str,
        email: &str,
    ) -> Result<DeployCommand>;
}

/// Picks the command line for a project.
///
/// Order: project shell override, then the shell path template when one is
/// configured, then the notification command template.
#[derive(Component)]
#[shaku(interface = ResolveDeployCommandInterface)]
pub struct ResolveDeployCommand;

#[async_trait]
impl ResolveDeployCommandInterface for ResolveDeployCommand {
    #[tracing::instrument(skip(self, ctx), ret)]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        project: &str,
        email: &str,
    ) -> Result<DeployCommand> {
        let shell_override = ctx
            .state_service
            .projects_get(project)
            .await?
            .and_then(|p| p.shell_override);

        let command_line = match shell_override {
            Some(path) => path,
            None if !ctx.config.deploy.shell_path_template.is_empty() => ctx
                .config
                .deploy
                .shell_path_template
                .replace(PROJECT_NAME_PLACEHOLDER, project),
            None => ctx
                .config
                .deploy
                .notify_command_template
                .replace(PROJECT_NAME_PLACEHOLDER, project)
                .replace(EMAIL_PLACEHOLDER, email),
        };

        Ok(DeployCommand::new(project, command_line))
    }
}
