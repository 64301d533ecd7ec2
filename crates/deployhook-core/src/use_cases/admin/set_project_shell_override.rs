use async_trait::async_trait;
use deployhook_models::Project;
use shaku::{Component, Interface};
use tracing::info;

use crate::{CoreContext, DomainError, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait SetProjectShellOverrideInterface: Interface {
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        project: &str,
        path: Option<String>,
    ) -> Result<Project>;
}

#[derive(Component)]
#[shaku(interface = SetProjectShellOverrideInterface)]
pub struct SetProjectShellOverride;

#[async_trait]
impl SetProjectShellOverrideInterface for SetProjectShellOverride {
    #[tracing::instrument(skip(self, ctx), ret)]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        project: &str,
        path: Option<String>,
    ) -> Result<Project> {
        let path = path.ok_or_else(|| DomainError::InvalidInput {
            field: "path".into(),
        })?;

        info!(project = %project, path = %path, message = "Set deploy shell");
        ctx.state_service
            .projects_set_shell_override(project, &path)
            .await
            .map_err(Into::into)
    }
}
