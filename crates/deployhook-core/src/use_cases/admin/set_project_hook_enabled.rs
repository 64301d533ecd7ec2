use async_trait::async_trait;
use deployhook_models::Project;
use shaku::{Component, Interface};
use tracing::info;

use crate::{CoreContext, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait SetProjectHookEnabledInterface: Interface {
    async fn run<'a>(&self, ctx: &CoreContext<'a>, project: &str, enabled: bool)
        -> Result<Project>;
}

#[derive(Component)]
#[shaku(interface = SetProjectHookEnabledInterface)]
pub struct SetProjectHookEnabled;

#[async_trait]
impl SetProjectHookEnabledInterface for SetProjectHookEnabled {
    #[tracing::instrument(skip(self, ctx), ret)]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        project: &str,
        enabled: bool,
    ) -> Result<Project> {
        info!(project = %project, enabled = enabled, message = "Set project hook");
        ctx.state_service
            .projects_set_hook_enabled(project, enabled)
            .await
            .map_err(Into::into)
    }
}
