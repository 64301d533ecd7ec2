use async_trait::async_trait;
use shaku::{Component, HasComponent, Interface};

use super::{SetProjectHookEnabledInterface, SetUserDeployEnabledInterface};
use crate::{CoreContext, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait SeedInitialStateInterface: Interface {
    async fn run<'a>(&self, ctx: &CoreContext<'a>) -> Result<()>;
}

/// Applies the hook projects and deploy users listed in the configuration.
#[derive(Component)]
#[shaku(interface = SeedInitialStateInterface)]
pub struct SeedInitialState;

#[async_trait]
impl SeedInitialStateInterface for SeedInitialState {
    #[tracing::instrument(skip_all)]
    async fn run<'a>(&self, ctx: &CoreContext<'a>) -> Result<()> {
        let set_project_hook_enabled: &dyn SetProjectHookEnabledInterface =
            ctx.core_module.resolve_ref();
        for project in &ctx.config.deploy.initial_hook_projects {
            set_project_hook_enabled.run(ctx, project, true).await?;
        }

        let set_user_deploy_enabled: &dyn SetUserDeployEnabledInterface =
            ctx.core_module.resolve_ref();
        for user in &ctx.config.deploy.initial_users {
            set_user_deploy_enabled.run(ctx, user, true).await?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use deployhook_state_interface::StateService;

    use super::{SeedInitialState, SeedInitialStateInterface};
    use crate::context::tests::CoreContextTest;

    #[tokio::test]
    async fn seed_from_config() {
        let mut ctx = CoreContextTest::new();
        ctx.config.deploy.initial_hook_projects =
            vec!["venus".into(), "site".into(), "qiwa".into()];
        ctx.config.deploy.initial_users = vec!["sunshuhan".into()];

        SeedInitialState.run(&ctx.as_context()).await.unwrap();

        for project in ["venus", "site", "qiwa"] {
            assert!(
                ctx.state_service
                    .projects_get_expect(project)
                    .await
                    .unwrap()
                    .hook_enabled
            );
        }
        assert!(
            ctx.state_service
                .users_get_expect("sunshuhan")
                .await
                .unwrap()
                .deploy_enabled
        );
    }
}
