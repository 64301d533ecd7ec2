use async_trait::async_trait;
use deployhook_models::User;
use shaku::{Component, Interface};
use tracing::info;

use crate::{CoreContext, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait SetUserDeployEnabledInterface: Interface {
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        user: &str,
        enabled: bool,
    ) -> Result<Option<User>>;
}

/// Does nothing for an empty user name.
#[derive(Component)]
#[shaku(interface = SetUserDeployEnabledInterface)]
pub struct SetUserDeployEnabled;

#[async_trait]
impl SetUserDeployEnabledInterface for SetUserDeployEnabled {
    #[tracing::instrument(skip(self, ctx), ret)]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        user: &str,
        enabled: bool,
    ) -> Result<Option<User>> {
        if user.is_empty() {
            return Ok(None);
        }

        info!(user = %user, enabled = enabled, message = "Set user deploy permission");
        let user = ctx
            .state_service
            .users_set_deploy_enabled(user, enabled)
            .await?;

        Ok(Some(user))
    }
}
