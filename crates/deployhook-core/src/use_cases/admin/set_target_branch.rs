use async_trait::async_trait;
use shaku::{Component, Interface};
use tracing::info;

use crate::{CoreContext, DomainError, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait SetTargetBranchInterface: Interface {
    async fn run<'a>(&self, ctx: &CoreContext<'a>, branch: Option<String>) -> Result<()>;
}

#[derive(Component)]
#[shaku(interface = SetTargetBranchInterface)]
pub struct SetTargetBranch;

#[async_trait]
impl SetTargetBranchInterface for SetTargetBranch {
    #[tracing::instrument(skip(self, ctx), ret)]
    async fn run<'a>(&self, ctx: &CoreContext<'a>, branch: Option<String>) -> Result<()> {
        let branch = branch.ok_or_else(|| DomainError::InvalidInput {
            field: "branch".into(),
        })?;

        info!(branch = %branch, message = "Set auto deploy branch");
        ctx.state_service
            .target_branch_set(&branch)
            .await
            .map_err(Into::into)
    }
}
