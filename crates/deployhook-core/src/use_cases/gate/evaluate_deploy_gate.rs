use async_trait::async_trait;
use deployhook_models::{DenyReason, GateDecision};
use shaku::{Component, Interface};
use tracing::info;

use crate::{CoreContext, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait EvaluateDeployGateInterface: Interface {
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        project: &str,
        branch_ref: &str,
        user_name: &str,
    ) -> Result<GateDecision>;
}

/// Hook toggle, then target branch, then user permission. Stops at the first denial.
#[derive(Component)]
#[shaku(interface = EvaluateDeployGateInterface)]
pub struct EvaluateDeployGate;

#[async_trait]
impl EvaluateDeployGateInterface for EvaluateDeployGate {
    #[tracing::instrument(skip(self, ctx), ret)]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        project: &str,
        branch_ref: &str,
        user_name: &str,
    ) -> Result<GateDecision> {
        let decision = Self::evaluate(ctx, project, branch_ref, user_name).await?;
        if let GateDecision::Deny(reason) = decision {
            info!(
                project = %project,
                branch_ref = %branch_ref,
                user_name = %user_name,
                reason = %reason,
                message = "Deploy denied"
            );
        }

        Ok(decision)
    }
}

impl EvaluateDeployGate {
    async fn evaluate<'a>(
        ctx: &CoreContext<'a>,
        project: &str,
        branch_ref: &str,
        user_name: &str,
    ) -> Result<GateDecision> {
        let hook_enabled = ctx
            .state_service
            .projects_get(project)
            .await?
            .map(|p| p.hook_enabled)
            .unwrap_or(false);
        if !hook_enabled {
            return Ok(GateDecision::Deny(DenyReason::HookDisabled));
        }

        let target_branch = ctx.state_service.target_branch_get().await?;
        if branch_ref != format!("refs/heads/{target_branch}") {
            return Ok(GateDecision::Deny(DenyReason::BranchMismatch));
        }

        let deploy_enabled = ctx
            .state_service
            .users_get(user_name)
            .await?
            .map(|u| u.deploy_enabled)
            .unwrap_or(false);
        if !deploy_enabled {
            return Ok(GateDecision::Deny(DenyReason::UserDisabled));
        }

        Ok(GateDecision::Allow)
    }
}

#[cfg(test)]
mod tests {
    use deployhook_models::{DenyReason, GateDecision};
    use deployhook_state_interface::StateService;
    use pretty_assertions::assert_eq;

    use super::{EvaluateDeployGate, EvaluateDeployGateInterface};
    use crate::context::tests::CoreContextTest;

    const TARGET_REF: &str = "refs/heads/deploy-test";

    async fn enable_all(ctx: &CoreContextTest) {
        ctx.state_service
            .projects_set_hook_enabled("venus", true)
            .await
            .unwrap();
        ctx.state_service
            .users_set_deploy_enabled("sunshuhan", true)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn allow_when_everything_is_enabled() {
        let ctx = CoreContextTest::new();
        enable_all(&ctx).await;

        assert_eq!(
            EvaluateDeployGate
                .run(&ctx.as_context(), "venus", TARGET_REF, "sunshuhan")
                .await
                .unwrap(),
            GateDecision::Allow
        );
    }

    #[tokio::test]
    async fn unknown_project_is_disabled() {
        let ctx = CoreContextTest::new();

        assert_eq!(
            EvaluateDeployGate
                .run(&ctx.as_context(), "venus", TARGET_REF, "sunshuhan")
                .await
                .unwrap(),
            GateDecision::Deny(DenyReason::HookDisabled)
        );
    }

    #[tokio::test]
    async fn disabled_hook_masks_branch_mismatch() {
        let ctx = CoreContextTest::new();
        enable_all(&ctx).await;
        ctx.state_service
            .projects_set_hook_enabled("venus", false)
            .await
            .unwrap();

        assert_eq!(
            EvaluateDeployGate
                .run(&ctx.as_context(), "venus", "refs/heads/master", "nobody")
                .await
                .unwrap(),
            GateDecision::Deny(DenyReason::HookDisabled)
        );
    }

    #[tokio::test]
    async fn branch_mismatch_masks_user_permission() {
        let ctx = CoreContextTest::new();
        enable_all(&ctx).await;

        assert_eq!(
            EvaluateDeployGate
                .run(&ctx.as_context(), "venus", "refs/heads/master", "nobody")
                .await
                .unwrap(),
            GateDecision::Deny(DenyReason::BranchMismatch)
        );

        // Short names are not expanded.
        assert_eq!(
            EvaluateDeployGate
                .run(&ctx.as_context(), "venus", "deploy-test", "sunshuhan")
                .await
                .unwrap(),
            GateDecision::Deny(DenyReason::BranchMismatch)
        );
    }

    #[tokio::test]
    async fn unknown_or_disabled_user() {
        let ctx = CoreContextTest::new();
        enable_all(&ctx).await;

        assert_eq!(
            EvaluateDeployGate
                .run(&ctx.as_context(), "venus", TARGET_REF, "alice")
                .await
                .unwrap(),
            GateDecision::Deny(DenyReason::UserDisabled)
        );

        ctx.state_service
            .users_set_deploy_enabled("sunshuhan", false)
            .await
            .unwrap();
        assert_eq!(
            EvaluateDeployGate
                .run(&ctx.as_context(), "venus", TARGET_REF, "sunshuhan")
                .await
                .unwrap(),
            GateDecision::Deny(DenyReason::UserDisabled)
        );
    }

    #[tokio::test]
    async fn target_branch_is_read_at_evaluation_time() {
        let ctx = CoreContextTest::new();
        enable_all(&ctx).await;
        ctx.state_service.target_branch_set("release").await.unwrap();

        assert_eq!(
            EvaluateDeployGate
                .run(&ctx.as_context(), "venus", TARGET_REF, "sunshuhan")
                .await
                .unwrap(),
            GateDecision::Deny(DenyReason::BranchMismatch)
        );
        assert_eq!(
            EvaluateDeployGate
                .run(&ctx.as_context(), "venus", "refs/heads/release", "sunshuhan")
                .await
                .unwrap(),
            GateDecision::Allow
        );
    }
}
