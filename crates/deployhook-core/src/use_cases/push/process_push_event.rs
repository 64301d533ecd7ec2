use async_trait::async_trait;
use deployhook_models::{DenyReason, DeployCommand, GateDecision};
use serde_json::Value;
use shaku::{Component, HasComponent, Interface};
use tracing::info;

use crate::{
    payload::normalize_push_payload,
    use_cases::{deploys::DispatchDeployInterface, gate::EvaluateDeployGateInterface},
    CoreContext, Result,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PushOutcome {
    Dispatched(DeployCommand),
    Duplicate,
    Denied(DenyReason),
}

impl PushOutcome {
    pub fn is_dispatched(&self) -> bool {
        matches!(self, Self::Dispatched(_))
    }
}

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait ProcessPushEventInterface: Interface {
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        project: &str,
        payload: &Value,
    ) -> Result<PushOutcome>;
}

/// Normalizes the push payload, drops repeated deliveries, then dispatches
/// the deploy when the gate allows it.
#[derive(Component)]
#[shaku(interface = ProcessPushEventInterface)]
pub struct ProcessPushEvent;

#[async_trait]
impl ProcessPushEventInterface for ProcessPushEvent {
    #[tracing::instrument(skip(self, ctx, payload), ret)]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        project: &str,
        payload: &Value,
    ) -> Result<PushOutcome> {
        let event = normalize_push_payload(project, payload)?;
        info!(
            project = %event.project,
            branch_ref = %event.branch_ref,
            commit_id = %event.commit_id,
            pusher_name = %event.pusher_name,
            message = "Push event received"
        );

        let accepted = ctx
            .state_service
            .push_events_check_and_insert(&event.project, &event.branch_ref, &event.commit_id)
            .await?;
        if !accepted {
            info!(
                dedup_key = %event.dedup_key(),
                commit_id = %event.commit_id,
                message = "Repetitive event"
            );
            return Ok(PushOutcome::Duplicate);
        }

        let evaluate_deploy_gate: &dyn EvaluateDeployGateInterface =
            ctx.core_module.resolve_ref();
        let decision = evaluate_deploy_gate
            .run(ctx, &event.project, &event.branch_ref, &event.pusher_name)
            .await?;

        match decision {
            GateDecision::Allow => {
                let dispatch_deploy: &dyn DispatchDeployInterface = ctx.core_module.resolve_ref();
                let command = dispatch_deploy
                    .run(ctx, &event.project, &event.pusher_email)
                    .await?;
                Ok(PushOutcome::Dispatched(command))
            }
            GateDecision::Deny(reason) => Ok(PushOutcome::Denied(reason)),
        }
    }
}
