//! Core module.

#![warn(clippy::all)]
#![allow(clippy::new_without_default)]

mod context;
pub mod errors;
pub mod payload;
pub mod use_cases;

pub use context::CoreContext;
#[cfg(any(test, feature = "testkit"))]
pub use context::tests::CoreContextTest;
pub use errors::{DomainError, Result};
use shaku::module;
use use_cases::{
    admin::{
        seed_initial_state::SeedInitialState, set_project_hook_enabled::SetProjectHookEnabled,
        set_project_shell_override::SetProjectShellOverride, set_target_branch::SetTargetBranch,
        set_user_deploy_enabled::SetUserDeployEnabled,
    },
    deploys::{dispatch_deploy::DispatchDeploy, resolve_deploy_command::ResolveDeployCommand},
    gate::evaluate_deploy_gate::EvaluateDeployGate,
    push::process_push_event::ProcessPushEvent,
};

module! {
    pub CoreModule {
        components = [
            DispatchDeploy, EvaluateDeployGate, ProcessPushEvent,
            ResolveDeployCommand, SeedInitialState, SetProjectHookEnabled,
            SetProjectShellOverride, SetTargetBranch, SetUserDeployEnabled
        ],
        providers = []
    }
}
