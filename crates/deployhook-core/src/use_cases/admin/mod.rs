pub(crate) mod seed_initial_state;
pub(crate) mod set_project_hook_enabled;
pub(crate) mod set_project_shell_override;
pub(crate) mod set_target_branch;
pub(crate) mod set_user_deploy_enabled;

pub use seed_initial_state::{SeedInitialState, SeedInitialStateInterface};
pub use set_project_hook_enabled::{SetProjectHookEnabled, SetProjectHookEnabledInterface};
pub use set_project_shell_override::{SetProjectShellOverride, SetProjectShellOverrideInterface};
pub use set_target_branch::{SetTargetBranch, SetTargetBranchInterface};
pub use set_user_deploy_enabled::{SetUserDeployEnabled, SetUserDeployEnabledInterface};

#[cfg(any(test, feature = "testkit"))]
pub use self::{
    seed_initial_state::MockSeedInitialStateInterface,
    set_project_hook_enabled::MockSetProjectHookEnabledInterface,
    set_project_shell_override::MockSetProjectShellOverrideInterface,
    set_target_branch::MockSetTargetBranchInterface,
    set_user_deploy_enabled::MockSetUserDeployEnabledInterface,
};
