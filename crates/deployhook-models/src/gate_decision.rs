use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Why a push was not allowed to deploy.
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Copy, Clone)]
#[serde(rename_all = "snake_case")]
pub enum DenyReason {
    /// Project hook is off or unknown.
    HookDisabled,
    /// Pushed ref is not the target branch.
    BranchMismatch,
    /// Pusher is not allowed to deploy.
    UserDisabled,
}

impl DenyReason {
    /// Convert deny reason to static str.
    pub fn to_str(self) -> &'static str {
        self.into()
    }
}

impl Display for DenyReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.to_str())
    }
}

impl From<DenyReason> for &'static str {
    fn from(reason: DenyReason) -> Self {
        match reason {
            DenyReason::HookDisabled => "hook_disabled",
            DenyReason::BranchMismatch => "branch_mismatch",
            DenyReason::UserDisabled => "user_disabled",
        }
    }
}

/// Result of the enablement gate.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum GateDecision {
    Allow,
    Deny(DenyReason),
}
