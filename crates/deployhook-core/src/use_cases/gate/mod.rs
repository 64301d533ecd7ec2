pub(crate) mod evaluate_deploy_gate;

pub use evaluate_deploy_gate::{EvaluateDeployGate, EvaluateDeployGateInterface};
#[cfg(any(test, feature = "testkit"))]
pub use evaluate_deploy_gate::MockEvaluateDeployGateInterface;
