pub(crate) mod dispatch_deploy;
pub(crate) mod resolve_deploy_command;

pub use dispatch_deploy::{DispatchDeploy, DispatchDeployInterface};
pub use resolve_deploy_command::{ResolveDeployCommand, ResolveDeployCommandInterface};

#[cfg(any(test, feature = "testkit"))]
pub use self::{
    dispatch_deploy::MockDispatchDeployInterface,
    resolve_deploy_command::MockResolveDeployCommandInterface,
};
