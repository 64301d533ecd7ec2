use deployhook_config::Config;
use deployhook_dispatch_interface::DeployService;
use deployhook_state_interface::StateService;

use crate::CoreModule;

pub struct CoreContext<'a> {
    pub config: &'a Config,
    pub core_module: &'a CoreModule,
    pub state_service: &'a (dyn StateService + 'a),
    pub deploy_service: &'a (dyn DeployService + 'a),
}

#[cfg(any(test, feature = "testkit"))]
pub mod tests {
    use deployhook_config::Config;
    use deployhook_dispatch_interface::MockDeployService;
    use deployhook_state_memory::MemoryState;

    use crate::{CoreContext, CoreModule};

    #[allow(dead_code)]
    pub struct CoreContextTest {
        pub config: Config,
        pub core_module: CoreModule,
        pub state_service: MemoryState,
        pub deploy_service: MockDeployService,
    }

    impl CoreContextTest {
        #[allow(dead_code)]
        pub fn new() -> Self {
            let mut config = Config::from_env_no_version();
            config.deploy.target_branch = "deploy-test".into();
            config.deploy.shell_path_template = String::new();
            config.deploy.notify_command_template =
                "/opt/notify.sh {projectName} {email}".into();
            config.deploy.default_email = "deploy@localhost".into();
            config.deploy.initial_hook_projects = vec![];
            config.deploy.initial_users = vec![];

            Self {
                state_service: MemoryState::new(config.deploy.target_branch.clone()),
                config,
                core_module: CoreModule::builder().build(),
                deploy_service: MockDeployService::new(),
            }
        }

        #[allow(dead_code)]
        pub fn as_context(&self) -> CoreContext {
            CoreContext {
                config: &self.config,
                core_module: &self.core_module,
                state_service: &self.state_service,
                deploy_service: &self.deploy_service,
            }
        }
    }
}
