use std::{io::Write, sync::Arc};

use clap::Parser;
use deployhook_config::Config;
use deployhook_core::CoreModule;
use deployhook_dispatch_interface::MockDeployService;
use deployhook_state_memory::MemoryState;
use tokio::sync::RwLock;

use crate::{
    args::{Args, CommandExecutor},
    commands::CommandContext,
};

pub(crate) struct CommandContextTest {
    pub config: Config,
    pub core_module: CoreModule,
    pub state_service: MemoryState,
    pub deploy_service: MockDeployService,
}

impl CommandContextTest {
    pub fn new() -> Self {
        let mut config = Config::from_env_no_version();
        config.deploy.target_branch = "deploy-test".into();
        config.deploy.shell_path_template = String::new();
        config.deploy.notify_command_template = "/opt/notify.sh {projectName} {email}".into();
        config.deploy.default_email = "deploy@localhost".into();

        Self {
            state_service: MemoryState::new(config.deploy.target_branch.clone()),
            config,
            core_module: CoreModule::builder().build(),
            deploy_service: MockDeployService::new(),
        }
    }

    pub fn into_context(self, writer: Arc<RwLock<dyn Write + Send + Sync>>) -> CommandContext {
        CommandContext {
            config: self.config,
            core_module: self.core_module,
            state_service: Box::new(self.state_service),
            deploy_service: Box::new(self.deploy_service),
            writer,
        }
    }
}

pub(crate) async fn test_command(ctx: CommandContextTest, command_args: &[&str]) -> String {
    let buf = Arc::new(RwLock::new(Vec::new()));

    {
        let command_args = {
            let mut tmp_args = vec!["deployhook"];
            tmp_args.extend(command_args);
            tmp_args
        };

        let args = Args::try_parse_from(command_args);
        match args {
            Ok(args) => CommandExecutor::parse_args_async(args, ctx.into_context(buf.clone()))
                .await
                .unwrap(),
            Err(e) => {
                eprintln!("{}", e);
                panic!("Parse error.")
            }
        }
    }

    let vec = buf.read().await.to_vec();
    std::str::from_utf8(&vec).unwrap().to_string()
}
