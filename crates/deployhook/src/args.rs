use std::sync::Arc;

use clap::Parser;
use deployhook_config::{Config, DispatchDriver};
use deployhook_core::CoreModule;
use deployhook_dispatch_interface::DeployService;
use deployhook_dispatch_null::NullDeployService;
use deployhook_sentry::with_sentry_configuration;
use deployhook_server::dispatch::MetricsDeployService;
use deployhook_state_memory::MemoryState;
use tokio::sync::RwLock;
use tracing::info;

use crate::{
    commands::{Command, CommandContext, SubCommand},
    Result,
};

#[derive(Parser)]
#[command(about = None, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    cmd: SubCommand,
}

pub struct CommandExecutor;

impl CommandExecutor {
    pub fn parse_args(config: Config, args: Args) -> Result<()> {
        let driver = config.dispatch.driver()?;
        let sync = |config: Config, args: Args| async move {
            let core_module = CoreModule::builder().build();
            let state_service = Box::new(MemoryState::new(config.deploy.target_branch.clone()));

            let deploy_service: Box<dyn DeployService> = match driver {
                DispatchDriver::Process => {
                    info!(
                        max_concurrent_dispatches = config.deploy.max_concurrent_dispatches,
                        message = "Using MetricsDeployService dispatch driver"
                    );
                    Box::new(MetricsDeployService::new(
                        config.deploy.max_concurrent_dispatches,
                    ))
                }
                DispatchDriver::Null => {
                    info!("Using NullDeployService dispatch driver");
                    Box::new(NullDeployService::new())
                }
            };

            let ctx = CommandContext {
                config: config.clone(),
                state_service,
                deploy_service,
                core_module,
                writer: Arc::new(RwLock::new(std::io::stdout())),
            };

            with_sentry_configuration(&config.clone(), || async {
                Self::parse_args_async(args, ctx).await
            })
            .await
        };

        actix_rt::System::with_tokio_rt(|| {
            tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()
                .expect("tokio runtime should build")
        })
        .block_on(sync(config, args))?;

        Ok(())
    }

    pub(crate) async fn parse_args_async(args: Args, ctx: CommandContext) -> Result<()> {
        args.cmd.execute(ctx).await
    }
}
