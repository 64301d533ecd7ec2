//! Commands.

use std::{io::Write, sync::Arc};

use async_trait::async_trait;
use clap::Subcommand;
use deployhook_config::Config;
use deployhook_core::{CoreContext, CoreModule};
use deployhook_dispatch_interface::DeployService;
use deployhook_state_interface::StateService;
use tokio::sync::RwLock;

use self::{debug::DebugCommand, server::ServerCommand};
use crate::Result;

mod debug;
mod server;

pub(crate) struct CommandContext {
    pub config: Config,
    pub state_service: Box<dyn StateService>,
    pub deploy_service: Box<dyn DeployService>,
    pub core_module: CoreModule,
    pub writer: Arc<RwLock<dyn Write + Send + Sync>>,
}

impl CommandContext {
    pub fn as_core_context(&self) -> CoreContext {
        CoreContext {
            config: &self.config,
            core_module: &self.core_module,
            state_service: self.state_service.as_ref(),
            deploy_service: self.deploy_service.as_ref(),
        }
    }
}

#[async_trait]
pub(crate) trait Command {
    async fn execute(self, ctx: CommandContext) -> Result<()>;
}

/// Command
#[derive(Subcommand)]
pub(crate) enum SubCommand {
    Server(ServerCommand),
    Debug(DebugCommand),
}

#[async_trait]
impl Command for SubCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        match self {
            Self::Server(sub) => sub.execute(ctx).await,
            Self::Debug(sub) => sub.execute(ctx).await,
        }
    }
}
