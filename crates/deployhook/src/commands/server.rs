use async_trait::async_trait;
use clap::Parser;
use deployhook_core::use_cases::admin::SeedInitialStateInterface;
use deployhook_server::server::{run_deploy_server, AppContext};
use shaku::HasComponent;

use super::{Command, CommandContext};
use crate::Result;

/// Start server
#[derive(Parser)]
pub(crate) struct ServerCommand;

#[async_trait]
impl Command for ServerCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let seed_initial_state: &dyn SeedInitialStateInterface = ctx.core_module.resolve_ref();
        seed_initial_state.run(&ctx.as_core_context()).await?;

        tokio::task::spawn_local(async move {
            let context = AppContext::new_with_adapters(
                ctx.config,
                ctx.core_module,
                ctx.state_service,
                ctx.deploy_service,
            );

            run_deploy_server(context).await
        })
        .await??;

        Ok(())
    }
}
