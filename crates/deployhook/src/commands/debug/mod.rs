//! Debug commands.

use async_trait::async_trait;
use clap::{Parser, Subcommand};

use super::{Command, CommandContext};
use crate::Result;
mod normalize_payload;
mod resolve_command;
use normalize_payload::DebugNormalizePayloadCommand;
use resolve_command::DebugResolveCommandCommand;

/// Debug related commands
#[derive(Parser)]
pub(crate) struct DebugCommand {
    #[clap(subcommand)]
    inner: DebugSubCommand,
}

#[async_trait]
impl Command for DebugCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        self.inner.execute(ctx).await
    }
}

#[derive(Subcommand)]
enum DebugSubCommand {
    NormalizePayload(DebugNormalizePayloadCommand),
    ResolveCommand(DebugResolveCommandCommand),
}

#[async_trait]
impl Command for DebugSubCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        match self {
            Self::NormalizePayload(sub) => sub.execute(ctx).await,
            Self::ResolveCommand(sub) => sub.execute(ctx).await,
        }
    }
}
