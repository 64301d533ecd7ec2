use std::path::PathBuf;

use async_trait::async_trait;
use clap::Parser;
use deployhook_core::payload::normalize_push_payload;
use serde_json::Value;

use crate::{
    commands::{Command, CommandContext},
    Result,
};

/// Show the push event extracted from a webhook payload file
#[derive(Parser)]
pub(crate) struct DebugNormalizePayloadCommand {
    /// Project name
    project: String,
    /// JSON payload file
    file: PathBuf,
}

#[async_trait]
impl Command for DebugNormalizePayloadCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let contents = tokio::fs::read_to_string(&self.file).await?;
        let payload: Value = serde_json::from_str(&contents)?;
        let event = normalize_push_payload(&self.project, &payload)?;

        let mut writer = ctx.writer.write().await;
        writeln!(writer, "Dedup key: {}", event.dedup_key())?;
        writeln!(writer, "{}", serde_json::to_string_pretty(&event)?)?;

        Ok(())
    }
}
