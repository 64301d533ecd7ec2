use async_trait::async_trait;
use clap::Parser;
use deployhook_core::use_cases::deploys::ResolveDeployCommandInterface;
use shaku::HasComponent;

use crate::{
    commands::{Command, CommandContext},
    Result,
};

/// Show the deploy command which would run for a project
#[derive(Parser)]
pub(crate) struct DebugResolveCommandCommand {
    /// Project name
    project: String,
    /// Triggering email, defaults to the configured default email
    #[arg(long)]
    email: Option<String>,
}

#[async_trait]
impl Command for DebugResolveCommandCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let email = self
            .email
            .unwrap_or_else(|| ctx.config.deploy.default_email.clone());

        let resolve_deploy_command: &dyn ResolveDeployCommandInterface =
            ctx.core_module.resolve_ref();
        let command = resolve_deploy_command
            .run(&ctx.as_core_context(), &self.project, &email)
            .await?;

        writeln!(ctx.writer.write().await, "{}", command.command_line)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use pretty_assertions::assert_eq;

    use crate::testutils::{test_command, CommandContextTest};

    #[tokio::test]
    async fn run_with_notify_template() -> Result<(), Box<dyn Error>> {
        let ctx = CommandContextTest::new();

        assert_eq!(
            test_command(ctx, &["debug", "resolve-command", "venus", "--email", "me@x.com"]).await,
            "/opt/notify.sh venus me@x.com\n"
        );

        Ok(())
    }

    #[tokio::test]
    async fn run_with_shell_template() -> Result<(), Box<dyn Error>> {
        let mut ctx = CommandContextTest::new();
        ctx.config.deploy.shell_path_template = "/opt/deploy/{projectName}.sh".into();

        assert_eq!(
            test_command(ctx, &["debug", "resolve-command", "venus"]).await,
            "/opt/deploy/venus.sh\n"
        );

        Ok(())
    }
}
