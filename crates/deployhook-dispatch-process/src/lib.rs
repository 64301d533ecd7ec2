//! Process dispatch service.

use std::{process::Stdio, sync::Arc};

use async_trait::async_trait;
use deployhook_dispatch_interface::{
    DeployService, DispatchError, DispatchFailureSink, LoggingFailureSink,
};
use deployhook_models::DeployCommand;
use tokio::{process::Command, sync::Semaphore};
use tracing::{debug, info};

/// Runs deploy commands as detached child processes.
///
/// At most `max_concurrent` commands run at the same time; extra submissions
/// wait in the background for a slot.
#[derive(Clone)]
pub struct ProcessDeployService {
    slots: Arc<Semaphore>,
    failure_sink: Arc<dyn DispatchFailureSink>,
}

impl ProcessDeployService {
    /// Creates a process dispatch service logging its failures.
    pub fn new(max_concurrent: usize) -> Self {
        Self::with_failure_sink(max_concurrent, Arc::new(LoggingFailureSink::new()))
    }

    /// Creates a process dispatch service using a custom failure sink.
    pub fn with_failure_sink(
        max_concurrent: usize,
        failure_sink: Arc<dyn DispatchFailureSink>,
    ) -> Self {
        Self {
            slots: Arc::new(Semaphore::new(max_concurrent.max(1))),
            failure_sink,
        }
    }

    /// Currently free slots.
    pub fn available_slots(&self) -> usize {
        self.slots.available_permits()
    }
}

#[async_trait]
impl DeployService for ProcessDeployService {
    #[tracing::instrument(skip_all, fields(project = %command.project, command = %command))]
    async fn dispatch(&self, command: DeployCommand) -> Result<(), DispatchError> {
        let (program, args) = match command.program_and_args() {
            Some((program, args)) => (
                program.to_owned(),
                args.into_iter().map(ToOwned::to_owned).collect::<Vec<_>>(),
            ),
            None => {
                return Err(DispatchError::EmptyCommand {
                    project: command.project.clone(),
                })
            }
        };

        let slots = self.slots.clone();
        let failure_sink = self.failure_sink.clone();

        tokio::spawn(async move {
            let Ok(_permit) = slots.acquire_owned().await else {
                return;
            };

            let spawned = Command::new(&program)
                .args(&args)
                .stdin(Stdio::null())
                .spawn();

            match spawned {
                Ok(mut child) => {
                    info!(
                        project = %command.project,
                        command = %command,
                        pid = ?child.id(),
                        message = "Deploy command started"
                    );

                    // Slot stays taken until the process exits.
                    let _ = child.wait().await;
                    debug!(project = %command.project, message = "Deploy command exited");
                }
                Err(e) => failure_sink.report(
                    &command,
                    &DispatchError::SpawnError {
                        command: command.command_line.clone(),
                        source: e,
                    },
                ),
            }
        });

        Ok(())
    }

    async fn health_check(&self) -> Result<(), DispatchError> {
        if self.slots.is_closed() {
            Err(DispatchError::ImplementationError {
                source: "dispatch slots are closed".into(),
            })
        } else {
            Ok(())
        }
    }
}
