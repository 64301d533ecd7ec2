use deployhook_models::DeployCommand;
use tracing::error;

use crate::DispatchError;

/// Receives dispatch failures which happen after submission.
pub trait DispatchFailureSink: Send + Sync {
    /// Reports a failure for a command.
    fn report(&self, command: &DeployCommand, error: &DispatchError);
}

/// Failure sink writing to the error log.
#[derive(Clone, Default)]
pub struct LoggingFailureSink {
    _private: (),
}

impl LoggingFailureSink {
    /// Creates a logging failure sink.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl DispatchFailureSink for LoggingFailureSink {
    fn report(&self, command: &DeployCommand, error: &DispatchError) {
        error!(
            project = %command.project,
            command = %command,
            error = %error,
            message = "error_reDeploy"
        );
    }
}
