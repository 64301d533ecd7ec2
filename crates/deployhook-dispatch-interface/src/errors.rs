use thiserror::Error;

/// Dispatch error.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum DispatchError {
    /// Nothing to run for the project.
    #[error("Empty deploy command for project '{project}'")]
    EmptyCommand { project: String },

    /// Process could not be started.
    #[error("Could not spawn deploy command '{command}',\n  caused by: {source}")]
    SpawnError {
        command: String,
        source: std::io::Error,
    },

    /// Implementation-specific error
    #[error(transparent)]
    ImplementationError {
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}
