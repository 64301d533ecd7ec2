use thiserror::Error;

#[derive(Debug, Error)]
pub enum StateError {
    #[error("Unknown project '{0}'")]
    UnknownProject(String),

    #[error("Unknown user '{0}'")]
    UnknownUser(String),

    #[error(transparent)]
    ImplementationError {
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

pub type Result<T, E = StateError> = core::result::Result<T, E>;
