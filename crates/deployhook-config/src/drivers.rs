use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("Invalid driver kind: {kind}")]
    InvalidDriverKind { kind: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchDriver {
    Null,
    Process,
}

impl FromStr for DispatchDriver {
    type Err = DriverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match &s.to_lowercase()[..] {
            "null" => Ok(Self::Null),
            "process" => Ok(Self::Process),
            _ => Err(DriverError::InvalidDriverKind { kind: s.into() }),
        }
    }
}
