//! Dispatch interface

#![warn(missing_docs)]
#![warn(clippy::all)]

mod errors;
mod interface;
mod sink;

pub use errors::DispatchError;
#[cfg(any(test, feature = "testkit"))]
pub use interface::MockDeployService;
pub use interface::DeployService;
pub use sink::{DispatchFailureSink, LoggingFailureSink};
