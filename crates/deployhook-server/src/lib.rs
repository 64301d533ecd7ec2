//! Server module.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod deploy;
pub mod dispatch;
pub mod errors;
mod health;
mod metrics;
pub mod server;

pub use errors::{Result, ServerError};
