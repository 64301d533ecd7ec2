//! State interface

#![warn(clippy::all)]

mod errors;
mod interface;

pub use errors::{Result, StateError};
pub use interface::StateService;
