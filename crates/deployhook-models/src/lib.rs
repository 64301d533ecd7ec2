mod deploy_command;
mod gate_decision;
mod project;
mod push_event;
mod user;

pub use deploy_command::DeployCommand;
pub use gate_decision::{DenyReason, GateDecision};
pub use project::Project;
pub use push_event::PushEvent;
pub use user::User;
