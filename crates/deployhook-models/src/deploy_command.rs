use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Command line resolved for a project deploy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct DeployCommand {
    pub project: String,
    pub command_line: String,
}

impl DeployCommand {
    pub fn new<P: Into<String>, C: Into<String>>(project: P, command_line: C) -> Self {
        Self {
            project: project.into(),
            command_line: command_line.into(),
        }
    }

    /// Program and arguments, split on whitespace.
    ///
    /// Returns `None` for a blank command line.
    pub fn program_and_args(&self) -> Option<(&str, Vec<&str>)> {
        let mut parts = self.command_line.split_whitespace();
        let program = parts.next()?;
        Some((program, parts.collect()))
    }
}

impl Display for DeployCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.command_line)
    }
}
