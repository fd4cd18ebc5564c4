//! Environment command implementation.
//!
//! `packsync environment` prints the CI-provided variables and the raw
//! output of both tool version commands. Purely diagnostic; nothing here
//! branches program behavior and the command always succeeds.

use crate::environment::ci_variables;
use crate::error::Result;
use crate::shell;
use crate::toolchain::{PROBE_TIMEOUT, REQUIRED_TOOLS};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The environment command implementation.
pub struct EnvironmentCommand;

impl EnvironmentCommand {
    /// Create a new environment command.
    pub fn new() -> Self {
        Self
    }
}

impl Default for EnvironmentCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl Command for EnvironmentCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.show_header("Check Environment");

        for (name, value) in ci_variables() {
            ui.message(&format!("{name}={value}"));
        }
        ui.message("");

        for tool in REQUIRED_TOOLS {
            ui.message(tool.command);
            match shell::capture_stdout(tool.command, PROBE_TIMEOUT) {
                Ok(output) => ui.message(output.trim()),
                Err(e) => ui.message(&format!("unavailable: {e}")),
            }
            ui.message("");
        }

        Ok(CommandResult::success())
    }
}
