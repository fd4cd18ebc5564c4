//! Check command implementation.
//!
//! `packsync check` verifies required tool versions and reports
//! configuration drift between the template and a target package.
//! Only the tool check contributes to the exit code; drift findings are
//! informational for the caller to read.

use std::path::{Path, PathBuf};

use crate::cli::args::CheckArgs;
use crate::error::Result;
use crate::manifest::PackageLayout;
use crate::sync::report::Finding;
use crate::sync::{compare, Severity};
use crate::toolchain::REQUIRED_TOOLS;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    project_root: PathBuf,
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(project_root: &Path, args: CheckArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
        }
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let tools_ok = check_tools(ui);

        let own = PackageLayout::new(&self.project_root);
        let target_root = self
            .args
            .target
            .clone()
            .unwrap_or_else(|| self.project_root.clone());
        let target = PackageLayout::new(&target_root);

        ui.message("check - prettier");
        emit_findings(ui, &compare::check_formatter_config(&target)?);

        ui.message("check - package.json");
        emit_findings(ui, &compare::check_manifest(&own, &target)?);

        if tools_ok {
            Ok(CommandResult::success())
        } else {
            ui.error("A required tool is missing.");
            Ok(CommandResult::failure(1))
        }
    }
}

/// Probe every required tool, printing one line per tool.
///
/// Returns `false` when any tool is unavailable or below its floor.
fn check_tools(ui: &mut dyn UserInterface) -> bool {
    let mut all_pass = true;

    for tool in REQUIRED_TOOLS {
        let version = tool.probe();
        let pass = version.as_ref().is_some_and(|v| tool.is_satisfied(v));

        if pass {
            ui.success(tool.name);
        } else {
            ui.error(tool.name);
            let detail = match version {
                None => "unable to get version".to_string(),
                Some(found) => format!(
                    "required version not present. Expected: {} Found: {}",
                    tool.describe_minimum(),
                    found
                ),
            };
            ui.message(&format!("    {detail}"));
            all_pass = false;
        }
    }

    all_pass
}

/// Render findings through the matching UI channel.
fn emit_findings(ui: &mut dyn UserInterface, findings: &[Finding]) {
    for finding in findings {
        match finding.severity {
            Severity::Warning => ui.warning(&finding.message),
            Severity::Error => ui.error(&finding.message),
        }
    }
}
