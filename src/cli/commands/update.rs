//! Update command implementation.
//!
//! `packsync update [TARGET_ROOT]` reconciles a downstream package with
//! the template: guarded merges plus the one-off cleanups, followed by a
//! script inventory.

use std::path::{Path, PathBuf};

use crate::cli::args::TargetArgs;
use crate::error::{PacksyncError, Result};
use crate::manifest::PackageLayout;
use crate::sync::reconcile::{reconcile, ReconcileOutcome};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The update command implementation.
pub struct UpdateCommand {
    project_root: PathBuf,
    args: TargetArgs,
}

impl UpdateCommand {
    /// Create a new update command.
    pub fn new(project_root: &Path, args: TargetArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
        }
    }
}

impl Command for UpdateCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let own = PackageLayout::new(&self.project_root);
        let target_root = self
            .args
            .target
            .clone()
            .unwrap_or_else(|| self.project_root.clone());
        let target = PackageLayout::new(&target_root);

        let outcome = match reconcile(&own, &target) {
            Ok(outcome) => outcome,
            Err(PacksyncError::ManifestNotFound { path }) => {
                ui.error(&format!("package.json not found: {}", path.display()));
                return Ok(CommandResult::failure(1));
            }
            Err(e) => return Err(e),
        };

        render_outcome(ui, &outcome);
        Ok(CommandResult::success())
    }
}

/// Print the adjustment log and script inventory.
fn render_outcome(ui: &mut dyn UserInterface, outcome: &ReconcileOutcome) {
    ui.show_header("Adjustments");
    for line in &outcome.adjustments {
        ui.message(line);
    }
    for finding in &outcome.findings {
        ui.error(&finding.message);
    }

    ui.show_header("Script Inventory");
    for presence in &outcome.inventory {
        if presence.present {
            ui.success(&presence.name);
        } else {
            ui.error(&presence.name);
        }
    }
    ui.message(&format!(
        "\nScripts missing [{}]",
        outcome.missing_scripts.len()
    ));
    for name in &outcome.missing_scripts {
        ui.message(name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn template() -> TempDir {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("package.json"),
            r#"{
                "scripts": {
                    "test": "jest --colors",
                    "check": "node scripts/check.js"
                },
                "devDependencies": {"prettier": "^2.7.0"}
            }"#,
        )
        .unwrap();
        temp
    }

    #[test]
    fn update_missing_target_fails_cleanly() {
        let own = template();
        let target = TempDir::new().unwrap();

        let args = TargetArgs {
            target: Some(target.path().to_path_buf()),
        };
        let cmd = UpdateCommand::new(own.path(), args);
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
        assert!(ui.has_error("package.json not found"));
    }

    #[test]
    fn update_renders_adjustments_and_inventory() {
        let own = template();
        let target = TempDir::new().unwrap();
        fs::write(
            target.path().join("package.json"),
            r#"{"scripts": {"test": "jest", "test-windows": "jest.cmd"}}"#,
        )
        .unwrap();

        let args = TargetArgs {
            target: Some(target.path().to_path_buf()),
        };
        let cmd = UpdateCommand::new(own.path(), args);
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.headers().contains(&"Adjustments".to_string()));
        assert!(ui.has_message("delete package.json script: test-windows"));
        // Inventory: template "test" is present in the target.
        assert!(ui.has_success("test"));
        assert!(ui.has_message("Scripts missing [0]"));
    }
}
