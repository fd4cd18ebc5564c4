//! Add-capability command implementations.
//!
//! `packsync add-style | add-lint | add-clean [TARGET_ROOT]` install a
//! capability bundle from the template into a target package with
//! ensure-presence (always overwrite) semantics.

use std::path::{Path, PathBuf};

use crate::cli::args::TargetArgs;
use crate::error::Result;
use crate::manifest::PackageLayout;
use crate::sync::{apply_bundle, CapabilityBundle, CLEAN_BUNDLE, LINT_BUNDLE, STYLE_BUNDLE};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// One `add-*` command, parameterized by its bundle.
pub struct AddCommand {
    project_root: PathBuf,
    args: TargetArgs,
    bundle: &'static CapabilityBundle,
}

impl AddCommand {
    /// `add-style`: formatting scripts, prettier dependency and config.
    pub fn style(project_root: &Path, args: TargetArgs) -> Self {
        Self::with_bundle(project_root, args, &STYLE_BUNDLE)
    }

    /// `add-lint`: lint scripts, eslint dependencies and config.
    pub fn lint(project_root: &Path, args: TargetArgs) -> Self {
        Self::with_bundle(project_root, args, &LINT_BUNDLE)
    }

    /// `add-clean`: the clean script and its helper file.
    pub fn clean(project_root: &Path, args: TargetArgs) -> Self {
        Self::with_bundle(project_root, args, &CLEAN_BUNDLE)
    }

    fn with_bundle(project_root: &Path, args: TargetArgs, bundle: &'static CapabilityBundle) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
            bundle,
        }
    }
}

impl Command for AddCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let source = PackageLayout::new(&self.project_root);
        let target_root = self
            .args
            .target
            .clone()
            .unwrap_or_else(|| self.project_root.clone());
        let target = PackageLayout::new(&target_root);

        tracing::debug!(
            bundle = self.bundle.name,
            target = %target.root.display(),
            "installing capability bundle"
        );

        let outcome = apply_bundle(&source, &target, self.bundle)?;
        for finding in &outcome.findings {
            ui.error(&finding.message);
        }

        ui.success(&format!("added {}", self.bundle.name));
        Ok(CommandResult::success())
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
                    "style": "npm run prettier",
                    "style-check": "prettier --check .",
                    "prettier": "prettier --write .",
                    "prettier-check": "prettier --check .",
                    "clean": "node scripts/clean.js"
                },
                "devDependencies": {"prettier": "^2.7.0"}
            }"#,
        )
        .unwrap();
        fs::create_dir_all(temp.path().join("config")).unwrap();
        fs::write(temp.path().join("config/prettier.json"), "{}").unwrap();
        fs::create_dir_all(temp.path().join(".vscode")).unwrap();
        fs::write(
            temp.path().join(".vscode/settings.json"),
            r#"{"prettier.configPath": "./config/prettier.json"}"#,
        )
        .unwrap();
        fs::create_dir_all(temp.path().join("scripts")).unwrap();
        fs::write(temp.path().join("scripts/clean.js"), "// clean\n").unwrap();
        temp
    }

    fn bare_target() -> TempDir {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("package.json"), r#"{"scripts": {}}"#).unwrap();
        fs::create_dir_all(temp.path().join(".vscode")).unwrap();
        fs::write(temp.path().join(".vscode/settings.json"), "{}").unwrap();
        temp
    }

    #[test]
    fn add_style_installs_bundle_and_reports_success() {
        let own = template();
        let target = bare_target();

        let args = TargetArgs {
            target: Some(target.path().to_path_buf()),
        };
        let cmd = AddCommand::style(own.path(), args);
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_success("added style"));
        assert!(target.path().join("config/prettier.json").is_file());
    }

    #[test]
    fn add_clean_reports_missing_source_names() {
        let own = TempDir::new().unwrap();
        fs::write(own.path().join("package.json"), r#"{"scripts": {}}"#).unwrap();
        let target = bare_target();

        let args = TargetArgs {
            target: Some(target.path().to_path_buf()),
        };
        let cmd = AddCommand::clean(own.path(), args);
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        // Per-field failures are reported but do not fail the command.
        assert!(result.success);
        assert!(ui.has_error("script [clean] not present in source"));
    }
}
