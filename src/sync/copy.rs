//! Field-copy mode: install a capability bundle into a target package.
//!
//! Copy direction is always-overwrite: a name present in the template is
//! ensured present in the target with the template's value, so applying a
//! bundle twice is a no-op. A name missing from the template is reported
//! and skipped; it never becomes missing in the target.

use std::fs;

use crate::error::Result;
use crate::manifest::document::{directory_exists, file_exists};
use crate::manifest::{ManifestField, PackageLayout, PackageManifest};
use crate::sync::baseline::CapabilityBundle;
use crate::sync::report::Finding;

/// What a bundle application reported.
#[derive(Debug, Default)]
pub struct BundleOutcome {
    pub findings: Vec<Finding>,
}

/// Install `bundle` from the template at `source` into `target`.
///
/// Each touched document is written at most once. A missing required
/// source or target document aborts that document's portion with an
/// error finding and no write; the remaining portions still run.
pub fn apply_bundle(
    source: &PackageLayout,
    target: &PackageLayout,
    bundle: &CapabilityBundle,
) -> Result<BundleOutcome> {
    let mut findings = Vec::new();

    if !bundle.scripts.is_empty() || !bundle.dev_dependencies.is_empty() {
        add_manifest_fields(source, target, bundle, &mut findings)?;
    }
    for name in bundle.config_files {
        copy_config_file(source, target, name, &mut findings)?;
    }
    if !bundle.settings.is_empty() {
        add_settings_values(source, target, bundle.settings, &mut findings)?;
    }
    for name in bundle.helper_scripts {
        copy_helper_script(source, target, name, &mut findings)?;
    }

    Ok(BundleOutcome { findings })
}

/// Copy the bundle's script and devDependency names between manifests.
fn add_manifest_fields(
    source: &PackageLayout,
    target: &PackageLayout,
    bundle: &CapabilityBundle,
    findings: &mut Vec<Finding>,
) -> Result<()> {
    let Some(source_manifest) = source.load_manifest()? else {
        findings.push(Finding::error(format!(
            "missing source package.json {}",
            source.manifest.display()
        )));
        return Ok(());
    };
    let Some(mut target_manifest) = target.load_manifest()? else {
        findings.push(Finding::error(format!(
            "missing target package.json {}",
            target.manifest.display()
        )));
        return Ok(());
    };

    copy_field_values(
        &source_manifest,
        &mut target_manifest,
        ManifestField::Scripts,
        bundle.scripts,
        findings,
    );
    copy_field_values(
        &source_manifest,
        &mut target_manifest,
        ManifestField::DevDependencies,
        bundle.dev_dependencies,
        findings,
    );

    target.write_manifest(&target_manifest)
}

/// Copy named values of one manifest field, overwriting existing entries.
pub(crate) fn copy_field_values(
    source: &PackageManifest,
    target: &mut PackageManifest,
    field: ManifestField,
    names: &[&str],
    findings: &mut Vec<Finding>,
) {
    for name in names {
        match field.get(source).and_then(|map| map.get(*name)) {
            Some(value) => {
                field
                    .entry(target)
                    .insert((*name).to_string(), value.clone());
            }
            None => findings.push(Finding::error(format!(
                "{} [{}] not present in source",
                field.label(),
                name
            ))),
        }
    }
}

/// Copy a shared config file into the target's `config/` directory.
///
/// The copy is unconditional — no diffing, destination overwritten —
/// creating the directory when absent.
fn copy_config_file(
    source: &PackageLayout,
    target: &PackageLayout,
    name: &str,
    findings: &mut Vec<Finding>,
) -> Result<()> {
    let from = source.config_dir.join(name);
    if !file_exists(&from) {
        findings.push(Finding::error(format!(
            "missing source config {}",
            from.display()
        )));
        return Ok(());
    }

    if !directory_exists(&target.config_dir) {
        fs::create_dir_all(&target.config_dir)?;
    }
    fs::copy(&from, target.config_dir.join(name))?;
    Ok(())
}

/// Copy selected keys of the template's editor settings into the target.
fn add_settings_values(
    source: &PackageLayout,
    target: &PackageLayout,
    names: &[&str],
    findings: &mut Vec<Finding>,
) -> Result<()> {
    let Some(source_settings) = source.load_settings()? else {
        findings.push(Finding::error(format!(
            "missing source settings.json {}",
            source.settings.display()
        )));
        return Ok(());
    };
    let Some(mut target_settings) = target.load_settings()? else {
        findings.push(Finding::error(format!(
            "missing target settings.json {}",
            target.settings.display()
        )));
        return Ok(());
    };

    for name in names {
        match source_settings.get(*name) {
            Some(value) => {
                target_settings.insert((*name).to_string(), value.clone());
            }
            None => findings.push(Finding::error(format!(
                "setting [{name}] not present in source"
            ))),
        }
    }

    target.write_settings(&target_settings)
}

/// Copy a helper file into the target's `scripts/` directory, verbatim.
fn copy_helper_script(
    source: &PackageLayout,
    target: &PackageLayout,
    name: &str,
    findings: &mut Vec<Finding>,
) -> Result<()> {
    let from = source.scripts_dir.join(name);
    if !file_exists(&from) {
        findings.push(Finding::error(format!(
            "missing source script {}",
            from.display()
        )));
        return Ok(());
    }

    if !directory_exists(&target.scripts_dir) {
        fs::create_dir_all(&target.scripts_dir)?;
    }
    fs::copy(&from, target.scripts_dir.join(name))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sync::baseline::{CLEAN_BUNDLE, STYLE_BUNDLE};
    use std::path::Path;
    use tempfile::TempDir;

    fn write(root: &Path, relative: &str, contents: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    fn template() -> (TempDir, PackageLayout) {
        let temp = TempDir::new().unwrap();
        write(
            temp.path(),
            "package.json",
            r#"{
                "scripts": {
                    "style": "npm run prettier",
                    "style-check": "npm run prettier-check",
                    "prettier": "prettier --write .",
                    "prettier-check": "prettier --check .",
                    "clean": "node scripts/clean.js"
                },
                "devDependencies": { "prettier": "^2.7.0" }
            }"#,
        );
        write(temp.path(), "config/prettier.json", "{\n    \"tabWidth\": 4\n}\n");
        write(
            temp.path(),
            ".vscode/settings.json",
            r#"{"prettier.configPath": "./config/prettier.json"}"#,
        );
        write(temp.path(), "scripts/clean.js", "// removes build output\n");
        let layout = PackageLayout::new(temp.path());
        (temp, layout)
    }

    fn bare_target(manifest: &str) -> (TempDir, PackageLayout) {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "package.json", manifest);
        write(temp.path(), ".vscode/settings.json", "{}");
        let layout = PackageLayout::new(temp.path());
        (temp, layout)
    }

    #[test]
    fn style_bundle_installs_scripts_config_and_settings() {
        let (_template_dir, source) = template();
        let (_target_dir, target) = bare_target(r#"{"scripts": {}}"#);

        let outcome = apply_bundle(&source, &target, &STYLE_BUNDLE).unwrap();
        assert!(outcome.findings.is_empty());

        let manifest = target.load_manifest().unwrap().unwrap();
        let scripts = manifest.scripts.unwrap();
        assert_eq!(scripts["style"], "npm run prettier");
        assert_eq!(scripts["prettier-check"], "prettier --check .");
        assert_eq!(manifest.dev_dependencies.unwrap()["prettier"], "^2.7.0");

        assert!(target.formatter_config.is_file());
        let settings = target.load_settings().unwrap().unwrap();
        assert_eq!(settings["prettier.configPath"], "./config/prettier.json");
    }

    #[test]
    fn copy_overwrites_existing_target_values() {
        let (_template_dir, source) = template();
        let (_target_dir, target) = bare_target(
            r#"{"scripts": {"style": "old"}, "devDependencies": {"prettier": "^2.0.0"}}"#,
        );

        apply_bundle(&source, &target, &STYLE_BUNDLE).unwrap();

        let manifest = target.load_manifest().unwrap().unwrap();
        assert_eq!(manifest.scripts.unwrap()["style"], "npm run prettier");
        assert_eq!(manifest.dev_dependencies.unwrap()["prettier"], "^2.7.0");
    }

    #[test]
    fn apply_is_idempotent() {
        let (_template_dir, source) = template();
        let (_target_dir, target) = bare_target(r#"{"scripts": {}}"#);

        apply_bundle(&source, &target, &STYLE_BUNDLE).unwrap();
        let first = fs::read_to_string(&target.manifest).unwrap();
        apply_bundle(&source, &target, &STYLE_BUNDLE).unwrap();
        let second = fs::read_to_string(&target.manifest).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn name_missing_from_source_is_reported_and_target_untouched() {
        let (template_dir, source) = template();
        // Remove style-check from the template.
        write(
            template_dir.path(),
            "package.json",
            r#"{
                "scripts": { "style": "npm run prettier", "prettier": "p", "prettier-check": "pc" },
                "devDependencies": { "prettier": "^2.7.0" }
            }"#,
        );
        let (_target_dir, target) =
            bare_target(r#"{"scripts": {"style-check": "keep me"}}"#);

        let outcome = apply_bundle(&source, &target, &STYLE_BUNDLE).unwrap();
        assert!(outcome
            .findings
            .iter()
            .any(|f| f.is_error() && f.message.contains("[style-check]")));

        let manifest = target.load_manifest().unwrap().unwrap();
        assert_eq!(manifest.scripts.unwrap()["style-check"], "keep me");
    }

    #[test]
    fn missing_target_manifest_aborts_manifest_portion_without_write() {
        let (_template_dir, source) = template();
        let target_dir = TempDir::new().unwrap();
        write(target_dir.path(), ".vscode/settings.json", "{}");
        let target = PackageLayout::new(target_dir.path());

        let outcome = apply_bundle(&source, &target, &STYLE_BUNDLE).unwrap();

        assert!(outcome
            .findings
            .iter()
            .any(|f| f.message.contains("missing target package.json")));
        // No package.json materialized, but the independent portions ran.
        assert!(!target.manifest.exists());
        assert!(target.formatter_config.is_file());
    }

    #[test]
    fn clean_bundle_copies_helper_script() {
        let (_template_dir, source) = template();
        let (_target_dir, target) = bare_target(r#"{"scripts": {}}"#);

        let outcome = apply_bundle(&source, &target, &CLEAN_BUNDLE).unwrap();
        assert!(outcome.findings.is_empty());

        let manifest = target.load_manifest().unwrap().unwrap();
        assert_eq!(manifest.scripts.unwrap()["clean"], "node scripts/clean.js");
        assert!(target.clean_script.is_file());
    }

    #[test]
    fn dev_dependency_map_is_created_when_absent() {
        let (_template_dir, source) = template();
        let (_target_dir, target) = bare_target(r#"{"scripts": {}}"#);

        apply_bundle(&source, &target, &STYLE_BUNDLE).unwrap();

        let manifest = target.load_manifest().unwrap().unwrap();
        assert_eq!(manifest.dev_dependencies.unwrap()["prettier"], "^2.7.0");
    }
}
