//! Reconciliation mode: the guarded `update` merge.
//!
//! Guard direction is the defining invariant here: a value is copied from
//! the template **only if the destination already has the key**. Deletions
//! made deliberately in a target package are never undone, and nothing new
//! is ever introduced. The only deletions are the documented cleanups
//! (platform-suffixed scripts, consolidated duplicates, obsolete extension
//! recommendations).

use std::fs;

use crate::error::{PacksyncError, Result};
use crate::manifest::document::{directory_exists, file_exists};
use crate::manifest::{PackageLayout, PackageManifest};
use crate::sync::baseline::{
    INVENTORY_STOP_SCRIPT, LEGACY_CLEAN_COMMANDS, LEGACY_LICENSE, OBSOLETE_EXTENSIONS,
    PLATFORM_SCRIPT_SUFFIX, RECONCILED_SCRIPTS, RECONCILED_SETTINGS, SCRIPT_CONSOLIDATIONS,
};
use crate::sync::report::Finding;

/// Presence of one template script in the target, for the inventory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptPresence {
    pub name: String,
    pub present: bool,
}

/// Everything a reconciliation run reports back to the command layer.
#[derive(Debug, Default)]
pub struct ReconcileOutcome {
    /// Human-readable adjustment log, in application order.
    pub adjustments: Vec<String>,
    /// Per-field problems encountered while reconciling.
    pub findings: Vec<Finding>,
    /// Template-script inventory of the target.
    pub inventory: Vec<ScriptPresence>,
    /// Names from the inventory that the target lacks.
    pub missing_scripts: Vec<String>,
}

/// Reconcile `target` against the template at `own`.
///
/// Both manifests are required; a missing one aborts the whole operation
/// before anything is written. Each touched document is written once.
pub fn reconcile(own: &PackageLayout, target: &PackageLayout) -> Result<ReconcileOutcome> {
    let own_manifest = own
        .load_manifest()?
        .ok_or_else(|| PacksyncError::ManifestNotFound {
            path: own.manifest.clone(),
        })?;
    let mut target_manifest =
        target
            .load_manifest()?
            .ok_or_else(|| PacksyncError::ManifestNotFound {
                path: target.manifest.clone(),
            })?;

    let mut outcome = ReconcileOutcome::default();

    discard_platform_scripts(&mut target_manifest, &mut outcome);
    consolidate_duplicate_scripts(&mut target_manifest, &mut outcome);
    replace_legacy_clean(&own_manifest, own, &mut target_manifest, target, &mut outcome)?;
    fix_legacy_license(&own_manifest, &mut target_manifest, &mut outcome);
    add_style_check(&own_manifest, &mut target_manifest, &mut outcome);

    merge_existing_dev_dependencies(&own_manifest, &mut target_manifest);
    merge_existing_scripts(&own_manifest, &mut target_manifest);

    target.write_manifest(&target_manifest)?;

    merge_existing_settings(own, target)?;
    prune_extension_recommendations(target, &mut outcome)?;

    build_inventory(&own_manifest, &target_manifest, &mut outcome);

    Ok(outcome)
}

/// Delete every target script carrying the platform suffix.
fn discard_platform_scripts(target: &mut PackageManifest, outcome: &mut ReconcileOutcome) {
    let Some(scripts) = target.scripts.as_mut() else {
        return;
    };
    let doomed: Vec<String> = scripts
        .keys()
        .filter(|name| name.ends_with(PLATFORM_SCRIPT_SUFFIX))
        .cloned()
        .collect();
    for name in doomed {
        scripts.shift_remove(&name);
        outcome
            .adjustments
            .push(format!("delete package.json script: {name}"));
    }
}

/// Collapse historically duplicated script pairs onto the kept name.
fn consolidate_duplicate_scripts(target: &mut PackageManifest, outcome: &mut ReconcileOutcome) {
    let Some(scripts) = target.scripts.as_mut() else {
        return;
    };
    for (keep, copy_over) in SCRIPT_CONSOLIDATIONS {
        if scripts.contains_key(*keep) && scripts.contains_key(*copy_over) {
            let value = scripts[*copy_over].clone();
            scripts.insert((*keep).to_string(), value);
            scripts.shift_remove(*copy_over);
            outcome.adjustments.push(format!("{keep} = {copy_over}"));
            outcome
                .adjustments
                .push(format!("delete package.json script: {copy_over}"));
        }
    }
}

/// Replace a known-legacy `clean` script with the template's node-based
/// one, installing `scripts/clean.js` alongside it.
fn replace_legacy_clean(
    own: &PackageManifest,
    own_layout: &PackageLayout,
    target: &mut PackageManifest,
    target_layout: &PackageLayout,
    outcome: &mut ReconcileOutcome,
) -> Result<()> {
    let legacy = target
        .scripts
        .as_ref()
        .and_then(|scripts| scripts.get("clean"))
        .is_some_and(|value| LEGACY_CLEAN_COMMANDS.contains(&value.as_str()));
    if !legacy {
        return Ok(());
    }
    let Some(replacement) = own
        .scripts
        .as_ref()
        .and_then(|scripts| scripts.get("clean"))
        .cloned()
    else {
        outcome
            .findings
            .push(Finding::error("clean script not present in source"));
        return Ok(());
    };

    if let Some(scripts) = target.scripts.as_mut() {
        scripts.insert("clean".to_string(), replacement);
        outcome
            .adjustments
            .push("update package.json script: clean".to_string());
    }

    if !directory_exists(&target_layout.scripts_dir) {
        fs::create_dir_all(&target_layout.scripts_dir)?;
        outcome
            .adjustments
            .push("create package directory: scripts".to_string());
    }
    if !file_exists(&target_layout.clean_script) {
        if file_exists(&own_layout.clean_script) {
            fs::copy(&own_layout.clean_script, &target_layout.clean_script)?;
            outcome
                .adjustments
                .push("create package file: scripts/clean.js".to_string());
        } else {
            outcome.findings.push(Finding::error(format!(
                "missing source script {}",
                own_layout.clean_script.display()
            )));
        }
    }
    Ok(())
}

/// Rewrite the misspelled legacy license identifier.
fn fix_legacy_license(
    own: &PackageManifest,
    target: &mut PackageManifest,
    outcome: &mut ReconcileOutcome,
) {
    if target.license.as_deref() == Some(LEGACY_LICENSE) && own.license != target.license {
        let Some(own_license) = own.license.clone() else {
            return;
        };
        outcome.adjustments.push(format!(
            "update package.json license: from {LEGACY_LICENSE} to {own_license}"
        ));
        target.license = Some(own_license);
    }
}

/// Add `style-check` from the template when the target has `style` only.
fn add_style_check(
    own: &PackageManifest,
    target: &mut PackageManifest,
    outcome: &mut ReconcileOutcome,
) {
    if !target.has_script("style") || target.has_script("style-check") {
        return;
    }
    let Some(value) = own
        .scripts
        .as_ref()
        .and_then(|scripts| scripts.get("style-check"))
        .cloned()
    else {
        return;
    };
    if let Some(scripts) = target.scripts.as_mut() {
        scripts.insert("style-check".to_string(), value);
        outcome
            .adjustments
            .push("add package.json script: style-check".to_string());
    }
}

/// Copy template devDependency versions over entries the target already has.
///
/// Never introduces a name: a dependency deleted downstream stays deleted.
fn merge_existing_dev_dependencies(own: &PackageManifest, target: &mut PackageManifest) {
    let (Some(own_deps), Some(target_deps)) =
        (own.dev_dependencies.as_ref(), target.dev_dependencies.as_mut())
    else {
        return;
    };
    for (name, version) in own_deps {
        if target_deps.contains_key(name) {
            target_deps.insert(name.clone(), version.clone());
        }
    }
}

/// Copy template script bodies over the fixed list of reconciled names,
/// only where the target still defines them.
fn merge_existing_scripts(own: &PackageManifest, target: &mut PackageManifest) {
    let (Some(own_scripts), Some(target_scripts)) =
        (own.scripts.as_ref(), target.scripts.as_mut())
    else {
        return;
    };
    for name in RECONCILED_SCRIPTS {
        if target_scripts.contains_key(*name) {
            if let Some(value) = own_scripts.get(*name) {
                target_scripts.insert((*name).to_string(), value.clone());
            }
        }
    }
}

/// Copy reconciled editor settings over keys the target already has.
///
/// Skipped silently unless both settings documents exist.
fn merge_existing_settings(own: &PackageLayout, target: &PackageLayout) -> Result<()> {
    let (Some(own_settings), Some(mut target_settings)) =
        (own.load_settings()?, target.load_settings()?)
    else {
        return Ok(());
    };

    for name in RECONCILED_SETTINGS {
        if target_settings.contains_key(*name) {
            if let Some(value) = own_settings.get(*name) {
                target_settings.insert((*name).to_string(), value.clone());
            }
        }
    }

    target.write_settings(&target_settings)
}

/// Drop obsolete extension ids from the target's recommendations.
fn prune_extension_recommendations(
    target: &PackageLayout,
    outcome: &mut ReconcileOutcome,
) -> Result<()> {
    let Some(mut extensions) = target.load_extensions()? else {
        return Ok(());
    };
    for id in OBSOLETE_EXTENSIONS {
        if extensions.remove_recommendation(id) {
            outcome
                .adjustments
                .push(format!("remove extension recommendation: {id}"));
        }
    }
    target.write_extensions(&extensions)
}

/// Inventory the target against template script names, stopping at the
/// template-internal marker script.
fn build_inventory(
    own: &PackageManifest,
    target: &PackageManifest,
    outcome: &mut ReconcileOutcome,
) {
    let target_scripts: Vec<&str> = target.script_names();
    for name in own
        .script_names()
        .into_iter()
        .take_while(|name| *name != INVENTORY_STOP_SCRIPT)
    {
        let present = target_scripts.contains(&name);
        if !present {
            outcome.missing_scripts.push(name.to_string());
        }
        outcome.inventory.push(ScriptPresence {
            name: name.to_string(),
            present,
        });
    }
}
