//! Convention constants: baselines, guard lists, and capability bundles.
//!
//! Everything the engine enforces is declared here rather than hand-tuned
//! at call sites, so the convention surface is auditable in one place.

use serde_json::{json, Map, Value};

/// Scripts every compliant package must define, in report order.
pub const REQUIRED_SCRIPTS: &[&str] = &["lint", "style", "compile", "test", "doc"];

/// Scripts `update` overwrites, but only when already present in the target.
pub const RECONCILED_SCRIPTS: &[&str] = &[
    "test",
    "clean",
    "prettier",
    "eslint",
    "eslint-fix",
    "prepack",
    "build",
];

/// Editor settings `update` overwrites, but only when already present.
pub const RECONCILED_SETTINGS: &[&str] =
    &["prettier.configPath", "eslint.options", "markdownlint.config"];

/// Script pairs that historically duplicated each other.
///
/// When both names exist in a target, the first (kept) name takes the
/// second's value and the second is deleted.
pub const SCRIPT_CONSOLIDATIONS: &[(&str, &str)] = &[
    ("style", "prettier"),
    ("style-check", "prettier-check"),
    ("lint", "eslint"),
    ("lint-fix", "eslint-fix"),
];

/// Suffix marking platform-specific scripts that are discarded on update.
pub const PLATFORM_SCRIPT_SUFFIX: &str = "-windows";

/// Extension ids no longer recommended; removed from targets when present.
pub const OBSOLETE_EXTENSIONS: &[&str] = &["coenraads.bracket-pair-colorizer"];

/// The legacy misspelled license identifier rewritten during update.
pub const LEGACY_LICENSE: &str = "Unlicensed";

/// Legacy `clean` script bodies that are replaced with the template's
/// node-based clean script. Anything else is assumed intentional and kept.
pub const LEGACY_CLEAN_COMMANDS: &[&str] = &[
    "if exist dist (rmdir /s /q dist)",
    "rm --dir --recursive --verbose --force dist temp",
    "if exist dist (rmdir /S /Q dist) && if exist temp (rmdir /S /Q temp)",
];

/// Script inventory stops at this marker: template scripts from the marker
/// onward are template-internal and not expected downstream.
pub const INVENTORY_STOP_SCRIPT: &str = "check";

/// Expected formatter configuration (`config/prettier.json`).
pub fn formatter_baseline() -> Map<String, Value> {
    let Value::Object(map) = json!({
        "tabWidth": 4,
        "endOfLine": "lf",
    }) else {
        unreachable!("baseline literal is an object");
    };
    map
}

/// A named set of template fields installed together by an `add-*` command.
#[derive(Debug, Clone, Copy)]
pub struct CapabilityBundle {
    /// Bundle name, matching the subcommand suffix.
    pub name: &'static str,
    /// Scripts copied into the target manifest.
    pub scripts: &'static [&'static str],
    /// devDependencies copied into the target manifest.
    pub dev_dependencies: &'static [&'static str],
    /// Files copied from the template's `config/` directory.
    pub config_files: &'static [&'static str],
    /// Keys copied from the template's editor settings.
    pub settings: &'static [&'static str],
    /// Helper files copied from the template's `scripts/` directory.
    pub helper_scripts: &'static [&'static str],
}

/// Formatting bundle installed by `add-style`.
pub const STYLE_BUNDLE: CapabilityBundle = CapabilityBundle {
    name: "style",
    scripts: &["style", "style-check", "prettier", "prettier-check"],
    dev_dependencies: &["prettier"],
    config_files: &["prettier.json"],
    settings: &["prettier.configPath"],
    helper_scripts: &[],
};

/// Linting bundle installed by `add-lint`.
pub const LINT_BUNDLE: CapabilityBundle = CapabilityBundle {
    name: "lint",
    scripts: &["lint", "lint-fix", "eslint", "eslint-fix"],
    dev_dependencies: &[
        "eslint",
        "@typescript-eslint/eslint-plugin",
        "@typescript-eslint/parser",
    ],
    config_files: &["eslint.json"],
    settings: &["eslint.options"],
    helper_scripts: &[],
};

/// Clean-script bundle installed by `add-clean`.
pub const CLEAN_BUNDLE: CapabilityBundle = CapabilityBundle {
    name: "clean",
    scripts: &["clean"],
    dev_dependencies: &[],
    config_files: &[],
    settings: &[],
    helper_scripts: &["clean.js"],
};
