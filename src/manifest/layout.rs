//! Resolved paths and document access for one package root.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::error::Result;
use crate::manifest::document::{load_json, write_json};
use crate::manifest::extensions::ExtensionsFile;
use crate::manifest::package::PackageManifest;
use crate::manifest::EditorSettings;

/// The configuration surface of one package root.
///
/// Construction only joins paths; nothing is read until a `load_*` call,
/// and every loader treats a missing file as `None`.
#[derive(Debug, Clone)]
pub struct PackageLayout {
    /// Package root directory.
    pub root: PathBuf,
    /// `package.json`.
    pub manifest: PathBuf,
    /// `config/` directory of shared tool configs.
    pub config_dir: PathBuf,
    /// `config/prettier.json`.
    pub formatter_config: PathBuf,
    /// `scripts/` directory of helper scripts.
    pub scripts_dir: PathBuf,
    /// `scripts/clean.js`.
    pub clean_script: PathBuf,
    /// `.vscode/settings.json`.
    pub settings: PathBuf,
    /// `.vscode/extensions.json`.
    pub extensions: PathBuf,
    /// `LICENSE`.
    pub license: PathBuf,
    /// `CHANGELOG.md`.
    pub changelog: PathBuf,
}

impl PackageLayout {
    /// Resolve the layout of a package rooted at `root`.
    pub fn new(root: &Path) -> Self {
        let config_dir = root.join("config");
        let scripts_dir = root.join("scripts");
        let vscode_dir = root.join(".vscode");
        Self {
            manifest: root.join("package.json"),
            formatter_config: config_dir.join("prettier.json"),
            clean_script: scripts_dir.join("clean.js"),
            settings: vscode_dir.join("settings.json"),
            extensions: vscode_dir.join("extensions.json"),
            license: root.join("LICENSE"),
            changelog: root.join("CHANGELOG.md"),
            config_dir,
            scripts_dir,
            root: root.to_path_buf(),
        }
    }

    /// Load `package.json` when present.
    pub fn load_manifest(&self) -> Result<Option<PackageManifest>> {
        load_json(&self.manifest)
    }

    /// Write `package.json`, formatted.
    pub fn write_manifest(&self, manifest: &PackageManifest) -> Result<()> {
        write_json(&self.manifest, manifest)
    }

    /// Load `.vscode/settings.json` when present.
    pub fn load_settings(&self) -> Result<Option<EditorSettings>> {
        load_json(&self.settings)
    }

    /// Write `.vscode/settings.json`, formatted.
    pub fn write_settings(&self, settings: &EditorSettings) -> Result<()> {
        write_json(&self.settings, settings)
    }

    /// Load `config/prettier.json` as a raw map when present.
    ///
    /// Raw rather than typed: baseline comparison must report a missing
    /// key as drift, not refuse to load the document.
    pub fn load_formatter(&self) -> Result<Option<Map<String, Value>>> {
        load_json(&self.formatter_config)
    }

    /// Load `.vscode/extensions.json` when present.
    pub fn load_extensions(&self) -> Result<Option<ExtensionsFile>> {
        load_json(&self.extensions)
    }

    /// Write `.vscode/extensions.json`, formatted.
    pub fn write_extensions(&self, extensions: &ExtensionsFile) -> Result<()> {
        write_json(&self.extensions, extensions)
    }
}
