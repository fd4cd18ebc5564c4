//! The package manifest (`package.json`) view.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Typed view of `package.json`.
///
/// Only the fields the sync engine operates on are modeled; every other
/// field is preserved verbatim through `rest` so a rewrite never drops
/// data it does not understand.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PackageManifest {
    /// Script name to command string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scripts: Option<IndexMap<String, String>>,

    /// Dependency name to version-spec string.
    #[serde(rename = "devDependencies", skip_serializing_if = "Option::is_none")]
    pub dev_dependencies: Option<IndexMap<String, String>>,

    /// SPDX-ish license identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,

    /// All remaining manifest fields, order preserved.
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

impl PackageManifest {
    /// Script names in manifest order, empty when the map is absent.
    pub fn script_names(&self) -> Vec<&str> {
        self.scripts
            .as_ref()
            .map(|scripts| scripts.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Whether a script with `name` is present.
    pub fn has_script(&self, name: &str) -> bool {
        self.scripts
            .as_ref()
            .is_some_and(|scripts| scripts.contains_key(name))
    }
}

/// The two manifest maps the sync engine copies between packages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestField {
    Scripts,
    DevDependencies,
}

impl ManifestField {
    /// Singular label used in findings.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Scripts => "script",
            Self::DevDependencies => "devDependency",
        }
    }

    /// Borrow the field's map when present.
    pub fn get<'a>(&self, manifest: &'a PackageManifest) -> Option<&'a IndexMap<String, String>> {
        match self {
            Self::Scripts => manifest.scripts.as_ref(),
            Self::DevDependencies => manifest.dev_dependencies.as_ref(),
        }
    }

    /// Borrow the field's map mutably, creating an empty map when absent.
    pub fn entry<'a>(&self, manifest: &'a mut PackageManifest) -> &'a mut IndexMap<String, String> {
        match self {
            Self::Scripts => manifest.scripts.get_or_insert_with(IndexMap::new),
            Self::DevDependencies => manifest.dev_dependencies.get_or_insert_with(IndexMap::new),
        }
    }
}
