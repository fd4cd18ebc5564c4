//! The editor extension recommendations document.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Typed view of `.vscode/extensions.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtensionsFile {
    /// Ordered extension ids.
    #[serde(default)]
    pub recommendations: Vec<String>,

    /// Any other fields, preserved verbatim.
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

impl ExtensionsFile {
    /// Drop every recommendation with the given id.
    ///
    /// Returns `true` when at least one entry was removed.
    pub fn remove_recommendation(&mut self, id: &str) -> bool {
        let before = self.recommendations.len();
        self.recommendations.retain(|name| name != id);
        self.recommendations.len() != before
    }
}
