//! Typed views over a package's configuration documents.
//!
//! A package root owns a small set of JSON documents (`package.json`,
//! `config/prettier.json`, `.vscode/settings.json`,
//! `.vscode/extensions.json`). Each loads as `Option<T>` — an absent file
//! is a valid state distinct from a present-but-empty document — and is
//! written back formatted, at most once per invocation.

pub mod document;
pub mod extensions;
pub mod layout;
pub mod package;

pub use document::{directory_exists, file_exists, load_json, to_formatted_json, write_json};
pub use extensions::ExtensionsFile;
pub use layout::PackageLayout;
pub use package::{ManifestField, PackageManifest};

/// Editor settings document: setting key to arbitrary JSON value.
///
/// Values are not restricted to strings — the template stores an object
/// under `eslint.options` — so the whole value is carried opaquely.
pub type EditorSettings = serde_json::Map<String, serde_json::Value>;
