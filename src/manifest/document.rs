//! JSON document reads and formatted writes.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{PacksyncError, Result};

/// Whether `path` exists and is a regular file.
pub fn file_exists(path: &Path) -> bool {
    path.is_file()
}

/// Whether `path` exists and is a directory.
pub fn directory_exists(path: &Path) -> bool {
    path.is_dir()
}

/// Load a JSON document, treating an absent file as `None`.
///
/// A file that exists but fails to parse is an error; absence is the only
/// soft case.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    if !file_exists(path) {
        return Ok(None);
    }
    let data = fs::read_to_string(path)?;
    let value = serde_json::from_str(&data).map_err(|e| PacksyncError::ManifestParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    Ok(Some(value))
}

/// Render a value as formatted JSON: four-space indent, trailing newline.
///
/// Matches the formatting convention of the template's own config files so
/// rewrites produce minimal diffs.
pub fn to_formatted_json<T: Serialize>(value: &T) -> Result<String> {
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut buffer = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    value
        .serialize(&mut serializer)
        .map_err(|e| anyhow::anyhow!("failed to serialize document: {e}"))?;
    let mut text = String::from_utf8(buffer).map_err(|e| anyhow::anyhow!("{e}"))?;
    text.push('\n');
    Ok(text)
}

/// Write a value to `path` as formatted JSON.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let text = to_formatted_json(value)?;
    fs::write(path, text)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use tempfile::TempDir;

    #[test]
    fn load_absent_file_is_none() {
        let temp = TempDir::new().unwrap();
        let loaded: Option<Value> = load_json(&temp.path().join("missing.json")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn load_invalid_json_is_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("broken.json");
        std::fs::write(&path, "{ nope").unwrap();

        let result: Result<Option<Value>> = load_json(&path);
        assert!(matches!(
            result,
            Err(PacksyncError::ManifestParse { .. })
        ));
    }

    #[test]
    fn write_then_load_round_trips() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("doc.json");
        let value = json!({"tabWidth": 4, "endOfLine": "lf"});

        write_json(&path, &value).unwrap();
        let loaded: Option<Value> = load_json(&path).unwrap();
        assert_eq!(loaded, Some(value));
    }

    #[test]
    fn formatted_json_uses_four_space_indent_and_trailing_newline() {
        let text = to_formatted_json(&json!({"a": 1})).unwrap();
        assert_eq!(text, "{\n    \"a\": 1\n}\n");
    }

    #[test]
    fn file_and_directory_checks_distinguish_kinds() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("f.json");
        std::fs::write(&file, "{}").unwrap();

        assert!(file_exists(&file));
        assert!(!directory_exists(&file));
        assert!(directory_exists(temp.path()));
        assert!(!file_exists(temp.path()));
    }
}
