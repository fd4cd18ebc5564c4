//! Comparison mode: diff a target package against the template baseline.
//!
//! Pure reads. Neither package is mutated and every detected problem is
//! returned as a finding for the command layer to print.

use serde_json::{Map, Value};

use crate::error::Result;
use crate::manifest::PackageLayout;
use crate::sync::baseline::{formatter_baseline, REQUIRED_SCRIPTS};
use crate::sync::report::Finding;

/// Compare a document against a fixed baseline.
///
/// For every baseline key, warn when the key is absent from the document
/// or its value differs under deep structural equality. Keys only in the
/// document are never flagged: the baseline is a minimum requirement, not
/// an exhaustive schema.
pub fn compare_with_baseline(
    baseline: &Map<String, Value>,
    actual: &Map<String, Value>,
) -> Vec<Finding> {
    baseline
        .iter()
        .filter_map(|(key, expected)| match actual.get(key) {
            Some(value) if value == expected => None,
            Some(value) => Some(Finding::warning(format!(
                "key [{key}] expected [{expected}] does not match actual [{value}]"
            ))),
            None => Some(Finding::warning(format!(
                "key [{key}] expected [{expected}] is missing"
            ))),
        })
        .collect()
}

/// Check the target's formatter config against the baseline.
pub fn check_formatter_config(target: &PackageLayout) -> Result<Vec<Finding>> {
    let Some(actual) = target.load_formatter()? else {
        return Ok(vec![Finding::error(format!(
            "missing config {}",
            target.formatter_config.display()
        ))]);
    };
    Ok(compare_with_baseline(&formatter_baseline(), &actual))
}

/// Check the target's manifest for required scripts and devDependency
/// drift relative to the template's own manifest.
pub fn check_manifest(own: &PackageLayout, target: &PackageLayout) -> Result<Vec<Finding>> {
    let mut findings = Vec::new();

    let Some(target_manifest) = target.load_manifest()? else {
        return Ok(vec![Finding::error(format!(
            "missing config {}",
            target.manifest.display()
        ))]);
    };

    match &target_manifest.scripts {
        None => findings.push(Finding::warning("scripts is missing")),
        Some(scripts) => {
            for name in REQUIRED_SCRIPTS {
                if !scripts.contains_key(*name) {
                    findings.push(Finding::warning(format!("missing script: [{name}]")));
                }
            }
        }
    }

    let Some(own_manifest) = own.load_manifest()? else {
        findings.push(Finding::error(format!(
            "missing config {}",
            own.manifest.display()
        )));
        return Ok(findings);
    };

    match (&target_manifest.dev_dependencies, &own_manifest.dev_dependencies) {
        (None, _) => findings.push(Finding::warning("devDependencies is missing")),
        (_, None) => findings.push(Finding::error(
            "devDependencies is missing from own package",
        )),
        (Some(actual), Some(expected)) => {
            // Every template dependency must be present at the template's
            // version. Target-only dependencies are never flagged.
            for (name, version) in expected {
                match actual.get(name) {
                    None => findings.push(Finding::error(format!(
                        "devDependencies is missing \"{name}\": \"{version}\""
                    ))),
                    Some(found) if found != version => findings.push(Finding::warning(format!(
                        "devDependencies: expected \"{name}\": \"{version}\" found \"{found}\""
                    ))),
                    Some(_) => {}
                }
            }
        }
    }

    Ok(findings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sync::report::Severity;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    fn as_map(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    fn package_with_manifest(manifest: &str) -> (TempDir, PackageLayout) {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("package.json"), manifest).unwrap();
        let layout = PackageLayout::new(temp.path());
        (temp, layout)
    }

    #[test]
    fn matching_document_produces_no_findings() {
        let baseline = as_map(json!({"tabWidth": 4, "endOfLine": "lf"}));
        let actual = as_map(json!({"tabWidth": 4, "endOfLine": "lf", "semi": true}));
        assert!(compare_with_baseline(&baseline, &actual).is_empty());
    }

    #[test]
    fn drifted_key_is_reported_once() {
        let baseline = as_map(json!({"tabWidth": 4, "endOfLine": "lf"}));
        let actual = as_map(json!({"tabWidth": 2, "endOfLine": "lf"}));

        let findings = compare_with_baseline(&baseline, &actual);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Warning);
        assert!(findings[0].message.contains("tabWidth"));
        assert!(findings[0].message.contains("expected [4]"));
        assert!(findings[0].message.contains("actual [2]"));
    }

    #[test]
    fn absent_key_is_reported_as_missing() {
        let baseline = as_map(json!({"endOfLine": "lf"}));
        let actual = as_map(json!({}));

        let findings = compare_with_baseline(&baseline, &actual);
        assert_eq!(findings.len(), 1);
        assert!(findings[0].message.contains("is missing"));
    }

    #[test]
    fn type_drift_is_reported() {
        let baseline = as_map(json!({"tabWidth": 4}));
        let actual = as_map(json!({"tabWidth": "4"}));
        assert_eq!(compare_with_baseline(&baseline, &actual).len(), 1);
    }

    #[test]
    fn missing_formatter_config_is_an_error() {
        let temp = TempDir::new().unwrap();
        let layout = PackageLayout::new(temp.path());

        let findings = check_formatter_config(&layout).unwrap();
        assert_eq!(findings.len(), 1);
        assert!(findings[0].is_error());
        assert!(findings[0].message.contains("prettier.json"));
    }

    #[test]
    fn missing_required_scripts_warn_in_baseline_order() {
        let (_own_dir, own) = package_with_manifest(r#"{"devDependencies": {}}"#);
        let (_target_dir, target) =
            package_with_manifest(r#"{"scripts": {"lint": "eslint .", "test": "jest"}}"#);

        let findings = check_manifest(&own, &target).unwrap();
        let script_findings: Vec<_> = findings
            .iter()
            .filter(|f| f.message.contains("missing script"))
            .collect();

        assert_eq!(script_findings.len(), 3);
        assert!(script_findings[0].message.contains("[style]"));
        assert!(script_findings[1].message.contains("[compile]"));
        assert!(script_findings[2].message.contains("[doc]"));
    }

    #[test]
    fn template_dependency_missing_from_target_is_an_error() {
        let (_own_dir, own) =
            package_with_manifest(r#"{"devDependencies": {"prettier": "^2.7.0"}}"#);
        let (_target_dir, target) =
            package_with_manifest(r#"{"scripts": {}, "devDependencies": {}}"#);

        let findings = check_manifest(&own, &target).unwrap();
        let dep_finding = findings
            .iter()
            .find(|f| f.message.contains("prettier"))
            .unwrap();
        assert!(dep_finding.is_error());
        assert!(dep_finding.message.contains("^2.7.0"));
    }

    #[test]
    fn version_drift_is_a_warning_naming_both_versions() {
        let (_own_dir, own) =
            package_with_manifest(r#"{"devDependencies": {"prettier": "^2.7.0"}}"#);
        let (_target_dir, target) = package_with_manifest(
            r#"{"scripts": {}, "devDependencies": {"prettier": "^2.5.0"}}"#,
        );

        let findings = check_manifest(&own, &target).unwrap();
        let drift = findings
            .iter()
            .find(|f| f.message.contains("prettier"))
            .unwrap();
        assert_eq!(drift.severity, Severity::Warning);
        assert!(drift.message.contains("^2.7.0"));
        assert!(drift.message.contains("^2.5.0"));
    }

    #[test]
    fn target_only_dependencies_are_never_flagged() {
        let (_own_dir, own) = package_with_manifest(r#"{"devDependencies": {}}"#);
        let (_target_dir, target) = package_with_manifest(
            r#"{"scripts": {}, "devDependencies": {"left-pad": "^1.3.0"}}"#,
        );

        let findings = check_manifest(&own, &target).unwrap();
        assert!(findings.iter().all(|f| !f.message.contains("left-pad")));
    }

    #[test]
    fn comparison_does_not_mutate_either_package() {
        let (_own_dir, own) =
            package_with_manifest(r#"{"devDependencies": {"prettier": "^2.7.0"}}"#);
        let (_target_dir, target) = package_with_manifest(r#"{"scripts": {}}"#);

        let own_before = fs::read_to_string(&own.manifest).unwrap();
        let target_before = fs::read_to_string(&target.manifest).unwrap();

        check_manifest(&own, &target).unwrap();

        assert_eq!(fs::read_to_string(&own.manifest).unwrap(), own_before);
        assert_eq!(fs::read_to_string(&target.manifest).unwrap(), target_before);
    }
}
