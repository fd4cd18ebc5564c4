//! CI environment inspection.
//!
//! These helpers are diagnostic only. The variables reported by
//! [`ci_variables`] are printed by the `environment` subcommand and never
//! branch program logic.

/// CI-provided variables worth echoing when diagnosing a workflow run.
pub const CI_VARIABLES: &[&str] = &[
    "GITHUB_REF",
    "GITHUB_ACTOR",
    "GITHUB_EVENT_NAME",
    "GITHUB_HEAD_REF",
    "GITHUB_WORKSPACE",
    "BRANCH_NAME",
];

/// Snapshot the diagnostic CI variables, in declaration order.
///
/// An unset variable reports as an empty string rather than being omitted,
/// so the printed block always has the same shape.
pub fn ci_variables() -> Vec<(&'static str, String)> {
    CI_VARIABLES
        .iter()
        .map(|name| (*name, std::env::var(name).unwrap_or_default()))
        .collect()
}

/// Check if running in a CI environment.
///
/// Used to pick the plain, log-friendly UI in `main()`. Checks common CI
/// environment variables: `CI`, `GITHUB_ACTIONS`, `GITLAB_CI`, `CIRCLECI`,
/// `TRAVIS`, `JENKINS_URL`.
pub fn is_ci() -> bool {
    std::env::var("CI").is_ok()
        || std::env::var("GITHUB_ACTIONS").is_ok()
        || std::env::var("GITLAB_CI").is_ok()
        || std::env::var("CIRCLECI").is_ok()
        || std::env::var("TRAVIS").is_ok()
        || std::env::var("JENKINS_URL").is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ci_variables_covers_every_declared_name() {
        let vars = ci_variables();
        assert_eq!(vars.len(), CI_VARIABLES.len());
        for ((name, _), declared) in vars.iter().zip(CI_VARIABLES) {
            assert_eq!(name, declared);
        }
    }

    #[test]
    fn set_variable_is_reported() {
        std::env::set_var("BRANCH_NAME", "feature/sync");
        let vars = ci_variables();
        let branch = vars.iter().find(|(name, _)| *name == "BRANCH_NAME").unwrap();
        assert_eq!(branch.1, "feature/sync");
        std::env::remove_var("BRANCH_NAME");
    }

    #[test]
    fn is_ci_does_not_panic() {
        let _ = is_ci();
    }
}
