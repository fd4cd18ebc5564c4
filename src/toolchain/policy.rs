//! Required tool versions and the pass/fail policy.

use crate::toolchain::probe::ToolProbe;
use crate::toolchain::version::Version;

/// Version floor for one required external tool.
///
/// The major component is an exact match, not a minimum: a newer major is
/// treated as breaking and fails the check. Minor and revision are floors.
#[derive(Debug, Clone, Copy)]
pub struct ToolRequirement {
    /// Tool name shown in reports.
    pub name: &'static str,
    /// Command that prints the tool's version.
    pub command: &'static str,
    /// Pattern with `major`/`minor`/`revision` named groups.
    pub pattern: &'static str,
    /// Required major version (exact).
    pub major_required: u32,
    /// Minimum minor version.
    pub minor_minimum: u32,
    /// Minimum revision.
    pub revision_minimum: u32,
}

/// Runtime tool requirement.
pub const NODE_REQUIREMENT: ToolRequirement = ToolRequirement {
    name: "node",
    command: "node --version",
    pattern: r"v(?<major>\d+)\.(?<minor>\d+)\.(?<revision>\d+)",
    major_required: 18,
    minor_minimum: 12,
    revision_minimum: 0,
};

/// Package-manager tool requirement.
pub const NPM_REQUIREMENT: ToolRequirement = ToolRequirement {
    name: "npm",
    command: "npm --version",
    pattern: r"(?<major>\d+)\.(?<minor>\d+)\.(?<revision>\d+)",
    major_required: 8,
    minor_minimum: 19,
    revision_minimum: 0,
};

/// Every tool the `check` command requires.
pub const REQUIRED_TOOLS: &[ToolRequirement] = &[NODE_REQUIREMENT, NPM_REQUIREMENT];

impl ToolRequirement {
    /// Whether `version` satisfies this requirement.
    pub fn is_satisfied(&self, version: &Version) -> bool {
        version.major == self.major_required
            && version.minor >= self.minor_minimum
            && version.revision >= self.revision_minimum
    }

    /// Human-readable rendering of the version floor.
    pub fn describe_minimum(&self) -> String {
        format!(
            "v{}.{}.{} (requiredMajor.minimumMinor.minimumRevision)",
            self.major_required, self.minor_minimum, self.revision_minimum
        )
    }

    /// Probe the tool, returning its version when one can be parsed.
    pub fn probe(&self) -> Option<Version> {
        let probe = ToolProbe::new(self.command, self.pattern).ok()?;
        probe.run()
    }
}
