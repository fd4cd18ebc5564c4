//! Version probe execution.

use std::time::Duration;

use regex::Regex;

use crate::error::Result;
use crate::shell;
use crate::toolchain::version::Version;

/// Time budget for a single probe command.
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Runs an external command and parses a version out of its output.
///
/// A probe is single-shot: one spawned process, no retries. Every failure
/// mode — the process not starting, exiting non-zero, timing out, or
/// printing output the pattern cannot parse — collapses to `None`.
#[derive(Debug)]
pub struct ToolProbe {
    command: String,
    pattern: Regex,
}

impl ToolProbe {
    /// Create a probe from a command line and a named-group pattern.
    pub fn new(command: &str, pattern: &str) -> Result<Self> {
        let pattern = Regex::new(pattern)
            .map_err(|e| anyhow::anyhow!("invalid version pattern {pattern:?}: {e}"))?;
        Ok(Self {
            command: command.to_string(),
            pattern,
        })
    }

    /// The command line this probe runs.
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Execute the probe and parse a version from captured stdout.
    pub fn run(&self) -> Option<Version> {
        match shell::capture_stdout(&self.command, PROBE_TIMEOUT) {
            Ok(output) => Version::extract(&self.pattern, &output),
            Err(e) => {
                tracing::debug!(command = %self.command, error = %e, "version probe failed");
                None
            }
        }
    }
}
