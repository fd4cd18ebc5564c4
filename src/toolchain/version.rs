//! Structured tool versions.

use std::fmt;

use regex::{Captures, Regex};

/// A parsed tool version.
///
/// Either all three components parse cleanly or the version as a whole is
/// unavailable; no partial values are ever produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub revision: u32,
}

impl Version {
    /// Extract a version from `text` using a pattern with named capture
    /// groups `major`, `minor`, and `revision`.
    ///
    /// Returns `None` when the pattern does not match or any group fails
    /// the strict integer check.
    pub fn extract(pattern: &Regex, text: &str) -> Option<Self> {
        let captures = pattern.captures(text)?;
        Some(Self {
            major: group_integer(&captures, "major")?,
            minor: group_integer(&captures, "minor")?,
            revision: group_integer(&captures, "revision")?,
        })
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.revision)
    }
}

/// Parse a named capture group as a non-negative integer.
///
/// The parsed value must round-trip back to the original token, so tokens
/// like `1.2x` fragments or zero-padded `007` are rejected rather than
/// silently truncated.
fn group_integer(captures: &Captures<'_>, name: &str) -> Option<u32> {
    let token = captures.name(name)?.as_str();
    let value: u32 = token.parse().ok()?;
    if value.to_string() != token {
        return None;
    }
    Some(value)
}
