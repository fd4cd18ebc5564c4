//! External tool version probing and policy.
//!
//! A [`ToolRequirement`](policy::ToolRequirement) names the probe command,
//! the extraction pattern, and the version floor for one required tool.
//! [`ToolProbe`](probe::ToolProbe) runs the command and parses a
//! [`Version`](version::Version) out of its output.

pub mod policy;
pub mod probe;
pub mod version;

pub use policy::{ToolRequirement, NODE_REQUIREMENT, NPM_REQUIREMENT, REQUIRED_TOOLS};
pub use probe::{ToolProbe, PROBE_TIMEOUT};
pub use version::Version;
