//! The synchronization engine.
//!
//! Three modes, one per subcommand family:
//!
//! - [`compare`] — pure read; diffs a target package against the template
//!   baseline and returns findings.
//! - [`copy`] — field copy for capability bundles; always-overwrite,
//!   ensure-presence semantics.
//! - [`reconcile`] — the guarded `update` merge; exists → overwrite,
//!   absent → skip, never delete outside the documented cleanups.

pub mod baseline;
pub mod compare;
pub mod copy;
pub mod reconcile;
pub mod report;

pub use baseline::{CapabilityBundle, CLEAN_BUNDLE, LINT_BUNDLE, STYLE_BUNDLE};
pub use copy::{apply_bundle, BundleOutcome};
pub use reconcile::{reconcile, ReconcileOutcome, ScriptPresence};
pub use report::{Finding, Severity};
