//! Packsync keeps packages that were bootstrapped from a template package
//! aligned with the template's conventions.
//!
//! The template defines required npm scripts, devDependency versions,
//! formatter settings, and editor configuration. Packsync compares a
//! downstream package against that baseline (`check`), pushes updated
//! versions and settings into it without undoing deliberate removals
//! (`update`), and installs whole capability bundles such as style or lint
//! tooling (`add-style`, `add-lint`, `add-clean`).

pub mod cli;
pub mod environment;
pub mod error;
pub mod manifest;
pub mod shell;
pub mod sync;
pub mod toolchain;
pub mod ui;
