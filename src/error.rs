//! Error types for packsync operations.
//!
//! This module defines [`PacksyncError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Diagnostic flows (`check`) never propagate errors across operation
//!   boundaries; every detected problem becomes a printed finding.
//! - Mutating flows skip an individual field on missing source data and
//!   continue, but abort a whole document when a required input document
//!   is absent, so a partially constructed document is never written.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for packsync operations.
#[derive(Debug, Error)]
pub enum PacksyncError {
    /// A package.json expected to exist does not.
    #[error("package.json not found: {path}")]
    ManifestNotFound { path: PathBuf },

    /// Failed to parse a JSON configuration document.
    #[error("Failed to parse {path}: {message}")]
    ManifestParse { path: PathBuf, message: String },

    /// A probe subprocess failed to start or exited non-zero.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// A probe subprocess exceeded its time budget and was killed.
    #[error("Command timed out after {seconds}s: {command}")]
    CommandTimeout { command: String, seconds: u64 },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for packsync operations.
pub type Result<T> = std::result::Result<T, PacksyncError>;
