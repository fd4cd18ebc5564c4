//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Packsync - template-to-package configuration synchronization.
#[derive(Debug, Parser)]
#[command(name = "packsync")]
#[command(author, version, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the template package root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check required tool versions and report configuration drift
    Check(CheckArgs),

    /// Reconcile a package against the template (guarded update)
    Update(TargetArgs),

    /// Install the formatting capability bundle into a package
    AddStyle(TargetArgs),

    /// Install the linting capability bundle into a package
    AddLint(TargetArgs),

    /// Install the clean-script capability bundle into a package
    AddClean(TargetArgs),

    /// Print CI environment variables and raw tool versions
    Environment,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Package to check (defaults to the template root itself)
    #[arg(value_name = "TARGET_ROOT")]
    pub target: Option<PathBuf>,
}

/// Arguments for commands that operate on a target package.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct TargetArgs {
    /// Package to modify (defaults to the template root itself)
    #[arg(value_name = "TARGET_ROOT")]
    pub target: Option<PathBuf>,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
