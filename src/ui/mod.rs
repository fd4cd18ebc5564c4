//! Console output components.
//!
//! This module provides:
//! - [`UserInterface`] trait for output abstraction
//! - [`TerminalUI`] for styled interactive terminals
//! - [`PlainUI`] for CI/non-TTY environments
//! - [`MockUI`] for capturing output in tests
//!
//! Packsync never prompts; the trait only covers one-way reporting, which
//! is what keeps it trivially mockable.

pub mod mock;
pub mod output;
pub mod plain;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use plain::PlainUI;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, PacksyncTheme};

/// Trait for console output.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a plain message.
    fn message(&mut self, msg: &str);

    /// Display a success line (`✓` prefix).
    fn success(&mut self, msg: &str);

    /// Display a warning line (`⚠` prefix).
    fn warning(&mut self, msg: &str);

    /// Display an error line (`✗` prefix). Shown even in quiet mode.
    fn error(&mut self, msg: &str);

    /// Show a section header.
    fn show_header(&mut self, title: &str);

    /// Check if output goes to an interactive terminal.
    fn is_interactive(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trait_is_object_safe() {
        fn accepts(_ui: &mut dyn UserInterface) {}
        let mut ui = MockUI::new();
        accepts(&mut ui);
    }
}
