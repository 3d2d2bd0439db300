//! Terminal output components.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for terminal usage
//! - [`MockUI`] for capturing output in tests
//!
//! # Example
//!
//! ```
//! use version_report::ui::{MockUI, OutputMode, UserInterface};
//!
//! let mut ui = MockUI::with_mode(OutputMode::Quiet);
//! ui.message("jinja2==3.1.2");
//! assert_eq!(ui.messages().len(), 1);
//! ```

pub mod mock;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, ReportTheme};

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show the report plus status messages.
    #[default]
    Normal,
    /// Show the report and errors only.
    Quiet,
}

impl OutputMode {
    /// Check if this mode shows success and warning messages.
    pub fn shows_status(&self) -> bool {
        matches!(self, Self::Normal)
    }
}

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests. Report text goes through
/// [`message`](Self::message) unconditionally; success and warning
/// messages are suppressed in quiet mode.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display report text to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_mode_default() {
        assert_eq!(OutputMode::default(), OutputMode::Normal);
    }

    #[test]
    fn output_mode_shows_status() {
        assert!(OutputMode::Normal.shows_status());
        assert!(!OutputMode::Quiet.shows_status());
    }
}
