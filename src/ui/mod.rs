//! Terminal output for the CLI.
//!
//! - [`UserInterface`] trait so commands can be tested against [`MockUI`]
//! - [`TerminalUI`] writing to stdout/stderr
//! - [`OutputMode`] and [`ViewPathTheme`]
//!
//! # Example
//!
//! ```
//! use viewpath::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("a/b/page.html");
//! assert!(ui.has_message("page.html"));
//! ```

pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, ViewPathTheme};

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Print a command's primary output. Shown in every mode.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display an error message. Shown in every mode.
    fn error(&mut self, msg: &str);
}
