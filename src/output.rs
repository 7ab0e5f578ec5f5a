//! Human-readable status lines.
use std::io;

use crossterm::{style::Stylize, tty::IsTty};

/// Prints status and dry-run lines to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reporter {
    quiet: bool,
    color: bool,
}

impl Reporter {
    /// Creates a reporter with explicit settings.
    pub fn new(quiet: bool, color: bool) -> Self {
        Self { quiet, color }
    }

    /// Colour only when allowed and stdout is a terminal.
    pub fn for_stdout(quiet: bool, no_color: bool) -> Self {
        Self::new(quiet, !no_color && io::stdout().is_tty())
    }

    /// Reports a completed action. Suppressed in quiet mode.
    pub fn status(&self, message: &str) {
        if !self.quiet {
            println!("{}", self.format_status(message));
        }
    }

    /// Describes an action a dry run would perform.
    pub fn plan(&self, message: &str) {
        println!("{}", self.format_plan(message));
    }

    fn format_status(&self, message: &str) -> String {
        if self.color {
            format!("{}", message.to_string().green().bold())
        } else {
            message.to_string()
        }
    }

    fn format_plan(&self, message: &str) -> String {
        if self.color {
            format!("{} {}", "[dry-run]".yellow().bold(), message)
        } else {
            format!("[dry-run] {message}")
        }
    }
}
