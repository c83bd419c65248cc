//! Terminal output utilities for styled CLI output.

use console::{Term, style};
use std::fmt::Display;

/// Terminal output helper for consistent styled output.
pub struct Output {
    term: Term,
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}

impl Output {
    /// Create a new output helper writing to stdout.
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
        }
    }

    /// Print a success message with a green checkmark.
    pub fn success(&self, message: impl Display) {
        drop(
            self.term
                .write_line(&format!("{} {}", style("✓").green().bold(), message)),
        );
    }

    /// Print an error message with a red X.
    pub fn error(&self, message: impl Display) {
        drop(
            self.term
                .write_line(&format!("{} {}", style("✗").red().bold(), message)),
        );
    }

    /// Print a warning message with a yellow warning sign.
    pub fn warning(&self, message: impl Display) {
        drop(
            self.term
                .write_line(&format!("{} {}", style("⚠").yellow().bold(), message)),
        );
    }

    /// Print a plain message without any prefix.
    pub fn print(&self, message: impl Display) {
        drop(self.term.write_line(&message.to_string()));
    }

    /// Print an empty line.
    pub fn newline(&self) {
        drop(self.term.write_line(""));
    }

    /// Print a header with emphasis.
    pub fn header(&self, message: impl Display) {
        drop(
            self.term
                .write_line(&style(message).bold().cyan().to_string()),
        );
    }

    /// Print a divider line.
    pub fn divider(&self, width: usize) {
        drop(
            self.term
                .write_line(&style("─".repeat(width)).dim().to_string()),
        );
    }

    /// Print a labeled value with indentation.
    pub fn labeled_indent(&self, label: impl Display, value: impl Display, indent: usize) {
        let spaces = " ".repeat(indent);
        drop(
            self.term
                .write_line(&format!("{spaces}{}: {}", style(label).dim(), value)),
        );
    }

    /// Print a status value, green for active and red otherwise.
    pub fn status(&self, label: impl Display, active: bool, value: impl Display, indent: usize) {
        let spaces = " ".repeat(indent);
        let value = if active {
            style(value).green()
        } else {
            style(value).red()
        };
        drop(
            self.term
                .write_line(&format!("{spaces}{}: {}", style(label).dim(), value)),
        );
    }

    /// Print a dim/muted message.
    pub fn dim(&self, message: impl Display) {
        drop(self.term.write_line(&style(message).dim().to_string()));
    }

    /// Print the page summary line under a listing.
    pub fn page_footer(&self, summary: impl Display, page_label: impl Display) {
        drop(self.term.write_line(&format!(
            "\n{}  {}",
            style(summary).bold(),
            style(page_label).cyan()
        )));
    }
}
