//! Terminal styling helpers
//!
//! All output goes through `anstream`, so colors degrade automatically when
//! stdout is not a terminal.

use indicatif::ProgressStyle;
use owo_colors::OwoColorize;

/// Check mark glyph
pub const CHECK: &str = "✓";

/// Semantic styling for CLI output
pub trait Stylize {
    /// Important text (bold)
    fn emphasis(&self) -> String;
    /// Highlighted values like branch names and counts
    fn accent(&self) -> String;
    /// De-emphasized hints and secondary text
    fn muted(&self) -> String;
    /// Positive outcomes
    fn success(&self) -> String;
    /// Warnings and soft failures
    fn warn(&self) -> String;
}

impl<T: std::fmt::Display> Stylize for T {
    fn emphasis(&self) -> String {
        self.bold().to_string()
    }

    fn accent(&self) -> String {
        self.cyan().to_string()
    }

    fn muted(&self) -> String {
        self.dimmed().to_string()
    }

    fn success(&self) -> String {
        self.green().to_string()
    }

    fn warn(&self) -> String {
        self.yellow().to_string()
    }
}

/// Green check mark
pub fn check() -> String {
    CHECK.green().to_string()
}

/// Dimmed step arrow
pub fn arrow() -> String {
    "→".dimmed().to_string()
}

/// Spinner style for network operations
pub fn spinner_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.cyan} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
}

/// Render a clickable link when the terminal supports hyperlinks.
pub fn pr_link(text: &str, url: &str) -> String {
    if url.is_empty() {
        return text.to_string();
    }
    if supports_hyperlinks::supports_hyperlinks() {
        terminal_link::Link::new(text, url).to_string()
    } else {
        format!("{text} ({url})")
    }
}
