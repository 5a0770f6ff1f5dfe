//! Terminal output utilities
//!
//! Provides consistent formatting for CLI output.

use owo_colors::OwoColorize;

/// Status message helpers
pub struct Status;

impl Status {
    /// Print a success message
    pub fn success(message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Print an error message
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Print a warning message
    pub fn warning(message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print an info message
    pub fn info(message: &str) {
        println!("{} {}", "ℹ".blue(), message);
    }
}

/// Format a key/value line for `prefs show` style listings
pub fn format_setting(name: &str, value: &str, mapped: &str) -> String {
    format!("{}: {} ({})", name, value, mapped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_setting() {
        assert_eq!(
            format_setting("Background color", "Red", "#fab1a0"),
            "Background color: Red (#fab1a0)"
        );
        assert_eq!(
            format_setting("Text size", "16", "normal"),
            "Text size: 16 (normal)"
        );
    }
}
