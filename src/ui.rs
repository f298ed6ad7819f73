//! User-facing output formatting.
//!
//! Everything here writes to stderr: stdout is reserved for the resolved
//! version string, so the packaging layer can consume it directly.

use console::style;

use crate::boundary::BoundaryWarning;

/// Print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Print a status message with a yellow arrow.
pub fn display_status(message: &str) {
    eprintln!("{} {}", style("→").yellow(), message);
}

/// Print a success message with a green checkmark.
pub fn display_success(message: &str) {
    eprintln!("{} {}", style("✓").green(), message);
}

/// Print a boundary warning with a yellow warning icon.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow().bold(), warning);
}

/// Show the tag the version was derived from next to the result.
pub fn display_resolution(tag: Option<&str>, version: &str) {
    match tag {
        Some(tag) => {
            eprintln!(
                "{} Resolved version {} from tag {}",
                style("✓").green(),
                style(version).green().bold(),
                style(tag).cyan()
            );
        }
        None => {
            eprintln!(
                "{} Resolved version {}",
                style("✓").green(),
                style(version).green().bold()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_error() {
        // Visual verification test - output is printed to stderr
        display_error("test error");
    }

    #[test]
    fn test_display_status() {
        display_status("test status");
    }

    #[test]
    fn test_display_resolution() {
        display_resolution(Some("v1.2.3"), "1.3.0");
        display_resolution(None, "0.0.1");
    }
}
