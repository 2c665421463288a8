//! Terminal reporting for both tools.
//!
//! Status and success lines go to stdout; errors, warnings and notes go to
//! stderr so the tag resolver's stdout carries only the tag.

use console::style;

use crate::boundary::BoundaryWarning;

pub fn format_error(message: &str) -> String {
    format!("{} {}", style("ERROR:").red(), message)
}

pub fn format_success(message: &str) -> String {
    format!("{} {}", style("✓").green(), message)
}

pub fn format_status(message: &str) -> String {
    format!("{} {}", style("→").yellow(), message)
}

pub fn format_boundary_warning(warning: &BoundaryWarning) -> String {
    format!("{} {}", style("WARNING:").yellow(), warning)
}

pub fn display_error(message: &str) {
    eprintln!("{}", format_error(message));
}

pub fn display_success(message: &str) {
    println!("{}", format_success(message));
}

pub fn display_status(message: &str) {
    println!("{}", format_status(message));
}

/// Diagnostic line on stderr, uncoloured
pub fn display_note(message: &str) {
    eprintln!("{}", message);
}

/// Display a boundary warning to the user.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{}", format_boundary_warning(warning));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_error() {
        let line = format_error("test error");
        assert!(line.contains("ERROR:"));
        assert!(line.ends_with(" test error"));
    }

    #[test]
    fn test_format_status_and_success() {
        assert!(format_status("Downloading").ends_with(" Downloading"));
        assert!(format_success("done").contains('✓'));
    }

    #[test]
    fn test_format_boundary_warning() {
        let line = format_boundary_warning(&BoundaryWarning::NoRemoteParent);
        assert!(line.contains("WARNING:"));
        assert!(line.ends_with("No remote parent branch found."));
    }
}
