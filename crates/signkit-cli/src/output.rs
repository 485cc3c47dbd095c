//! Output formatting utilities for CLI.

use console::style;

/// Prints a success message.
pub fn print_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}
