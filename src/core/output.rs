//! Output formatting for messages printed outside the terminal UI.
//!
//! These run before the UI starts or after it has been torn down, so they write
//! straight to stdout with `colored`.

use colored::*;

/// Formats and prints an error message with consistent styling
///
/// # Format
/// ```text
///
/// ✕ Error: <message>
///
/// ```
///
/// # Colors
/// - "✕ Error:" in red
/// - Message in white
pub fn print_error(message: &str) {
    println!("\n{} {}\n", "✕ Error:".red(), message.white());
}

/// Formats and prints an informational message on one line
pub fn print_info(message: &str) {
    println!("{}", message.white());
}
