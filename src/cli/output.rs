//! Shared CLI output helpers for consistent terminal output.
//!
//! Color scheme (respects NO_COLOR):
//! - Green: success, valid keys
//! - Red: errors, failed keys
//! - Yellow: warnings
//! - Cyan: paths, commands, hints
//! - Bold: headers, key labels
//! - Dimmed: labels

use console::style;
use std::fmt::Display;

/// Check if color output is disabled via NO_COLOR env var.
fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

/// Print a success message with checkmark (green).
///
/// Example: `✓ saved 3 API keys`
pub fn success(msg: &str) {
    if colors_enabled() {
        println!("{} {}", style("✓").green(), style(msg).green());
    } else {
        println!("✓ {}", msg);
    }
}

/// Print an error message to stderr (red).
///
/// Example: `✗ no API keys found`
pub fn error(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    } else {
        eprintln!("✗ {}", msg);
    }
}

/// Print a per-key failure to stdout (red).
///
/// Unlike [`error`] this is a result line, not a fatal condition.
///
/// Example: `✗ API key K2 is rate-limited`
pub fn failure(msg: &str) {
    if colors_enabled() {
        println!("{} {}", style("✗").red(), style(msg).red());
    } else {
        println!("✗ {}", msg);
    }
}

/// Print a warning message (yellow).
pub fn warn(msg: &str) {
    if colors_enabled() {
        println!("{} {}", style("⚠").yellow(), msg);
    } else {
        println!("⚠ {}", msg);
    }
}

/// Print a hint message (cyan).
///
/// Example: `→ add keys with: keyrelay -i`
pub fn hint(msg: &str) {
    if colors_enabled() {
        println!("{} {}", style("→").cyan(), style(msg).cyan());
    } else {
        println!("→ {}", msg);
    }
}

/// Print a bold section header.
pub fn header(title: &str) {
    if colors_enabled() {
        println!("{}", style(title).bold());
    } else {
        println!("{}", title);
    }
}

/// Print a key-value pair (label dimmed, value bold).
///
/// Example: `  key 1  sk-proj-ab...`
pub fn kv(label: &str, value: impl Display) {
    if colors_enabled() {
        println!("  {}  {}", style(label).dim(), style(value).bold());
    } else {
        println!("  {}  {}", label, value);
    }
}

/// Print a completion labeled with the key that produced it.
///
/// Example: `K2: Hello! How can I help?`
pub fn answer(label: impl Display, content: &str) {
    if colors_enabled() {
        println!("{}: {}", style(label).bold(), content);
    } else {
        println!("{}: {}", label, content);
    }
    println!();
}

/// Format a path string in cyan.
pub fn path(p: &str) -> String {
    if colors_enabled() {
        style(p).cyan().to_string()
    } else {
        p.to_string()
    }
}

/// Format a command string in green.
pub fn cmd(c: &str) -> String {
    if colors_enabled() {
        style(c).green().to_string()
    } else {
        c.to_string()
    }
}

/// Print an empty line.
pub fn blank() {
    println!();
}
