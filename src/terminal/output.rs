//! Terminal output helpers.

use std::io::{self, Write};

use crossterm::terminal::disable_raw_mode;

pub const RESET: &str = "\x1b[0m";
pub const RED: &str = "\x1b[38;5;9m";

/// Flush stdout.
pub fn flush() {
    let _ = io::stdout().flush();
}

/// Reset terminal to a sane state.
pub fn reset_terminal() {
    let _ = disable_raw_mode();
    print!("{RESET}");
    flush();
}

/// Print an error message in red.
pub fn print_error(msg: &str) {
    println!("{RED}{msg}{RESET}");
}

// ============================================================================
// Box Drawing
// ============================================================================

pub const BOX_WIDTH: usize = 64;

/// Print box top with optional title.
pub fn box_top(title: &str) {
    if title.is_empty() {
        println!("┌{}┐", "─".repeat(BOX_WIDTH - 2));
    } else {
        let lead = format!("─ {title} ");
        let remaining = BOX_WIDTH - 2 - lead.chars().count();
        println!("┌{}{}┐", lead, "─".repeat(remaining));
    }
}

/// Print a box content line, left-aligned.
pub fn box_line(content: &str) {
    let inner = BOX_WIDTH - 4;
    let len = content.chars().count();
    if len <= inner {
        println!("│ {}{} │", content, " ".repeat(inner - len));
    } else {
        println!("│ {content} │");
    }
}

/// Print a centered box content line.
pub fn box_line_center(content: &str) {
    let inner = BOX_WIDTH - 4;
    let len = content.chars().count();
    if len <= inner {
        let pad = inner - len;
        let left = pad / 2;
        println!("│ {}{}{} │", " ".repeat(left), content, " ".repeat(pad - left));
    } else {
        println!("│ {content} │");
    }
}

/// Print an option line: padded flag column, then description.
pub fn box_opt(flag: &str, desc: &str) {
    box_line(&format!("{flag:<25}{desc}"));
}

/// Print box bottom.
pub fn box_bottom() {
    println!("└{}┘", "─".repeat(BOX_WIDTH - 2));
}
