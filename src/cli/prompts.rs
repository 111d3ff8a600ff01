//! Styled stderr messages for CLI output.

const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Print a warning to stderr (yellow).
pub fn warn(msg: &str) {
    eprintln!("{YELLOW}{msg}{RESET}");
}

/// Print an error to stderr (red).
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}
