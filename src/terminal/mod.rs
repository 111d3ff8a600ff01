//! Shared terminal utilities: ANSI helpers, box drawing, raw mode.

mod output;
mod raw_mode;

pub use output::*;
pub use raw_mode::*;
