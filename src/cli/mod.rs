mod context;
mod flags;
mod parse;
pub mod prompts;

pub use context::{Context, Done};
pub use flags::CliFlags;
pub use parse::{ParseError, parse};

/// Run CLI mode.
pub fn run(args: &[String]) {
    let mut context = match Context::new(args) {
        Ok(c) => c,
        Err(e) => {
            prompts::error(&e);
            eprintln!("Try 'passmith --help' for usage.");
            std::process::exit(2);
        }
    };

    // Err(Done) is an early exit (help/version), not a failure.
    let _ = context.run();
}
