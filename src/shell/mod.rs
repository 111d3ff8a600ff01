//! Interactive prompt session.

mod input;
mod text;

pub use text::print_help;

use zeroize::Zeroize;

use crate::pass::charset::{self, SPECIAL};
use crate::pass::{CharacterPools, ComposeError, GenerationOptions, compose};
use crate::terminal::{print_error, reset_terminal};

struct Session {
    options: GenerationOptions,
    pools: CharacterPools,
    keyword: String,
}

/// Run interactive mode.
pub fn run() {
    text::print_banner();

    let Some(session) = prompt_session() else {
        reset_terminal();
        return;
    };
    generate_loop(&session);
    reset_terminal();
}

/// Collect a full set of options. None means the user cancelled.
fn prompt_session() -> Option<Session> {
    let keyword = input::read_line("Enter a keyword (optional)", "")?
        .trim()
        .to_string();
    let uppercase = input::confirm("Include uppercase letters?")?;
    let lowercase = input::confirm("Include lowercase letters?")?;
    let digits = input::confirm("Include numbers?")?;
    let special = input::confirm(&format!("Include special characters ({SPECIAL})?"))?;

    // Re-prompt exclusions that leave nothing to fill with.
    let (mut options, pools) = loop {
        let exclude = input::read_line("Characters to exclude (optional)", "")?
            .trim()
            .to_string();
        let options = GenerationOptions {
            lowercase,
            uppercase,
            digits,
            special,
            exclude,
            length: 0,
        };
        let pools = charset::build(&options);
        if pools.fill.is_empty() {
            print_error("Those exclusions remove every printable character.");
            continue;
        }
        break (options, pools);
    };
    options.length = prompt_length(&pools, keyword.chars().count())?;

    Some(Session {
        options,
        pools,
        keyword,
    })
}

/// Prompt for a length until it is in bounds and achievable.
fn prompt_length(pools: &CharacterPools, keyword_len: usize) -> Option<usize> {
    loop {
        let raw = input::read_line("Desired password length (12-64)", "")?;
        let Ok(length) = raw.trim().parse::<usize>() else {
            print_error("Please enter a whole number.");
            continue;
        };

        let bounds = GenerationOptions::MIN_LENGTH..=GenerationOptions::MAX_LENGTH;
        if !bounds.contains(&length) {
            print_error("Password length must be between 12 and 64 characters.");
            continue;
        }

        // Same rule the composer enforces.
        let required = pools.min_length(keyword_len);
        if length < required {
            print_error(&format!(
                "Password length must be at least {required} to fit every \
                 selected class and the keyword."
            ));
            continue;
        }

        return Some(length);
    }
}

fn generate_loop(session: &Session) {
    let mut rng = rand::rng();
    let mut length = session.options.length;
    let keyword_len = session.keyword.chars().count();

    loop {
        match compose(&session.pools, length, &session.keyword, &mut rng) {
            Ok(mut password) => {
                println!("Generated password: {password}");
                password.zeroize();
            }
            Err(err @ ComposeError::InsufficientLength { .. }) => {
                // Composer check is authoritative; re-prompt for a new length.
                print_error(&err.to_string());
                match prompt_length(&session.pools, keyword_len) {
                    Some(new_length) => {
                        length = new_length;
                        continue;
                    }
                    None => break,
                }
            }
            Err(err) => {
                // Exclusions are fixed for the session; nothing to retry.
                print_error(&err.to_string());
                break;
            }
        }

        match input::confirm("Generate another with the same input?") {
            Some(true) => {}
            _ => break,
        }
    }

    println!("Thank you for using passmith!");
}
