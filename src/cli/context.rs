//! CLI context - applies flags onto generation options and emits passwords.

use zeroize::Zeroize;

use super::{CliFlags, prompts};
use crate::pass::{GenerationOptions, charset, compose};
use crate::shell::print_help;

/// Early exit - not an error, just done.
pub struct Done;

pub struct Context {
    options: GenerationOptions,
    keyword: String,
    count: usize,
    flags: CliFlags,
}

impl Context {
    /// Create a new context by parsing command-line arguments.
    /// Returns Err with the error message if parsing fails.
    pub fn new(args: &[String]) -> Result<Self, String> {
        let flags = super::parse(args).map_err(|e| e.to_string())?;

        let options = GenerationOptions {
            lowercase: !flags.no_lower,
            uppercase: !flags.no_upper,
            digits: !flags.no_digits,
            special: !flags.no_special,
            exclude: flags.exclude.clone().unwrap_or_default(),
            length: flags.length.unwrap_or(GenerationOptions::MIN_LENGTH),
        };

        Ok(Self {
            keyword: flags.keyword.clone().unwrap_or_default(),
            count: flags.number.unwrap_or(1),
            options,
            flags,
        })
    }

    /// Run CLI. Returns `Err(Done)` for early exits, `Ok(())` on completion.
    pub fn run(&mut self) -> Result<(), Done> {
        self.handle_info_flags()?;
        self.generate_output();
        Ok(())
    }

    fn handle_info_flags(&self) -> Result<(), Done> {
        if self.flags.help {
            print_help();
            return Err(Done);
        }
        if self.flags.version {
            println!("passmith {}", env!("CARGO_PKG_VERSION"));
            return Err(Done);
        }
        Ok(())
    }

    fn generate_output(&self) {
        if self.options.enabled_classes() == 0 {
            prompts::warn("All character classes disabled; drawing from the full printable set.");
        }

        let pools = charset::build(&self.options);
        let mut rng = rand::rng();

        for _ in 0..self.count {
            match compose(&pools, self.options.length, &self.keyword, &mut rng) {
                Ok(mut password) => {
                    println!("{password}");
                    password.zeroize();
                }
                Err(e) => {
                    prompts::error(&e.to_string());
                    std::process::exit(2);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(list: &[&str]) -> Vec<String> {
        std::iter::once("passmith")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn flags_map_onto_options() {
        let args = argv(&["-l", "20", "-n", "3", "--no-digits", "-x", "xyz", "-k", "Cat"]);
        let context = Context::new(&args).unwrap();
        assert_eq!(context.options.length, 20);
        assert_eq!(context.count, 3);
        assert!(!context.options.digits);
        assert!(context.options.lowercase);
        assert_eq!(context.options.exclude, "xyz");
        assert_eq!(context.keyword, "Cat");
    }

    #[test]
    fn zero_count_is_honored() {
        let context = Context::new(&argv(&["-n", "0"])).unwrap();
        assert_eq!(context.count, 0);
    }

    #[test]
    fn defaults_apply_without_flags() {
        let context = Context::new(&argv(&[])).unwrap();
        assert_eq!(context.options.length, GenerationOptions::MIN_LENGTH);
        assert_eq!(context.count, 1);
        assert_eq!(context.options.enabled_classes(), 4);
        assert!(context.keyword.is_empty());
    }
}
