use thiserror::Error;

use super::CliFlags;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid number: {0}")]
    InvalidNumber(String),
    #[error("missing value for {0}")]
    MissingValue(&'static str),
    #[error("unknown argument: {0}")]
    UnknownArg(String),
}

pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "--no-lower" => flags.no_lower = true,
            "--no-upper" => flags.no_upper = true,
            "--no-digits" => flags.no_digits = true,
            "--no-special" => flags.no_special = true,
            "-l" | "--length" => flags.length = Some(next_number(args, &mut i, "--length")?),
            "-n" | "--number" => flags.number = Some(next_number(args, &mut i, "--number")?),
            "-k" | "--keyword" => flags.keyword = Some(next_value(args, &mut i, "--keyword")?),
            "-x" | "--exclude" => flags.exclude = Some(next_value(args, &mut i, "--exclude")?),
            arg => return Err(ParseError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    Ok(flags)
}

fn next_value(args: &[String], i: &mut usize, flag: &'static str) -> Result<String, ParseError> {
    *i += 1;
    args.get(*i).cloned().ok_or(ParseError::MissingValue(flag))
}

fn next_number(args: &[String], i: &mut usize, flag: &'static str) -> Result<usize, ParseError> {
    let value = next_value(args, i, flag)?;
    value.parse().map_err(|_| ParseError::InvalidNumber(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("passmith")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn parses_length_number_and_keyword() {
        let flags = parse(&args(&["-l", "16", "-n", "3", "-k", "Cat"])).unwrap();
        assert_eq!(flags.length, Some(16));
        assert_eq!(flags.number, Some(3));
        assert_eq!(flags.keyword.as_deref(), Some("Cat"));
    }

    #[test]
    fn parses_class_toggles_and_exclusions() {
        let flags = parse(&args(&["--no-lower", "--no-special", "-x", "O0l1"])).unwrap();
        assert!(flags.no_lower);
        assert!(flags.no_special);
        assert!(!flags.no_upper);
        assert_eq!(flags.exclude.as_deref(), Some("O0l1"));
    }

    #[test]
    fn rejects_malformed_number() {
        let err = parse(&args(&["-l", "ten"])).unwrap_err();
        assert_eq!(err, ParseError::InvalidNumber("ten".to_string()));
    }

    #[test]
    fn rejects_missing_value() {
        let err = parse(&args(&["--keyword"])).unwrap_err();
        assert_eq!(err, ParseError::MissingValue("--keyword"));
    }

    #[test]
    fn rejects_unknown_argument() {
        let err = parse(&args(&["--frobnicate"])).unwrap_err();
        assert_eq!(err, ParseError::UnknownArg("--frobnicate".to_string()));
    }
}
