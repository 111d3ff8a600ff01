//! Character pool construction.

use super::options::GenerationOptions;

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";

/// Fixed special-character set.
pub const SPECIAL: &str = "-_.@#$?";

// The six ASCII whitespace characters that round out the printable set.
const WHITESPACE: &str = " \t\n\r\x0b\x0c";

/// Per-class pools plus the fill pool, all exclusion-filtered.
/// A disabled class has an empty pool; so does a fully-excluded one.
#[derive(Debug, Clone, Default)]
pub struct CharacterPools {
    pub lowercase: Vec<char>,
    pub uppercase: Vec<char>,
    pub digits: Vec<char>,
    pub special: Vec<char>,
    /// Printable ASCII minus exclusions, independent of class toggles.
    pub fill: Vec<char>,
}

impl CharacterPools {
    /// Classes that will contribute a coverage character.
    pub fn coverage_classes(&self) -> usize {
        [&self.lowercase, &self.uppercase, &self.digits, &self.special]
            .into_iter()
            .filter(|pool| !pool.is_empty())
            .count()
    }

    /// Smallest password length these pools can satisfy with the given
    /// keyword. Shared by the shell pre-flight check and the composer.
    pub fn min_length(&self, keyword_len: usize) -> usize {
        self.coverage_classes() + keyword_len
    }
}

/// Build the pools for a session.
pub fn build(options: &GenerationOptions) -> CharacterPools {
    let exclude = options.exclude.as_str();

    // Graphic characters '!'..='~' plus whitespace.
    let mut fill: Vec<char> = (b'!'..=b'~').map(char::from).collect();
    fill.extend(WHITESPACE.chars());
    fill.retain(|c| !exclude.contains(*c));

    CharacterPools {
        lowercase: class_pool(options.lowercase, LOWERCASE, exclude),
        uppercase: class_pool(options.uppercase, UPPERCASE, exclude),
        digits: class_pool(options.digits, DIGITS, exclude),
        special: class_pool(options.special, SPECIAL, exclude),
        fill,
    }
}

fn class_pool(enabled: bool, chars: &str, exclude: &str) -> Vec<char> {
    if enabled {
        chars.chars().filter(|c| !exclude.contains(*c)).collect()
    } else {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_pools_without_exclusions() {
        let pools = build(&GenerationOptions::default());
        assert_eq!(pools.lowercase.len(), 26);
        assert_eq!(pools.uppercase.len(), 26);
        assert_eq!(pools.digits.len(), 10);
        assert_eq!(pools.special.len(), 7);
        assert_eq!(pools.fill.len(), 100);
        assert_eq!(pools.coverage_classes(), 4);
    }

    #[test]
    fn disabled_class_yields_empty_pool() {
        let options = GenerationOptions {
            digits: false,
            special: false,
            ..Default::default()
        };
        let pools = build(&options);
        assert!(pools.digits.is_empty());
        assert!(pools.special.is_empty());
        assert_eq!(pools.coverage_classes(), 2);
        // Fill is independent of class toggles.
        assert_eq!(pools.fill.len(), 100);
    }

    #[test]
    fn exclusions_filter_every_pool() {
        let options = GenerationOptions {
            exclude: "a0-?".to_string(),
            ..Default::default()
        };
        let pools = build(&options);
        assert_eq!(pools.lowercase.len(), 25);
        assert_eq!(pools.digits.len(), 9);
        assert_eq!(pools.special.len(), 5);
        assert_eq!(pools.fill.len(), 96);

        let pools = [
            &pools.lowercase,
            &pools.uppercase,
            &pools.digits,
            &pools.special,
            &pools.fill,
        ];
        for pool in pools {
            assert!(pool.iter().all(|c| !"a0-?".contains(*c)));
        }
    }

    #[test]
    fn fully_excluded_class_is_empty_not_an_error() {
        let options = GenerationOptions {
            exclude: ('a'..='z').collect(),
            ..Default::default()
        };
        let pools = build(&options);
        assert!(pools.lowercase.is_empty());
        assert_eq!(pools.coverage_classes(), 3);
        assert_eq!(pools.fill.len(), 74);
    }

    #[test]
    fn min_length_counts_classes_and_keyword() {
        let pools = build(&GenerationOptions::default());
        assert_eq!(pools.min_length(0), 4);
        assert_eq!(pools.min_length(3), 7);
    }
}
