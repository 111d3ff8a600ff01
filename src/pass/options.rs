//! Session configuration.

/// Immutable per-session generation options. Built once from user input
/// (interactive prompts or CLI flags) and passed by reference from then on.
#[derive(Debug, Clone)]
pub struct GenerationOptions {
    pub lowercase: bool,
    pub uppercase: bool,
    pub digits: bool,
    pub special: bool,
    /// Characters that must never be drawn. The keyword is exempt.
    pub exclude: String,
    pub length: usize,
}

impl GenerationOptions {
    /// Interactive length bounds.
    pub const MIN_LENGTH: usize = 12;
    pub const MAX_LENGTH: usize = 64;

    /// Count of enabled classes, before exclusion filtering.
    pub fn enabled_classes(&self) -> usize {
        [self.lowercase, self.uppercase, self.digits, self.special]
            .into_iter()
            .filter(|&on| on)
            .count()
    }
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            lowercase: true,
            uppercase: true,
            digits: true,
            special: true,
            exclude: String::new(),
            length: Self::MIN_LENGTH,
        }
    }
}
