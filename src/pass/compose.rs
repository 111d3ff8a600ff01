//! Password composition.
//!
//! One password per call: draw one character per enabled class (coverage),
//! pad with fill characters, shuffle, then splice the keyword in verbatim
//! at a random spot.

use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};
use thiserror::Error;

use super::charset::CharacterPools;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ComposeError {
    #[error(
        "length {requested} is too small: need at least {required} to fit \
         every selected character class and the keyword"
    )]
    InsufficientLength { required: usize, requested: usize },
    #[error("the exclusions remove every printable character, leaving nothing to fill with")]
    EmptyFillPool,
}

/// Compose one password of exactly `length` characters.
///
/// The keyword is inserted unshuffled and is not subject to exclusions.
/// The only failure is a target length below coverage + keyword.
pub fn compose<R: Rng + ?Sized>(
    pools: &CharacterPools,
    length: usize,
    keyword: &str,
    rng: &mut R,
) -> Result<String, ComposeError> {
    let keyword_len = keyword.chars().count();
    let mut parts: Vec<char> = Vec::with_capacity(length);

    // Coverage: one draw per enabled non-empty class, fixed class order.
    // An enabled class emptied by exclusions silently contributes nothing.
    let class_pools = [
        &pools.lowercase,
        &pools.uppercase,
        &pools.digits,
        &pools.special,
    ];
    for pool in class_pools {
        if let Some(&c) = pool.choose(rng) {
            parts.push(c);
        }
    }

    let required = parts.len() + keyword_len;
    if length < required {
        return Err(ComposeError::InsufficientLength {
            required,
            requested: length,
        });
    }

    // Fill: draw with replacement up to the target length. An exhausted
    // fill pool cannot honor the exact-length guarantee.
    let remaining = length - required;
    if remaining > 0 && pools.fill.is_empty() {
        return Err(ComposeError::EmptyFillPool);
    }
    for _ in 0..remaining {
        if let Some(&c) = pools.fill.choose(rng) {
            parts.push(c);
        }
    }

    parts.shuffle(rng);

    if keyword.is_empty() {
        return Ok(parts.into_iter().collect());
    }

    let at = rng.random_range(0..=parts.len());
    let mut password = String::with_capacity(length);
    password.extend(&parts[..at]);
    password.push_str(keyword);
    password.extend(&parts[at..]);
    Ok(password)
}
