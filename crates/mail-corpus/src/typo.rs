//! Character-level typo injection.
//!
//! Ham messages receive a light typo pass so the non-spam class carries the
//! texture of informal human mail. Each alphabetic character is replaced
//! independently with the configured probability; the replacement is always
//! a different letter, so probability 1 changes every alphabetic character.

use rand::Rng;
use rand::seq::IndexedRandom;
use rand_chacha::ChaCha8Rng;

/// Replacement alphabet: lowercase then uppercase ASCII letters.
const ASCII_LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Replaces alphabetic characters with random letters at the given
/// per-character probability.
///
/// Non-alphabetic characters are never altered and the character count is
/// preserved. Probability 0 returns the input unchanged; probability 1
/// replaces every alphabetic character with a letter that differs from the
/// original.
///
/// # Panics
///
/// Panics if `probability` is not within `[0, 1]`. Callers validate the
/// probability before generation starts.
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
/// use mail_corpus::inject_typos;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(42);
/// assert_eq!(inject_typos("From: a@b.c", 0.0, &mut rng), "From: a@b.c");
/// ```
#[must_use]
pub fn inject_typos(text: &str, probability: f64, rng: &mut ChaCha8Rng) -> String {
    text.chars()
        .map(|c| {
            if c.is_alphabetic() && rng.random_bool(probability) {
                replacement_letter(c, rng)
            } else {
                c
            }
        })
        .collect()
}

/// Draws a uniformly random ASCII letter that differs from `original`.
fn replacement_letter(original: char, rng: &mut ChaCha8Rng) -> char {
    let candidates: Vec<char> = ASCII_LETTERS
        .iter()
        .copied()
        .map(char::from)
        .filter(|candidate| *candidate != original)
        .collect();
    candidates.choose(rng).copied().unwrap_or('x')
}
