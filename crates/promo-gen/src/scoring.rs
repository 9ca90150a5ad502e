// Code quality scoring: three bounded sub-scores combined by fixed weights.
//
// Every sub-score lands in [0, 1]; the composite is their weighted sum.
// Scores only ever order candidates within one invocation, so the exact
// scale is unimportant -- the shape is what matters: pronounceable,
// visually unambiguous, close to the middle of the length range.

use promo_core::character::{AMBIGUOUS_BIGRAMS, is_vowel};

/// Weight of the pronounceability sub-score.
pub const W_PRONOUNCE: f64 = 0.45;

/// Weight of the readability sub-score.
pub const W_READ: f64 = 0.35;

/// Weight of the length-fit sub-score.
pub const W_LENGTH: f64 = 0.20;

/// Vowel-to-letter ratio at which pronounceability peaks.
const IDEAL_VOWEL_RATIO: f64 = 0.45;

/// Pronounceability: how close the vowel ratio of the alphabetic part is
/// to [`IDEAL_VOWEL_RATIO`]. Peaks at 1.0, falls to 0.0 at a ratio of 0.0
/// or 0.9 and beyond. Digits are excluded from the ratio entirely; a code
/// with no letters scores 0.
pub fn pronounceability(code: &str) -> f64 {
    let mut letters = 0usize;
    let mut vowels = 0usize;
    for c in code.chars() {
        if c.is_ascii_alphabetic() {
            letters += 1;
            if is_vowel(c) {
                vowels += 1;
            }
        }
    }
    if letters == 0 {
        return 0.0;
    }
    let ratio = vowels as f64 / letters as f64;
    1.0 - (ratio - IDEAL_VOWEL_RATIO).abs().min(IDEAL_VOWEL_RATIO) / IDEAL_VOWEL_RATIO
}

/// Readability: 1.0 for a letters-and-digits mix, 0.6 for a pure-letter or
/// pure-digit code, minus 0.2 for each distinct ambiguous bigram present
/// (`00`, `11`, `O0`, `0O`, `I1`, `1I`). Floored at 0.0.
///
/// A bigram counts once no matter how many times it occurs.
pub fn readability(code: &str) -> f64 {
    let has_alpha = code.chars().any(|c| c.is_ascii_alphabetic());
    let has_digit = code.chars().any(|c| c.is_ascii_digit());
    let base = if has_alpha && has_digit { 1.0 } else { 0.6 };
    let penalty = AMBIGUOUS_BIGRAMS
        .iter()
        .filter(|bigram| code.contains(*bigram))
        .count() as f64
        * 0.2;
    (base - penalty).max(0.0)
}

/// Length fit: 1.0 at the midpoint of `[min_len, max_len]`, falling
/// linearly with distance from it. Floored at 0.0.
pub fn length_fit(code: &str, min_len: usize, max_len: usize) -> f64 {
    let ideal = (min_len + max_len) as f64 / 2.0;
    (1.0 - (code.len() as f64 - ideal).abs() / ideal).max(0.0)
}

/// Composite quality score used for ranking.
pub fn score(code: &str, min_len: usize, max_len: usize) -> f64 {
    W_PRONOUNCE * pronounceability(code)
        + W_READ * readability(code)
        + W_LENGTH * length_fit(code, min_len, max_len)
}
