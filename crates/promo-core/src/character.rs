// Character classification for campaign codes.
//
// Codes are restricted to uppercase ASCII letters and digits, so the
// classification here is deliberately narrow: no Unicode tables, just the
// handful of predicates and constants the pipeline needs.

/// Vowels used by the pronounceability heuristic.
pub const VOWELS: &[char] = &['A', 'E', 'I', 'O', 'U'];

/// Digits used to pad short codes up to the minimum length.
///
/// `0` and `1` are excluded: they read as `O` and `I` at a glance, and a
/// padded tail of them would undo the readability scoring.
pub const PAD_DIGITS: &[char] = &['2', '3', '4', '5', '6', '7', '8', '9'];

/// Character pairs prone to visual confusion. Each occurrence in a code
/// costs a fixed readability penalty.
pub const AMBIGUOUS_BIGRAMS: &[&str] = &["00", "11", "O0", "0O", "I1", "1I"];

/// Returns `true` for characters allowed in a finished code: `A-Z` or `0-9`.
pub fn is_code_char(c: char) -> bool {
    c.is_ascii_uppercase() || c.is_ascii_digit()
}

/// Returns `true` if the character is a vowel counted by the
/// pronounceability score.
pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c)
}

/// Returns `true` if every character of `s` is a valid code character.
///
/// The empty string is vacuously valid; length checks are the caller's
/// concern.
pub fn is_code_charset(s: &str) -> bool {
    s.chars().all(is_code_char)
}
