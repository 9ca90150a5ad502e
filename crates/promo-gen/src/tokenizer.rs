// Tokenizer: maximal runs of ASCII letters and digits, uppercased.
//
// Non-ASCII letters are treated as separators, not transliterated; codes
// are ASCII-only end to end, so anything outside `[A-Za-z0-9]` can never
// contribute to a candidate.

/// Split `text` into uppercase alphanumeric tokens, in order of appearance.
///
/// Returns an empty vector when the text contains no letters or digits;
/// the caller decides whether that is an error (for code generation it is).
pub fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            current.push(c.to_ascii_uppercase());
        } else if !current.is_empty() {
            tokens.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}
