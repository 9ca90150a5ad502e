// Feature extraction from the token stream and the raw input text:
// the campaign year, the letters-only word list, and acronym hints.

/// Find the year token: the token nearest the END of the sequence that is
/// purely digits and exactly four characters long.
///
/// "Spring 2023 relaunch 2024" yields "2024" -- the later mention wins,
/// matching how people put the operative year last.
pub fn extract_year(tokens: &[String]) -> Option<&str> {
    tokens
        .iter()
        .rev()
        .find(|t| t.len() == 4 && t.chars().all(|c| c.is_ascii_digit()))
        .map(String::as_str)
}

/// Strip every non-letter character from each token, dropping tokens that
/// become empty. Order is preserved.
///
/// "Q4" becomes "Q", "2024" disappears entirely.
pub fn letters_only(tokens: &[String]) -> Vec<String> {
    tokens
        .iter()
        .map(|t| t.chars().filter(char::is_ascii_uppercase).collect::<String>())
        .filter(|w| !w.is_empty())
        .collect()
}

/// Detect acronym hints in the *raw* input: standalone words of 2-5
/// uppercase ASCII letters ("VIP", "BOGO").
///
/// This runs on the raw text rather than the token stream because the
/// tokenizer uppercases everything -- the signal is that the author wrote
/// the word in capitals. Duplicates are dropped, first occurrence wins.
pub fn acronym_hints(raw: &str) -> Vec<String> {
    fn flush(current: &mut String, all_upper: &mut bool, hints: &mut Vec<String>) {
        if *all_upper
            && (2..=5).contains(&current.len())
            && !hints.iter().any(|h| h == current)
        {
            hints.push(std::mem::take(current));
        } else {
            current.clear();
        }
        *all_upper = true;
    }

    let mut hints: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut all_upper = true;

    for c in raw.chars() {
        if c.is_ascii_alphanumeric() {
            if !c.is_ascii_uppercase() {
                all_upper = false;
            }
            current.push(c);
        } else if !current.is_empty() {
            flush(&mut current, &mut all_upper, &mut hints);
        }
    }
    if !current.is_empty() {
        flush(&mut current, &mut all_upper, &mut hints);
    }
    hints
}
