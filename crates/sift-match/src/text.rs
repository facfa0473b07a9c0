//! Text normalization and term analysis.

/// Normalizes free text for matching.
///
/// Lowercases, replaces every character other than `a-z`, `0-9` and space with a space,
/// collapses whitespace runs, and trims. The operation is idempotent.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;

    for c in text.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.push(c);
        } else {
            pending_space = true;
        }
    }

    out
}

/// Splits text into index terms.
///
/// Tokens are maximal runs of word characters (alphanumerics and `_`) at least two characters
/// long, lowercased. Terms are the token n-grams for every `n` in `min_n..=max_n`, joined by a
/// single space, in order of increasing `n`.
pub fn analyze(text: &str, (min_n, max_n): (usize, usize)) -> Vec<String> {
    let lower = text.to_lowercase();
    let tokens: Vec<&str> = lower
        .split(|c: char| !is_word_char(c))
        .filter(|t| t.chars().count() >= 2)
        .collect();

    let mut terms = Vec::new();
    for n in min_n.max(1)..=max_n {
        if n > tokens.len() {
            break;
        }
        terms.extend(tokens.windows(n).map(|window| window.join(" ")));
    }
    terms
}

/// Word characters for tokenization.
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
