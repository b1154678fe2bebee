// src/core/normalizer.rs
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Whitespace as ECMAScript `\s` and `trim` see it.
pub fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r' | ' ' | '\u{A0}' | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}' | '\u{2029}' | '\u{202F}' | '\u{205F}' | '\u{3000}' | '\u{FEFF}'
    )
}

/// Canonicalizes text for comparison: lowercase, NFD with combining marks
/// dropped, only `a-z`, whitespace and `'` kept, then trimmed.
/// Total and idempotent.
pub fn normalize(input: &str) -> String {
    let lowered = input.to_lowercase();
    let mut result = String::with_capacity(lowered.len());

    for c in lowered.nfd() {
        if is_combining_mark(c) {
            continue;
        }
        if c.is_ascii_lowercase() || is_js_whitespace(c) || c == '\'' {
            result.push(c);
        }
    }

    result.trim_matches(is_js_whitespace).to_string()
}

/// Splits normalized text into its non-empty whitespace-separated tokens.
pub fn tokenize(normalized: &str) -> Vec<&str> {
    normalized
        .split(is_js_whitespace)
        .filter(|t| !t.is_empty())
        .collect()
}
