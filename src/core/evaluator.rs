// src/core/evaluator.rs
use crate::core::normalizer::{normalize, tokenize};
use crate::core::types::{DifficultyMode, Verdict};
use crate::fuzzy::edit_distance;

/// Largest edit distance still accepted for an expected word of `len` chars.
/// Tolerant: 1 up to 4 chars, 2 up to 7, 3 beyond. Strict: always 0.
pub fn threshold_for(len: usize, mode: DifficultyMode) -> usize {
    match mode {
        DifficultyMode::Strict => 0,
        DifficultyMode::Tolerant => match len {
            0..=4 => 1,
            5..=7 => 2,
            _ => 3,
        },
    }
}

/// Scores a heard transcript against the target word.
///
/// A token equal to the normalized target wins outright. Otherwise the token
/// closest by edit distance is kept (leftmost on ties) and compared against
/// the length-aware threshold. A transcript with no content is never correct,
/// and neither is anything scored against a target with no content.
pub fn evaluate(target: &str, heard: &str, mode: DifficultyMode) -> Verdict {
    let expected = normalize(target);
    let heard_norm = normalize(heard);
    let expected_len = expected.chars().count();

    if heard_norm.is_empty() {
        return Verdict {
            is_correct: false,
            best_token: String::new(),
            distance: expected_len,
            was_exact_token_match: false,
        };
    }

    let tokens = tokenize(&heard_norm);

    if tokens.iter().any(|&t| t == expected) {
        return Verdict {
            is_correct: true,
            best_token: expected,
            distance: 0,
            was_exact_token_match: true,
        };
    }

    // Ties keep the earlier token.
    let mut best: Option<(&str, usize)> = None;
    for token in tokens {
        let d = edit_distance(token, &expected);
        match best {
            Some((_, best_d)) if best_d <= d => {}
            _ => best = Some((token, d)),
        }
    }
    // Whole-string fallback when tokenization yields nothing.
    let (best_token, distance) =
        best.unwrap_or_else(|| (heard_norm.as_str(), edit_distance(&heard_norm, &expected)));

    Verdict {
        is_correct: !expected.is_empty() && distance <= threshold_for(expected_len, mode),
        best_token: best_token.to_string(),
        distance,
        was_exact_token_match: false,
    }
}
