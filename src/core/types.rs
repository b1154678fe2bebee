// src/core/types.rs
use crate::core::normalizer::normalize;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A target word in canonical form. Only built through normalization,
/// so it is lowercase, diacritic-free and never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Word(String);

impl Word {
    /// Normalizes `raw` and wraps it, rejecting input that normalizes to nothing.
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = normalize(raw);
        if normalized.is_empty() {
            None
        } else {
            Some(Self(normalized))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Threshold policy used when scoring an attempt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyMode {
    #[default]
    Tolerant,
    Strict,
}

impl DifficultyMode {
    pub fn as_str(self) -> &'static str {
        match self {
            DifficultyMode::Tolerant => "tolerant",
            DifficultyMode::Strict => "strict",
        }
    }
}

impl fmt::Display for DifficultyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown difficulty mode {0:?}, expected \"tolerant\" or \"strict\"")]
pub struct ParseModeError(pub String);

impl FromStr for DifficultyMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tolerant" => Ok(DifficultyMode::Tolerant),
            "strict" => Ok(DifficultyMode::Strict),
            _ => Err(ParseModeError(s.to_string())),
        }
    }
}

/// Why a verdict came out the way it did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rationale {
    ExactToken,
    NearMatch { distance: usize },
    Mismatch { heard: String },
    NoSpeech,
}

impl fmt::Display for Rationale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rationale::ExactToken => f.write_str("Exact!"),
            Rationale::NearMatch { distance } => {
                write!(f, "Almost identical (distance {}).", distance)
            }
            Rationale::Mismatch { heard } => write!(
                f,
                "Recognized as \"{}\". Try stressing the vowels/syllables.",
                heard
            ),
            Rationale::NoSpeech => f.write_str("Nothing recognizable was heard."),
        }
    }
}

/// Outcome of scoring one transcript against the target.
/// Serializes to `{ "correct", "bestToken", "distance", "exact" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    #[serde(rename = "correct")]
    pub is_correct: bool,
    #[serde(rename = "bestToken")]
    pub best_token: String,
    pub distance: usize,
    #[serde(rename = "exact")]
    pub was_exact_token_match: bool,
}

impl Verdict {
    pub fn rationale(&self) -> Rationale {
        if self.was_exact_token_match {
            Rationale::ExactToken
        } else if self.is_correct {
            Rationale::NearMatch { distance: self.distance }
        } else if self.best_token.is_empty() {
            Rationale::NoSpeech
        } else {
            Rationale::Mismatch { heard: self.best_token.clone() }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_parse_normalizes_and_rejects_empty() {
        assert_eq!(Word::parse("  Café ").unwrap().as_str(), "cafe");
        assert!(Word::parse("!!! 123").is_none());
        assert!(Word::parse("").is_none());
    }

    #[test]
    fn mode_parses_case_insensitively() {
        assert_eq!("Strict".parse::<DifficultyMode>(), Ok(DifficultyMode::Strict));
        assert_eq!(" tolerant ".parse::<DifficultyMode>(), Ok(DifficultyMode::Tolerant));
        assert!("lenient".parse::<DifficultyMode>().is_err());
    }

    #[test]
    fn verdict_serializes_with_wire_names() {
        let verdict = Verdict {
            is_correct: true,
            best_token: "aple".into(),
            distance: 1,
            was_exact_token_match: false,
        };
        let json = serde_json::to_value(&verdict).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "correct": true,
                "bestToken": "aple",
                "distance": 1,
                "exact": false
            })
        );
    }

    #[test]
    fn rationale_messages() {
        let miss = Verdict {
            is_correct: false,
            best_token: "plate".into(),
            distance: 4,
            was_exact_token_match: false,
        };
        assert_eq!(
            miss.rationale().to_string(),
            "Recognized as \"plate\". Try stressing the vowels/syllables."
        );
        let near = Verdict { is_correct: true, distance: 2, ..miss };
        assert_eq!(near.rationale().to_string(), "Almost identical (distance 2).");
    }
}
