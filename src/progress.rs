// File: src/progress.rs
use crate::core::types::Verdict;
use std::fmt;

/// Running counters for one practice session. Both only ever grow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub correct: u32,
    pub total: u32,
}

impl SessionStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one attempt, and one success if the verdict was correct.
    pub fn record(&mut self, verdict: &Verdict) {
        self.total += 1;
        if verdict.is_correct {
            self.correct += 1;
        }
    }

    /// Whole-number accuracy, rounded half up. 0 before any attempt.
    pub fn accuracy_percent(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        ((self.correct as f64 / self.total as f64) * 100.0).round() as u32
    }
}

impl fmt::Display for SessionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} correct ({}%)",
            self.correct,
            self.total,
            self.accuracy_percent()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verdict(is_correct: bool) -> Verdict {
        Verdict {
            is_correct,
            best_token: String::new(),
            distance: 0,
            was_exact_token_match: is_correct,
        }
    }

    #[test]
    fn empty_stats_show_zero_percent() {
        assert_eq!(SessionStats::new().to_string(), "0/0 correct (0%)");
    }

    #[test]
    fn record_counts_attempts_and_successes() {
        let mut stats = SessionStats::new();
        stats.record(&verdict(true));
        stats.record(&verdict(false));
        stats.record(&verdict(true));
        assert_eq!(stats, SessionStats { correct: 2, total: 3 });
        assert_eq!(stats.accuracy_percent(), 67);
        assert_eq!(stats.to_string(), "2/3 correct (67%)");
    }

    #[test]
    fn rounds_half_up() {
        let stats = SessionStats { correct: 1, total: 8 };
        assert_eq!(stats.accuracy_percent(), 13);
    }
}
