use crate::config::TrainerConfig;
use crate::core::evaluator::evaluate;
use crate::core::recognition::{RecognitionEvent, RecognitionMachine, Transition};
use crate::core::types::{DifficultyMode, Verdict, Word};
use crate::core::word_bank::WordBank;
use crate::progress::SessionStats;
use crate::random::RandomSource;
use crate::speech::{pronounce, SpeechSynthesizer};

/// Result of feeding one recognition event to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionUpdate {
    /// Nothing for the UI to do.
    Unchanged,
    /// Listening started; clear interim/final/result displays.
    ListeningStarted,
    /// Back to idle without a result.
    ListeningStopped,
    Interim(String),
    /// A final transcript was scored and the stats updated.
    Scored { transcript: String, verdict: Verdict },
    /// Non-fatal recognizer failure to show the user.
    Notice(String),
}

// All mutable trainer state lives here; the evaluator itself stays pure.
pub struct TrainerSession<R: RandomSource> {
    word_bank: WordBank,
    target: Option<Word>,
    stats: SessionStats,
    mode: DifficultyMode,
    language: String,
    recognizer: RecognitionMachine,
    rng: R,
}

impl<R: RandomSource> TrainerSession<R> {
    pub fn new(rng: R) -> Self {
        Self {
            word_bank: WordBank::new(),
            target: None,
            stats: SessionStats::new(),
            mode: DifficultyMode::default(),
            language: "en-US".to_string(),
            recognizer: RecognitionMachine::new(),
            rng,
        }
    }

    /// Builds a session from config and picks the first target.
    pub fn from_config(config: &TrainerConfig, rng: R) -> Self {
        let mut session = Self::new(rng);
        session.mode = config.mode;
        session.language = config.language.clone();
        for raw in &config.custom_words {
            if session.word_bank.add_custom(raw).is_none() {
                tracing::warn!(entry = %raw, "ignoring custom word with no letters");
            }
        }
        session.next_word();
        session
    }

    /// Replaces the target with a random pick from the bank.
    pub fn next_word(&mut self) -> Option<&Word> {
        self.target = self.word_bank.pick(&mut self.rng).cloned();
        tracing::debug!(word = ?self.target.as_ref().map(Word::as_str), "new target");
        self.target.as_ref()
    }

    /// Adds a user word to the bank and makes it the target immediately.
    /// Returns `None` (target unchanged) if the entry has no letters.
    pub fn add_custom_word(&mut self, raw: &str) -> Option<&Word> {
        let word = self.word_bank.add_custom(raw)?;
        tracing::debug!(word = %word, bank_size = self.word_bank.len(), "custom word");
        self.target = Some(word);
        self.target.as_ref()
    }

    pub fn set_mode(&mut self, mode: DifficultyMode) {
        tracing::debug!(%mode, "difficulty changed");
        self.mode = mode;
    }

    pub fn mode(&self) -> DifficultyMode {
        self.mode
    }

    pub fn target(&self) -> Option<&Word> {
        self.target.as_ref()
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    pub fn word_bank(&self) -> &WordBank {
        &self.word_bank
    }

    pub fn recognizer(&self) -> &RecognitionMachine {
        &self.recognizer
    }

    /// Scores `heard` against the current target and records the attempt.
    /// With no target the empty string is used, which never scores as correct.
    pub fn submit_transcript(&mut self, heard: &str) -> Verdict {
        let target = self.target.as_ref().map(Word::as_str).unwrap_or("");
        let verdict = evaluate(target, heard, self.mode);
        self.stats.record(&verdict);
        tracing::debug!(
            expected = target,
            heard,
            correct = verdict.is_correct,
            distance = verdict.distance,
            stats = %self.stats,
            "attempt scored"
        );
        verdict
    }

    /// Drives the recognition state machine. Only a final transcript is scored.
    pub fn handle(&mut self, event: RecognitionEvent) -> SessionUpdate {
        match self.recognizer.apply(event) {
            Transition::Started => SessionUpdate::ListeningStarted,
            Transition::Stopped | Transition::Ended => SessionUpdate::ListeningStopped,
            Transition::InterimUpdated(text) => SessionUpdate::Interim(text),
            Transition::Finalized(transcript) => {
                let verdict = self.submit_transcript(&transcript);
                SessionUpdate::Scored { transcript, verdict }
            }
            Transition::Notice(err) => {
                tracing::warn!(error = ?err, "recognition failed");
                SessionUpdate::Notice(err.to_string())
            }
            Transition::Ignored => SessionUpdate::Unchanged,
        }
    }

    /// Speaks the current target through `synth`. No-op without a target.
    pub fn speak_target(&self, synth: &mut dyn SpeechSynthesizer) -> std::io::Result<()> {
        match &self.target {
            Some(word) => pronounce(synth, word.as_str(), &self.language),
            None => Ok(()),
        }
    }
}
