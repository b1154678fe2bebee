// File: src/core/recognition.rs
use serde::{Deserialize, Serialize};

/// Failures reported by the speech-to-text collaborator. None are fatal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecognitionError {
    #[error("No speech was detected.")]
    NoSpeechDetected,
    #[error("No microphone found.")]
    NoAudioCaptureDevice,
    #[error("Microphone permission denied. Allow microphone access and try again.")]
    PermissionDenied,
    #[error("Network error.")]
    NetworkError,
    #[error("Could not make out a clear phrase. Try again.")]
    NoRecognizableMatch,
    #[error("Error: {0}")]
    Unknown(String),
}

impl RecognitionError {
    /// Maps Web Speech API error codes. Anything unrecognized is `Unknown`.
    pub fn from_code(code: &str) -> Self {
        match code.trim() {
            "no-speech" => RecognitionError::NoSpeechDetected,
            "audio-capture" => RecognitionError::NoAudioCaptureDevice,
            "not-allowed" => RecognitionError::PermissionDenied,
            "network" => RecognitionError::NetworkError,
            "no-match" => RecognitionError::NoRecognizableMatch,
            "" => RecognitionError::Unknown("unknown".to_string()),
            other => RecognitionError::Unknown(other.to_string()),
        }
    }
}

/// Settings handed to the speech-to-text collaborator when a session starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecognizerSettings {
    pub language: String,
    pub interim_results: bool,
    pub continuous: bool,
    pub max_alternatives: u32,
}

impl Default for RecognizerSettings {
    fn default() -> Self {
        Self {
            language: "en-US".to_string(),
            interim_results: true,
            continuous: false,
            max_alternatives: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ListenState {
    #[default]
    Idle,
    Listening { interim: String },
}

/// Inputs from the user (toggle) and from the recognizer callbacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecognitionEvent {
    Toggle,
    Interim(String),
    Final(String),
    Failed(RecognitionError),
    NoMatch,
    Ended,
}

/// What the caller has to act on after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Listening began; display state should be cleared.
    Started,
    /// The user stopped listening before a final result.
    Stopped,
    InterimUpdated(String),
    /// Utterance complete; this transcript is the one to evaluate.
    Finalized(String),
    Notice(RecognitionError),
    Ended,
    /// Stale callback while idle.
    Ignored,
}

/// Idle -> Listening -> (Interim* -> Final | Error) -> Idle.
#[derive(Debug, Clone, Default)]
pub struct RecognitionMachine {
    state: ListenState,
}

impl RecognitionMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ListenState {
        &self.state
    }

    pub fn is_listening(&self) -> bool {
        matches!(self.state, ListenState::Listening { .. })
    }

    /// Interim text of the current utterance, if listening.
    pub fn interim(&self) -> Option<&str> {
        match &self.state {
            ListenState::Listening { interim } => Some(interim),
            ListenState::Idle => None,
        }
    }

    pub fn apply(&mut self, event: RecognitionEvent) -> Transition {
        let listening = self.is_listening();
        match (listening, event) {
            (false, RecognitionEvent::Toggle) => {
                self.state = ListenState::Listening { interim: String::new() };
                Transition::Started
            }
            (true, RecognitionEvent::Toggle) => {
                self.state = ListenState::Idle;
                Transition::Stopped
            }
            (true, RecognitionEvent::Interim(text)) => {
                self.state = ListenState::Listening { interim: text.clone() };
                Transition::InterimUpdated(text)
            }
            (true, RecognitionEvent::Final(text)) => {
                self.state = ListenState::Idle;
                Transition::Finalized(text)
            }
            (true, RecognitionEvent::Failed(err)) => {
                self.state = ListenState::Idle;
                Transition::Notice(err)
            }
            (true, RecognitionEvent::NoMatch) => {
                self.state = ListenState::Idle;
                Transition::Notice(RecognitionError::NoRecognizableMatch)
            }
            (true, RecognitionEvent::Ended) => {
                self.state = ListenState::Idle;
                Transition::Ended
            }
            (false, _) => Transition::Ignored,
        }
    }
}
