// File: src/speech.rs
use std::io::Write;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceInfo {
    pub name: String,
    /// BCP 47 tag, e.g. `en-GB`.
    pub lang: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Utterance {
    pub text: String,
    pub lang: String,
    pub voice: Option<VoiceInfo>,
}

/// Text-to-speech collaborator.
pub trait SpeechSynthesizer {
    fn voices(&self) -> Vec<VoiceInfo>;
    /// Drops whatever is currently being spoken.
    fn cancel(&mut self);
    fn speak(&mut self, utterance: &Utterance) -> std::io::Result<()>;
}

/// Speaks `text`, preferring the first English voice, after cancelling any
/// utterance still in progress.
pub fn pronounce(
    synth: &mut dyn SpeechSynthesizer,
    text: &str,
    lang: &str,
) -> std::io::Result<()> {
    let voice = synth.voices().into_iter().find(|v| v.lang.starts_with("en"));
    let utterance = Utterance {
        text: text.to_string(),
        lang: lang.to_string(),
        voice,
    };
    synth.cancel();
    tracing::debug!(text, voice = ?utterance.voice.as_ref().map(|v| &v.name), "speaking");
    synth.speak(&utterance)
}

/// Writes `SPEAK <text>` lines to a sink; a host with real audio reads them.
pub struct EchoSynthesizer<W: Write> {
    out: W,
}

impl<W: Write> EchoSynthesizer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> SpeechSynthesizer for EchoSynthesizer<W> {
    fn voices(&self) -> Vec<VoiceInfo> {
        Vec::new()
    }

    fn cancel(&mut self) {}

    fn speak(&mut self, utterance: &Utterance) -> std::io::Result<()> {
        writeln!(self.out, "SPEAK {}", utterance.text)?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        voices: Vec<VoiceInfo>,
        log: Vec<String>,
        spoken: Vec<Utterance>,
    }

    impl SpeechSynthesizer for Recorder {
        fn voices(&self) -> Vec<VoiceInfo> {
            self.voices.clone()
        }
        fn cancel(&mut self) {
            self.log.push("cancel".into());
        }
        fn speak(&mut self, utterance: &Utterance) -> std::io::Result<()> {
            self.log.push("speak".into());
            self.spoken.push(utterance.clone());
            Ok(())
        }
    }

    fn voice(name: &str, lang: &str) -> VoiceInfo {
        VoiceInfo { name: name.into(), lang: lang.into() }
    }

    #[test]
    fn cancels_before_speaking_and_picks_english_voice() {
        let mut synth = Recorder {
            voices: vec![
                voice("Paulina", "es-MX"),
                voice("Daniel", "en-GB"),
                voice("Alex", "en-US"),
            ],
            ..Default::default()
        };
        pronounce(&mut synth, "river", "en-US").unwrap();
        assert_eq!(synth.log, vec!["cancel", "speak"]);
        let spoken = &synth.spoken[0];
        assert_eq!(spoken.text, "river");
        assert_eq!(spoken.lang, "en-US");
        assert_eq!(spoken.voice.as_ref().unwrap().name, "Daniel");
    }

    #[test]
    fn speaks_without_voice_when_none_is_english() {
        let mut synth = Recorder { voices: vec![voice("Amelie", "fr-FR")], ..Default::default() };
        pronounce(&mut synth, "ocean", "en-US").unwrap();
        assert!(synth.spoken[0].voice.is_none());
    }

    #[test]
    fn echo_synthesizer_writes_lines() {
        let mut synth = EchoSynthesizer::new(Vec::new());
        pronounce(&mut synth, "garden", "en-US").unwrap();
        assert_eq!(String::from_utf8(synth.into_inner()).unwrap(), "SPEAK garden\n");
    }
}
