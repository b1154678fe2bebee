// Line-protocol bridge. A UI host owning the microphone and speaker writes
// commands on stdin and renders the replies from stdout. Logs go to stderr.
use std::io::{self, BufRead, Write};
use trainer_core::config::TrainerConfig;
use trainer_core::core::recognition::{RecognitionError, RecognitionEvent};
use trainer_core::random::StdRandom;
use trainer_core::speech::EchoSynthesizer;
use trainer_core::{DifficultyMode, SessionUpdate, TrainerSession};

fn main() -> anyhow::Result<()> {
    let config = TrainerConfig::load()?;
    trainer_core::logging::init(&config.log_level);
    tracing::info!("trainer bridge starting");

    let mut session = TrainerSession::from_config(&config, StdRandom::from_config(config.seed));
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    writeln!(stdout, "RECOGNIZER {}", serde_json::to_string(&config.recognition)?)?;
    write_target(&session, &mut stdout)?;

    for line in stdin.lock().lines() {
        let input = line?;
        tracing::debug!(input = %input, "<-");
        let (command, rest) = match input.split_once(' ') {
            Some((c, r)) => (c, r),
            None => (input.as_str(), ""),
        };

        match command {
            "NEW_WORD" => {
                session.next_word();
                write_target(&session, &mut stdout)?;
            }
            "SET_WORD" => match session.add_custom_word(rest) {
                Some(_) => write_target(&session, &mut stdout)?,
                None => writeln!(stdout, "IGNORED")?,
            },
            "MODE" => match rest.parse::<DifficultyMode>() {
                Ok(mode) => {
                    session.set_mode(mode);
                    writeln!(stdout, "MODE {}", mode)?;
                }
                Err(e) => writeln!(stdout, "NOTICE {}", e)?,
            },
            "SPEAK" => {
                let mut synth = EchoSynthesizer::new(&mut stdout);
                session.speak_target(&mut synth)?;
            }
            "LISTEN" => handle(&mut session, RecognitionEvent::Toggle, &mut stdout)?,
            "INTERIM" => {
                let event = RecognitionEvent::Interim(rest.to_string());
                handle(&mut session, event, &mut stdout)?
            }
            "FINAL" => {
                let event = RecognitionEvent::Final(rest.to_string());
                handle(&mut session, event, &mut stdout)?
            }
            "ERROR" => handle(
                &mut session,
                RecognitionEvent::Failed(RecognitionError::from_code(rest)),
                &mut stdout,
            )?,
            "NOMATCH" => handle(&mut session, RecognitionEvent::NoMatch, &mut stdout)?,
            "END" => handle(&mut session, RecognitionEvent::Ended, &mut stdout)?,
            "STATS" => writeln!(stdout, "STATS {}", session.stats())?,
            "EXIT" => break,
            _ => tracing::warn!(command, "unknown command"),
        }
        stdout.flush()?;
    }

    tracing::info!(stats = %session.stats(), "trainer bridge shutting down");
    Ok(())
}

fn write_target(session: &TrainerSession<StdRandom>, out: &mut impl Write) -> io::Result<()> {
    let target = session.target().map(|w| w.as_str()).unwrap_or("");
    writeln!(out, "TARGET {}", target)
}

fn handle(
    session: &mut TrainerSession<StdRandom>,
    event: RecognitionEvent,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    match session.handle(event) {
        SessionUpdate::ListeningStarted => writeln!(out, "LISTENING")?,
        SessionUpdate::ListeningStopped => writeln!(out, "IDLE")?,
        SessionUpdate::Interim(text) => writeln!(out, "INTERIM {}", text)?,
        SessionUpdate::Scored { transcript, verdict } => {
            writeln!(out, "RECOGNIZED {}", transcript)?;
            writeln!(out, "VERDICT {}", serde_json::to_string(&verdict)?)?;
            writeln!(out, "NOTE {}", verdict.rationale())?;
            writeln!(out, "STATS {}", session.stats())?;
            writeln!(out, "IDLE")?;
        }
        SessionUpdate::Notice(msg) => {
            writeln!(out, "NOTICE {}", msg)?;
            writeln!(out, "IDLE")?;
        }
        SessionUpdate::Unchanged => {}
    }
    Ok(())
}
