use anyhow::Context;
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::style::Stylize;
use crossterm::terminal::{Clear, ClearType};
use std::io::{stdin, stdout, Write};
use trainer_core::config::TrainerConfig;
use trainer_core::core::recognition::{RecognitionError, RecognitionEvent};
use trainer_core::random::StdRandom;
use trainer_core::speech::EchoSynthesizer;
use trainer_core::{DifficultyMode, SessionUpdate, TrainerSession};

/// Last thing shown under the target word.
enum Display {
    Empty,
    Interim(String),
    Result { transcript: String, correct: bool, note: String },
    Notice(String),
    Spoken(String),
}

fn main() -> anyhow::Result<()> {
    let config = TrainerConfig::load().context("loading trainer config")?;
    trainer_core::logging::init(&config.log_level);

    let mut session = TrainerSession::from_config(&config, StdRandom::from_config(config.seed));
    let mut display = Display::Empty;

    loop {
        print_ui(&session, &display)?;

        let mut input = String::new();
        if stdin().read_line(&mut input)? == 0 {
            break;
        }
        let cmd = input.trim();

        match cmd {
            "exit" | "quit" => break,
            "" => {}
            ":new" => {
                session.next_word();
                display = Display::Empty;
            }
            ":speak" => display = speak(&session)?,
            s if s.starts_with(":mode") => match s[5..].parse::<DifficultyMode>() {
                Ok(mode) => session.set_mode(mode),
                Err(e) => display = Display::Notice(e.to_string()),
            },
            s if s.starts_with(":add ") => {
                if session.add_custom_word(&s[5..]).is_some() {
                    display = Display::Empty;
                }
            }
            s if s.starts_with(":error") => {
                let err = RecognitionError::from_code(&s[6..]);
                listen(&mut session);
                display = apply(&mut session, RecognitionEvent::Failed(err), display);
            }
            s if s.starts_with('~') => {
                listen(&mut session);
                let interim = RecognitionEvent::Interim(s[1..].trim().to_string());
                display = apply(&mut session, interim, display);
            }
            s => {
                listen(&mut session);
                display = apply(&mut session, RecognitionEvent::Final(s.to_string()), display);
            }
        }
    }

    println!("\nFinal score: {}", session.stats());
    Ok(())
}

/// Typed lines stand in for the microphone, so start listening on demand.
fn listen(session: &mut TrainerSession<StdRandom>) {
    if !session.recognizer().is_listening() {
        session.handle(RecognitionEvent::Toggle);
    }
}

/// Speaks into a buffer so the line survives the next screen clear.
fn speak(session: &TrainerSession<StdRandom>) -> anyhow::Result<Display> {
    let mut synth = EchoSynthesizer::new(Vec::new());
    session.speak_target(&mut synth)?;
    let spoken = String::from_utf8_lossy(&synth.into_inner()).trim_end().to_string();
    Ok(if spoken.is_empty() { Display::Empty } else { Display::Spoken(spoken) })
}

fn apply(
    session: &mut TrainerSession<StdRandom>,
    event: RecognitionEvent,
    current: Display,
) -> Display {
    match session.handle(event) {
        SessionUpdate::Interim(text) => Display::Interim(text),
        SessionUpdate::Scored { transcript, verdict } => Display::Result {
            transcript,
            correct: verdict.is_correct,
            note: verdict.rationale().to_string(),
        },
        SessionUpdate::Notice(msg) => Display::Notice(msg),
        SessionUpdate::ListeningStarted => Display::Empty,
        SessionUpdate::ListeningStopped | SessionUpdate::Unchanged => current,
    }
}

fn print_ui(session: &TrainerSession<StdRandom>, display: &Display) -> anyhow::Result<()> {
    let mut out = stdout();
    execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    println!("{}", "Pronunciation Trainer".bold());
    println!("---------------------------------------------------------------");
    println!("Type what was heard and press [Enter] to score it. '~text' for interim.");
    println!(
        "':new', ':speak', ':mode tolerant|strict', ':add <word>', ':error <code>', 'exit'.\n"
    );

    let target = session.target().map(|w| w.as_str()).unwrap_or("-");
    println!("Target: {}", target.to_string().bold().cyan());
    println!("Mode:   {}", session.mode());
    println!("Score:  {}\n", session.stats());

    match display {
        Display::Empty => {}
        Display::Interim(text) => println!("Recognizing... {}", text.clone().dim()),
        Display::Result { transcript, correct, note } => {
            println!("Recognized: {}", transcript);
            if *correct {
                println!("{}", format!("[OK] Well pronounced! - {}", note).green());
            } else {
                println!("{}", format!("[X] Try again - {}", note).red());
            }
        }
        Display::Notice(msg) => println!("{}", format!("[!] {}", msg).yellow()),
        Display::Spoken(line) => println!("{}", line.clone().italic()),
    }
    print!("\n> ");
    out.flush()?;
    Ok(())
}
