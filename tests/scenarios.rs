use trainer_core::config::TrainerConfig;
use trainer_core::core::recognition::{RecognitionError, RecognitionEvent};
use trainer_core::progress::SessionStats;
use trainer_core::random::SequenceSource;
use trainer_core::{
    edit_distance, evaluate, normalize, threshold_for, DifficultyMode, SessionUpdate,
    TrainerSession,
};

#[test]
fn scenario_exact_word() {
    let v = evaluate("apple", "apple", DifficultyMode::Tolerant);
    assert!(v.is_correct && v.was_exact_token_match);
    assert_eq!(v.distance, 0);
}

#[test]
fn scenario_near_miss_by_mode() {
    let tolerant = evaluate("apple", "aple", DifficultyMode::Tolerant);
    assert_eq!((tolerant.is_correct, tolerant.distance), (true, 1));

    let strict = evaluate("apple", "aple", DifficultyMode::Strict);
    assert_eq!((strict.is_correct, strict.distance), (false, 1));
}

#[test]
fn scenario_phrase_without_the_word() {
    let v = evaluate("chocolate", "I said hot plate", DifficultyMode::Tolerant);
    assert!(!v.is_correct);
    assert_eq!(v.best_token, "plate");
    assert!(v.distance > threshold_for(9, DifficultyMode::Tolerant));
}

#[test]
fn scenario_phrase_with_the_word() {
    let v = evaluate("beautiful", "beautiful thing", DifficultyMode::Tolerant);
    assert!(v.is_correct && v.was_exact_token_match);
}

#[test]
fn scenario_normalize_accents() {
    assert_eq!(normalize("Café!! Übung"), "cafe ubung");
}

#[test]
fn direct_hit_beats_closer_looking_noise_in_any_mode() {
    let transcripts = ["river rivers", "liver river", "a b c river d"];
    for heard in transcripts {
        for mode in [DifficultyMode::Tolerant, DifficultyMode::Strict] {
            let v = evaluate("river", heard, mode);
            assert!(v.is_correct, "{} ({})", heard, mode);
            assert!(v.was_exact_token_match);
        }
    }
}

#[test]
fn verdict_agrees_with_distance_and_threshold() {
    let pairs = [
        ("computer", "compuder"),
        ("window", "windo"),
        ("city", "sitty"),
        ("mountain", "mounten"),
        ("although", "all though"),
        ("weak", "week"),
        ("difficult", "difikult"),
    ];
    for (target, heard) in pairs {
        for mode in [DifficultyMode::Tolerant, DifficultyMode::Strict] {
            let v = evaluate(target, heard, mode);
            let expected = normalize(target);
            let nearest = normalize(heard)
                .split_whitespace()
                .map(|t| edit_distance(t, &expected))
                .min()
                .unwrap();
            assert_eq!(v.distance, nearest, "{} / {}", target, heard);
            assert_eq!(
                v.is_correct,
                v.was_exact_token_match || nearest <= threshold_for(expected.len(), mode),
                "{} / {} ({})",
                target,
                heard,
                mode
            );
        }
    }
}

#[test]
fn session_round_trip_through_recognition_events() {
    let mut session =
        TrainerSession::from_config(&TrainerConfig::default(), SequenceSource::new(vec![4, 30]));
    assert_eq!(session.target().unwrap().as_str(), "chair");

    session.handle(RecognitionEvent::Toggle);
    session.handle(RecognitionEvent::Interim("cha".into()));
    let update = session.handle(RecognitionEvent::Final("Chair!".into()));
    assert!(matches!(update, SessionUpdate::Scored { ref verdict, .. } if verdict.is_correct));

    session.next_word();
    assert_eq!(session.target().unwrap().as_str(), "beautiful");

    session.handle(RecognitionEvent::Toggle);
    let update = session.handle(RecognitionEvent::Failed(RecognitionError::NetworkError));
    assert_eq!(update, SessionUpdate::Notice("Network error.".into()));

    session.handle(RecognitionEvent::Toggle);
    let update = session.handle(RecognitionEvent::Final("bootiful".into()));
    match update {
        SessionUpdate::Scored { verdict, .. } => {
            assert!(verdict.is_correct);
            assert_eq!(verdict.distance, 3);
        }
        other => panic!("unexpected {:?}", other),
    }

    session.handle(RecognitionEvent::Toggle);
    session.handle(RecognitionEvent::Final("".into()));
    assert_eq!(session.stats(), SessionStats { correct: 2, total: 3 });
    assert_eq!(session.stats().to_string(), "2/3 correct (67%)");
}
