//! Game-level tests: word progression, scoring, restart.

use word_garden::core::{GameConfig, Letter};
use word_garden::effects::Signal;
use word_garden::rules::{EngineError, GameEngine, GameStatus, RoundStatus};
use word_garden::view::{Affordance, GameView, Scoreboard};

fn letter(c: char) -> Letter {
    Letter::new(c).unwrap()
}

fn solve<S: word_garden::SignalSink>(engine: &mut GameEngine<S>) {
    for l in engine.current_word().distinct_letters() {
        engine.guess_letter(l).unwrap();
    }
}

fn lose<S: word_garden::SignalSink>(engine: &mut GameEngine<S>) {
    let misses: Vec<_> = Letter::alphabet()
        .filter(|&l| !engine.current_word().contains(l))
        .collect();
    for l in misses {
        if engine.round_over() {
            break;
        }
        engine.guess_letter(l).unwrap();
    }
}

// =============================================================================
// Progression
// =============================================================================

#[test]
fn test_advance_moves_to_next_word_and_resets_round() {
    let mut engine = GameEngine::with_sink(GameConfig::default(), Vec::<Signal>::new()).unwrap();
    solve(&mut engine);

    engine.advance_word().unwrap();

    assert_eq!(engine.current_word_index(), 1);
    assert_eq!(engine.current_word().to_string(), "DOG");
    assert_eq!(engine.guesses_count(), 0);
    assert_eq!(engine.round_status(), RoundStatus::InProgress);
    assert_eq!(engine.sink().last(), Some(&Signal::RoundStarted { word_index: 1 }));
}

#[test]
fn test_advance_rejected_mid_round() {
    let mut engine = GameEngine::new(GameConfig::default()).unwrap();
    engine.guess_letter(letter('S')).unwrap();

    assert_eq!(engine.advance_word(), Err(EngineError::RoundInProgress));
    assert_eq!(engine.current_word_index(), 0);
    assert_eq!(engine.guesses_count(), 1);
}

#[test]
fn test_advance_rejected_on_last_word() {
    let mut engine = GameEngine::new(GameConfig::from_words(["DOG"]).unwrap()).unwrap();
    solve(&mut engine);

    assert_eq!(engine.advance_word(), Err(EngineError::NoMoreWords));
    assert_eq!(engine.current_word_index(), 0);
    assert!(engine.word_guessed_correctly());
}

#[test]
fn test_game_over_only_on_last_word() {
    let mut engine = GameEngine::new(GameConfig::from_words(["DOG", "CAT"]).unwrap()).unwrap();

    lose(&mut engine);
    assert!(engine.round_over());
    assert!(!engine.game_over());
    assert_eq!(engine.game_status(), GameStatus::Playing);

    engine.advance_word().unwrap();
    solve(&mut engine);
    assert!(engine.game_over());
    assert_eq!(engine.game_status(), GameStatus::Finished);
}

// =============================================================================
// Scoring
// =============================================================================

#[test]
fn test_scoreboard_through_a_game() {
    let mut engine = GameEngine::new(GameConfig::default()).unwrap();

    // SWIFT: won
    solve(&mut engine);
    let board = Scoreboard::from_engine(&engine);
    assert_eq!((board.words_guessed, board.words_missed, board.words_remaining), (1, 0, 2));

    // DOG: lost. Not counted as missed until the player moves on.
    engine.advance_word().unwrap();
    lose(&mut engine);
    let board = Scoreboard::from_engine(&engine);
    assert_eq!((board.words_guessed, board.words_missed, board.words_remaining), (1, 0, 2));

    // CAT: won
    engine.advance_word().unwrap();
    let board = Scoreboard::from_engine(&engine);
    assert_eq!((board.words_guessed, board.words_missed, board.words_remaining), (1, 1, 1));

    solve(&mut engine);
    let board = Scoreboard::from_engine(&engine);
    assert_eq!((board.words_guessed, board.words_missed, board.words_remaining), (2, 1, 0));
    assert_eq!(board.total_words, 3);
    assert!(engine.game_over());
}

#[test]
fn test_words_guessed_bounded_by_index() {
    let mut engine = GameEngine::new(GameConfig::default()).unwrap();

    for i in 0..3 {
        solve(&mut engine);
        assert!(engine.words_guessed() as usize <= engine.current_word_index() + 1);
        if i < 2 {
            engine.advance_word().unwrap();
        }
    }
}

// =============================================================================
// Restart
// =============================================================================

#[test]
fn test_restart_after_game_over() {
    let mut engine = GameEngine::with_sink(GameConfig::default(), Vec::<Signal>::new()).unwrap();
    for i in 0..3 {
        solve(&mut engine);
        if i < 2 {
            engine.advance_word().unwrap();
        }
    }
    assert!(engine.game_over());
    assert_eq!(GameView::capture(&engine).affordance, Affordance::PlayAgain);

    engine.restart_game();

    assert_eq!(engine.current_word_index(), 0);
    assert_eq!(engine.words_guessed(), 0);
    assert_eq!(engine.guesses_count(), 0);
    assert!(engine.round().letters_guessed.is_empty());
    assert!(!engine.game_over());
    assert_eq!(engine.sink().last(), Some(&Signal::GameRestarted));
    assert_eq!(GameView::capture(&engine).affordance, Affordance::GuessLetter);
}

#[test]
fn test_restart_mid_game() {
    let mut engine = GameEngine::new(GameConfig::default()).unwrap();
    solve(&mut engine);
    engine.advance_word().unwrap();
    engine.guess_letter(letter('D')).unwrap();

    engine.restart_game();

    assert_eq!(engine.current_word().to_string(), "SWIFT");
    assert_eq!(engine.revealed_word(), "_ _ _ _ _");
    assert!(engine.history().is_empty());
}
