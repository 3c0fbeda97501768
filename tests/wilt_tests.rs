//! Wilt effect tests.
//!
//! The wilt is a deadline armed by each penalised guess. A second miss
//! inside the window pushes the deadline out; the first miss's deadline
//! passing must not clear it early.

use std::time::{Duration, Instant};

use word_garden::core::GameConfig;
use word_garden::effects::Signal;
use word_garden::rules::GameEngine;
use word_garden::view::GameView;

const WILT: Duration = Duration::from_millis(750);

fn engine() -> GameEngine<Vec<Signal>> {
    let config = GameConfig::from_words(["DOG", "CAT"])
        .unwrap()
        .with_wilt_duration(WILT);
    GameEngine::with_sink(config, Vec::<Signal>::new()).unwrap()
}

#[test]
fn test_miss_starts_wilt() {
    let mut engine = engine();
    let start = Instant::now();

    engine.guess_char_at('X', start).unwrap();

    assert!(engine.is_wilting_at(start));
    assert!(engine.is_wilting_at(start + Duration::from_millis(700)));
    assert!(!engine.is_wilting_at(start + WILT));
    assert_eq!(engine.sink().first(), Some(&Signal::WiltStarted));
}

#[test]
fn test_hit_does_not_wilt() {
    let mut engine = engine();
    let start = Instant::now();

    engine.guess_char_at('D', start).unwrap();

    assert!(!engine.is_wilting_at(start));
    assert!(!engine.sink().contains(&Signal::WiltStarted));
}

#[test]
fn test_poll_clears_once() {
    let mut engine = engine();
    let start = Instant::now();
    engine.guess_char_at('X', start).unwrap();

    assert!(!engine.poll_wilt(start + Duration::from_millis(100)));
    assert!(engine.poll_wilt(start + WILT));
    assert!(!engine.poll_wilt(start + WILT * 2));

    let cleared = engine
        .sink()
        .iter()
        .filter(|&&s| s == Signal::WiltCleared)
        .count();
    assert_eq!(cleared, 1);
}

#[test]
fn test_second_miss_extends_wilt() {
    let mut engine = engine();
    let start = Instant::now();
    let second = start + Duration::from_millis(500);

    engine.guess_char_at('X', start).unwrap();
    engine.guess_char_at('Y', second).unwrap();

    // The first miss's deadline arrives: the later wilt is still showing.
    let first_deadline = start + WILT;
    assert!(!engine.poll_wilt(first_deadline));
    assert!(engine.is_wilting_at(first_deadline));
    assert_eq!(GameView::capture_at(&engine, first_deadline).flower_image, "wilt6");

    // Only the second deadline clears it.
    assert!(engine.poll_wilt(second + WILT));
    assert_eq!(GameView::capture_at(&engine, second + WILT).flower_image, "flower6");
}

#[test]
fn test_repeat_miss_does_not_rearm() {
    let mut engine = engine();
    let start = Instant::now();

    engine.guess_char_at('X', start).unwrap();
    engine.guess_char_at('X', start + Duration::from_millis(500)).unwrap();

    assert!(!engine.is_wilting_at(start + WILT));
    let started = engine
        .sink()
        .iter()
        .filter(|&&s| s == Signal::WiltStarted)
        .count();
    assert_eq!(started, 1);
}

#[test]
fn test_wilt_state_does_not_affect_rules() {
    let mut engine = engine();
    let start = Instant::now();

    engine.guess_char_at('X', start).unwrap();
    let wilting = GameView::capture_at(&engine, start);
    let recovered = GameView::capture_at(&engine, start + WILT);

    assert_eq!(wilting.remaining_guesses, recovered.remaining_guesses);
    assert_eq!(wilting.revealed_word, recovered.revealed_word);
    assert_eq!(wilting.round_status, recovered.round_status);
}

#[test]
fn test_advancing_cancels_pending_wilt() {
    let mut engine = engine();
    let start = Instant::now();

    engine.guess_char_at('X', start).unwrap();
    for c in ['D', 'O', 'G'] {
        engine.guess_char_at(c, start).unwrap();
    }
    engine.advance_word().unwrap();

    assert!(!engine.is_wilting_at(start));
    assert!(!engine.poll_wilt(start + WILT));
    assert!(engine.sink().contains(&Signal::WiltCleared));
}
