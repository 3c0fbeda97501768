//! Drive a whole game with a `Guesser`.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::effects::SignalSink;
use crate::rules::{EngineError, GameEngine, RoundStatus};

use super::policy::{GuessContext, Guesser};

/// How one round went.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    /// The word played.
    pub word: String,
    /// Whether it was guessed.
    pub won: bool,
    /// Guesses made, repeats included.
    pub guesses: u32,
    /// Penalised guesses.
    pub incorrect_guesses: u32,
}

/// How a whole game went.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    /// One entry per round played, in order.
    pub rounds: Vec<RoundSummary>,
}

impl GameSummary {
    /// Rounds won.
    #[must_use]
    pub fn words_guessed(&self) -> usize {
        self.rounds.iter().filter(|r| r.won).count()
    }

    /// Rounds lost.
    #[must_use]
    pub fn words_missed(&self) -> usize {
        self.rounds.len() - self.words_guessed()
    }

    /// Guesses across all rounds.
    #[must_use]
    pub fn total_guesses(&self) -> u32 {
        self.rounds.iter().map(|r| r.guesses).sum()
    }
}

/// Play the current round to completion.
///
/// Returns the round's final status. Stops early (still `InProgress`) only if
/// the guesser runs out of letters.
pub fn play_round<S, G>(engine: &mut GameEngine<S>, guesser: &mut G) -> Result<RoundStatus, EngineError>
where
    S: SignalSink,
    G: Guesser + ?Sized,
{
    while !engine.round_over() {
        let mask = engine.reveal_mask();
        let context = GuessContext {
            reveal_mask: &mask,
            letters_guessed: &engine.round().letters_guessed,
            remaining_guesses: engine.remaining_guesses(),
        };

        let Some(letter) = guesser.next_guess(&context) else {
            break;
        };
        engine.guess_letter(letter)?;
    }

    Ok(engine.round_status())
}

/// Play every remaining round, advancing words until the game is over.
///
/// Starts from wherever the engine currently is; call `restart_game` first
/// for a full game.
pub fn play_game<S, G>(engine: &mut GameEngine<S>, guesser: &mut G) -> Result<GameSummary, EngineError>
where
    S: SignalSink,
    G: Guesser + ?Sized,
{
    let mut summary = GameSummary::default();

    loop {
        let status = play_round(engine, guesser)?;
        let round = RoundSummary {
            word: engine.current_word().to_string(),
            won: status == RoundStatus::Won,
            guesses: engine.guesses_count(),
            incorrect_guesses: engine.incorrect_guesses_count(),
        };
        debug!(word = %round.word, won = round.won, guesses = round.guesses, "round finished");
        summary.rounds.push(round);

        if status == RoundStatus::InProgress || engine.is_last_word() {
            break;
        }
        engine.advance_word()?;
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::autoplay::policy::FrequencyGuesser;
    use crate::core::GameConfig;

    #[test]
    fn test_play_round_wins_with_dictionary() {
        let config = GameConfig::from_words(["DOG", "CAT"]).unwrap();
        let mut guesser = FrequencyGuesser::new(config.words.clone());
        let mut engine = GameEngine::new(config).unwrap();

        let status = play_round(&mut engine, &mut guesser).unwrap();

        assert_eq!(status, RoundStatus::Won);
        assert_eq!(engine.words_guessed(), 1);
        assert_eq!(engine.current_word_index(), 0);
    }

    #[test]
    fn test_play_game_reaches_game_over() {
        let config = GameConfig::default();
        let mut guesser = FrequencyGuesser::new(config.words.clone());
        let mut engine = GameEngine::new(config).unwrap();

        let summary = play_game(&mut engine, &mut guesser).unwrap();

        assert!(engine.game_over());
        assert_eq!(summary.rounds.len(), 3);
        assert_eq!(summary.words_guessed(), engine.words_guessed() as usize);
        assert_eq!(summary.words_missed(), 0);
    }

    #[test]
    fn test_summary_totals() {
        let summary = GameSummary {
            rounds: vec![
                RoundSummary {
                    word: "DOG".to_string(),
                    won: true,
                    guesses: 4,
                    incorrect_guesses: 1,
                },
                RoundSummary {
                    word: "CAT".to_string(),
                    won: false,
                    guesses: 9,
                    incorrect_guesses: 8,
                },
            ],
        };

        assert_eq!(summary.words_guessed(), 1);
        assert_eq!(summary.words_missed(), 1);
        assert_eq!(summary.total_guesses(), 13);
    }
}
