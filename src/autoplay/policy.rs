//! Guessing policies for automatic play.
//!
//! Policies are trait-based so callers can plug in their own:
//! - `RandomGuesser`: uniform over letters not yet tried
//! - `FrequencyGuesser`: most common letter among words that still fit

use im::OrdSet;
use rustc_hash::FxHashMap;

use crate::core::{GameRng, Letter, WordList};

/// What a guesser may see of the round: never the hidden word itself.
#[derive(Clone, Copy, Debug)]
pub struct GuessContext<'a> {
    /// Reveal mask of the current word.
    pub reveal_mask: &'a [Option<Letter>],
    /// Letters already guessed this round.
    pub letters_guessed: &'a OrdSet<Letter>,
    /// Incorrect guesses left.
    pub remaining_guesses: u32,
}

impl GuessContext<'_> {
    /// Letters not yet guessed this round, alphabetical.
    #[must_use]
    pub fn untried(&self) -> Vec<Letter> {
        Letter::alphabet()
            .filter(|l| !self.letters_guessed.contains(l))
            .collect()
    }
}

/// Policy for picking the next letter.
pub trait Guesser {
    /// Pick a letter not yet guessed this round.
    ///
    /// Returns `None` only when every letter has been tried.
    fn next_guess(&mut self, context: &GuessContext<'_>) -> Option<Letter>;
}

/// Random guessing policy.
///
/// Deterministic for a given seed.
#[derive(Clone, Debug)]
pub struct RandomGuesser {
    rng: GameRng,
}

impl RandomGuesser {
    /// Create a random guesser with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }
}

impl Guesser for RandomGuesser {
    fn next_guess(&mut self, context: &GuessContext<'_>) -> Option<Letter> {
        self.rng.choose(&context.untried()).copied()
    }
}

/// Frequency guessing policy.
///
/// Knows the word list. Each turn it narrows the list to words consistent
/// with the reveal mask and the misses so far, then picks the untried letter
/// that appears in the most candidates (ties go alphabetically). Falls back
/// to alphabetical order when no candidate fits.
#[derive(Clone, Debug)]
pub struct FrequencyGuesser {
    words: WordList,
}

impl FrequencyGuesser {
    /// Create a guesser that draws on `words`.
    #[must_use]
    pub fn new(words: WordList) -> Self {
        Self { words }
    }

    fn fits(candidate: &[Letter], context: &GuessContext<'_>) -> bool {
        candidate.len() == context.reveal_mask.len()
            && candidate
                .iter()
                .zip(context.reveal_mask)
                .all(|(&letter, slot)| match slot {
                    Some(shown) => letter == *shown,
                    None => !context.letters_guessed.contains(&letter),
                })
    }
}

impl Guesser for FrequencyGuesser {
    fn next_guess(&mut self, context: &GuessContext<'_>) -> Option<Letter> {
        let mut counts: FxHashMap<Letter, u32> = FxHashMap::default();

        for word in self.words.iter().filter(|w| Self::fits(w.letters(), context)) {
            for letter in word.distinct_letters() {
                if !context.letters_guessed.contains(&letter) {
                    *counts.entry(letter).or_insert(0) += 1;
                }
            }
        }

        let best = counts
            .into_iter()
            .max_by(|(a, a_count), (b, b_count)| a_count.cmp(b_count).then(b.cmp(a)))
            .map(|(letter, _)| letter);

        best.or_else(|| context.untried().first().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(c: char) -> Letter {
        Letter::new(c).unwrap()
    }

    fn guessed(letters: &str) -> OrdSet<Letter> {
        letters.chars().map(letter).collect()
    }

    #[test]
    fn test_untried() {
        let set = guessed("AEZ");
        let mask = [None];
        let context = GuessContext {
            reveal_mask: &mask,
            letters_guessed: &set,
            remaining_guesses: 8,
        };

        let untried = context.untried();
        assert_eq!(untried.len(), 23);
        assert!(!untried.contains(&letter('A')));
        assert_eq!(untried[0], letter('B'));
    }

    #[test]
    fn test_random_guesser_never_repeats() {
        let mut guesser = RandomGuesser::new(42);
        let mut set = OrdSet::new();
        let mask = [None, None, None];

        for _ in 0..26 {
            let context = GuessContext {
                reveal_mask: &mask,
                letters_guessed: &set,
                remaining_guesses: 8,
            };
            let next = guesser.next_guess(&context).unwrap();
            assert!(!set.contains(&next));
            set.insert(next);
        }

        let context = GuessContext {
            reveal_mask: &mask,
            letters_guessed: &set,
            remaining_guesses: 8,
        };
        assert_eq!(guesser.next_guess(&context), None);
    }

    #[test]
    fn test_frequency_guesser_prefers_common_letters() {
        let words = WordList::new(["CAT", "BAT", "RAT"]).unwrap();
        let mut guesser = FrequencyGuesser::new(words);
        let set = OrdSet::new();
        let mask = [None, None, None];
        let context = GuessContext {
            reveal_mask: &mask,
            letters_guessed: &set,
            remaining_guesses: 8,
        };

        // A and T appear in all three words; A wins the alphabetical tie.
        assert_eq!(guesser.next_guess(&context), Some(letter('A')));
    }

    #[test]
    fn test_frequency_guesser_uses_mask() {
        let words = WordList::new(["DOG", "CAT", "COT"]).unwrap();
        let mut guesser = FrequencyGuesser::new(words);
        let set = guessed("OT");
        let mask = [None, Some(letter('O')), Some(letter('T'))];
        let context = GuessContext {
            reveal_mask: &mask,
            letters_guessed: &set,
            remaining_guesses: 8,
        };

        assert_eq!(guesser.next_guess(&context), Some(letter('C')));
    }

    #[test]
    fn test_frequency_guesser_falls_back_to_alphabet() {
        let words = WordList::new(["DOG"]).unwrap();
        let mut guesser = FrequencyGuesser::new(words);
        let set = guessed("A");
        let mask = [None, None, None, None, None];
        let context = GuessContext {
            reveal_mask: &mask,
            letters_guessed: &set,
            remaining_guesses: 8,
        };

        assert_eq!(guesser.next_guess(&context), Some(letter('B')));
    }
}
