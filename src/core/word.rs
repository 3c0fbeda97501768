//! Words and the fixed word list a game is played over.
//!
//! ## Word
//!
//! An uppercase ASCII word, stored as `Letter`s. Backed by a `SmallVec`
//! since nearly every word fits inline.
//!
//! ## WordList
//!
//! Ordered, non-empty, immutable for the session. Backed by `im::Vector`
//! so cloning an engine shares the list instead of copying it.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::error::ConfigError;
use super::letter::Letter;

/// Positions of a letter inside a word.
pub type Positions = SmallVec<[usize; 4]>;

/// A single non-empty uppercase word.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Word {
    letters: SmallVec<[Letter; 8]>,
}

impl Word {
    /// Parse a word, canonicalising to uppercase.
    ///
    /// `index` is only used for error reporting when the word is part of a list.
    pub fn parse(text: &str, index: usize) -> Result<Self, ConfigError> {
        if text.is_empty() {
            return Err(ConfigError::EmptyWord { index });
        }

        let letters = text
            .chars()
            .map(|c| {
                Letter::new(c).ok_or_else(|| ConfigError::InvalidCharacter {
                    word: text.to_string(),
                    character: c,
                })
            })
            .collect::<Result<SmallVec<_>, _>>()?;

        Ok(Self { letters })
    }

    /// The letters of the word, in order.
    #[must_use]
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    /// Number of letters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always false: words are non-empty by construction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Check whether the word contains a letter.
    #[must_use]
    pub fn contains(&self, letter: Letter) -> bool {
        self.letters.contains(&letter)
    }

    /// Every index at which `letter` appears.
    #[must_use]
    pub fn positions_of(&self, letter: Letter) -> Positions {
        self.letters
            .iter()
            .enumerate()
            .filter(|&(_, &l)| l == letter)
            .map(|(i, _)| i)
            .collect()
    }

    /// Distinct letters, sorted alphabetically.
    #[must_use]
    pub fn distinct_letters(&self) -> Vec<Letter> {
        let mut letters = self.letters.to_vec();
        letters.sort_unstable();
        letters.dedup();
        letters
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for letter in &self.letters {
            write!(f, "{}", letter)?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Word {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, 0)
    }
}

impl TryFrom<String> for Word {
    type Error = ConfigError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s, 0)
    }
}

impl From<Word> for String {
    fn from(word: Word) -> Self {
        word.to_string()
    }
}

/// The ordered, non-empty list of words for a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct WordList {
    words: Vector<Word>,
}

impl WordList {
    /// Build a word list from strings.
    ///
    /// ```
    /// use word_garden::core::WordList;
    ///
    /// let list = WordList::new(["swift", "dog", "cat"]).unwrap();
    /// assert_eq!(list.len(), 3);
    /// assert_eq!(list.get(0).unwrap().to_string(), "SWIFT");
    /// ```
    pub fn new<I, S>(words: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .enumerate()
            .map(|(i, w)| Word::parse(w.as_ref(), i))
            .collect::<Result<Vector<_>, _>>()?;

        if words.is_empty() {
            return Err(ConfigError::EmptyWordList);
        }

        Ok(Self { words })
    }

    /// Get a word by index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Word> {
        self.words.get(index)
    }

    /// Number of words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false: word lists are non-empty by construction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Index of the final word.
    #[must_use]
    pub fn last_index(&self) -> usize {
        self.words.len() - 1
    }

    /// Iterate over the words in order.
    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.words.iter()
    }
}

impl Default for WordList {
    fn default() -> Self {
        let words = ["SWIFT", "DOG", "CAT"]
            .iter()
            .enumerate()
            .filter_map(|(i, w)| Word::parse(w, i).ok())
            .collect();
        Self { words }
    }
}

impl std::ops::Index<usize> for WordList {
    type Output = Word;

    fn index(&self, index: usize) -> &Word {
        &self.words[index]
    }
}

impl TryFrom<Vec<String>> for WordList {
    type Error = ConfigError;

    fn try_from(words: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(words)
    }
}

impl From<WordList> for Vec<String> {
    fn from(list: WordList) -> Self {
        list.words.iter().map(Word::to_string).collect()
    }
}
