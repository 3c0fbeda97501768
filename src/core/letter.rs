//! Letter type: a single canonical uppercase ASCII letter.
//!
//! Every guess and every character of every word is a `Letter`. Construction
//! canonicalises to uppercase, so the engine never compares mixed case.

use serde::{Deserialize, Serialize};

/// A single uppercase ASCII letter (`A`..=`Z`).
///
/// ```
/// use word_garden::core::Letter;
///
/// let letter = Letter::new('d').unwrap();
/// assert_eq!(letter.as_char(), 'D');
/// assert!(Letter::new('7').is_none());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct Letter(u8);

impl Letter {
    /// Create a letter from a character, uppercasing it.
    ///
    /// Returns `None` for anything that isn't an ASCII letter.
    #[must_use]
    pub fn new(c: char) -> Option<Self> {
        if c.is_ascii_alphabetic() {
            Some(Self(c.to_ascii_uppercase() as u8))
        } else {
            None
        }
    }

    /// Filter raw text-field input down to a single letter.
    ///
    /// Non-letters are stripped, only the last remaining character is kept,
    /// and it is uppercased. Returns `None` when nothing is left.
    ///
    /// ```
    /// use word_garden::core::Letter;
    ///
    /// assert_eq!(Letter::from_input("ab").unwrap().as_char(), 'B');
    /// assert_eq!(Letter::from_input(" x1!").unwrap().as_char(), 'X');
    /// assert!(Letter::from_input("42").is_none());
    /// ```
    #[must_use]
    pub fn from_input(input: &str) -> Option<Self> {
        input.chars().filter_map(Self::new).last()
    }

    /// Get the letter as an uppercase `char`.
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }

    /// Zero-based alphabet index (`A` = 0).
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - b'A') as usize
    }

    /// Iterate over the whole alphabet in order.
    pub fn alphabet() -> impl Iterator<Item = Letter> {
        (b'A'..=b'Z').map(Letter)
    }
}

impl std::fmt::Display for Letter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl TryFrom<char> for Letter {
    type Error = char;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::new(c).ok_or(c)
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> Self {
        letter.as_char()
    }
}
