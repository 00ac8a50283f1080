//! Core domain types for Shrugman.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Number of wrong guesses that ends a round.
///
/// Matches the number of escalation stages of the shrug figure.
pub const MAX_WRONG_GUESSES: u8 = 9;

/// Symbol shown for a letter position that has not been revealed yet.
pub const PLACEHOLDER: char = '_';

// ─────────────────────────────────────────────────────────────
//  Letter
// ─────────────────────────────────────────────────────────────

/// A single guessable letter, always lowercase ASCII (`a`–`z`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct Letter(char);

impl Letter {
    /// Creates a letter from a character, folding ASCII case.
    ///
    /// Returns `None` for anything outside `a`–`z` / `A`–`Z`.
    pub fn new(c: char) -> Option<Self> {
        c.is_ascii_alphabetic().then(|| Self(c.to_ascii_lowercase()))
    }

    /// Parses raw user input.
    ///
    /// The input is lowercased first and must then be exactly one character
    /// in `a`–`z`. Surrounding whitespace is not trimmed.
    #[instrument]
    pub fn parse(input: &str) -> Option<Self> {
        let lowered = input.to_lowercase();
        let mut chars = lowered.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_lowercase() => Some(Self(c)),
            _ => None,
        }
    }

    /// Returns the letter as a `char`.
    pub fn as_char(self) -> char {
        self.0
    }
}

impl TryFrom<char> for Letter {
    type Error = String;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::new(c).ok_or_else(|| format!("{:?} is not an ASCII letter", c))
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> Self {
        letter.0
    }
}

impl std::fmt::Display for Letter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ─────────────────────────────────────────────────────────────
//  Secret
// ─────────────────────────────────────────────────────────────

/// The hidden title of a round.
///
/// Keeps the title as given (for the loss announcement) and a normalized
/// copy where ASCII letters are lowercased. Only ASCII letters are folded so
/// the normalized copy has exactly one character per title character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Secret {
    title: String,
    normalized: Vec<char>,
}

impl Secret {
    /// Normalizes a title. Validation happens in [`crate::GuessEngine::new`].
    pub(crate) fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            normalized: title.chars().map(|c| c.to_ascii_lowercase()).collect(),
        }
    }

    /// Returns the title exactly as it was supplied.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the normalized characters.
    pub fn chars(&self) -> &[char] {
        &self.normalized
    }

    /// Number of characters in the title.
    pub fn len(&self) -> usize {
        self.normalized.len()
    }

    /// True if the title has no characters.
    pub fn is_empty(&self) -> bool {
        self.normalized.is_empty()
    }

    /// True if the letter occurs anywhere in the secret.
    pub fn contains(&self, letter: Letter) -> bool {
        self.normalized.contains(&letter.as_char())
    }

    /// Number of positions holding a guessable letter.
    pub fn letter_count(&self) -> usize {
        self.normalized.iter().filter(|c| c.is_ascii_lowercase()).count()
    }
}

impl std::fmt::Display for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.normalized.iter().collect::<String>())
    }
}

// ─────────────────────────────────────────────────────────────
//  Reveal mask
// ─────────────────────────────────────────────────────────────

/// One position of the reveal mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Unrevealed letter.
    Hidden,
    /// Revealed letter or a character that is never masked.
    Shown(char),
}

impl Cell {
    /// Character to display for this cell.
    pub fn symbol(self) -> char {
        match self {
            Cell::Hidden => PLACEHOLDER,
            Cell::Shown(c) => c,
        }
    }
}

/// Per-position view of the secret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealMask {
    cells: Vec<Cell>,
}

impl RevealMask {
    /// Builds the initial mask: letters hidden, everything else shown as-is.
    pub(crate) fn new(secret: &Secret) -> Self {
        let cells = secret
            .chars()
            .iter()
            .map(|&c| {
                if c.is_ascii_lowercase() {
                    Cell::Hidden
                } else {
                    Cell::Shown(c)
                }
            })
            .collect();
        Self { cells }
    }

    /// Reveals every position holding `letter`. Returns how many were revealed.
    pub(crate) fn reveal(&mut self, secret: &Secret, letter: Letter) -> usize {
        let mut revealed = 0;
        for (cell, &c) in self.cells.iter_mut().zip(secret.chars()) {
            if c == letter.as_char() && *cell == Cell::Hidden {
                *cell = Cell::Shown(c);
                revealed += 1;
            }
        }
        revealed
    }

    /// Returns all cells.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[cfg(test)]
    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: usize) -> Option<Cell> {
        self.cells.get(pos).copied()
    }

    /// Number of positions.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True if the mask has no positions.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of positions still hidden.
    pub fn hidden_count(&self) -> usize {
        self.cells.iter().filter(|c| **c == Cell::Hidden).count()
    }

    /// True once no placeholder remains.
    pub fn is_complete(&self) -> bool {
        !self.cells.contains(&Cell::Hidden)
    }

    /// Formats the mask for display.
    ///
    /// Every character is followed by a space, runs of two or more spaces
    /// become three so words stand apart, and the result is trimmed:
    /// `"the matrix"` with nothing guessed renders as `"_ _ _   _ _ _ _ _ _"`.
    pub fn spaced(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() * 2);
        let mut run = 0usize;
        for symbol in self.cells.iter().flat_map(|cell| [cell.symbol(), ' ']) {
            if symbol == ' ' {
                run += 1;
                continue;
            }
            if run > 0 {
                out.extend(std::iter::repeat_n(' ', if run >= 2 { 3 } else { 1 }));
                run = 0;
            }
            out.push(symbol);
        }
        out.trim().to_string()
    }
}

impl std::fmt::Display for RevealMask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for cell in &self.cells {
            write!(f, "{}", cell.symbol())?;
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Guessed letters
// ─────────────────────────────────────────────────────────────

/// Letters attempted this round, in the order they were guessed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuessedLetters {
    letters: Vec<Letter>,
}

impl GuessedLetters {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// True if the letter was already guessed.
    pub fn contains(&self, letter: Letter) -> bool {
        self.letters.contains(&letter)
    }

    /// Appends a letter. Returns `false` without changes if already present.
    pub(crate) fn insert(&mut self, letter: Letter) -> bool {
        if self.contains(letter) {
            return false;
        }
        self.letters.push(letter);
        true
    }

    #[cfg(test)]
    pub(crate) fn insert_unchecked(&mut self, letter: Letter) {
        self.letters.push(letter);
    }

    /// Letters in guess order.
    pub fn as_slice(&self) -> &[Letter] {
        &self.letters
    }

    /// Number of guessed letters.
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// True if nothing has been guessed yet.
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Iterates in guess order.
    pub fn iter(&self) -> impl Iterator<Item = Letter> + '_ {
        self.letters.iter().copied()
    }
}
