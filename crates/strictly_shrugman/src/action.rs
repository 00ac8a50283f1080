//! First-class guess actions for Shrugman.
//!
//! A guess is the player's intent, validated before it touches the engine.

use super::invariants::InvariantViolation;
use super::phases::Outcome;
use super::types::Letter;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A guess: the letter the player wants to try.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Guess {
    /// The guessed letter.
    pub letter: Letter,
}

impl Guess {
    /// Creates a new guess.
    #[instrument]
    pub fn new(letter: Letter) -> Self {
        Self { letter }
    }

    /// Parses raw user input into a guess.
    ///
    /// # Errors
    ///
    /// Returns [`GuessError::InvalidInput`] unless the input is exactly one
    /// letter after lowercasing.
    #[instrument]
    pub fn parse(input: &str) -> Result<Self, GuessError> {
        Letter::parse(input)
            .map(Self::new)
            .ok_or_else(|| GuessError::InvalidInput(input.to_string()))
    }
}

impl std::fmt::Display for Guess {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "guess '{}'", self.letter)
    }
}

/// Error that can occur when validating or applying a guess.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GuessError {
    /// The input is not exactly one letter.
    #[display("Invalid input {:?}: expected a single letter", _0)]
    InvalidInput(String),

    /// The letter was already guessed this round.
    #[display("Letter '{}' was already guessed", _0)]
    AlreadyGuessed(Letter),

    /// The round already ended.
    #[display("Round is already over ({})", _0)]
    RoundOver(Outcome),
}

impl std::error::Error for GuessError {}

/// Error that can occur when constructing a round from a title.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SecretError {
    /// The title is empty or whitespace only.
    #[display("Title is empty")]
    Blank,

    /// The title has no letter to guess.
    #[display("Title {:?} has no letters to guess", _0)]
    NoLetters(String),
}

impl std::error::Error for SecretError {}

/// Error that can occur when loading a saved round.
///
/// A saved round is replayed from its title and guesses; every other saved
/// field must agree with the replay.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum RestoreError {
    /// The saved title cannot start a round.
    #[display("Invalid saved title: {}", _0)]
    Secret(SecretError),

    /// A saved guess could not be replayed.
    #[display("Invalid saved guess: {}", _0)]
    Guess(GuessError),

    /// A saved field disagrees with the replayed round.
    #[display("Saved {} does not match the replayed round", _0)]
    Mismatch(&'static str),

    /// The replayed round breaks an invariant.
    #[display("Saved round violates invariants: {:?}", _0)]
    Invariants(Vec<InvariantViolation>),
}

impl std::error::Error for RestoreError {}

impl From<SecretError> for RestoreError {
    fn from(e: SecretError) -> Self {
        Self::Secret(e)
    }
}

impl From<GuessError> for RestoreError {
    fn from(e: GuessError) -> Self {
        Self::Guess(e)
    }
}
