//! Round phases and the signals returned to callers.
//!
//! Every signal is an ordinary value the caller branches on; none of them
//! is an error.

use serde::{Deserialize, Serialize};

/// Outcome of a finished round.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIs,
)]
#[strum(serialize_all = "lowercase")]
pub enum Outcome {
    /// Every letter was revealed.
    Win,
    /// The wrong-guess limit was reached.
    Loss,
}

/// Phase of a round after evaluating the terminal condition.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIs,
)]
#[strum(serialize_all = "lowercase")]
pub enum RoundStatus {
    /// The round continues.
    #[default]
    Ongoing,
    /// The round was won.
    Win,
    /// The round was lost.
    Loss,
}

impl RoundStatus {
    /// Returns the outcome if the round is over.
    pub fn outcome(self) -> Option<Outcome> {
        match self {
            RoundStatus::Ongoing => None,
            RoundStatus::Win => Some(Outcome::Win),
            RoundStatus::Loss => Some(Outcome::Loss),
        }
    }

    /// True for `Win` and `Loss`.
    pub fn is_terminal(self) -> bool {
        self.outcome().is_some()
    }
}

impl From<Outcome> for RoundStatus {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Win => RoundStatus::Win,
            Outcome::Loss => RoundStatus::Loss,
        }
    }
}

/// Answer to a raw guess.
///
/// `InvalidInput`, `AlreadyGuessed` and `RoundAlreadyOver` leave the engine
/// untouched; the remaining variants report the round after the guess.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIs,
)]
#[strum(serialize_all = "snake_case")]
pub enum GuessStatus {
    /// The input was not exactly one letter.
    InvalidInput,
    /// The letter was guessed before.
    AlreadyGuessed,
    /// The round had already ended before this guess.
    RoundAlreadyOver,
    /// The guess was accepted and the round continues.
    Ongoing,
    /// The guess revealed the last hidden letter.
    Win,
    /// The guess used up the last wrong guess.
    Loss,
}

impl From<RoundStatus> for GuessStatus {
    fn from(status: RoundStatus) -> Self {
        match status {
            RoundStatus::Ongoing => GuessStatus::Ongoing,
            RoundStatus::Win => GuessStatus::Win,
            RoundStatus::Loss => GuessStatus::Loss,
        }
    }
}
