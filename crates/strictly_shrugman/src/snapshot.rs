//! Read-only projection of a round for presentation layers.

use super::engine::GuessEngine;
use super::phases::RoundStatus;
use super::types::{Letter, MAX_WRONG_GUESSES};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Snapshot of everything a renderer needs to draw a round.
///
/// Taking a snapshot never mutates the engine.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct RoundSnapshot {
    /// Mask with separators between characters (`"_ a _"`).
    spaced_mask: String,
    /// Mask as one character per position (`"_a_"`).
    raw_mask: String,
    /// Guessed letters in guess order.
    guessed: Vec<Letter>,
    /// Wrong guesses so far.
    wrong_guesses: u8,
    /// Wrong guesses that end the round.
    max_wrong_guesses: u8,
    /// Round status.
    status: RoundStatus,
}

impl RoundSnapshot {
    pub(crate) fn from_engine(engine: &GuessEngine) -> Self {
        Self {
            spaced_mask: engine.mask().spaced(),
            raw_mask: engine.mask().to_string(),
            guessed: engine.guessed().as_slice().to_vec(),
            wrong_guesses: engine.wrong_guesses(),
            max_wrong_guesses: MAX_WRONG_GUESSES,
            status: engine.status(),
        }
    }

    /// Guessed letters joined for display (`"a, z, c"`).
    pub fn guessed_display(&self) -> String {
        self.guessed
            .iter()
            .map(|l| l.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
