//! Unique guesses invariant: no letter appears twice in the guessed list.

use super::Invariant;
use crate::GuessEngine;
use std::collections::HashSet;

/// Invariant: every guessed letter appears exactly once.
pub struct UniqueGuessesInvariant;

impl Invariant<GuessEngine> for UniqueGuessesInvariant {
    fn holds(engine: &GuessEngine) -> bool {
        let mut seen = HashSet::new();
        engine.guessed().iter().all(|letter| seen.insert(letter))
    }

    fn description() -> &'static str {
        "Guessed letters contain no duplicates"
    }
}
