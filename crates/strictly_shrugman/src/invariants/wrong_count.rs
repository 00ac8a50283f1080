//! Wrong-count invariant: the counter matches the misses in the guessed list.

use super::Invariant;
use crate::GuessEngine;
use crate::types::MAX_WRONG_GUESSES;

/// Invariant: the wrong-guess count equals the number of guessed letters
/// absent from the secret, and never exceeds [`MAX_WRONG_GUESSES`].
pub struct WrongCountInvariant;

impl Invariant<GuessEngine> for WrongCountInvariant {
    fn holds(engine: &GuessEngine) -> bool {
        let misses = engine
            .guessed()
            .iter()
            .filter(|letter| !engine.secret().contains(*letter))
            .count();
        misses == usize::from(engine.wrong_guesses()) && engine.wrong_guesses() <= MAX_WRONG_GUESSES
    }

    fn description() -> &'static str {
        "Wrong-guess count matches the missed letters and stays within the limit"
    }
}
