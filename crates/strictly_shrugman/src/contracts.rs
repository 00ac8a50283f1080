//! Contract-based validation for Shrugman guesses.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} guess {Q}

use super::action::{Guess, GuessError};
use super::engine::GuessEngine;
use super::invariants::{InvariantSet, InvariantViolation, ShrugmanInvariants};
use tracing::instrument;

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), GuessError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

// ─────────────────────────────────────────────────────────────
//  Guess Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the round has not ended.
pub struct RoundIsOngoing;

impl RoundIsOngoing {
    /// Fails with [`GuessError::RoundOver`] on a finished round.
    #[instrument(skip(engine))]
    pub fn check(engine: &GuessEngine) -> Result<(), GuessError> {
        match engine.status().outcome() {
            Some(outcome) => Err(GuessError::RoundOver(outcome)),
            None => Ok(()),
        }
    }
}

/// Precondition: the letter has not been guessed this round.
pub struct LetterIsNovel;

impl LetterIsNovel {
    /// Fails with [`GuessError::AlreadyGuessed`] on a repeated letter.
    #[instrument(skip(engine))]
    pub fn check(guess: &Guess, engine: &GuessEngine) -> Result<(), GuessError> {
        if engine.guessed().contains(guess.letter) {
            Err(GuessError::AlreadyGuessed(guess.letter))
        } else {
            Ok(())
        }
    }
}

/// Composite precondition: a guess is legal on an ongoing round with a new letter.
pub struct LegalGuess;

impl LegalGuess {
    /// Validates all preconditions for a guess.
    #[instrument(skip(engine))]
    pub fn check(guess: &Guess, engine: &GuessEngine) -> Result<(), GuessError> {
        RoundIsOngoing::check(engine)?;
        LetterIsNovel::check(guess, engine)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Guess Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for guess actions.
///
/// Preconditions:
/// - Round must be ongoing
/// - Letter must be novel
///
/// Postconditions:
/// - All round invariants hold
/// - Guessed letters extend the previous list by at most one letter
/// - Wrong-guess count never decreases
pub struct GuessContract;

impl Contract<GuessEngine, Guess> for GuessContract {
    fn pre(engine: &GuessEngine, guess: &Guess) -> Result<(), GuessError> {
        LegalGuess::check(guess, engine)
    }

    fn post(before: &GuessEngine, after: &GuessEngine) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = match ShrugmanInvariants::check_all(after) {
            Ok(()) => Vec::new(),
            Err(violations) => violations,
        };

        let old = before.guessed().as_slice();
        let new = after.guessed().as_slice();
        if !new.starts_with(old) || new.len() > old.len() + 1 {
            violations.push(InvariantViolation::new(
                "Guessed letters grow by appending one letter at a time",
            ));
        }

        if after.wrong_guesses() < before.wrong_guesses() {
            violations.push(InvariantViolation::new("Wrong-guess count never decreases"));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Cell, Letter};

    fn guess(c: char) -> Guess {
        Guess::new(Letter::new(c).unwrap())
    }

    #[test]
    fn test_precondition_novel_letter() {
        let engine = GuessEngine::new("cat").unwrap();
        assert!(GuessContract::pre(&engine, &guess('c')).is_ok());
    }

    #[test]
    fn test_precondition_repeated_letter() {
        let mut engine = GuessEngine::new("cat").unwrap();
        engine.guess("c");
        assert!(matches!(
            GuessContract::pre(&engine, &guess('c')),
            Err(GuessError::AlreadyGuessed(_))
        ));
    }

    #[test]
    fn test_precondition_finished_round() {
        let mut engine = GuessEngine::new("a").unwrap();
        engine.guess("a");
        assert!(matches!(
            GuessContract::pre(&engine, &guess('z')),
            Err(GuessError::RoundOver(_))
        ));
    }

    #[test]
    fn test_postcondition_holds_after_guess() {
        let before = GuessEngine::new("cat").unwrap();
        let mut after = before.clone();
        after.guess("t");
        assert!(GuessContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_dropped_guess() {
        let mut before = GuessEngine::new("cat").unwrap();
        before.guess("z");
        let mut after = before.clone();
        after.guessed = Default::default();
        after.wrong_guesses = 0;

        assert!(GuessContract::post(&before, &after).is_err());
    }

    #[test]
    fn test_postcondition_detects_corrupted_mask() {
        let before = GuessEngine::new("cat").unwrap();
        let mut after = before.clone();
        after.mask.cells_mut()[0] = Cell::Shown('c');

        assert!(GuessContract::post(&before, &after).is_err());
    }
}
