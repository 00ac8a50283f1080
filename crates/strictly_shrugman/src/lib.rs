//! Pure Shrugman game logic.
//!
//! Shrugman is a hangman variant: a title is masked letter by letter and the
//! player guesses letters until the title is revealed or nine wrong guesses
//! complete the shrug `¯\_(ツ)_/¯`.
//!
//! # Architecture
//!
//! - **Engine**: [`GuessEngine`] owns one round and is mutated only by guesses
//! - **Rules**: terminal-state evaluation after every guess
//! - **Contracts**: preconditions and postconditions around each guess
//! - **Invariants**: properties checked after every transition in debug builds
//!
//! The engine does no I/O and has no randomness; choosing the title and
//! drawing the round belong to the caller.
//!
//! # Example
//!
//! ```
//! use strictly_shrugman::{GuessEngine, GuessStatus};
//!
//! let mut engine = GuessEngine::new("cat")?;
//! assert_eq!(engine.guess("a"), GuessStatus::Ongoing);
//! assert_eq!(engine.mask().to_string(), "_a_");
//! assert_eq!(engine.guess("A"), GuessStatus::AlreadyGuessed);
//! assert_eq!(engine.guess("c"), GuessStatus::Ongoing);
//! assert_eq!(engine.guess("t"), GuessStatus::Win);
//! # Ok::<(), strictly_shrugman::SecretError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod engine;
mod phases;
mod rules;
mod snapshot;
mod types;

pub mod invariants;

pub use action::{Guess, GuessError, RestoreError, SecretError};
pub use contracts::{Contract, GuessContract, LegalGuess, LetterIsNovel, RoundIsOngoing};
pub use engine::{GuessEngine, SavedRound};
pub use invariants::{Invariant, InvariantSet, InvariantViolation, ShrugmanInvariants};
pub use phases::{GuessStatus, Outcome, RoundStatus};
pub use rules::{evaluate, is_exhausted};
pub use snapshot::RoundSnapshot;
pub use types::{Cell, GuessedLetters, Letter, MAX_WRONG_GUESSES, PLACEHOLDER, RevealMask, Secret};
