//! Per-round game state for Shrugman.
//!
//! [`GuessEngine`] owns the secret, the reveal mask, the guessed letters and
//! the wrong-guess counter. It is mutated only through guesses.

use super::action::{Guess, GuessError, RestoreError, SecretError};
use super::contracts::{Contract, GuessContract};
use super::invariants::{InvariantSet, ShrugmanInvariants};
use super::phases::{GuessStatus, RoundStatus};
use super::rules;
use super::snapshot::RoundSnapshot;
use super::types::{GuessedLetters, Letter, MAX_WRONG_GUESSES, RevealMask, Secret};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// State of a single round.
///
/// Terminal results are enforced: once the round is won or lost every
/// further guess is answered with [`GuessStatus::RoundAlreadyOver`] and
/// nothing changes.
///
/// Serializes as a [`SavedRound`]. Deserializing replays the saved guesses
/// from the title, so a tampered save is rejected instead of loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SavedRound", into = "SavedRound")]
pub struct GuessEngine {
    pub(crate) secret: Secret,
    pub(crate) mask: RevealMask,
    pub(crate) guessed: GuessedLetters,
    pub(crate) wrong_guesses: u8,
    pub(crate) status: RoundStatus,
}

impl GuessEngine {
    /// Starts a round for the given title.
    ///
    /// # Errors
    ///
    /// - [`SecretError::Blank`] if the title is empty or whitespace only.
    /// - [`SecretError::NoLetters`] if the title has nothing to guess.
    #[instrument]
    pub fn new(title: &str) -> Result<Self, SecretError> {
        if title.trim().is_empty() {
            return Err(SecretError::Blank);
        }

        let secret = Secret::new(title);
        if secret.letter_count() == 0 {
            return Err(SecretError::NoLetters(title.to_string()));
        }

        let mask = RevealMask::new(&secret);
        debug!(len = secret.len(), hidden = mask.hidden_count(), "Round created");

        Ok(Self {
            secret,
            mask,
            guessed: GuessedLetters::new(),
            wrong_guesses: 0,
            status: RoundStatus::Ongoing,
        })
    }

    /// Handles raw user input.
    ///
    /// Checks, first match wins: round already over, not a single letter,
    /// letter already guessed. Otherwise the guess is applied and the round
    /// re-evaluated.
    #[instrument(skip(self), fields(wrong = self.wrong_guesses))]
    pub fn guess(&mut self, input: &str) -> GuessStatus {
        if self.is_over() {
            return GuessStatus::RoundAlreadyOver;
        }

        let guess = match Guess::parse(input) {
            Ok(guess) => guess,
            Err(_) => {
                debug!("Rejected input");
                return GuessStatus::InvalidInput;
            }
        };

        match self.apply(guess) {
            Ok(status) => status.into(),
            Err(GuessError::AlreadyGuessed(_)) => GuessStatus::AlreadyGuessed,
            Err(GuessError::RoundOver(_)) => GuessStatus::RoundAlreadyOver,
            Err(GuessError::InvalidInput(_)) => GuessStatus::InvalidInput,
        }
    }

    /// Applies a validated guess.
    ///
    /// Contract enforcement:
    /// - Preconditions checked always (round ongoing, letter novel)
    /// - Postconditions checked in debug builds only
    ///
    /// # Errors
    ///
    /// - [`GuessError::RoundOver`] if the round already ended.
    /// - [`GuessError::AlreadyGuessed`] if the letter was tried before.
    #[instrument(skip(self), fields(letter = %guess.letter))]
    pub fn apply(&mut self, guess: Guess) -> Result<RoundStatus, GuessError> {
        GuessContract::pre(self, &guess)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        let letter = guess.letter;
        self.guessed.insert(letter);

        if self.secret.contains(letter) {
            let revealed = self.mask.reveal(&self.secret, letter);
            debug!(revealed, "Correct guess");
        } else {
            self.wrong_guesses = self.wrong_guesses.saturating_add(1);
            debug!(wrong = self.wrong_guesses, "Wrong guess");
        }

        self.status = rules::evaluate(self.wrong_guesses, &self.mask);
        if self.status.is_terminal() {
            info!(status = %self.status, guesses = self.guessed.len(), "Round finished");
        }

        #[cfg(debug_assertions)]
        {
            let post = GuessContract::post(&before, self);
            debug_assert!(post.is_ok(), "Guess postcondition failed: {:?}", post);
        }

        Ok(self.status)
    }

    /// Returns the secret.
    pub fn secret(&self) -> &Secret {
        &self.secret
    }

    /// Returns the reveal mask.
    pub fn mask(&self) -> &RevealMask {
        &self.mask
    }

    /// Returns the guessed letters in guess order.
    pub fn guessed(&self) -> &GuessedLetters {
        &self.guessed
    }

    /// Returns the number of wrong guesses so far.
    pub fn wrong_guesses(&self) -> u8 {
        self.wrong_guesses
    }

    /// Wrong guesses left before the round is lost.
    pub fn remaining_guesses(&self) -> u8 {
        MAX_WRONG_GUESSES.saturating_sub(self.wrong_guesses)
    }

    /// Returns the round status.
    pub fn status(&self) -> RoundStatus {
        self.status
    }

    /// True once the round is won or lost.
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Read-only projection for presentation.
    #[instrument(skip(self))]
    pub fn snapshot(&self) -> RoundSnapshot {
        RoundSnapshot::from_engine(self)
    }
}

// ─────────────────────────────────────────────────────────────
//  Saved rounds
// ─────────────────────────────────────────────────────────────

/// Serialized form of a [`GuessEngine`].
///
/// The title and guesses are the source of truth. Mask, wrong-guess count
/// and status are stored for readers of the save and checked on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedRound {
    /// Title as supplied to [`GuessEngine::new`].
    pub title: String,
    /// Guessed letters in guess order.
    pub guessed: Vec<Letter>,
    /// Raw mask, one character per title character.
    pub mask: String,
    /// Wrong guesses so far.
    pub wrong_guesses: u8,
    /// Round status.
    pub status: RoundStatus,
}

impl From<GuessEngine> for SavedRound {
    fn from(engine: GuessEngine) -> Self {
        Self {
            title: engine.secret.title().to_string(),
            guessed: engine.guessed.as_slice().to_vec(),
            mask: engine.mask.to_string(),
            wrong_guesses: engine.wrong_guesses,
            status: engine.status,
        }
    }
}

impl TryFrom<SavedRound> for GuessEngine {
    type Error = RestoreError;

    #[instrument(skip(saved), fields(guesses = saved.guessed.len()))]
    fn try_from(saved: SavedRound) -> Result<Self, Self::Error> {
        let mut engine = GuessEngine::new(&saved.title)?;
        for letter in saved.guessed {
            engine.apply(Guess::new(letter))?;
        }

        if engine.mask.to_string() != saved.mask {
            return Err(RestoreError::Mismatch("mask"));
        }
        if engine.wrong_guesses != saved.wrong_guesses {
            return Err(RestoreError::Mismatch("wrong-guess count"));
        }
        if engine.status != saved.status {
            return Err(RestoreError::Mismatch("status"));
        }
        ShrugmanInvariants::check_all(&engine).map_err(RestoreError::Invariants)?;

        debug!(status = %engine.status, "Round restored");
        Ok(engine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn letter(c: char) -> Letter {
        Letter::new(c).unwrap()
    }

    #[test]
    fn test_new_rejects_blank_titles() {
        assert_eq!(GuessEngine::new(""), Err(SecretError::Blank));
        assert_eq!(GuessEngine::new("   \t"), Err(SecretError::Blank));
    }

    #[test]
    fn test_new_rejects_titles_without_letters() {
        assert!(matches!(
            GuessEngine::new("1984"),
            Err(SecretError::NoLetters(_))
        ));
    }

    #[test]
    fn test_apply_typed_guess() {
        let mut engine = GuessEngine::new("cat").unwrap();
        assert_eq!(engine.apply(Guess::new(letter('a'))), Ok(RoundStatus::Ongoing));
        assert_eq!(
            engine.apply(Guess::new(letter('a'))),
            Err(GuessError::AlreadyGuessed(letter('a')))
        );
    }

    #[test]
    fn test_apply_after_win_is_rejected() {
        let mut engine = GuessEngine::new("a").unwrap();
        assert_eq!(engine.apply(Guess::new(letter('a'))), Ok(RoundStatus::Win));
        assert!(matches!(
            engine.apply(Guess::new(letter('b'))),
            Err(GuessError::RoundOver(_))
        ));
    }

    #[test]
    fn test_round_over_checked_before_input() {
        let mut engine = GuessEngine::new("a").unwrap();
        engine.guess("a");
        assert_eq!(engine.guess("ab"), GuessStatus::RoundAlreadyOver);
    }

    #[test]
    fn test_remaining_guesses_counts_down() {
        let mut engine = GuessEngine::new("ok").unwrap();
        assert_eq!(engine.remaining_guesses(), MAX_WRONG_GUESSES);
        engine.guess("z");
        assert_eq!(engine.remaining_guesses(), MAX_WRONG_GUESSES - 1);
    }

    #[test]
    fn test_saved_round_restores() {
        let mut engine = GuessEngine::new("Cat").unwrap();
        engine.guess("c");
        engine.guess("z");

        let json = serde_json::to_value(&engine).unwrap();
        assert_eq!(
            json,
            json!({
                "title": "Cat",
                "guessed": ["c", "z"],
                "mask": "c__",
                "wrong_guesses": 1,
                "status": "Ongoing"
            })
        );

        let restored: GuessEngine = serde_json::from_value(json).unwrap();
        assert_eq!(restored, engine);
    }

    fn restore(value: serde_json::Value) -> Result<GuessEngine, serde_json::Error> {
        serde_json::from_value(value)
    }

    #[test]
    fn test_tampered_mask_rejected() {
        let result = restore(json!({
            "title": "cat",
            "guessed": ["c"],
            "mask": "c",
            "wrong_guesses": 0,
            "status": "Ongoing"
        }));
        assert!(result.unwrap_err().to_string().contains("mask"));
    }

    #[test]
    fn test_tampered_status_rejected() {
        let result = restore(json!({
            "title": "cat",
            "guessed": ["c"],
            "mask": "c__",
            "wrong_guesses": 0,
            "status": "Win"
        }));
        assert!(result.unwrap_err().to_string().contains("status"));
    }

    #[test]
    fn test_tampered_wrong_count_rejected() {
        let result = restore(json!({
            "title": "cat",
            "guessed": ["z"],
            "mask": "___",
            "wrong_guesses": 0,
            "status": "Ongoing"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_duplicate_saved_guess_rejected() {
        let result = restore(json!({
            "title": "cat",
            "guessed": ["c", "c"],
            "mask": "c__",
            "wrong_guesses": 0,
            "status": "Ongoing"
        }));
        assert!(result.unwrap_err().to_string().contains("already guessed"));
    }

    #[test]
    fn test_blank_saved_title_rejected() {
        let result = restore(json!({
            "title": "  ",
            "guessed": [],
            "mask": "  ",
            "wrong_guesses": 0,
            "status": "Ongoing"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_guess_after_saved_win_rejected() {
        let result = restore(json!({
            "title": "a",
            "guessed": ["a", "b"],
            "mask": "a",
            "wrong_guesses": 1,
            "status": "Win"
        }));
        assert!(result.unwrap_err().to_string().contains("over"));
    }
}
