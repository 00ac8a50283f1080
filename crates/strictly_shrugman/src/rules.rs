//! Terminal-state rules for Shrugman.

use super::phases::RoundStatus;
use super::types::{MAX_WRONG_GUESSES, RevealMask};
use tracing::instrument;

/// Evaluates the round after a guess.
///
/// The loss check runs first: once the wrong-guess limit is reached the
/// round is lost whatever the mask looks like.
#[instrument(skip(mask), fields(hidden = mask.hidden_count()))]
pub fn evaluate(wrong_guesses: u8, mask: &RevealMask) -> RoundStatus {
    if is_exhausted(wrong_guesses) {
        RoundStatus::Loss
    } else if mask.is_complete() {
        RoundStatus::Win
    } else {
        RoundStatus::Ongoing
    }
}

/// True once the wrong-guess limit is reached.
pub fn is_exhausted(wrong_guesses: u8) -> bool {
    wrong_guesses >= MAX_WRONG_GUESSES
}
