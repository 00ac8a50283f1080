//! The shrug figure that completes one stroke per wrong guess.

use strictly_shrugman::MAX_WRONG_GUESSES;

/// Figure for each wrong-guess count, from none to the limit.
pub const STAGES: [&str; MAX_WRONG_GUESSES as usize + 1] = [
    "",
    "¯",
    "¯\\",
    "¯\\_",
    "¯\\_(",
    "¯\\_(ツ",
    "¯\\_(ツ)_",
    "¯\\_(ツ)_/",
    "¯\\_(ツ)_/¯",
    "¯\\_(ツ)_/¯",
];

/// Figure for the given wrong-guess count. Counts past the limit show the full shrug.
pub fn stage(wrong_guesses: u8) -> &'static str {
    let index = usize::from(wrong_guesses).min(STAGES.len() - 1);
    STAGES[index]
}
