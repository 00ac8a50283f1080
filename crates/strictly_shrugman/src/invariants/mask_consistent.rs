//! Mask consistency invariant: the mask hides exactly the unguessed letters.

use super::Invariant;
use crate::GuessEngine;
use crate::types::{Cell, Letter};

/// Invariant: position `i` is hidden iff `secret[i]` is a letter not yet guessed.
///
/// Shown positions always equal the secret at that position, so guessed
/// letters are revealed everywhere and non-letters are never masked.
pub struct MaskConsistentInvariant;

impl Invariant<GuessEngine> for MaskConsistentInvariant {
    fn holds(engine: &GuessEngine) -> bool {
        let secret = engine.secret().chars();
        let cells = engine.mask().cells();
        if secret.len() != cells.len() {
            return false;
        }

        secret.iter().zip(cells).all(|(&c, &cell)| {
            let hidden = match Letter::new(c) {
                Some(letter) => !engine.guessed().contains(letter),
                None => false,
            };
            match cell {
                Cell::Hidden => hidden,
                Cell::Shown(shown) => !hidden && shown == c,
            }
        })
    }

    fn description() -> &'static str {
        "Mask hides exactly the letters not yet guessed"
    }
}
