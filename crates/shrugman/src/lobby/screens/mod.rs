//! Individual screen implementations for the lobby state machine.

mod board;
mod category_select;
mod in_game;
mod round_over;

pub use category_select::CategorySelectScreen;
pub use in_game::{InGameScreen, Notice};
pub use round_over::RoundOverScreen;
