//! Core Kalah rules: board layout and sowing, player types, and the game
//! state machine that validates and applies moves.

mod board;
mod player;
mod state;

pub use board::{absolute_index, Board, Sowing, DEFAULT_POCKETS, DEFAULT_STONES};
pub use player::Player;
pub use state::{Game, GameOutcome, MoveReport};
pub use crate::error::MoveError;
