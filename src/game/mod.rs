//! Core Connect Four game logic: board representation, seats and player
//! tokens, and the move-by-move game state machine.

mod board;
mod player;
mod state;

pub use board::{
    Board, Cell, WinningLine, DEFAULT_HEIGHT, DEFAULT_WIDTH, MAX_DIMENSION,
    MIN_DIMENSION,
};
pub use player::{Player, Seat};
pub use state::{GameState, GameStatus, MoveOutcome};
