//! # Connect Four
//!
//! A two-player Connect Four engine. Pieces drop into columns of a grid; the
//! first player to line up four of their own pieces horizontally, vertically
//! or diagonally wins, and a full board with no winner is a tie.
//!
//! The engine is pure game state. A host (terminal, web page, server) calls
//! [`GameState::drop_piece`](game::GameState::drop_piece) and renders what
//! comes back.
//!
//! ## Modules
//!
//! - [`game`] - Core game logic: board, seats and tokens, state machine
//! - [`config`] - TOML configuration loading and validation
//! - [`error`] - Structured error types

pub mod config;
pub mod error;
pub mod game;

pub use error::{ConfigError, GameError, MoveError};
pub use game::{GameState, GameStatus, MoveOutcome, Player};
