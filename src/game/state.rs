use super::{Board, Cell, Player, Seat, WinningLine, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::error::{GameError, MoveError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus<T> {
    InProgress,
    Won(T),
    Tie,
}

/// Result of an accepted move. `row` is where the piece landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome<T> {
    Continue { row: usize, next_player: T },
    Win { row: usize, player: T, line: WinningLine },
    Tie { row: usize },
}

impl<T: Copy> MoveOutcome<T> {
    /// Row the accepted piece landed on
    pub fn row(&self) -> usize {
        match *self {
            MoveOutcome::Continue { row, .. }
            | MoveOutcome::Win { row, .. }
            | MoveOutcome::Tie { row } => row,
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, MoveOutcome::Continue { .. })
    }
}

/// One game of Connect Four between two player tokens.
///
/// The board only ever records seats; tokens are what the host sees in
/// outcomes, status, and cell owners.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState<T = Player> {
    board: Board,
    players: [T; 2],
    current: Seat,
    status: GameStatus<T>,
    moves: Vec<usize>,
}

impl GameState<Player> {
    /// Standard 6x7 game, `Player::One` moves first
    pub fn standard() -> Self {
        GameState {
            board: Board::default(),
            players: [Player::One, Player::Two],
            current: Seat::First,
            status: GameStatus::InProgress,
            moves: Vec::new(),
        }
    }
}

impl Default for GameState<Player> {
    fn default() -> Self {
        Self::standard()
    }
}

impl<T: Copy + Eq> GameState<T> {
    /// Create a game on a `height` x `width` board; `player1` moves first.
    pub fn new(height: usize, width: usize, player1: T, player2: T) -> Result<Self, GameError> {
        let board = Board::new(height, width)?;
        if player1 == player2 {
            return Err(GameError::IndistinctPlayers);
        }
        Ok(GameState {
            board,
            players: [player1, player2],
            current: Seat::First,
            status: GameStatus::InProgress,
            moves: Vec::new(),
        })
    }

    /// Create a game on the standard 6x7 board.
    pub fn with_players(player1: T, player2: T) -> Result<Self, GameError> {
        Self::new(DEFAULT_HEIGHT, DEFAULT_WIDTH, player1, player2)
    }

    /// Get current player
    pub fn current_player(&self) -> T {
        self.player(self.current)
    }

    /// Seat of the current player
    pub fn current_seat(&self) -> Seat {
        self.current
    }

    /// Token sitting in `seat`
    pub fn player(&self, seat: Seat) -> T {
        self.players[seat.index()]
    }

    /// Seat of `player`, if it is one of the two tokens in this game
    pub fn seat_of(&self, player: T) -> Option<Seat> {
        if player == self.players[0] {
            Some(Seat::First)
        } else if player == self.players[1] {
            Some(Seat::Second)
        } else {
            None
        }
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn height(&self) -> usize {
        self.board.height()
    }

    pub fn width(&self) -> usize {
        self.board.width()
    }

    /// Cell at (row, col), `None` when out of range
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.board.get(row, col)
    }

    /// Token owning (row, col), `None` when empty or out of range
    pub fn cell_owner(&self, row: usize, col: usize) -> Option<T> {
        self.board
            .get(row, col)
            .and_then(Cell::owner)
            .map(|seat| self.player(seat))
    }

    pub fn status(&self) -> GameStatus<T> {
        self.status
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// Winner of the game, if any
    pub fn winner(&self) -> Option<T> {
        match self.status {
            GameStatus::Won(player) => Some(player),
            _ => None,
        }
    }

    pub fn is_column_full(&self, col: usize) -> bool {
        self.board.is_column_full(col)
    }

    /// Get list of legal columns (not full). Empty once the game is over.
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }

        (0..self.board.width())
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    /// Columns of every accepted move, in play order
    pub fn moves(&self) -> &[usize] {
        &self.moves
    }

    /// Drop the current player's piece in `column`.
    ///
    /// On error nothing changes: no cell is filled and the turn does not pass.
    pub fn drop_piece(&mut self, column: usize) -> Result<MoveOutcome<T>, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameAlreadyOver);
        }

        let row = self.board.drop_piece(column, self.current)?;
        self.moves.push(column);
        let player = self.current_player();

        // Check for win
        if let Some(line) = self.board.winning_line_through(row, column) {
            self.status = GameStatus::Won(player);
            return Ok(MoveOutcome::Win { row, player, line });
        }

        if self.board.is_full() {
            self.status = GameStatus::Tie;
            return Ok(MoveOutcome::Tie { row });
        }

        self.current = self.current.other();
        Ok(MoveOutcome::Continue {
            row,
            next_player: self.current_player(),
        })
    }

    /// Start over on an empty board with the same dimensions and players.
    pub fn reset(&mut self) {
        self.board.clear();
        self.current = Seat::First;
        self.status = GameStatus::InProgress;
        self.moves.clear();
    }
}
