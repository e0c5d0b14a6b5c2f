use std::fmt;

use super::Seat;
use crate::error::{GameError, MoveError};

/// Smallest height or width on which four-in-a-row fits along that axis.
pub const MIN_DIMENSION: usize = 4;
/// Largest height or width accepted.
pub const MAX_DIMENSION: usize = 1024;
pub const DEFAULT_HEIGHT: usize = 6;
pub const DEFAULT_WIDTH: usize = 7;

/// Length of a winning run.
const RUN: usize = 4;

/// Line directions as (dy, dx), in the order the full-board scan tries them:
/// horizontal, vertical, diagonal down-right, diagonal down-left.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Four (row, col) coordinates forming a four-in-a-row, ordered along the
/// line's direction.
pub type WinningLine = [(usize, usize); RUN];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Occupied(Seat),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Seat owning this cell, if any
    pub fn owner(self) -> Option<Seat> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(seat) => Some(seat),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    height: usize,
    width: usize,
    /// Row-major, row 0 is the top.
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(height: usize, width: usize) -> Result<Self, GameError> {
        let in_range = |d: usize| (MIN_DIMENSION..=MAX_DIMENSION).contains(&d);
        if !in_range(height) || !in_range(width) {
            return Err(GameError::InvalidDimensions { height, width });
        }
        let len = height
            .checked_mul(width)
            .ok_or(GameError::InvalidDimensions { height, width })?;
        Ok(Board {
            height,
            width,
            cells: vec![Cell::Empty; len],
        })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Get the cell at a specific position, `None` when out of range.
    /// Row 0 is the top, row `height - 1` is the bottom
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row >= self.height || col >= self.width {
            return None;
        }
        Some(self.cells[row * self.width + col])
    }

    /// Check if a column is full. Out-of-range columns count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        match self.get(0, col) {
            Some(cell) => !cell.is_empty(),
            None => true,
        }
    }

    /// Row the next piece dropped in `col` would land on
    pub fn landing_row(&self, col: usize) -> Option<usize> {
        if col >= self.width {
            return None;
        }
        (0..self.height)
            .rev()
            .find(|&row| self.cells[row * self.width + col].is_empty())
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, seat: Seat) -> Result<usize, MoveError> {
        if col >= self.width {
            return Err(MoveError::InvalidColumn {
                column: col,
                width: self.width,
            });
        }

        let row = self
            .landing_row(col)
            .ok_or(MoveError::ColumnFull { column: col })?;
        self.cells[row * self.width + col] = Cell::Occupied(seat);
        Ok(row)
    }

    /// Empty every cell, keeping the dimensions
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..self.width).all(|col| self.is_column_full(col))
    }

    /// Number of occupied cells
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Check if the piece at (row, col) is part of a four-in-a-row
    pub fn check_win(&self, row: usize, col: usize) -> bool {
        self.winning_line_through(row, col).is_some()
    }

    /// Find a four-in-a-row passing through (row, col), owned by whoever
    /// occupies that cell.
    ///
    /// Only the four lines through the given cell are inspected, so this is
    /// the check to run after each drop.
    pub fn winning_line_through(&self, row: usize, col: usize) -> Option<WinningLine> {
        let seat = self.get(row, col)?.owner()?;

        for &(dy, dx) in &DIRECTIONS {
            let behind = self.run_length(row, col, -dy, -dx, seat);
            let ahead = self.run_length(row, col, dy, dx, seat);
            if 1 + behind + ahead >= RUN {
                let start = (
                    (row as isize - behind as isize * dy) as usize,
                    (col as isize - behind as isize * dx) as usize,
                );
                return Some(self.line_from(start, dy, dx));
            }
        }
        None
    }

    /// Scan the whole board for a four-in-a-row owned by `seat`.
    ///
    /// Every cell is tried in row-major order as the start of a run in each
    /// of the four directions; the first complete run found is returned.
    pub fn scan_for_win(&self, seat: Seat) -> Option<WinningLine> {
        for row in 0..self.height {
            for col in 0..self.width {
                for &(dy, dx) in &DIRECTIONS {
                    let owned = (0..RUN).all(|k| {
                        self.offset((row, col), dy, dx, k)
                            .and_then(|(r, c)| self.get(r, c))
                            == Some(Cell::Occupied(seat))
                    });
                    if owned {
                        return Some(self.line_from((row, col), dy, dx));
                    }
                }
            }
        }
        None
    }

    /// Count consecutive `seat` pieces from (row, col) in one direction,
    /// not counting the starting cell. Stops after three.
    fn run_length(&self, row: usize, col: usize, dy: isize, dx: isize, seat: Seat) -> usize {
        (1..RUN)
            .take_while(|&k| {
                self.offset((row, col), dy, dx, k)
                    .and_then(|(r, c)| self.get(r, c))
                    == Some(Cell::Occupied(seat))
            })
            .count()
    }

    /// Coordinate `k` steps from `from` along (dy, dx), `None` if it leaves
    /// the board.
    fn offset(
        &self,
        from: (usize, usize),
        dy: isize,
        dx: isize,
        k: usize,
    ) -> Option<(usize, usize)> {
        let r = from.0 as isize + dy * k as isize;
        let c = from.1 as isize + dx * k as isize;
        if r < 0 || c < 0 || r >= self.height as isize || c >= self.width as isize {
            return None;
        }
        Some((r as usize, c as usize))
    }

    /// Caller guarantees all four cells are on the board.
    fn line_from(&self, start: (usize, usize), dy: isize, dx: isize) -> WinningLine {
        let mut line = [start; RUN];
        for (k, slot) in line.iter_mut().enumerate() {
            *slot = (
                (start.0 as isize + dy * k as isize) as usize,
                (start.1 as isize + dx * k as isize) as usize,
            );
        }
        line
    }
}

impl Default for Board {
    fn default() -> Self {
        Board {
            height: DEFAULT_HEIGHT,
            width: DEFAULT_WIDTH,
            cells: vec![Cell::Empty; DEFAULT_HEIGHT * DEFAULT_WIDTH],
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            for col in 0..self.width {
                let symbol = match self.cells[row * self.width + col] {
                    Cell::Empty => '.',
                    Cell::Occupied(Seat::First) => 'X',
                    Cell::Occupied(Seat::Second) => 'O',
                };
                write!(f, "{:>3}", symbol)?;
            }
            writeln!(f)?;
        }
        for col in 0..self.width {
            write!(f, "{:>3}", col)?;
        }
        writeln!(f)
    }
}
