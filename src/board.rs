use crate::error::GameError;
use crate::{COLS, CONNECT, ROWS};

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            _ => false,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Player {
    Red,
    Yellow,
}

impl Player {
    pub fn other(self) -> Player {
        match self {
            Player::Red => Player::Yellow,
            Player::Yellow => Player::Red,
        }
    }

    pub fn cell(self) -> Cell {
        match self {
            Player::Red => Cell::Red,
            Player::Yellow => Cell::Yellow,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Player::Red => "Red",
            Player::Yellow => "Yellow",
        }
    }
}

/// The 6x7 grid, row 0 at the top
///
/// A per-column piece count makes gravity resolution O(1); the grid
/// invariant is that every column's empty cells sit above its occupied
/// ones, which holds because [`place`] is the only way a cell is filled.
///
/// [`place`]: #method.place
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
    counts: [usize; COLS],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; COLS]; ROWS],
            counts: [0; COLS],
        }
    }

    pub fn get(&self, row: usize, column: usize) -> Cell {
        self.cells[row][column]
    }

    // bounds-tolerant lookup for the heuristic walks
    pub(crate) fn at(&self, row: i32, column: i32) -> Option<Cell> {
        if row < 0 || row >= ROWS as i32 || column < 0 || column >= COLS as i32 {
            None
        } else {
            Some(self.cells[row as usize][column as usize])
        }
    }

    pub fn playable(&self, column: usize) -> bool {
        column < COLS && self.counts[column] < ROWS
    }

    /// Returns every column whose top cell is still empty
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..COLS).filter(|&column| self.playable(column)).collect()
    }

    /// Resolves gravity for a column: the lowest empty row, or an error
    /// if the column is full. This is the only way a row is ever chosen.
    pub fn drop_row(&self, column: usize) -> Result<usize, GameError> {
        if column >= COLS {
            return Err(GameError::InvalidColumn(column));
        }
        if self.counts[column] == ROWS {
            return Err(GameError::ColumnFull(column));
        }
        Ok(ROWS - 1 - self.counts[column])
    }

    /// Drops a piece for `player`, returning the row it landed on
    pub fn place(&mut self, column: usize, player: Player) -> Result<usize, GameError> {
        let row = self.drop_row(column)?;
        self.cells[row][column] = player.cell();
        self.counts[column] += 1;
        Ok(row)
    }

    /// Removes the top piece of a column. Must mirror a prior [`place`];
    /// calling it on an empty column is a caller bug and panics.
    ///
    /// [`place`]: #method.place
    pub(crate) fn unplace(&mut self, column: usize) {
        debug_assert!(self.counts[column] > 0);
        let row = ROWS - self.counts[column];
        self.cells[row][column] = Cell::Empty;
        self.counts[column] -= 1;
    }

    pub fn is_full(&self) -> bool {
        self.counts.iter().all(|&count| count == ROWS)
    }

    /// Checks whether the piece at (row, column) completes a run of four
    ///
    /// Walks outward from the placed cell in both directions of each of
    /// the four axes, so only lines through the last move are examined.
    pub fn check_win(&self, row: usize, column: usize) -> bool {
        let cell = self.cells[row][column];
        if cell.is_empty() {
            return false;
        }

        // horizontal, vertical, diagonal \ and diagonal /
        let axes = [(0, 1), (1, 0), (1, 1), (1, -1)];
        axes.iter().any(|&(dr, dc)| {
            let run = 1
                + self.run_length(row, column, dr, dc, cell)
                + self.run_length(row, column, -dr, -dc, cell);
            run >= CONNECT
        })
    }

    fn run_length(&self, row: usize, column: usize, dr: i32, dc: i32, cell: Cell) -> usize {
        let mut count = 0;
        let mut r = row as i32 + dr;
        let mut c = column as i32 + dc;
        while self.at(r, c) == Some(cell) {
            count += 1;
            r += dr;
            c += dc;
        }
        count
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
