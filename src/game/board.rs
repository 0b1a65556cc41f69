use std::fmt;

use super::Player;
use crate::error::MoveError;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Middle column, favoured by the heuristic.
pub const CENTER_COL: usize = COLS / 2;

/// Number of consecutive cells that make a line.
pub const WINDOW_LEN: usize = 4;

/// Four consecutive `(row, col)` coordinates along one direction.
pub type Window = [(usize, usize); WINDOW_LEN];

/// Open columns in ascending order.
pub type LegalColumns = Vec<usize>;

/// Number of windows [`windows`] yields: horizontal, vertical, then both diagonals.
pub const WINDOW_COUNT: usize = ROWS * (COLS - WINDOW_LEN + 1)
    + (ROWS - WINDOW_LEN + 1) * COLS
    + 2 * (ROWS - WINDOW_LEN + 1) * (COLS - WINDOW_LEN + 1);

/// Horizontal, vertical, diagonal up-right and diagonal down-right.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (-1, 1), (1, 1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

impl Cell {
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Red => Some(Player::Red),
            Cell::Yellow => Some(Player::Yellow),
        }
    }
}

/// A 6x7 grid. Row 0 is the top, row 5 is the bottom.
///
/// Pieces can only enter through [`Board::drop_piece`], so every column is a
/// contiguous stack growing up from the bottom row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Replay a sequence of columns, Red first and alternating.
    pub fn from_moves(moves: &[usize]) -> Result<Self, MoveError> {
        let mut board = Board::new();
        let mut player = Player::Red;
        for &col in moves {
            board.drop_piece(col, player)?;
            player = player.other();
        }
        Ok(board)
    }

    /// Get the cell at a specific position
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Number of pieces stacked in a column.
    pub fn height(&self, col: usize) -> usize {
        (0..ROWS)
            .take_while(|&row| self.cells[ROWS - 1 - row][col] != Cell::Empty)
            .count()
    }

    /// Whether the top cell of `col` is still empty.
    pub fn is_open(&self, col: usize) -> Result<bool, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn(col));
        }
        Ok(self.cells[0][col] == Cell::Empty)
    }

    /// Like [`Board::is_open`], but out-of-range columns are simply not legal.
    pub fn is_legal(&self, col: usize) -> bool {
        self.is_open(col).unwrap_or(false)
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, player: Player) -> Result<usize, MoveError> {
        if !self.is_open(col)? {
            return Err(MoveError::ColumnFull(col));
        }

        let row = ROWS - 1 - self.height(col);
        self.cells[row][col] = player.to_cell();
        Ok(row)
    }

    /// Every board `player` can reach with one drop, paired with the column,
    /// in ascending column order. Full columns are skipped.
    pub fn children(&self, player: Player) -> impl Iterator<Item = (usize, Board)> {
        let board = *self;
        (0..COLS)
            .filter(move |&col| board.cells[0][col] == Cell::Empty)
            .map(move |col| {
                let mut child = board;
                child.cells[ROWS - 1 - board.height(col)][col] = player.to_cell();
                (col, child)
            })
    }

    pub fn legal_columns(&self) -> LegalColumns {
        (0..COLS).filter(|&col| self.is_legal(col)).collect()
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| !self.is_legal(col))
    }

    pub fn piece_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell != Cell::Empty)
            .count()
    }

    /// The cells of one window, in order.
    pub fn window_cells(&self, window: &Window) -> [Cell; WINDOW_LEN] {
        window.map(|(row, col)| self.cells[row][col])
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            let line: String = row
                .iter()
                .map(|cell| match cell {
                    Cell::Empty => '.',
                    Cell::Red => 'R',
                    Cell::Yellow => 'Y',
                })
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Every 4-cell window on the board, in all four directions.
pub fn windows() -> impl Iterator<Item = Window> {
    DIRECTIONS.into_iter().flat_map(|(d_row, d_col)| {
        (0..ROWS).flat_map(move |row| {
            (0..COLS).filter_map(move |col| window_from(row, col, d_row, d_col))
        })
    })
}

fn window_from(row: usize, col: usize, d_row: isize, d_col: isize) -> Option<Window> {
    let mut window = [(0, 0); WINDOW_LEN];
    for (i, slot) in window.iter_mut().enumerate() {
        let r = row.checked_add_signed(d_row * i as isize)?;
        let c = col.checked_add_signed(d_col * i as isize)?;
        if r >= ROWS || c >= COLS {
            return None;
        }
        *slot = (r, c);
    }
    Some(window)
}
