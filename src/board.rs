//! Game board representation and collision detection

use crate::tetromino::{Cell, TetrominoType};
use serde::{Deserialize, Serialize};

/// Standard board dimensions
pub const BOARD_WIDTH: usize = 10;
pub const BOARD_HEIGHT: usize = 20;
/// Smallest board every spawn shape fits on
pub const MIN_BOARD_WIDTH: usize = 6;
pub const MIN_BOARD_HEIGHT: usize = 4;

/// A square on the board - either empty or filled by a locked piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Block {
    #[default]
    Empty,
    Filled(TetrominoType),
}

impl Block {
    pub fn is_empty(&self) -> bool {
        matches!(self, Block::Empty)
    }

    pub fn is_filled(&self) -> bool {
        matches!(self, Block::Filled(_))
    }
}

/// The settled grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    /// Stored as [row][col], row 0 is the top
    rows: Vec<Vec<Block>>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BOARD_WIDTH, BOARD_HEIGHT)
    }
}

impl Board {
    /// Create an empty board.
    ///
    /// Panics if the board is smaller than `MIN_BOARD_WIDTH` x `MIN_BOARD_HEIGHT`;
    /// user-supplied sizes are validated by the settings layer first.
    pub fn new(width: usize, height: usize) -> Self {
        assert!(
            width >= MIN_BOARD_WIDTH && height >= MIN_BOARD_HEIGHT,
            "board {width}x{height} is smaller than {MIN_BOARD_WIDTH}x{MIN_BOARD_HEIGHT}"
        );
        Self {
            width,
            height,
            rows: vec![vec![Block::Empty; width]; height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, cell: Cell) -> Option<(usize, usize)> {
        if cell.col < 0 || cell.row < 0 {
            return None;
        }
        let (row, col) = (cell.row as usize, cell.col as usize);
        if row >= self.height || col >= self.width {
            return None;
        }
        Some((row, col))
    }

    /// Get the block at a cell, None if out of bounds
    pub fn get(&self, cell: Cell) -> Option<Block> {
        self.index(cell).map(|(row, col)| self.rows[row][col])
    }

    /// In bounds and filled
    pub fn is_occupied(&self, cell: Cell) -> bool {
        matches!(self.get(cell), Some(Block::Filled(_)))
    }

    /// In bounds and empty. Out of bounds is never free.
    pub fn is_free(&self, cell: Cell) -> bool {
        matches!(self.get(cell), Some(Block::Empty))
    }

    /// True only if every cell is free
    pub fn is_placement_valid(&self, cells: &[Cell]) -> bool {
        cells.iter().all(|&cell| self.is_free(cell))
    }

    /// Fill the given cells with a locked piece
    pub fn lock(&mut self, cells: &[Cell], piece_type: TetrominoType) {
        for &cell in cells {
            if let Some((row, col)) = self.index(cell) {
                self.rows[row][col] = Block::Filled(piece_type);
            }
        }
    }

    /// Remove every full row, shifting the rows above it down by one.
    ///
    /// Rows are scanned once from top to bottom. Everything above the row
    /// being inspected has already been found not full, so a shift never
    /// brings a full row into an unvisited index.
    pub fn clear_full_lines_and_compact(&mut self) -> usize {
        let mut lines_cleared = 0;

        for row in 0..self.height {
            if self.is_line_full(row) {
                // Row k-1 moves into row k for k = row..1; the old full row
                // wraps to the top and is emptied
                self.rows[..=row].rotate_right(1);
                self.rows[0].fill(Block::Empty);
                lines_cleared += 1;
            }
        }

        lines_cleared
    }

    /// Check if a row is completely filled
    pub fn is_line_full(&self, row: usize) -> bool {
        self.rows
            .get(row)
            .is_some_and(|cells| cells.iter().all(|cell| cell.is_filled()))
    }

    pub fn is_empty(&self) -> bool {
        self.rows
            .iter()
            .all(|row| row.iter().all(|cell| cell.is_empty()))
    }

    /// Rows from top to bottom
    pub fn rows(&self) -> &[Vec<Block>] {
        &self.rows
    }

    /// Empty every cell
    pub fn clear(&mut self) {
        for row in &mut self.rows {
            row.fill(Block::Empty);
        }
    }
}
