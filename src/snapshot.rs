//! Read-only view of a game for hosts to draw from

use crate::board::{Block, Board};
use crate::game::GameState;
use crate::piece::Piece;
use crate::score::Score;
use crate::tetromino::{Cell, TetrominoType};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceSnapshot {
    pub kind: TetrominoType,
    pub cells: [Cell; 4],
}

impl From<&Piece> for PieceSnapshot {
    fn from(piece: &Piece) -> Self {
        Self {
            kind: piece.piece_type,
            cells: piece.cells(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub board_width: usize,
    pub board_height: usize,
    /// Rows top to bottom; `None` is an empty cell
    pub grid: Vec<Vec<Option<TetrominoType>>>,
    pub active: PieceSnapshot,
    pub next: PieceSnapshot,
    pub score: u64,
    pub lines: u32,
    pub pieces_locked: u32,
    pub state: GameState,
}

impl Snapshot {
    pub(crate) fn capture(
        board: &Board,
        active: &Piece,
        next: &Piece,
        score: Score,
        state: GameState,
    ) -> Self {
        let grid = board
            .rows()
            .iter()
            .map(|row| {
                row.iter()
                    .map(|block| match block {
                        Block::Empty => None,
                        Block::Filled(kind) => Some(*kind),
                    })
                    .collect()
            })
            .collect();

        Self {
            board_width: board.width(),
            board_height: board.height(),
            grid,
            active: active.into(),
            next: next.into(),
            score: score.points,
            lines: score.lines,
            pieces_locked: score.pieces,
            state,
        }
    }

    /// In bounds and filled
    pub fn occupied(&self, cell: Cell) -> bool {
        if cell.col < 0 || cell.row < 0 {
            return false;
        }
        self.grid
            .get(cell.row as usize)
            .and_then(|row| row.get(cell.col as usize))
            .is_some_and(|block| block.is_some())
    }

    pub fn active_cells(&self) -> [Cell; 4] {
        self.active.cells
    }

    pub fn next_cells(&self) -> [Cell; 4] {
        self.next.cells
    }

    pub fn is_game_over(&self) -> bool {
        self.state == GameState::GameOver
    }
}
