//! Active falling piece logic
//!
//! Geometry here is pure: `translated` and `rotated_candidate` only compute
//! cells. The game validates a candidate against the board and then calls one
//! of the `commit_*` methods.

use crate::board::Board;
use crate::tetromino::{Cell, RotationDirection, RotationPolicy, TetrominoType};

/// An active falling piece
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    /// The variant this piece was spawned as
    pub piece_type: TetrominoType,
    /// Always four cells; `cells[1]` is the pivot
    cells: [Cell; 4],
    /// Direction the next accepted rotation turns
    direction: RotationDirection,
}

/// A rotation that has not been applied yet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationCandidate {
    pub cells: [Cell; 4],
    /// Direction to store if this candidate is committed
    pub next_direction: RotationDirection,
}

impl Piece {
    /// Create a piece at its spawn cells for a board `width` columns wide
    pub fn new(piece_type: TetrominoType, width: i32) -> Self {
        Self {
            piece_type,
            cells: piece_type.spawn_cells(width),
            direction: RotationDirection::Clockwise,
        }
    }

    pub fn cells(&self) -> [Cell; 4] {
        self.cells
    }

    pub fn pivot(&self) -> Cell {
        self.cells[1]
    }

    pub fn direction(&self) -> RotationDirection {
        self.direction
    }

    /// +1 or -1
    pub fn rotation_sign(&self) -> i32 {
        self.direction.sign()
    }

    /// Every cell moved by (dx, dy); nothing is validated here
    pub fn translated(&self, dx: i32, dy: i32) -> [Cell; 4] {
        self.cells.map(|cell| cell.offset(dx, dy))
    }

    /// The cells this piece would occupy after one rotation about its pivot
    pub fn rotated_candidate(&self) -> RotationCandidate {
        match self.piece_type.rotation_policy() {
            RotationPolicy::Fixed => RotationCandidate {
                cells: self.cells,
                next_direction: self.direction,
            },
            RotationPolicy::Clockwise => RotationCandidate {
                cells: rotate_about(self.cells, RotationDirection::Clockwise),
                next_direction: RotationDirection::Clockwise,
            },
            RotationPolicy::Toggle => RotationCandidate {
                cells: rotate_about(self.cells, self.direction),
                next_direction: self.direction.flipped(),
            },
        }
    }

    /// Apply a validated rotation
    pub fn commit_rotation(&mut self, candidate: RotationCandidate) {
        self.cells = candidate.cells;
        self.direction = candidate.next_direction;
    }

    /// Apply a validated translation
    pub fn commit_translation(&mut self, cells: [Cell; 4]) {
        self.cells = cells;
    }

    /// Where the piece would come to rest if dropped straight down
    pub fn landing_cells(&self, board: &Board) -> [Cell; 4] {
        let mut resting = self.cells;
        loop {
            let below = resting.map(|cell| cell.offset(0, 1));
            if !board.is_placement_valid(&below) {
                return resting;
            }
            resting = below;
        }
    }
}

/// Rotate four cells a quarter turn about `cells[1]`
fn rotate_about(cells: [Cell; 4], direction: RotationDirection) -> [Cell; 4] {
    let pivot = cells[1];
    let sign = direction.sign();
    cells.map(|cell| {
        Cell::new(
            pivot.col + (pivot.row - cell.row) * sign,
            pivot.row + (cell.col - pivot.col) * sign,
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn cell_set(cells: &[Cell; 4]) -> HashSet<Cell> {
        cells.iter().copied().collect()
    }

    /// Move the piece away from the walls so every rotation fits
    fn centered(piece_type: TetrominoType) -> Piece {
        let mut piece = Piece::new(piece_type, 10);
        let cells = piece.translated(0, 5);
        piece.commit_translation(cells);
        piece
    }

    #[test]
    fn test_translated_does_not_mutate() {
        let piece = Piece::new(TetrominoType::T, 10);
        let moved = piece.translated(-1, 2);
        assert_eq!(moved[0], Cell::new(3, 2));
        assert_eq!(piece.cells()[0], Cell::new(4, 0));
    }

    #[test]
    fn test_clockwise_pieces_cycle_in_four() {
        for kind in [TetrominoType::T, TetrominoType::J, TetrominoType::L] {
            let mut piece = centered(kind);
            let original = piece.clone();
            for _ in 0..4 {
                let candidate = piece.rotated_candidate();
                assert_eq!(candidate.next_direction, RotationDirection::Clockwise);
                piece.commit_rotation(candidate);
            }
            assert_eq!(piece, original, "{} did not return after 4 turns", kind.name());
        }
    }

    #[test]
    fn test_toggle_pieces_cycle_in_two() {
        for kind in [TetrominoType::Z, TetrominoType::S, TetrominoType::I] {
            let mut piece = centered(kind);
            let original = piece.clone();

            piece.commit_rotation(piece.rotated_candidate());
            assert_ne!(cell_set(&piece.cells()), cell_set(&original.cells()));
            assert_eq!(piece.rotation_sign(), -1);

            piece.commit_rotation(piece.rotated_candidate());
            assert_eq!(piece, original, "{} did not return after 2 turns", kind.name());
        }
    }

    #[test]
    fn test_fixed_pieces_never_move() {
        for kind in [TetrominoType::O, TetrominoType::Point] {
            let piece = centered(kind);
            let candidate = piece.rotated_candidate();
            assert_eq!(candidate.cells, piece.cells());
            assert_eq!(candidate.next_direction, piece.direction());
        }
    }

    #[test]
    fn test_t_rotates_clockwise_about_pivot() {
        // .T.      T.
        // TTT  ->  TT
        //          T.
        let piece = centered(TetrominoType::T);
        let candidate = piece.rotated_candidate();
        let pivot = piece.pivot();
        assert_eq!(candidate.cells[1], pivot);
        assert_eq!(candidate.cells[0], Cell::new(pivot.col + 1, pivot.row));
        assert_eq!(candidate.cells[2], Cell::new(pivot.col, pivot.row - 1));
        assert_eq!(candidate.cells[3], Cell::new(pivot.col, pivot.row + 1));
    }

    #[test]
    fn test_horizontal_i_turns_vertical() {
        let piece = centered(TetrominoType::I);
        let candidate = piece.rotated_candidate();
        let pivot = piece.pivot();
        assert!(candidate.cells.iter().all(|c| c.col == pivot.col));
    }

    #[test]
    fn test_landing_cells_on_empty_board() {
        let board = Board::new(10, 20);
        let piece = Piece::new(TetrominoType::O, 10);
        let landing = piece.landing_cells(&board);
        assert_eq!(landing.iter().map(|c| c.row).max(), Some(19));
        assert_eq!(piece.cells()[0].row, 0);
    }
}
