//! Piece variants and their spawn shapes
//!
//! Eight variants: the seven standard tetrominoes plus `Point`, a single
//! square drawn four times over. Every shape lists its pivot second.

use serde::{Deserialize, Serialize};

/// Columns the spawn shapes are authored against
pub const REFERENCE_WIDTH: i32 = 10;
/// Column of the spawn shapes that maps to the board's centre column
const REFERENCE_CENTER: i32 = 4;

/// A board coordinate. Row 0 is the top row, rows grow downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub col: i32,
    pub row: i32,
}

impl Cell {
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// Offset this cell by (dx, dy)
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            col: self.col + dx,
            row: self.row + dy,
        }
    }
}

/// The 8 piece variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TetrominoType {
    T,
    J,
    L,
    Z,
    S,
    I,
    O,
    /// One square, repeated four times
    Point,
}

/// How a variant reacts to a rotate command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationPolicy {
    /// Always clockwise, four orientations
    Clockwise,
    /// Alternates clockwise / counter-clockwise, two orientations
    Toggle,
    /// Rotation is the identity
    Fixed,
}

impl TetrominoType {
    /// All variants, in draw order
    pub fn all() -> [TetrominoType; 8] {
        [
            TetrominoType::T,
            TetrominoType::J,
            TetrominoType::L,
            TetrominoType::Z,
            TetrominoType::S,
            TetrominoType::I,
            TetrominoType::O,
            TetrominoType::Point,
        ]
    }

    /// Map a draw index in `0..8` to a variant.
    ///
    /// Anything else is a broken random source and panics.
    pub fn from_index(index: usize) -> TetrominoType {
        match index {
            0 => TetrominoType::T,
            1 => TetrominoType::J,
            2 => TetrominoType::L,
            3 => TetrominoType::Z,
            4 => TetrominoType::S,
            5 => TetrominoType::I,
            6 => TetrominoType::O,
            7 => TetrominoType::Point,
            _ => unreachable!("piece index {index} outside 0..8"),
        }
    }

    pub fn rotation_policy(&self) -> RotationPolicy {
        match self {
            TetrominoType::T | TetrominoType::J | TetrominoType::L => RotationPolicy::Clockwise,
            TetrominoType::Z | TetrominoType::S | TetrominoType::I => RotationPolicy::Toggle,
            TetrominoType::O | TetrominoType::Point => RotationPolicy::Fixed,
        }
    }

    /// Spawn cells on a 10-column board as (col, row); index 1 is the pivot
    pub fn spawn_shape(&self) -> [(i32, i32); 4] {
        match self {
            // .T.
            // TTT
            TetrominoType::T => [(4, 0), (4, 1), (3, 1), (5, 1)],
            // L.
            // L.
            // LL
            TetrominoType::L => [(4, 0), (4, 1), (4, 2), (5, 2)],
            // .J
            // .J
            // JJ
            TetrominoType::J => [(5, 0), (5, 1), (5, 2), (4, 2)],
            // ZZ.
            // .ZZ
            TetrominoType::Z => [(3, 0), (4, 1), (4, 0), (5, 1)],
            // .SS
            // SS.
            TetrominoType::S => [(5, 0), (4, 1), (4, 0), (3, 1)],
            // IIII, pivot second from the left
            TetrominoType::I => [(4, 0), (3, 0), (5, 0), (2, 0)],
            TetrominoType::O => [(4, 0), (4, 1), (5, 1), (5, 0)],
            TetrominoType::Point => [(4, 0); 4],
        }
    }

    /// Spawn cells shifted so the shape sits near the top centre of a board
    /// `width` columns wide
    pub fn spawn_cells(&self, width: i32) -> [Cell; 4] {
        let shift = width / 2 - 1 - REFERENCE_CENTER;
        self.spawn_shape()
            .map(|(col, row)| Cell::new(col + shift, row))
    }

    pub fn name(&self) -> &'static str {
        match self {
            TetrominoType::T => "T",
            TetrominoType::J => "J",
            TetrominoType::L => "L",
            TetrominoType::Z => "Z",
            TetrominoType::S => "S",
            TetrominoType::I => "I",
            TetrominoType::O => "O",
            TetrominoType::Point => "Point",
        }
    }
}

/// Direction for rotation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RotationDirection {
    #[default]
    Clockwise,
    CounterClockwise,
}

impl RotationDirection {
    /// +1 for clockwise, -1 for counter-clockwise
    pub fn sign(&self) -> i32 {
        match self {
            RotationDirection::Clockwise => 1,
            RotationDirection::CounterClockwise => -1,
        }
    }

    pub fn flipped(&self) -> RotationDirection {
        match self {
            RotationDirection::Clockwise => RotationDirection::CounterClockwise,
            RotationDirection::CounterClockwise => RotationDirection::Clockwise,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_index_covers_all() {
        for (i, kind) in TetrominoType::all().iter().enumerate() {
            assert_eq!(TetrominoType::from_index(i), *kind);
        }
    }

    #[test]
    #[should_panic]
    fn test_from_index_out_of_range_panics() {
        TetrominoType::from_index(8);
    }

    #[test]
    fn test_reference_width_is_unshifted() {
        let cells = TetrominoType::T.spawn_cells(REFERENCE_WIDTH);
        assert_eq!(cells[1], Cell::new(4, 1));
    }

    #[test]
    fn test_wider_board_shifts_right() {
        let narrow = TetrominoType::I.spawn_cells(10);
        let wide = TetrominoType::I.spawn_cells(16);
        for (a, b) in narrow.iter().zip(wide.iter()) {
            assert_eq!(b.col - a.col, 3);
            assert_eq!(a.row, b.row);
        }
    }

    #[test]
    fn test_rotation_policies() {
        assert_eq!(TetrominoType::J.rotation_policy(), RotationPolicy::Clockwise);
        assert_eq!(TetrominoType::S.rotation_policy(), RotationPolicy::Toggle);
        assert_eq!(TetrominoType::Point.rotation_policy(), RotationPolicy::Fixed);
    }

    #[test]
    fn test_direction_sign() {
        assert_eq!(RotationDirection::Clockwise.sign(), 1);
        assert_eq!(RotationDirection::Clockwise.flipped().sign(), -1);
    }
}
