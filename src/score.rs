//! Scoring for line clears

use serde::{Deserialize, Serialize};

/// Points for clearing `lines` rows with a single lock: 100 * (2^n - 1).
///
/// One piece spans at most four rows, so anything above four scores nothing.
pub fn line_clear_points(lines: usize) -> u64 {
    match lines {
        0 => 0,
        1 => 100,
        2 => 300,
        3 => 700,
        4 => 1500,
        _ => 0,
    }
}

/// Running totals for one game
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    /// Current score
    pub points: u64,
    /// Total lines cleared
    pub lines: u32,
    /// Pieces locked into the board
    pub pieces: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one lock event and return the points it earned
    pub fn add_lock(&mut self, lines_cleared: usize) -> u64 {
        let earned = line_clear_points(lines_cleared);
        self.points += earned;
        self.lines += lines_cleared as u32;
        self.pieces += 1;
        earned
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
