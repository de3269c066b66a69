//! Core game state and logic
//!
//! The host drives the game: `tick` once per gravity step, `handle_input`
//! for each command. Both return an [`Outcome`] so the host knows whether
//! anything changed and when the game was lost.

use crate::board::Board;
use crate::catalog::PieceCatalog;
use crate::piece::Piece;
use crate::score::Score;
use crate::snapshot::Snapshot;
use crate::tetromino::{Cell, TetrominoType};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Game phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    Falling,
    /// Terminal until `start`
    GameOver,
}

/// Commands the game can process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    MoveLeft,
    MoveRight,
    SoftDrop,
    Rotate,
    HardDrop,
}

impl Command {
    pub fn all() -> [Command; 5] {
        [
            Command::MoveLeft,
            Command::MoveRight,
            Command::SoftDrop,
            Command::Rotate,
            Command::HardDrop,
        ]
    }
}

/// What a `tick` or `handle_input` call did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The game is over; nothing changed
    Ignored,
    /// The piece moved or rotated
    Moved,
    /// The move collided and was dropped
    Rejected,
    /// The piece locked and the next one spawned
    Locked { lines_cleared: usize, points: u64 },
    /// The piece locked and the next one has nowhere to go.
    /// Returned once per game.
    Defeat,
}

/// The main game struct
#[derive(Debug, Clone)]
pub struct Game<R = ChaCha8Rng> {
    board: Board,
    current_piece: Piece,
    next_piece: Piece,
    catalog: PieceCatalog<R>,
    score: Score,
    state: GameState,
}

impl Game<ChaCha8Rng> {
    /// Create a game on a `width` x `height` board with a reproducible piece sequence
    pub fn with_seed(width: usize, height: usize, seed: u64) -> Self {
        Self::new(Board::new(width, height), ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> Game<R> {
    /// Create a game drawing pieces from `rng` and start it.
    ///
    /// Pieces are spawned for this board's width, so they always start inside it.
    pub fn new(board: Board, rng: R) -> Self {
        let catalog = PieceCatalog::new(board.width(), rng);
        let mut game = Self {
            // Placeholders until `start` deals the first two pieces
            current_piece: catalog.spawn(TetrominoType::Point),
            next_piece: catalog.spawn(TetrominoType::Point),
            board,
            catalog,
            score: Score::new(),
            state: GameState::Falling,
        };
        game.start();
        game
    }

    /// Reset the board and score and deal fresh pieces. Allowed in any state.
    pub fn start(&mut self) {
        self.board.clear();
        self.score.reset();
        self.current_piece = self.catalog.draw();
        self.next_piece = self.catalog.draw();
        self.state = GameState::Falling;
        info!(
            width = self.board.width(),
            height = self.board.height(),
            first = self.current_piece.piece_type.name(),
            "game started"
        );
    }

    /// Apply gravity: fall one row, or lock if the row below is blocked
    pub fn tick(&mut self) -> Outcome {
        if self.state == GameState::GameOver {
            return Outcome::Ignored;
        }

        let below = self.current_piece.translated(0, 1);
        if self.board.is_placement_valid(&below) {
            self.current_piece.commit_translation(below);
            Outcome::Moved
        } else {
            self.lock_piece()
        }
    }

    /// Process one player command
    pub fn handle_input(&mut self, command: Command) -> Outcome {
        if self.state == GameState::GameOver {
            return Outcome::Ignored;
        }

        match command {
            Command::MoveLeft => self.try_translate(-1, 0),
            Command::MoveRight => self.try_translate(1, 0),
            // Only gravity locks; a blocked soft drop is just rejected
            Command::SoftDrop => self.try_translate(0, 1),
            Command::Rotate => self.rotate(),
            Command::HardDrop => self.hard_drop(),
        }
    }

    fn try_translate(&mut self, dx: i32, dy: i32) -> Outcome {
        let candidate = self.current_piece.translated(dx, dy);
        if self.board.is_placement_valid(&candidate) {
            self.current_piece.commit_translation(candidate);
            Outcome::Moved
        } else {
            Outcome::Rejected
        }
    }

    fn rotate(&mut self) -> Outcome {
        let candidate = self.current_piece.rotated_candidate();
        if self.board.is_placement_valid(&candidate.cells) {
            self.current_piece.commit_rotation(candidate);
            Outcome::Moved
        } else {
            Outcome::Rejected
        }
    }

    fn hard_drop(&mut self) -> Outcome {
        let landing = self.current_piece.landing_cells(&self.board);
        self.current_piece.commit_translation(landing);
        self.lock_piece()
    }

    /// Lock the current piece, promote the next one, clear lines, check for defeat
    fn lock_piece(&mut self) -> Outcome {
        let locked = self.current_piece.piece_type;
        self.board.lock(&self.current_piece.cells(), locked);

        let promoted = self.catalog.draw();
        self.current_piece = std::mem::replace(&mut self.next_piece, promoted);
        debug!(
            current = self.current_piece.piece_type.name(),
            next = self.next_piece.piece_type.name(),
            "piece spawned"
        );

        let lines_cleared = self.board.clear_full_lines_and_compact();
        let points = self.score.add_lock(lines_cleared);
        debug!(piece = locked.name(), lines_cleared, points, "piece locked");
        if lines_cleared > 0 {
            info!(lines_cleared, points, total = self.score.points, "lines cleared");
        }

        let blocked = self
            .current_piece
            .cells()
            .iter()
            .any(|&cell| self.board.is_occupied(cell));
        if blocked {
            self.state = GameState::GameOver;
            info!(
                score = self.score.points,
                lines = self.score.lines,
                pieces = self.score.pieces,
                "defeat"
            );
            return Outcome::Defeat;
        }

        Outcome::Locked {
            lines_cleared,
            points,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_game_over(&self) -> bool {
        self.state == GameState::GameOver
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn current_piece(&self) -> &Piece {
        &self.current_piece
    }

    pub fn next_piece(&self) -> &Piece {
        &self.next_piece
    }

    pub fn occupied(&self, cell: Cell) -> bool {
        self.board.is_occupied(cell)
    }

    /// Ghost position of the falling piece
    pub fn landing_cells(&self) -> [Cell; 4] {
        self.current_piece.landing_cells(&self.board)
    }

    /// Read-only view for the host
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(
            &self.board,
            &self.current_piece,
            &self.next_piece,
            self.score,
            self.state,
        )
    }
}

#[cfg(test)]
impl<R: Rng> Game<R> {
    fn set_current(&mut self, piece_type: TetrominoType) {
        self.current_piece = self.catalog.spawn(piece_type);
    }

    fn set_next(&mut self, piece_type: TetrominoType) {
        self.next_piece = self.catalog.spawn(piece_type);
    }

    fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}
