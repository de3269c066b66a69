//! TETRS engine - the rules of a falling-block puzzle without any of the drawing.
//!
//! A host owns the window, the timer and the keyboard. It calls
//! [`Game::tick`] on its gravity cadence and [`Game::handle_input`] for each
//! [`Command`], then draws from [`Game::snapshot`].
//!
//! ```
//! use tetrs_engine::{Command, Game, Outcome};
//!
//! let mut game = Game::with_seed(10, 20, 42);
//! game.handle_input(Command::MoveLeft);
//! while game.tick() == Outcome::Moved {}
//! assert_eq!(game.snapshot().pieces_locked, 1);
//! ```

pub mod board;
pub mod catalog;
pub mod game;
pub mod input;
pub mod piece;
pub mod score;
pub mod settings;
pub mod snapshot;
pub mod tetromino;

pub use board::{Block, Board};
pub use catalog::PieceCatalog;
pub use game::{Command, Game, GameState, Outcome};
pub use input::KeyMap;
pub use piece::{Piece, RotationCandidate};
pub use score::{line_clear_points, Score};
pub use settings::{Settings, SettingsError};
pub use snapshot::{PieceSnapshot, Snapshot};
pub use tetromino::{Cell, RotationDirection, RotationPolicy, TetrominoType};
