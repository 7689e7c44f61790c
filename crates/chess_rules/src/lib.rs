//! Deterministic chess-rules engine: board state, legal move generation,
//! move execution with castling/en passant/promotion, check and draw
//! detection, FEN serialization. No search and no evaluation; legality
//! only.

pub mod attacks;
pub mod board;
pub mod endgame;
pub mod error;
pub mod fen;
pub mod movegen;
pub mod piece;
pub mod repetition;
pub mod types;

pub use board::{Board, SafeSquares};
pub use endgame::GameOutcome;
pub use error::MoveError;
pub use fen::START_FEN;
pub use piece::Piece;
pub use repetition::RepetitionTracker;
pub use types::{CheckState, Color, LastMove, PieceKind, Square};
