use crate::types::Square;
use thiserror::Error;

/// Errors reported by the move executor, the engine's single error
/// boundary. Everything else in the crate is total over a well-formed
/// board and returns empty results instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("game is over: {0}")]
    GameOver(String),

    #[error("illegal move: {from} -> {to}")]
    IllegalMove { from: Square, to: Square },

    #[error("square {0} is outside the board")]
    OutOfRange(Square),
}
