//! Interface to an external move-suggestion service. The service accepts a
//! position string plus a search depth and mode, and answers with a
//! four/five-character move token (origin file, origin rank, destination
//! file, destination rank, optional promotion letter). This crate owns the
//! query/response data model and the token translation; network transport
//! and retries belong to the caller.

use chess_rules::{Board, MoveError, PieceKind, Square};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Search depth the service is asked for when the caller has no opinion.
pub const DEFAULT_DEPTH: u8 = 13;
pub const DEFAULT_MODE: &str = "bestmove";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SuggestionQuery {
    #[serde(rename = "FEN")]
    pub fen: String,
    pub depth: u8,
    pub mode: String,
}

impl SuggestionQuery {
    /// A best-move query for the given position with the default depth.
    pub fn best_move(fen: &str) -> Self {
        SuggestionQuery {
            fen: fen.to_string(),
            depth: DEFAULT_DEPTH,
            mode: DEFAULT_MODE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SuggestionResponse {
    pub success: bool,
    /// Space-separated payload; the move token is the second field, e.g.
    /// "bestmove e2e4 ponder e7e5".
    #[serde(default)]
    pub data: Option<String>,
}

/// A move decoded from a service token, ready to hand to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestedMove {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceKind>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SuggestionError {
    #[error("malformed move token: {0:?}")]
    MalformedToken(String),

    #[error("suggestion response carried no move data")]
    MissingData,
}

/// Decode a move token such as `e2e4` or `e7e8q`.
pub fn parse_move_token(token: &str) -> Result<SuggestedMove, SuggestionError> {
    let token = token.trim();
    let malformed = || SuggestionError::MalformedToken(token.to_string());

    if !token.is_ascii() || !(4..=5).contains(&token.len()) {
        return Err(malformed());
    }
    let from = Square::from_algebraic(&token[0..2]).ok_or_else(malformed)?;
    let to = Square::from_algebraic(&token[2..4]).ok_or_else(malformed)?;

    let promotion = match token.as_bytes().get(4) {
        None => None,
        Some(letter) => Some(match letter.to_ascii_lowercase() {
            b'n' => PieceKind::Knight,
            b'b' => PieceKind::Bishop,
            b'r' => PieceKind::Rook,
            b'q' => PieceKind::Queen,
            _ => return Err(malformed()),
        }),
    };

    Ok(SuggestedMove {
        from,
        to,
        promotion,
    })
}

/// Pull the suggested move out of a service response.
pub fn best_move_from_response(
    response: &SuggestionResponse,
) -> Result<SuggestedMove, SuggestionError> {
    let data = response
        .data
        .as_deref()
        .filter(|d| !d.trim().is_empty())
        .ok_or(SuggestionError::MissingData)?;
    let token = data
        .split_whitespace()
        .nth(1)
        .ok_or_else(|| SuggestionError::MalformedToken(data.to_string()))?;
    parse_move_token(token)
}

/// Apply a decoded suggestion to the engine. Legality is still the
/// engine's call; an off-book suggestion surfaces as a `MoveError`.
pub fn apply_suggestion(board: &mut Board, suggestion: SuggestedMove) -> Result<(), MoveError> {
    board.play(suggestion.from, suggestion.to, suggestion.promotion)
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod lib_tests;
