//! Termination evaluation, run after every executed move. Conditions are
//! checked in a fixed priority order; the first match wins.

use std::fmt;

use crate::board::Board;
use crate::piece::Piece;
use crate::types::{Color, PieceKind, Square};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    Checkmate(Color),
    Stalemate,
    InsufficientMaterial,
    ThreefoldRepetition,
    FiftyMoveRule,
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::Checkmate(winner) => write!(f, "{winner} won by checkmate"),
            GameOutcome::Stalemate => write!(f, "Draw by stalemate"),
            GameOutcome::InsufficientMaterial => write!(f, "Draw by insufficient material"),
            GameOutcome::ThreefoldRepetition => write!(f, "Draw by threefold repetition"),
            GameOutcome::FiftyMoveRule => write!(f, "Draw by fifty move rule"),
        }
    }
}

impl Board {
    /// Priority: insufficient material, then no-legal-moves (checkmate or
    /// stalemate), then threefold repetition, then the fifty-move rule.
    pub(crate) fn evaluate_termination(&self) -> Option<GameOutcome> {
        if self.insufficient_material() {
            return Some(GameOutcome::InsufficientMaterial);
        }
        if self.safe_squares().is_empty() {
            return Some(if self.check_state.is_in_check() {
                // the winner is the side that just moved
                GameOutcome::Checkmate(self.side_to_move.other())
            } else {
                GameOutcome::Stalemate
            });
        }
        if self.repetition().threefold() {
            return Some(GameOutcome::ThreefoldRepetition);
        }
        if self.halfmove_clock() >= 100 {
            return Some(GameOutcome::FiftyMoveRule);
        }
        None
    }

    fn insufficient_material(&self) -> bool {
        let mut white: Vec<(Piece, Square)> = Vec::new();
        let mut black: Vec<(Piece, Square)> = Vec::new();
        for rank in 0..8 {
            for file in 0..8 {
                let sq = Square::new(rank, file);
                if let Some(piece) = self.piece_at(sq) {
                    match piece.color {
                        Color::White => white.push((piece, sq)),
                        Color::Black => black.push((piece, sq)),
                    }
                }
            }
        }

        let (total_white, total_black) = (white.len(), black.len());

        // King vs king
        if total_white == 1 && total_black == 1 {
            return true;
        }

        // King and one minor piece vs lone king
        if total_white == 2 && total_black == 1 {
            return has_minor_piece(&white);
        }
        if total_white == 1 && total_black == 2 {
            return has_minor_piece(&black);
        }

        // Two knights vs lone king cannot force mate
        if total_white == 3 && total_black == 1 && only_two_knights_and_king(&white) {
            return true;
        }
        if total_black == 3 && total_white == 1 && only_two_knights_and_king(&black) {
            return true;
        }

        // Any number of same-square-color bishops vs lone king
        if total_white >= 3 && total_black == 1 && only_same_color_bishops_and_king(&white) {
            return true;
        }
        if total_black >= 3 && total_white == 1 && only_same_color_bishops_and_king(&black) {
            return true;
        }

        // One bishop each, both on the same square color
        if total_white == 2 && total_black == 2 {
            let white_bishop = find_bishop(&white);
            let black_bishop = find_bishop(&black);
            if let (Some(wb), Some(bb)) = (white_bishop, black_bishop) {
                return wb.is_dark() == bb.is_dark();
            }
        }

        false
    }
}

fn has_minor_piece(pieces: &[(Piece, Square)]) -> bool {
    pieces
        .iter()
        .any(|(p, _)| matches!(p.kind, PieceKind::Knight | PieceKind::Bishop))
}

fn only_two_knights_and_king(pieces: &[(Piece, Square)]) -> bool {
    pieces.len() == 3
        && pieces
            .iter()
            .filter(|(p, _)| p.kind == PieceKind::Knight)
            .count()
            == 2
}

fn only_same_color_bishops_and_king(pieces: &[(Piece, Square)]) -> bool {
    let bishops: Vec<Square> = pieces
        .iter()
        .filter(|(p, _)| p.kind == PieceKind::Bishop)
        .map(|&(_, sq)| sq)
        .collect();
    // everything except the king must be a bishop
    if bishops.len() != pieces.len() - 1 {
        return false;
    }
    bishops.iter().all(|sq| sq.is_dark() == bishops[0].is_dark())
}

fn find_bishop(pieces: &[(Piece, Square)]) -> Option<Square> {
    pieces
        .iter()
        .find(|(p, _)| p.kind == PieceKind::Bishop)
        .map(|&(_, sq)| sq)
}

#[cfg(test)]
#[path = "endgame_tests.rs"]
mod endgame_tests;
