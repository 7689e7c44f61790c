//! Attack detection: is a given color's king attacked, and from where.
//! Also home to the scoped simulate-and-restore helper every legality test
//! goes through.

use crate::board::Board;
use crate::types::{CheckState, Color, PieceKind, Square};

impl Board {
    /// Whether `color`'s king is attacked by any enemy piece. With
    /// `record_state` set, the board's check state is updated to match
    /// (including clearing it when no attack is found).
    pub fn is_in_check(&mut self, color: Color, record_state: bool) -> bool {
        match self.king_attack_square(color) {
            Some(square) => {
                if record_state {
                    self.check_state = CheckState::InCheck { square };
                }
                true
            }
            None => {
                if record_state {
                    self.check_state = CheckState::NotInCheck;
                }
                false
            }
        }
    }

    /// Scan every enemy piece's direction vectors; return the king's square
    /// when some vector reaches it. Pawns attack only along their diagonal
    /// vectors; sliders walk a vector until the first occupied square.
    pub(crate) fn king_attack_square(&self, color: Color) -> Option<Square> {
        for rank in 0..8 {
            for file in 0..8 {
                let from = Square::new(rank, file);
                let piece = match self.piece_at(from) {
                    Some(p) if p.color != color => p,
                    _ => continue,
                };

                for &(d_rank, d_file) in piece.directions() {
                    if piece.kind.is_sliding() {
                        let mut target = from.offset(d_rank, d_file);
                        while target.is_valid() {
                            match self.piece_at(target) {
                                Some(p) => {
                                    if p.kind == PieceKind::King && p.color == color {
                                        return Some(target);
                                    }
                                    break;
                                }
                                None => target = target.offset(d_rank, d_file),
                            }
                        }
                    } else {
                        if piece.kind == PieceKind::Pawn && d_file == 0 {
                            // forward pawn vectors never attack
                            continue;
                        }
                        let target = from.offset(d_rank, d_file);
                        if !target.is_valid() {
                            continue;
                        }
                        if let Some(p) = self.piece_at(target) {
                            if p.kind == PieceKind::King && p.color == color {
                                return Some(target);
                            }
                        }
                    }
                }
            }
        }
        None
    }

    /// Legality test for a candidate move: relocate the piece, ask whether
    /// its own king is attacked, then restore both squares. The restore
    /// sits on the single exit path so no outcome can leave the grid
    /// mutated.
    pub(crate) fn safe_after(&mut self, from: Square, to: Square) -> bool {
        let piece = match self.piece_at(from) {
            Some(p) => p,
            None => return false,
        };
        let displaced = self.piece_at(to);
        if matches!(displaced, Some(t) if t.color == piece.color) {
            return false;
        }

        self.set_square(from, None);
        self.set_square(to, Some(piece));

        let safe = self.king_attack_square(piece.color).is_none();

        self.set_square(to, displaced);
        self.set_square(from, Some(piece));
        safe
    }
}

#[cfg(test)]
#[path = "attacks_tests.rs"]
mod attacks_tests;
