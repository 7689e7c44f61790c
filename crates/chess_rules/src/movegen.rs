//! Legal move generation: the safe-squares table for the side to move,
//! plus castling and en-passant eligibility. Every candidate destination
//! passes through the simulate-and-restore king-safety test in `attacks`.

use crate::board::{Board, SafeSquares};
use crate::piece::Piece;
use crate::types::{Color, PieceKind, Square};

impl Board {
    /// Compute the legal destinations of every piece of the side to move.
    /// Pure with respect to the board: the scoped simulation windows inside
    /// always restore, so calling this twice yields the same table.
    pub(crate) fn find_safe_squares(&mut self) -> SafeSquares {
        let mut table = SafeSquares::new();

        for rank in 0..8 {
            for file in 0..8 {
                let from = Square::new(rank, file);
                let piece = match self.piece_at(from) {
                    Some(p) if p.color == self.side_to_move => p,
                    _ => continue,
                };

                let mut dests: Vec<Square> = Vec::new();
                for &(d_rank, d_file) in piece.directions() {
                    if piece.kind.is_sliding() {
                        self.walk_slider(piece, from, d_rank, d_file, &mut dests);
                    } else {
                        self.step_once(piece, from, d_rank, d_file, &mut dests);
                    }
                }

                if piece.kind == PieceKind::King {
                    if self.can_castle(piece.color, true) {
                        dests.push(Square::new(rank, 6));
                    }
                    if self.can_castle(piece.color, false) {
                        dests.push(Square::new(rank, 2));
                    }
                } else if piece.kind == PieceKind::Pawn {
                    if let Some(last) = self.last_move {
                        if self.can_capture_en_passant(piece, from) {
                            dests.push(Square::new(
                                from.rank + piece.color.forward(),
                                last.to.file,
                            ));
                        }
                    }
                }

                if !dests.is_empty() {
                    table.insert(from, dests);
                }
            }
        }
        table
    }

    /// One step of a pawn, knight or king, after the movement filters.
    fn step_once(
        &mut self,
        piece: Piece,
        from: Square,
        d_rank: i8,
        d_file: i8,
        dests: &mut Vec<Square>,
    ) {
        let target = from.offset(d_rank, d_file);
        if !target.is_valid() {
            return;
        }
        let occupant = self.piece_at(target);
        if matches!(occupant, Some(p) if p.color == piece.color) {
            return;
        }

        if piece.kind == PieceKind::Pawn {
            if d_file == 0 {
                // forward steps need empty squares all the way
                if occupant.is_some() {
                    return;
                }
                if d_rank.abs() == 2 && self.piece_at(from.offset(d_rank / 2, 0)).is_some() {
                    return;
                }
            } else if occupant.is_none() {
                // an ordinary diagonal step must capture; en passant is a
                // separate synthetic destination
                return;
            }
        }

        if self.safe_after(from, target) {
            dests.push(target);
        }
    }

    /// Walk a slider vector until the first occupied square, inclusive for
    /// enemies, exclusive for friends.
    fn walk_slider(
        &mut self,
        piece: Piece,
        from: Square,
        d_rank: i8,
        d_file: i8,
        dests: &mut Vec<Square>,
    ) {
        let mut target = from.offset(d_rank, d_file);
        while target.is_valid() {
            let occupant = self.piece_at(target);
            if matches!(occupant, Some(p) if p.color == piece.color) {
                break;
            }
            if self.safe_after(from, target) {
                dests.push(target);
            }
            if occupant.is_some() {
                break;
            }
            target = target.offset(d_rank, d_file);
        }
    }

    /// Castling eligibility for `color` on the given wing. Requires an
    /// unmoved king and corner rook, no current check, empty squares
    /// between them (queenside includes the b-file square the king never
    /// crosses), and both king steps individually safe.
    pub(crate) fn can_castle(&mut self, color: Color, king_side: bool) -> bool {
        let rank = color.home_rank();
        let king_sq = Square::new(rank, 4);
        match self.piece_at(king_sq) {
            Some(p) if p.kind == PieceKind::King && p.color == color && !p.has_moved => {}
            _ => return false,
        }
        if self.check_state.is_in_check() {
            return false;
        }

        let rook_sq = Square::new(rank, if king_side { 7 } else { 0 });
        match self.piece_at(rook_sq) {
            Some(p) if p.kind == PieceKind::Rook && p.color == color && !p.has_moved => {}
            _ => return false,
        }

        let step = if king_side { 1 } else { -1 };
        let first = king_sq.offset(0, step);
        let second = king_sq.offset(0, 2 * step);
        if self.piece_at(first).is_some() || self.piece_at(second).is_some() {
            return false;
        }
        if !king_side && self.piece_at(Square::new(rank, 1)).is_some() {
            return false;
        }

        self.safe_after(king_sq, first) && self.safe_after(king_sq, second)
    }

    /// En-passant eligibility for a pawn on `from`: the last move must be
    /// an adjacent-file double pawn push landing on this pawn's rank, and
    /// the capture must not expose the mover's king. The passed pawn is
    /// lifted off the board for the safety test and restored regardless of
    /// the outcome.
    pub(crate) fn can_capture_en_passant(&mut self, pawn: Piece, from: Square) -> bool {
        let last = match self.last_move {
            Some(l) => l,
            None => return false,
        };
        if pawn.kind != PieceKind::Pawn
            || pawn.color != self.side_to_move
            || !last.is_double_pawn_push()
            || (from.file - last.to.file).abs() != 1
            || from.rank != last.to.rank
        {
            return false;
        }

        let target = Square::new(from.rank + pawn.color.forward(), last.to.file);
        let passed = self.piece_at(last.to);
        self.set_square(last.to, None);
        let safe = self.safe_after(from, target);
        self.set_square(last.to, passed);
        safe
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
