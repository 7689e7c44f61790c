//! Position encoder: renders board state as a Forsyth-Edwards Notation
//! line. Encoding is one-way; the engine only ever constructs the standard
//! start position and mutates it through the move executor.

use crate::piece::Piece;
use crate::types::{Color, LastMove, PieceKind, Square};

pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

pub type Grid = [[Option<Piece>; 8]; 8];

/// Build the six-field FEN string for the given state. `halfmove_clock` is
/// a ply count (resets on pawn moves and captures).
pub fn encode(
    grid: &Grid,
    side_to_move: Color,
    last_move: Option<&LastMove>,
    halfmove_clock: u32,
    fullmove_number: u32,
) -> String {
    let mut fen = String::new();

    for rank in (0..8).rev() {
        let mut empty = 0;
        for file in 0..8 {
            match grid[rank][file] {
                None => empty += 1,
                Some(piece) => {
                    if empty > 0 {
                        fen.push_str(&empty.to_string());
                        empty = 0;
                    }
                    fen.push(piece.symbol());
                }
            }
        }
        if empty > 0 {
            fen.push_str(&empty.to_string());
        }
        if rank > 0 {
            fen.push('/');
        }
    }

    fen.push(' ');
    fen.push(match side_to_move {
        Color::White => 'w',
        Color::Black => 'b',
    });

    fen.push(' ');
    fen.push_str(&castling_availability(grid));

    fen.push(' ');
    fen.push_str(&en_passant_target(last_move));

    fen.push_str(&format!(" {halfmove_clock} {fullmove_number}"));
    fen
}

/// Castling rights derived purely from the has-moved flags of each king and
/// corner rook, not from current path occupancy.
fn castling_availability(grid: &Grid) -> String {
    let mut rights = String::new();

    for color in [Color::White, Color::Black] {
        let rank = color.home_rank() as usize;
        let king_ok = matches!(
            grid[rank][4],
            Some(p) if p.kind == PieceKind::King && !p.has_moved
        );
        if !king_ok {
            continue;
        }
        let unmoved_rook = |file: usize| {
            matches!(
                grid[rank][file],
                Some(p) if p.kind == PieceKind::Rook && !p.has_moved
            )
        };
        if unmoved_rook(7) {
            rights.push(if color == Color::White { 'K' } else { 'k' });
        }
        if unmoved_rook(0) {
            rights.push(if color == Color::White { 'Q' } else { 'q' });
        }
    }

    if rights.is_empty() {
        rights.push('-');
    }
    rights
}

/// The square a pawn skipped over, if the last move was a double push.
fn en_passant_target(last_move: Option<&LastMove>) -> String {
    match last_move {
        Some(last) if last.is_double_pawn_push() => {
            let skipped = Square::new((last.from.rank + last.to.rank) / 2, last.from.file);
            skipped.to_string()
        }
        _ => "-".to_string(),
    }
}

#[cfg(test)]
#[path = "fen_tests.rs"]
mod fen_tests;
