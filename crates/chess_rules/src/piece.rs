//! Piece movement capability. Direction vectors are (rank, file)
//! displacements; sliding pieces repeat a vector until blocked, stepping
//! pieces apply it once. No board knowledge lives here.

use crate::types::{Color, PieceKind};

const WHITE_PAWN_FRESH: [(i8, i8); 4] = [(1, 0), (2, 0), (1, 1), (1, -1)];
const WHITE_PAWN_MOVED: [(i8, i8); 3] = [(1, 0), (1, 1), (1, -1)];
const BLACK_PAWN_FRESH: [(i8, i8); 4] = [(-1, 0), (-2, 0), (-1, 1), (-1, -1)];
const BLACK_PAWN_MOVED: [(i8, i8); 3] = [(-1, 0), (-1, 1), (-1, -1)];

const KNIGHT_DIRS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];

const BISHOP_DIRS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const ROOK_DIRS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

const ROYAL_DIRS: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

impl PieceKind {
    /// Sliding pieces repeat their vectors until blocked.
    pub fn is_sliding(self) -> bool {
        matches!(self, PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    /// One-way flag, meaningful for King, Rook and Pawn only.
    pub has_moved: bool,
}

impl Piece {
    pub fn new(kind: PieceKind, color: Color) -> Self {
        Piece {
            kind,
            color,
            has_moved: false,
        }
    }

    /// Direction vectors for this piece in its current state. A pure
    /// function of (kind, color, has_moved): an unmoved pawn keeps its
    /// double-step vector, a moved one loses it.
    pub fn directions(&self) -> &'static [(i8, i8)] {
        match (self.kind, self.color, self.has_moved) {
            (PieceKind::Pawn, Color::White, false) => &WHITE_PAWN_FRESH,
            (PieceKind::Pawn, Color::White, true) => &WHITE_PAWN_MOVED,
            (PieceKind::Pawn, Color::Black, false) => &BLACK_PAWN_FRESH,
            (PieceKind::Pawn, Color::Black, true) => &BLACK_PAWN_MOVED,
            (PieceKind::Knight, ..) => &KNIGHT_DIRS,
            (PieceKind::Bishop, ..) => &BISHOP_DIRS,
            (PieceKind::Rook, ..) => &ROOK_DIRS,
            (PieceKind::Queen, ..) | (PieceKind::King, ..) => &ROYAL_DIRS,
        }
    }

    /// FEN notation character, uppercase for White.
    pub fn symbol(&self) -> char {
        let ch = match self.kind {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };
        match self.color {
            Color::White => ch.to_ascii_uppercase(),
            Color::Black => ch,
        }
    }

    pub fn mark_moved(&mut self) {
        self.has_moved = true;
    }
}

#[cfg(test)]
#[path = "piece_tests.rs"]
mod piece_tests;
