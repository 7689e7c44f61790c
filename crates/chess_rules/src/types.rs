use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Rank direction a pawn of this color advances in.
    pub fn forward(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Rank holding this color's king and rooks at game start.
    pub fn home_rank(self) -> i8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// A board coordinate. Rank 0 is White's first rank, file 0 is the a-file.
/// Values outside 0..8 are representable so that direction arithmetic can
/// run off the edge and be rejected by `is_valid`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square {
    pub rank: i8,
    pub file: i8,
}

impl Square {
    pub fn new(rank: i8, file: i8) -> Self {
        Square { rank, file }
    }

    pub fn is_valid(self) -> bool {
        (0..8).contains(&self.rank) && (0..8).contains(&self.file)
    }

    pub fn offset(self, d_rank: i8, d_file: i8) -> Square {
        Square {
            rank: self.rank + d_rank,
            file: self.file + d_file,
        }
    }

    /// Square-color parity: true for one color class of the checkerboard.
    /// Used by the insufficient-material rules.
    pub fn is_dark(self) -> bool {
        (self.rank % 2 == 0) == (self.file % 2 == 0)
    }

    pub fn from_algebraic(s: &str) -> Option<Square> {
        let b = s.as_bytes();
        if b.len() != 2 {
            return None;
        }
        if !(b'a'..=b'h').contains(&b[0]) || !(b'1'..=b'8').contains(&b[1]) {
            return None;
        }
        Some(Square {
            rank: (b[1] - b'1') as i8,
            file: (b[0] - b'a') as i8,
        })
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            let file = (b'a' + self.file as u8) as char;
            let rank = (b'1' + self.rank as u8) as char;
            write!(f, "{file}{rank}")
        } else {
            write!(f, "({},{})", self.rank, self.file)
        }
    }
}

/// The most recently executed move, kept for en passant detection and the
/// en-passant field of the position string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LastMove {
    pub piece: crate::piece::Piece,
    pub from: Square,
    pub to: Square,
}

impl LastMove {
    pub fn is_double_pawn_push(&self) -> bool {
        self.piece.kind == PieceKind::Pawn && (self.to.rank - self.from.rank).abs() == 2
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CheckState {
    NotInCheck,
    /// The side to move is in check; `square` is its king's location.
    InCheck { square: Square },
}

impl CheckState {
    pub fn is_in_check(self) -> bool {
        matches!(self, CheckState::InCheck { .. })
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
