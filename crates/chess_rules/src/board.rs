//! Board state and the move executor, the engine's single mutation entry
//! point. All derived state (check, safe squares, FEN, repetition counts,
//! termination) is refreshed here after every executed move.

use std::collections::BTreeMap;

use crate::endgame::GameOutcome;
use crate::error::MoveError;
use crate::fen::{self, Grid, START_FEN};
use crate::piece::Piece;
use crate::repetition::RepetitionTracker;
use crate::types::{CheckState, Color, LastMove, PieceKind, Square};

/// Legal destinations for the side to move, keyed by origin square.
/// Origins with no legal destination are omitted.
pub type SafeSquares = BTreeMap<Square, Vec<Square>>;

#[derive(Clone, Debug)]
pub struct Board {
    pub(crate) grid: Grid,
    pub(crate) side_to_move: Color,
    pub(crate) last_move: Option<LastMove>,
    pub(crate) check_state: CheckState,
    /// Plies since the last pawn move or capture (fifty-move rule).
    halfmove_clock: u32,
    fullmove_number: u32,
    safe_squares: SafeSquares,
    repetition: RepetitionTracker,
    outcome: Option<GameOutcome>,
    fen: String,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Standard starting position with the initial safe-squares table.
    pub fn new() -> Self {
        let mut grid: Grid = [[None; 8]; 8];

        for file in 0..8 {
            grid[1][file] = Some(Piece::new(PieceKind::Pawn, Color::White));
            grid[6][file] = Some(Piece::new(PieceKind::Pawn, Color::Black));
        }
        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (file, &kind) in back.iter().enumerate() {
            grid[0][file] = Some(Piece::new(kind, Color::White));
            grid[7][file] = Some(Piece::new(kind, Color::Black));
        }

        let mut board = Board {
            grid,
            side_to_move: Color::White,
            last_move: None,
            check_state: CheckState::NotInCheck,
            halfmove_clock: 0,
            fullmove_number: 1,
            safe_squares: SafeSquares::new(),
            repetition: RepetitionTracker::new(),
            outcome: None,
            fen: START_FEN.to_string(),
        };
        board.safe_squares = board.find_safe_squares();
        board
    }

    // ------------------------------------------------------------------
    // Read-only view
    // ------------------------------------------------------------------

    /// The 8x8 grid as optional notation characters, rank 0 first.
    pub fn view(&self) -> [[Option<char>; 8]; 8] {
        let mut out = [[None; 8]; 8];
        for rank in 0..8 {
            for file in 0..8 {
                out[rank][file] = self.grid[rank][file].map(|p| p.symbol());
            }
        }
        out
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn last_move(&self) -> Option<&LastMove> {
        self.last_move.as_ref()
    }

    pub fn check_state(&self) -> CheckState {
        self.check_state
    }

    pub fn safe_squares(&self) -> &SafeSquares {
        &self.safe_squares
    }

    pub fn fen(&self) -> &str {
        &self.fen
    }

    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    pub fn is_game_over(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn outcome(&self) -> Option<&GameOutcome> {
        self.outcome.as_ref()
    }

    pub fn game_over_message(&self) -> Option<String> {
        self.outcome.as_ref().map(|o| o.to_string())
    }

    pub(crate) fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.grid[sq.rank as usize][sq.file as usize]
    }

    pub(crate) fn set_square(&mut self, sq: Square, piece: Option<Piece>) {
        self.grid[sq.rank as usize][sq.file as usize] = piece;
    }

    // ------------------------------------------------------------------
    // Move executor
    // ------------------------------------------------------------------

    /// Execute a move for the side to move. `promotion` picks the piece a
    /// pawn becomes on the final rank; kinds other than knight, bishop and
    /// rook promote to a queen.
    pub fn play(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> Result<(), MoveError> {
        if let Some(outcome) = &self.outcome {
            return Err(MoveError::GameOver(outcome.to_string()));
        }
        if !from.is_valid() {
            return Err(MoveError::OutOfRange(from));
        }
        if !to.is_valid() {
            return Err(MoveError::OutOfRange(to));
        }

        let mut piece = match self.piece_at(from) {
            Some(p) if p.color == self.side_to_move => p,
            _ => return Err(MoveError::IllegalMove { from, to }),
        };
        let is_safe = self
            .safe_squares
            .get(&from)
            .is_some_and(|dests| dests.contains(&to));
        if !is_safe {
            return Err(MoveError::IllegalMove { from, to });
        }

        if matches!(
            piece.kind,
            PieceKind::Pawn | PieceKind::King | PieceKind::Rook
        ) {
            piece.mark_moved();
        }

        let is_capture = self.piece_at(to).is_some();
        if piece.kind == PieceKind::Pawn || is_capture {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock += 1;
        }

        self.apply_special_moves(piece, from, to);

        let final_rank = match piece.color {
            Color::White => 7,
            Color::Black => 0,
        };
        let placed = match promotion {
            Some(kind) if piece.kind == PieceKind::Pawn && to.rank == final_rank => {
                self.promoted_piece(kind, piece.color)
            }
            _ => piece,
        };
        self.set_square(to, Some(placed));
        self.set_square(from, None);

        self.last_move = Some(LastMove { piece, from, to });
        self.side_to_move = self.side_to_move.other();
        self.is_in_check(self.side_to_move, true);
        self.safe_squares = self.find_safe_squares();

        if self.side_to_move == Color::White {
            self.fullmove_number += 1;
        }
        self.fen = fen::encode(
            &self.grid,
            self.side_to_move,
            self.last_move.as_ref(),
            self.halfmove_clock,
            self.fullmove_number,
        );
        self.repetition.record(&self.fen);
        self.outcome = self.evaluate_termination();
        Ok(())
    }

    /// Castling relocates the rook next to the king's new square; an
    /// en-passant capture removes the passed pawn. Both run before the
    /// main piece is placed.
    fn apply_special_moves(&mut self, piece: Piece, from: Square, to: Square) {
        if piece.kind == PieceKind::King && (to.file - from.file).abs() == 2 {
            let rook_from = Square::new(from.rank, if to.file > from.file { 7 } else { 0 });
            let rook_to = Square::new(from.rank, if to.file > from.file { 5 } else { 3 });
            if let Some(mut rook) = self.piece_at(rook_from) {
                rook.mark_moved();
                self.set_square(rook_from, None);
                self.set_square(rook_to, Some(rook));
            }
        } else if piece.kind == PieceKind::Pawn {
            if let Some(last) = self.last_move {
                if last.is_double_pawn_push() && from.rank == last.to.rank && to.file == last.to.file
                {
                    self.set_square(last.to, None);
                }
            }
        }
    }

    fn promoted_piece(&self, kind: PieceKind, color: Color) -> Piece {
        let kind = match kind {
            PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook => kind,
            _ => PieceKind::Queen,
        };
        // Promoted pieces have moved: a freshly minted corner rook must not
        // resurrect a castling right in the position string.
        let mut piece = Piece::new(kind, color);
        piece.mark_moved();
        piece
    }

    pub(crate) fn repetition(&self) -> &RepetitionTracker {
        &self.repetition
    }

    /// Test-only constructor for arbitrary positions; derived state is
    /// computed the same way the executor would.
    #[cfg(test)]
    pub(crate) fn from_grid(grid: Grid, side_to_move: Color) -> Self {
        let mut board = Board {
            grid,
            side_to_move,
            last_move: None,
            check_state: CheckState::NotInCheck,
            halfmove_clock: 0,
            fullmove_number: 1,
            safe_squares: SafeSquares::new(),
            repetition: RepetitionTracker::new(),
            outcome: None,
            fen: String::new(),
        };
        board.is_in_check(side_to_move, true);
        board.safe_squares = board.find_safe_squares();
        board.fen = fen::encode(&board.grid, side_to_move, None, 0, 1);
        board
    }

    #[cfg(test)]
    pub(crate) fn set_halfmove_clock(&mut self, plies: u32) {
        self.halfmove_clock = plies;
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
