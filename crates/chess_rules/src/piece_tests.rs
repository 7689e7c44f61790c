use super::*;

#[test]
fn test_pawn_loses_double_step_after_moving() {
    let mut pawn = Piece::new(PieceKind::Pawn, Color::White);
    assert!(pawn.directions().contains(&(2, 0)));
    assert_eq!(pawn.directions().len(), 4);

    pawn.mark_moved();
    assert!(!pawn.directions().contains(&(2, 0)));
    assert_eq!(pawn.directions().len(), 3);
}

#[test]
fn test_black_pawn_directions_are_mirrored() {
    let white = Piece::new(PieceKind::Pawn, Color::White);
    let black = Piece::new(PieceKind::Pawn, Color::Black);
    for &(d_rank, d_file) in white.directions() {
        assert!(black.directions().contains(&(-d_rank, d_file)));
    }
}

#[test]
fn test_sliding_classification() {
    assert!(PieceKind::Bishop.is_sliding());
    assert!(PieceKind::Rook.is_sliding());
    assert!(PieceKind::Queen.is_sliding());
    assert!(!PieceKind::Pawn.is_sliding());
    assert!(!PieceKind::Knight.is_sliding());
    assert!(!PieceKind::King.is_sliding());
}

#[test]
fn test_direction_counts() {
    assert_eq!(Piece::new(PieceKind::Knight, Color::White).directions().len(), 8);
    assert_eq!(Piece::new(PieceKind::King, Color::Black).directions().len(), 8);
    assert_eq!(Piece::new(PieceKind::Queen, Color::White).directions().len(), 8);
    assert_eq!(Piece::new(PieceKind::Bishop, Color::Black).directions().len(), 4);
    assert_eq!(Piece::new(PieceKind::Rook, Color::White).directions().len(), 4);
}

#[test]
fn test_symbols() {
    assert_eq!(Piece::new(PieceKind::King, Color::White).symbol(), 'K');
    assert_eq!(Piece::new(PieceKind::King, Color::Black).symbol(), 'k');
    assert_eq!(Piece::new(PieceKind::Knight, Color::White).symbol(), 'N');
    assert_eq!(Piece::new(PieceKind::Pawn, Color::Black).symbol(), 'p');
    assert_eq!(Piece::new(PieceKind::Queen, Color::White).symbol(), 'Q');
    assert_eq!(Piece::new(PieceKind::Bishop, Color::Black).symbol(), 'b');
}

#[test]
fn test_mark_moved_is_one_way() {
    let mut rook = Piece::new(PieceKind::Rook, Color::White);
    assert!(!rook.has_moved);
    rook.mark_moved();
    rook.mark_moved();
    assert!(rook.has_moved);
}
