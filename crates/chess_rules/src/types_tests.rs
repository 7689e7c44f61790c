use super::*;

#[test]
fn test_square_algebraic_round_trip() {
    for rank in 0..8 {
        for file in 0..8 {
            let sq = Square::new(rank, file);
            let name = sq.to_string();
            assert_eq!(Square::from_algebraic(&name), Some(sq));
        }
    }
    assert_eq!(Square::from_algebraic("e4"), Some(Square::new(3, 4)));
    assert_eq!(Square::from_algebraic("a1"), Some(Square::new(0, 0)));
    assert_eq!(Square::from_algebraic("h8"), Some(Square::new(7, 7)));
}

#[test]
fn test_square_algebraic_rejects_garbage() {
    assert_eq!(Square::from_algebraic(""), None);
    assert_eq!(Square::from_algebraic("e"), None);
    assert_eq!(Square::from_algebraic("i1"), None);
    assert_eq!(Square::from_algebraic("a9"), None);
    assert_eq!(Square::from_algebraic("e44"), None);
}

#[test]
fn test_square_validity() {
    assert!(Square::new(0, 0).is_valid());
    assert!(Square::new(7, 7).is_valid());
    assert!(!Square::new(-1, 0).is_valid());
    assert!(!Square::new(0, 8).is_valid());
    assert!(!Square::new(8, 3).is_valid());
}

#[test]
fn test_square_color_parity() {
    // a1 is a dark square, h1 is light, and neighbors alternate
    assert!(Square::new(0, 0).is_dark());
    assert!(!Square::new(0, 7).is_dark());
    for rank in 0..8 {
        for file in 0..7 {
            assert_ne!(
                Square::new(rank, file).is_dark(),
                Square::new(rank, file + 1).is_dark()
            );
        }
    }
}

#[test]
fn test_color_helpers() {
    assert_eq!(Color::White.other(), Color::Black);
    assert_eq!(Color::Black.other(), Color::White);
    assert_eq!(Color::White.forward(), 1);
    assert_eq!(Color::Black.forward(), -1);
    assert_eq!(Color::White.home_rank(), 0);
    assert_eq!(Color::Black.home_rank(), 7);
}

#[test]
fn test_double_pawn_push_detection() {
    let pawn = crate::piece::Piece::new(PieceKind::Pawn, Color::White);
    let double = LastMove {
        piece: pawn,
        from: Square::new(1, 4),
        to: Square::new(3, 4),
    };
    assert!(double.is_double_pawn_push());

    let single = LastMove {
        piece: pawn,
        from: Square::new(1, 4),
        to: Square::new(2, 4),
    };
    assert!(!single.is_double_pawn_push());

    let knight = LastMove {
        piece: crate::piece::Piece::new(PieceKind::Knight, Color::White),
        from: Square::new(0, 1),
        to: Square::new(2, 2),
    };
    assert!(!knight.is_double_pawn_push());
}
