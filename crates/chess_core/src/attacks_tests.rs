use super::*;

#[test]
fn test_knight_attacks() {
    // Knight on e4 should attack 8 squares
    let attacks = piece_attacks(Piece::Knight, Color::White, Square::E4, BitBoard::EMPTY);
    assert_eq!(attacks.len(), 8);

    // Knight on a1 should attack 2 squares
    let attacks = piece_attacks(Piece::Knight, Color::White, Square::A1, BitBoard::EMPTY);
    assert_eq!(attacks.len(), 2);
    assert!(attacks.has(Square::C2));
    assert!(attacks.has(Square::B3));
}

#[test]
fn test_king_attacks() {
    let attacks = piece_attacks(Piece::King, Color::Black, Square::E4, BitBoard::EMPTY);
    assert_eq!(attacks.len(), 8);

    let attacks = piece_attacks(Piece::King, Color::Black, Square::A1, BitBoard::EMPTY);
    assert_eq!(attacks.len(), 3);
}

#[test]
fn test_pawn_attacks_depend_on_color() {
    // White pawn on e4 attacks d5 and f5
    let attacks = piece_attacks(Piece::Pawn, Color::White, Square::E4, BitBoard::EMPTY);
    assert_eq!(attacks.len(), 2);
    assert!(attacks.has(Square::D5));
    assert!(attacks.has(Square::F5));

    // Black pawn on e4 attacks d3 and f3
    let attacks = piece_attacks(Piece::Pawn, Color::Black, Square::E4, BitBoard::EMPTY);
    assert!(attacks.has(Square::D3));
    assert!(attacks.has(Square::F3));

    // White pawn on a2 attacks only b3
    let attacks = piece_attacks(Piece::Pawn, Color::White, Square::A2, BitBoard::EMPTY);
    assert_eq!(attacks.len(), 1);
    assert!(attacks.has(Square::B3));
}

#[test]
fn test_sliders_on_empty_board() {
    let e4 = Square::E4;
    assert_eq!(piece_attacks(Piece::Rook, Color::White, e4, BitBoard::EMPTY).len(), 14);
    assert_eq!(piece_attacks(Piece::Bishop, Color::White, e4, BitBoard::EMPTY).len(), 13);
    assert_eq!(piece_attacks(Piece::Queen, Color::White, e4, BitBoard::EMPTY).len(), 27);
}

#[test]
fn test_rook_attacks_with_blockers() {
    // Rook on a1, blocker on a4
    let occupied = Square::A4.bitboard();
    let attacks = piece_attacks(Piece::Rook, Color::White, Square::A1, occupied);
    assert!(attacks.has(Square::A2));
    assert!(attacks.has(Square::A3));
    assert!(attacks.has(Square::A4)); // blocker is included
    assert!(!attacks.has(Square::A5)); // beyond the blocker
    assert!(attacks.has(Square::B1));
    assert!(attacks.has(Square::H1));
}
