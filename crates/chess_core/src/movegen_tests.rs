use super::*;
use crate::facts::MoveFacts;
use cozy_chess::{Piece, Square};

fn board(fen: &str) -> Board {
    Board::from_fen(fen, false).expect("valid FEN")
}

#[test]
fn test_startpos_moves() {
    let moves = legal_moves(&Board::default());
    // Starting position has 20 legal moves
    assert_eq!(moves.len(), 20);
}

#[test]
fn test_kiwipete_moves() {
    // Kiwipete position - complex with many move types
    let pos = board("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1");
    assert_eq!(legal_moves(&pos).len(), 48);
}

#[test]
fn test_move_order_is_stable() {
    let pos = board("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1");
    let mut buf = vec![Move {
        from: Square::A1,
        to: Square::A2,
        promotion: None,
    }];
    legal_moves_into(&pos, &mut buf);
    assert_eq!(buf, legal_moves(&pos));
}

#[test]
fn test_facts_plain_capture() {
    let pos = board("k7/8/8/8/8/3q4/4P3/7K w - - 0 1");
    let mv = Move {
        from: Square::E2,
        to: Square::D3,
        promotion: None,
    };
    let facts = MoveFacts::of(&pos, mv).unwrap();
    assert_eq!(facts.piece, Piece::Pawn);
    assert_eq!(facts.captured, Some(Piece::Queen));
    assert_eq!(facts.landing, Square::D3);
    assert!(!facts.is_castle);
}

#[test]
fn test_facts_en_passant() {
    let pos = board("rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3");
    let mv = Move {
        from: Square::E5,
        to: Square::F6,
        promotion: None,
    };
    assert!(legal_moves(&pos).contains(&mv));
    let facts = MoveFacts::of(&pos, mv).unwrap();
    assert_eq!(facts.captured, Some(Piece::Pawn));
}

#[test]
fn test_facts_castling_lands_on_king_square() {
    let pos = board("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    let short = Move {
        from: Square::E1,
        to: Square::H1,
        promotion: None,
    };
    let long = Move {
        from: Square::E1,
        to: Square::A1,
        promotion: None,
    };
    let moves = legal_moves(&pos);
    assert!(moves.contains(&short));
    assert!(moves.contains(&long));

    let facts = MoveFacts::of(&pos, short).unwrap();
    assert!(facts.is_castle);
    assert_eq!(facts.captured, None);
    assert_eq!(facts.landing, Square::G1);
    assert_eq!(MoveFacts::of(&pos, long).unwrap().landing, Square::C1);
}

#[test]
fn test_facts_promotion() {
    let pos = board("8/P7/8/8/8/8/8/k6K w - - 0 1");
    let mv = Move {
        from: Square::A7,
        to: Square::A8,
        promotion: Some(Piece::Queen),
    };
    assert!(legal_moves(&pos).contains(&mv));
    let facts = MoveFacts::of(&pos, mv).unwrap();
    assert_eq!(facts.promotion, Some(Piece::Queen));
    assert_eq!(facts.captured, None);
}

#[test]
fn test_facts_empty_start_square() {
    let mv = Move {
        from: Square::E4,
        to: Square::E5,
        promotion: None,
    };
    assert!(MoveFacts::of(&Board::default(), mv).is_none());
}
