use super::*;
use cozy_chess::Square;

#[test]
fn test_startpos_with_moves() {
    let mut board = Board::default();
    set_position_from_uci(&mut board, &["startpos", "moves", "e2e4", "e7e5", "g1f3"]).unwrap();
    assert_eq!(board.side_to_move(), Color::Black);
    assert_eq!(board.piece_on(Square::E4), Some(Piece::Pawn));
    assert_eq!(board.piece_on(Square::F3), Some(Piece::Knight));
}

#[test]
fn test_fen_position() {
    let mut board = Board::default();
    let args = ["fen", "4k3/8/8/8/8/8/8/R3K2R", "w", "K", "-", "0", "1", "moves", "e1g1"];
    set_position_from_uci(&mut board, &args).unwrap();
    assert_eq!(board.piece_on(Square::G1), Some(Piece::King));
    assert_eq!(board.piece_on(Square::F1), Some(Piece::Rook));
}

#[test]
fn test_bad_position_leaves_board_untouched() {
    let mut board = Board::default();
    let err = set_position_from_uci(&mut board, &["startpos", "moves", "e2e5"]).unwrap_err();
    assert_eq!(err, UciError::IllegalMove { mv: "e2e5".into() });
    assert_eq!(board.to_string(), Board::default().to_string());

    assert_eq!(
        set_position_from_uci(&mut board, &[]),
        Err(UciError::MissingPosition)
    );
    assert!(matches!(
        set_position_from_uci(&mut board, &["fen", "not-a-fen"]),
        Err(UciError::InvalidFen { .. })
    ));
}

#[test]
fn test_castling_round_trip() {
    let board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1", false).unwrap();
    let mv = parse_uci_move(&board, "e1c1").unwrap();
    assert_eq!(mv.to, Square::A1);
    assert_eq!(move_to_uci(&board, mv), "e1c1");
}

#[test]
fn test_promotion_notation() {
    let board = Board::from_fen("8/P7/8/8/8/8/8/k6K w - - 0 1", false).unwrap();
    let mv = parse_uci_move(&board, "a7a8n").unwrap();
    assert_eq!(mv.promotion, Some(Piece::Knight));
    assert_eq!(move_to_uci(&board, mv), "a7a8n");
}

#[test]
fn test_parse_go() {
    let limits = parse_go(&["wtime", "60000", "btime", "30000", "winc", "1000"], Color::White);
    assert_eq!(limits.remaining, Some(Duration::from_secs(60)));
    assert_eq!(limits.increment, Duration::from_secs(1));

    let limits = parse_go(&["wtime", "60000", "btime", "30000"], Color::Black);
    assert_eq!(limits.remaining, Some(Duration::from_secs(30)));

    let limits = parse_go(&["movetime", "500"], Color::White);
    assert_eq!(limits.budget(), Some(Duration::from_millis(500)));

    assert_eq!(parse_go(&["infinite"], Color::White), SearchLimits::infinite());
}

#[test]
fn test_option_display() {
    let spin = UciOption::Spin {
        name: "Aggression",
        default: 2,
        min: 0,
        max: 10,
    };
    assert_eq!(
        spin.to_string(),
        "option name Aggression type spin default 2 min 0 max 10"
    );
    let combo = UciOption::Combo {
        name: "Variant",
        default: "refined".into(),
        vars: vec!["refined", "classic"],
    };
    assert_eq!(
        combo.to_string(),
        "option name Variant type combo default refined var refined var classic"
    );
}

#[test]
fn test_parse_setoption() {
    assert_eq!(
        parse_setoption(&["name", "Aggression", "value", "3"]),
        Some(("Aggression".to_string(), "3".to_string()))
    );
    assert_eq!(
        parse_setoption(&["name", "King", "Zone", "value", "ring"]),
        Some(("King Zone".to_string(), "ring".to_string()))
    );
    assert_eq!(
        parse_setoption(&["name", "Clear", "Hash"]),
        Some(("Clear Hash".to_string(), String::new()))
    );
    assert_eq!(
        parse_setoption(&["name", "Aggression", "value"]),
        Some(("Aggression".to_string(), String::new()))
    );
}

#[test]
fn test_parse_setoption_rejects_malformed_input() {
    // `value` ahead of `name` must not slice backwards
    assert_eq!(parse_setoption(&["value", "3", "name", "Aggression"]), None);
    assert_eq!(parse_setoption(&["value", "3"]), None);
    assert_eq!(parse_setoption(&["name"]), None);
    assert_eq!(parse_setoption(&["name", "value", "3"]), None);
    assert_eq!(parse_setoption(&[]), None);
}
