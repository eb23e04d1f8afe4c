use super::*;

#[test]
fn test_initial_position() {
    let b = Board::initial();
    assert_eq!(b.cell(44), Cell::White);
    assert_eq!(b.cell(45), Cell::Black);
    assert_eq!(b.cell(54), Cell::Black);
    assert_eq!(b.cell(55), Cell::White);
    assert_eq!(b.count(Player::Black), 2);
    assert_eq!(b.count(Player::White), 2);
    assert_eq!(b.count_empty(), 60);
}

#[test]
fn test_sentinel_ring() {
    let b = Board::initial();
    for sq in 0..100u8 {
        if is_play_square(sq) {
            assert_ne!(b.cell(sq), Cell::Outer, "play square {sq}");
        } else {
            assert_eq!(b.cell(sq), Cell::Outer, "border square {sq}");
        }
    }
    assert_eq!(play_squares().count(), 64);
}

#[test]
fn test_play_square_predicate() {
    assert!(is_play_square(11));
    assert!(is_play_square(88));
    assert!(is_play_square(34));
    assert!(!is_play_square(10));
    assert!(!is_play_square(19));
    assert!(!is_play_square(9));
    assert!(!is_play_square(89));
    assert!(!is_play_square(90));
    assert!(!is_play_square(200));
}

#[test]
fn test_coordinates() {
    assert_eq!(coord_to_sq("34"), Some(34));
    assert_eq!(coord_to_sq(" 88 "), Some(88));
    assert_eq!(coord_to_sq("09"), None);
    assert_eq!(coord_to_sq("90"), None);
    assert_eq!(coord_to_sq("3a"), None);
    assert_eq!(coord_to_sq("345"), None);
    assert_eq!(sq_to_coord(56), "56");
    assert_eq!(square(3, 4), Some(34));
    assert_eq!(square(0, 4), None);
    assert_eq!(Move::Play(46).to_string(), "46");
    assert_eq!(Move::Pass.to_string(), "pass");
}

#[test]
fn test_display_matches_layout() {
    let text = Board::initial().to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 9);
    assert_eq!(lines[0], "   1 2 3 4 5 6 7 8");
    assert_eq!(lines[4], "4  . . . o @ . . .");
    assert_eq!(lines[5], "5  . . . @ o . . .");
}

#[test]
fn test_parse_round_trips_initial() {
    let b: Board = "........ ........ ........ ...o@... ...@o... ........ ........ ........"
        .parse()
        .unwrap();
    assert_eq!(b, Board::initial());
}

#[test]
fn test_parse_errors() {
    assert_eq!(
        "........".parse::<Board>(),
        Err(BoardParseError::RowCount(1))
    );
    let bad_width = "......./......../......../......../......../......../......../........";
    assert_eq!(
        bad_width.parse::<Board>(),
        Err(BoardParseError::RowWidth { row: 1, len: 7 })
    );
    let bad_symbol = "x......./......../......../......../......../......../......../........";
    assert_eq!(bad_symbol.parse::<Board>(), Err(BoardParseError::Symbol('x')));
}
