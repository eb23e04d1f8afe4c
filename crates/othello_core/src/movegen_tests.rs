use super::*;

fn board(s: &str) -> Board {
    s.parse().expect("test board should parse")
}

#[test]
fn test_opening_moves_for_black() {
    let b = Board::initial();
    assert_eq!(legal_moves(Player::Black, &b), vec![34, 43, 56, 65]);
    assert_eq!(legal_moves(Player::White, &b), vec![35, 46, 53, 64]);
    assert!(any_legal_move(Player::Black, &b));
}

#[test]
fn test_find_bracket_basic() {
    let b = Board::initial();
    assert_eq!(find_bracket(34, Player::Black, &b, DOWN), Some(54));
    assert_eq!(find_bracket(34, Player::Black, &b, RIGHT), None);
    // first neighbour is own colour: no bracket
    assert_eq!(find_bracket(35, Player::Black, &b, DOWN), None);
}

#[test]
fn test_find_bracket_stops_at_border() {
    // White run reaching the left edge cannot be bracketed from the right.
    let b = board(
        "oo...... ........ ........ ...o@... ...@o... ........ ........ ........",
    );
    assert_eq!(find_bracket(13, Player::Black, &b, LEFT), None);
    assert!(!is_legal(13, Player::Black, &b));

    let b = board(
        "@oo..... ........ ........ ...o@... ...@o... ........ ........ ........",
    );
    assert_eq!(find_bracket(14, Player::Black, &b, LEFT), Some(11));
    assert!(is_legal(14, Player::Black, &b));
}

#[test]
fn test_find_bracket_run_to_empty() {
    let b = board(
        "........ .o...... ........ ...o@... ...@o... ........ ........ ........",
    );
    // up-left from 33: white at 22, then empty 11
    assert_eq!(find_bracket(33, Player::Black, &b, UP_LEFT), None);
}

#[test]
fn test_is_legal_rejects_occupied_and_border() {
    let b = Board::initial();
    assert!(!is_legal(44, Player::Black, &b));
    assert!(!is_legal(10, Player::Black, &b));
    assert!(!is_legal(0, Player::Black, &b));
    assert!(!is_legal(11, Player::Black, &b));
}

#[test]
fn test_make_move_flips_bracketed_discs() {
    let b = Board::initial();
    let after = make_move(Move::Play(34), Player::Black, &b);
    assert_eq!(after.cell(34), Cell::Black);
    assert_eq!(after.cell(44), Cell::Black);
    assert_eq!(after.cell(55), Cell::White);
    assert_eq!(after.count(Player::Black), 4);
    assert_eq!(after.count(Player::White), 1);
}

#[test]
fn test_make_move_flips_multiple_directions() {
    let b = board(
        "........ ........ ..@..... ...o.... .@o..... ........ ........ ........",
    );
    // 55 closes the 33-44 diagonal only
    let after = make_move(Move::Play(55), Player::Black, &b);
    assert_eq!(after.cell(44), Cell::Black);
    assert_eq!(after.cell(53), Cell::White);

    let b = board(
        "........ ........ ..@..... ...o.... .@o.o... ........ ........ ........",
    );
    // 54 brackets 53 (left, to 52); 44 is on the up direction from 54 but 34 is empty
    let after = make_move(Move::Play(54), Player::Black, &b);
    assert_eq!(after.cell(53), Cell::Black);
    assert_eq!(after.cell(44), Cell::White);
    assert_eq!(after.cell(55), Cell::White);
}

#[test]
fn test_make_move_does_not_mutate_input() {
    let b = Board::initial();
    let saved = b;
    let _ = make_move(Move::Play(43), Player::Black, &b);
    assert_eq!(b, saved);
}

#[test]
fn test_pass_returns_copy() {
    let b = Board::initial();
    assert_eq!(make_move(Move::Pass, Player::White, &b), b);
}

#[test]
fn test_try_make_move_rejections() {
    let b = Board::initial();
    assert_eq!(
        try_make_move(Move::Play(9), Player::Black, &b),
        Err(MoveError::OffBoard(9))
    );
    assert_eq!(
        try_make_move(Move::Play(45), Player::Black, &b),
        Err(MoveError::Occupied(45))
    );
    assert_eq!(
        try_make_move(Move::Play(11), Player::Black, &b),
        Err(MoveError::NoBracket(11))
    );
    assert_eq!(
        try_make_move(Move::Pass, Player::Black, &b),
        Err(MoveError::PassWithMovesLeft)
    );
    assert_eq!(
        try_make_move(Move::Play(34), Player::Black, &b),
        Ok(make_move(Move::Play(34), Player::Black, &b))
    );
}

#[test]
fn test_legal_move_disc_accounting() {
    // Walk a deterministic game and check disc counts after every move.
    let mut b = Board::initial();
    let mut player = Player::Black;
    for _ in 0..20 {
        let moves = legal_moves(player, &b);
        let Some(&sq) = moves.last() else { break };
        let mine = b.count(player);
        let theirs = b.count(player.opponent());
        let next = make_move(Move::Play(sq), player, &b);
        assert!(next.count(player) > mine);
        assert!(next.count(player.opponent()) < theirs);
        assert_eq!(
            next.count(player) + next.count(player.opponent()),
            mine + theirs + 1
        );
        assert_eq!(
            next.count(Player::Black) + next.count(Player::White) + next.count_empty(),
            64
        );
        b = next;
        player = player.opponent();
    }
}
