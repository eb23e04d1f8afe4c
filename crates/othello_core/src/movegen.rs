use crate::{board::Board, error::MoveError, types::*};

pub const UP: i8 = -10;
pub const DOWN: i8 = 10;
pub const LEFT: i8 = -1;
pub const RIGHT: i8 = 1;
pub const UP_RIGHT: i8 = -9;
pub const DOWN_RIGHT: i8 = 11;
pub const DOWN_LEFT: i8 = 9;
pub const UP_LEFT: i8 = -11;

/// The 8 compass steps over the 10-wide cell layout.
pub const DIRECTIONS: [i8; 8] = [
    UP, UP_RIGHT, RIGHT, DOWN_RIGHT, DOWN, DOWN_LEFT, LEFT, UP_LEFT,
];

#[inline]
fn step(sq: u8, direction: i8) -> u8 {
    (sq as i16 + direction as i16) as u8
}

/// Walks from `square` in `direction` over a run of opponent discs and returns
/// the square of the `player` disc closing the run.
///
/// A walk that leaves the board lands on an `Outer` cell, which matches
/// neither colour, so no explicit bounds checks are needed.
pub fn find_bracket(square: u8, player: Player, board: &Board, direction: i8) -> Option<u8> {
    if !is_play_square(square) {
        return None;
    }
    let opp = player.opponent();
    let mut bracket = step(square, direction);
    if !board.cell(bracket).is(opp) {
        return None;
    }
    while board.cell(bracket).is(opp) {
        bracket = step(bracket, direction);
    }
    board.cell(bracket).is(player).then_some(bracket)
}

/// A move is legal when it targets an empty play square and brackets at least
/// one run of opponent discs.
pub fn is_legal(sq: u8, player: Player, board: &Board) -> bool {
    if !is_play_square(sq) || board.cell(sq) != Cell::Empty {
        return false;
    }
    DIRECTIONS
        .iter()
        .any(|&d| find_bracket(sq, player, board, d).is_some())
}

/// All legal squares for `player` in ascending index order.
pub fn legal_moves(player: Player, board: &Board) -> Vec<u8> {
    let mut out = Vec::with_capacity(32);
    legal_moves_into(player, board, &mut out);
    out
}

/// Generate all legal squares into the provided buffer, reusing it across calls.
pub fn legal_moves_into(player: Player, board: &Board, out: &mut Vec<u8>) {
    out.clear();
    out.extend(play_squares().filter(|&sq| is_legal(sq, player, board)));
}

/// Stops at the first legal square found.
pub fn any_legal_move(player: Player, board: &Board) -> bool {
    play_squares().any(|sq| is_legal(sq, player, board))
}

/// Applies `mv` for `player` and returns the resulting board.
///
/// `Pass` returns an unchanged copy. For `Play`, every opponent disc strictly
/// between the placed disc and each bracket endpoint is flipped. The caller
/// must only submit legal moves; use [`try_make_move`] for untrusted input.
pub fn make_move(mv: Move, player: Player, board: &Board) -> Board {
    let mut next = *board;
    let sq = match mv {
        Move::Pass => return next,
        Move::Play(sq) => sq,
    };
    debug_assert!(is_legal(sq, player, board), "illegal move {sq} for {player}");

    next.set(sq, Cell::from(player));
    for &d in DIRECTIONS.iter() {
        if let Some(bracket) = find_bracket(sq, player, &next, d) {
            let mut flip = step(sq, d);
            while flip != bracket {
                next.set(flip, Cell::from(player));
                flip = step(flip, d);
            }
        }
    }
    next
}

/// Checked variant of [`make_move`] for moves coming from outside the engine.
pub fn try_make_move(mv: Move, player: Player, board: &Board) -> Result<Board, MoveError> {
    match mv {
        Move::Pass if any_legal_move(player, board) => Err(MoveError::PassWithMovesLeft),
        Move::Pass => Ok(*board),
        Move::Play(sq) => {
            if !is_play_square(sq) {
                return Err(MoveError::OffBoard(sq));
            }
            if board.cell(sq) != Cell::Empty {
                return Err(MoveError::Occupied(sq));
            }
            if !is_legal(sq, player, board) {
                return Err(MoveError::NoBracket(sq));
            }
            Ok(make_move(mv, player, board))
        }
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
