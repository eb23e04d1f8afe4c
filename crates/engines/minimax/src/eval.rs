//! Static evaluation: corners, mobility, discs and corner-adjacent danger.

use othello_core::{Board, Player, legal_moves, score};

/// Corner squares.
pub const CORNERS: [u8; 4] = [11, 18, 81, 88];
/// Squares diagonally adjacent to a corner.
pub const X_SQUARES: [u8; 4] = [22, 27, 72, 77];
/// Edge squares orthogonally adjacent to a corner.
pub const C_SQUARES: [u8; 8] = [12, 17, 21, 28, 71, 78, 82, 87];

pub const CORNER_WEIGHT: i32 = 25;
pub const MOBILITY_WEIGHT: i32 = 5;
pub const DISC_WEIGHT: i32 = 1;
pub const X_SQUARE_WEIGHT: i32 = -4;
pub const C_SQUARE_WEIGHT: i32 = -2;

/// Occupancy of `squares` by `root` minus occupancy by its opponent.
#[inline]
fn occupancy_diff(board: &Board, root: Player, squares: &[u8]) -> i32 {
    squares.iter().fold(0, |acc, &sq| {
        let cell = board.cell(sq);
        if cell.is(root) {
            acc + 1
        } else if cell.is(root.opponent()) {
            acc - 1
        } else {
            acc
        }
    })
}

/// Evaluates `board` from `root`'s perspective.
///
/// Every term is a difference between `root` and its opponent, so
/// `evaluate(b, p) == -evaluate(b, p.opponent())`.
pub fn evaluate(board: &Board, root: Player) -> i32 {
    let opp = root.opponent();

    let corners = occupancy_diff(board, root, &CORNERS);
    let mobility = legal_moves(root, board).len() as i32 - legal_moves(opp, board).len() as i32;
    let discs = score(root, board);
    let x_diff = occupancy_diff(board, root, &X_SQUARES);
    let c_diff = occupancy_diff(board, root, &C_SQUARES);

    CORNER_WEIGHT * corners
        + MOBILITY_WEIGHT * mobility
        + DISC_WEIGHT * discs
        + X_SQUARE_WEIGHT * x_diff
        + C_SQUARE_WEIGHT * c_diff
}
