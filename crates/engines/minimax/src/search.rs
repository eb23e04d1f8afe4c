//! Plain fixed-depth minimax

use othello_core::{Board, Move, Player, legal_moves, make_move, next_player, terminal};
use tracing::debug;

use crate::eval::{CORNERS, evaluate};

/// Explicit search state owned by the caller between searches.
///
/// `depth` may be changed freely between searches; `nodes` is reset at the
/// start of every [`search`] and holds the count of the last one afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchContext {
    /// Search depth in plies
    pub depth: u8,
    /// Nodes examined by the most recent search
    pub nodes: u64,
}

impl SearchContext {
    pub fn new(depth: u8) -> Self {
        Self { depth, nodes: 0 }
    }
}

impl Default for SearchContext {
    fn default() -> Self {
        Self::new(crate::DEFAULT_DEPTH)
    }
}

/// Result of a top-level search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// The move to play (`Pass` if the side to move has no legal move)
    pub best_move: Move,
    /// Minimax value from the searching side's perspective
    pub score: i32,
    /// Depth searched
    pub depth: u8,
    /// Number of minimax invocations
    pub nodes: u64,
}

/// Searches `board` for `player` at `ctx.depth`, scoring from `player`'s side.
pub fn search(board: &Board, player: Player, ctx: &mut SearchContext) -> SearchResult {
    ctx.nodes = 0;
    let (score, best_move) = minimax(board, player, ctx.depth, player, &mut ctx.nodes);
    debug!(%player, depth = ctx.depth, nodes = ctx.nodes, score, %best_move, "search finished");
    SearchResult {
        best_move,
        score,
        depth: ctx.depth,
        nodes: ctx.nodes,
    }
}

/// Recursive minimax returning `(value, best move)`.
///
/// Values are always from `root`'s perspective: the node maximizes when
/// `to_move == root` and minimizes otherwise. Equal values resolve to the
/// smaller square index. `nodes` is bumped once per call.
pub fn minimax(
    board: &Board,
    to_move: Player,
    depth: u8,
    root: Player,
    nodes: &mut u64,
) -> (i32, Move) {
    *nodes += 1;

    if depth == 0 || terminal(board) {
        return (evaluate(board, root), Move::Pass);
    }

    let mut moves = legal_moves(to_move, board);

    // Forced pass: hand the turn over without consuming a move of our own.
    if moves.is_empty() {
        let child = make_move(Move::Pass, to_move, board);
        return match next_player(to_move, &child) {
            None => (evaluate(&child, root), Move::Pass),
            Some(next) => {
                let (value, _) = minimax(&child, next, depth - 1, root, nodes);
                (value, Move::Pass)
            }
        };
    }

    // Corners first; stable so the rest keep ascending order.
    moves.sort_by_key(|sq| !CORNERS.contains(sq));

    let maximizing = to_move == root;
    let mut best_val = if maximizing { -1_000_000_000 } else { 1_000_000_000 };
    let mut best_sq = moves[0];

    for sq in moves {
        let child = make_move(Move::Play(sq), to_move, board);
        let value = match next_player(to_move, &child) {
            None => evaluate(&child, root),
            Some(next) => minimax(&child, next, depth - 1, root, nodes).0,
        };

        let better = if maximizing {
            value > best_val
        } else {
            value < best_val
        };
        if better || (value == best_val && sq < best_sq) {
            best_val = value;
            best_sq = sq;
        }
    }

    (best_val, Move::Play(best_sq))
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
