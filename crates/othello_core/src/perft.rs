use crate::{
    board::Board,
    game::terminal,
    movegen::{legal_moves_into, make_move},
    types::{Move, Player},
};

/// Pure perft node count.
/// Counts all positions reachable from `board` with `player` to move in exactly
/// `depth` plies. A forced pass counts as a ply; a finished game is a leaf.
pub fn perft(board: &Board, player: Player, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    fn inner(board: &Board, player: Player, depth: u8, layers: &mut [Vec<u8>]) -> u64 {
        if depth == 0 {
            return 1;
        }

        let Some((buf, rest)) = layers.split_first_mut() else {
            return 1;
        };

        legal_moves_into(player, board, buf);
        if buf.is_empty() {
            if terminal(board) {
                return 1;
            }
            return inner(board, player.opponent(), depth - 1, rest);
        }

        let mut nodes = 0u64;
        for sq in buf.iter().copied() {
            let child = make_move(Move::Play(sq), player, board);
            nodes += inner(&child, player.opponent(), depth - 1, rest);
        }
        nodes
    }

    let mut layers = vec![Vec::with_capacity(32); depth as usize];
    inner(board, player, depth, &mut layers[..])
}
