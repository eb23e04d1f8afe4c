//! Turn resolution, scoring and the game loop.

use crate::{
    Strategy,
    board::Board,
    error::GameError,
    movegen::{any_legal_move, try_make_move},
    types::*,
};
use tracing::{debug, trace};

/// Who moves after `previous` has just played on `board`.
///
/// The opponent moves if they can; otherwise `previous` moves again. `None`
/// means neither side has a legal move and the game is over.
pub fn next_player(previous: Player, board: &Board) -> Option<Player> {
    let opp = previous.opponent();
    if any_legal_move(opp, board) {
        Some(opp)
    } else if any_legal_move(previous, board) {
        Some(previous)
    } else {
        None
    }
}

pub fn terminal(board: &Board) -> bool {
    !any_legal_move(Player::Black, board) && !any_legal_move(Player::White, board)
}

/// Disc differential from `player`'s point of view.
pub fn score(player: Player, board: &Board) -> i32 {
    board.count(player) as i32 - board.count(player.opponent()) as i32
}

/// A finished game: the final board and every move in order.
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub board: Board,
    pub moves: Vec<(Player, Move)>,
}

impl GameRecord {
    pub fn black_discs(&self) -> u32 {
        self.board.count(Player::Black)
    }

    pub fn white_discs(&self) -> u32 {
        self.board.count(Player::White)
    }

    /// The side with more discs, `None` on a draw.
    pub fn winner(&self) -> Option<Player> {
        match self.black_discs().cmp(&self.white_discs()) {
            std::cmp::Ordering::Greater => Some(Player::Black),
            std::cmp::Ordering::Less => Some(Player::White),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Final score line and result, as printed at the end of a game.
    pub fn summary(&self) -> String {
        let result = match self.winner() {
            Some(p) => format!("{p} wins!"),
            None => "Draw!".to_string(),
        };
        format!(
            "Score -> Black({}): {}  White({}): {}\n{}",
            Player::Black.symbol(),
            self.black_discs(),
            Player::White.symbol(),
            self.white_discs(),
            result
        )
    }
}

/// Plays one game from the initial position until neither side can move.
///
/// Every move a strategy returns is validated before it is applied, so a
/// faulty strategy ends the game with [`GameError::IllegalMove`].
pub fn play(black: &mut dyn Strategy, white: &mut dyn Strategy) -> Result<GameRecord, GameError> {
    black.new_game();
    white.new_game();

    let mut board = Board::initial();
    let mut moves = Vec::with_capacity(64);
    let mut to_move = Some(Player::Black);

    while let Some(player) = to_move {
        let mv = match player {
            Player::Black => black.choose_move(player, &board)?,
            Player::White => white.choose_move(player, &board)?,
        };
        trace!(%player, %mv, strategy = match player {
            Player::Black => black.name(),
            Player::White => white.name(),
        }, "move chosen");
        board = try_make_move(mv, player, &board)
            .map_err(|source| GameError::IllegalMove { player, source })?;
        moves.push((player, mv));
        to_move = next_player(player, &board);
    }

    let record = GameRecord { board, moves };
    debug!(
        black = record.black_discs(),
        white = record.white_discs(),
        plies = record.moves.len(),
        "game over"
    );
    Ok(record)
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
