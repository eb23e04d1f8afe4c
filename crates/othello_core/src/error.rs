use crate::types::Player;

/// Why a move was rejected by [`crate::movegen::try_make_move`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("square {0} is not on the board")]
    OffBoard(u8),

    #[error("square {0} is already occupied")]
    Occupied(u8),

    #[error("square {0} does not bracket any opponent disc")]
    NoBracket(u8),

    #[error("cannot pass while legal moves remain")]
    PassWithMovesLeft,
}

/// Errors that end a game loop before a terminal board is reached.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("{player} submitted an illegal move: {source}")]
    IllegalMove { player: Player, source: MoveError },

    #[error("game aborted by {0}")]
    Aborted(Player),

    #[error("{player}'s strategy failed: {reason}")]
    Strategy { player: Player, reason: String },
}

/// Errors from parsing the textual board form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardParseError {
    #[error("expected 8 rows, found {0}")]
    RowCount(usize),

    #[error("row {row} has {len} cells, expected 8")]
    RowWidth { row: usize, len: usize },

    #[error("invalid cell symbol '{0}'")]
    Symbol(char),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_display() {
        let err = GameError::IllegalMove {
            player: Player::White,
            source: MoveError::Occupied(44),
        };
        assert_eq!(
            err.to_string(),
            "White submitted an illegal move: square 44 is already occupied"
        );
    }

    #[test]
    fn test_parse_error_display() {
        let err = BoardParseError::RowWidth { row: 3, len: 7 };
        assert_eq!(err.to_string(), "row 3 has 7 cells, expected 8");
    }
}
