pub mod board;
pub mod error;
pub mod game;
pub mod movegen;
pub mod perft;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use error::*;
pub use game::*;
pub use movegen::*;
pub use perft::perft;
pub use types::*;

// =============================================================================
// Strategy trait: implemented by every move source (search, random, human)
// =============================================================================

/// Something that picks a move for the side to move.
///
/// The game loop calls [`Strategy::choose_move`] once per turn. A strategy is
/// only asked to move when `player` has at least one legal move, but returning
/// [`Move::Pass`] for a position without legal moves is always accepted.
pub trait Strategy {
    /// Choose a move for `player` on `board`.
    ///
    /// Returning an error aborts the game (e.g. a human quitting).
    fn choose_move(&mut self, player: Player, board: &Board) -> Result<Move, GameError>;

    /// Returns the strategy's display name
    fn name(&self) -> &str;

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}

impl<S: Strategy + ?Sized> Strategy for Box<S> {
    fn choose_move(&mut self, player: Player, board: &Board) -> Result<Move, GameError> {
        (**self).choose_move(player, board)
    }

    fn name(&self) -> &str {
        (**self).name()
    }

    fn new_game(&mut self) {
        (**self).new_game()
    }
}
