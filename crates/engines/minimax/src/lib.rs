//! Minimax Othello Engine
//!
//! Plain fixed-depth minimax with a hand-tuned static evaluation.
//! This is the search-backed opponent used by the CLI and the tournament runner.

mod eval;
mod search;

use othello_core::{Board, GameError, Move, Player, Strategy};

pub use eval::*;
pub use search::{SearchContext, SearchResult, minimax, search};

/// Search depth used when none is configured.
pub const DEFAULT_DEPTH: u8 = 4;

/// Othello engine using fixed-depth minimax.
///
/// This engine uses:
/// - Minimax over all legal moves, corners examined first
/// - Forced passes searched as a ply of their own
/// - Corner / mobility / disc / X- and C-square evaluation
#[derive(Debug, Clone, Default)]
pub struct MinimaxEngine {
    ctx: SearchContext,
    last: Option<SearchResult>,
}

impl MinimaxEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_depth(depth: u8) -> Self {
        Self {
            ctx: SearchContext::new(depth),
            last: None,
        }
    }

    pub fn depth(&self) -> u8 {
        self.ctx.depth
    }

    /// Changes the depth for all following searches.
    pub fn set_depth(&mut self, depth: u8) {
        self.ctx.depth = depth;
    }

    /// Runs a search at the configured depth and remembers its result.
    pub fn search(&mut self, board: &Board, player: Player) -> SearchResult {
        let result = search::search(board, player, &mut self.ctx);
        self.last = Some(result);
        result
    }

    /// Result of the most recent search, for diagnostics.
    pub fn last_result(&self) -> Option<SearchResult> {
        self.last
    }
}

impl Strategy for MinimaxEngine {
    fn choose_move(&mut self, player: Player, board: &Board) -> Result<Move, GameError> {
        Ok(self.search(board, player).best_move)
    }

    fn name(&self) -> &str {
        "Minimax v1.0"
    }

    fn new_game(&mut self) {
        self.ctx.nodes = 0;
        self.last = None;
    }
}
