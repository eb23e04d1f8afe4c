//! Random Move Othello Strategy
//!
//! A simple strategy that selects moves uniformly at random from all legal moves.
//! Useful for:
//! - Testing the match runner
//! - Baseline comparisons (the minimax engine should easily beat this)
//! - Stress testing move generation over many varied games

use othello_core::{legal_moves, Board, GameError, Move, Player, Strategy};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;


/// An Othello strategy that plays random legal moves.
///
/// This strategy provides no evaluation - it simply picks a random move
/// from all available legal moves, or passes when there are none.
#[derive(Debug, Clone)]
pub struct RandomEngine {
    rng: StdRng,
    seed: Option<u64>,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            seed: None,
        }
    }

    /// Reproducible move sequence; the generator restarts on every new game.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for RandomEngine {
    fn choose_move(&mut self, player: Player, board: &Board) -> Result<Move, GameError> {
        let moves = legal_moves(player, board);
        Ok(moves
            .choose(&mut self.rng)
            .map_or(Move::Pass, |&sq| Move::Play(sq)))
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }

    fn new_game(&mut self) {
        if let Some(seed) = self.seed {
            self.rng = StdRng::seed_from_u64(seed);
        }
    }
}
