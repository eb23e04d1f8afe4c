//! Plays series of games between two strategies

use othello_core::{play, GameError, Move, Player, Strategy};
use tracing::debug;

use crate::elo::{GameResult, MatchResult};

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub num_games: u32,
    /// Swap colours every game; otherwise the first strategy always has Black
    pub alternate_colors: bool,
    /// Print one line per game to stdout
    pub verbose: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            alternate_colors: true,
            verbose: true,
        }
    }
}

/// How one game ended, scored for Black.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSummary {
    pub result: GameResult,
    pub black_discs: u32,
    pub white_discs: u32,
    pub plies: usize,
    pub passes: usize,
}

impl GameSummary {
    /// Result and disc margin for whichever colour `side` played.
    pub fn for_side(&self, side: Player) -> (GameResult, i32) {
        let margin = self.black_discs as i32 - self.white_discs as i32;
        match side {
            Player::Black => (self.result, margin),
            Player::White => (self.result.flipped(), -margin),
        }
    }
}

/// Plays one game to completion and scores it for Black.
pub fn play_game(
    black: &mut dyn Strategy,
    white: &mut dyn Strategy,
) -> Result<GameSummary, GameError> {
    let record = play(black, white)?;
    let result = match record.winner() {
        Some(Player::Black) => GameResult::Win,
        Some(Player::White) => GameResult::Loss,
        None => GameResult::Draw,
    };
    Ok(GameSummary {
        result,
        black_discs: record.black_discs(),
        white_discs: record.white_discs(),
        plies: record.moves.len(),
        passes: record.moves.iter().filter(|(_, mv)| *mv == Move::Pass).count(),
    })
}

pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    /// Colour the first strategy plays in game `index` (zero based).
    pub fn first_side(&self, index: u32) -> Player {
        if self.config.alternate_colors && index % 2 == 1 {
            Player::White
        } else {
            Player::Black
        }
    }

    /// Plays the configured number of games and tallies them for `first`.
    ///
    /// A strategy error (illegal move, abort) stops the match.
    pub fn run_match(
        &self,
        first: &mut dyn Strategy,
        second: &mut dyn Strategy,
    ) -> Result<MatchResult, GameError> {
        let mut tally = MatchResult::new();

        for index in 0..self.config.num_games {
            let side = self.first_side(index);
            let game = match side {
                Player::Black => play_game(first, second)?,
                Player::White => play_game(second, first)?,
            };
            let (result, margin) = game.for_side(side);
            tally.record(result, margin);

            debug!(
                game = index + 1,
                first = first.name(),
                second = second.name(),
                %side,
                ?result,
                margin,
                plies = game.plies,
                passes = game.passes,
                "game finished"
            );

            if self.config.verbose {
                let outcome = match result {
                    GameResult::Win => "1-0",
                    GameResult::Loss => "0-1",
                    GameResult::Draw => "1/2",
                };
                println!(
                    "Game {}/{}: {} as {} ({:+} discs)  running: {}-{}-{}",
                    index + 1,
                    self.config.num_games,
                    outcome,
                    side,
                    margin,
                    tally.wins,
                    tally.losses,
                    tally.draws
                );
            }
        }

        Ok(tally)
    }
}

/// Runs a quiet match with alternating colours.
pub fn quick_match(
    first: &mut dyn Strategy,
    second: &mut dyn Strategy,
    num_games: u32,
) -> Result<MatchResult, GameError> {
    MatchRunner::new(MatchConfig {
        num_games,
        alternate_colors: true,
        verbose: false,
    })
    .run_match(first, second)
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
