//! Terminal-driven strategies: a human at the keyboard and a minimax engine
//! whose depth can be changed before each of its moves.

use std::io::{self, BufRead, Write};

use minimax_engine::MinimaxEngine;
use othello_core::{legal_moves, Board, GameError, Move, Player, Strategy};
use tracing::debug;

use crate::console::Console;

const QUIT_WORDS: [&str; 3] = ["q", "quit", "exit"];

fn io_failure(player: Player, e: io::Error) -> GameError {
    GameError::Strategy {
        player,
        reason: e.to_string(),
    }
}

pub struct HumanStrategy<R, W> {
    console: Console<R, W>,
}

impl<R: BufRead, W: Write> HumanStrategy<R, W> {
    pub fn new(console: Console<R, W>) -> Self {
        Self { console }
    }

    fn ask(&self, player: Player, board: &Board) -> io::Result<Option<Move>> {
        self.console.say(&format!("\n{board}"))?;

        let moves = legal_moves(player, board);
        if moves.is_empty() {
            self.console
                .say(&format!("{player} has no legal moves and must pass."))?;
            return Ok(Some(Move::Pass));
        }
        self.console
            .say(&format!("{player}'s legal moves: {moves:?}"))?;

        loop {
            let prompt = format!("Enter move for {player} (e.g., 34) or 'q' to quit: ");
            let Some(raw) = self.console.prompt(&prompt)? else {
                debug!(%player, "input closed, leaving game");
                return Ok(None);
            };
            if QUIT_WORDS.contains(&raw.to_lowercase().as_str()) {
                debug!(%player, "human quit");
                self.console.say("Exiting game.")?;
                return Ok(None);
            }
            match raw.parse::<i64>() {
                Err(_) => self.console.say("Please enter an integer like 34 (rowcol).")?,
                Ok(n) => match u8::try_from(n) {
                    Ok(sq) if moves.contains(&sq) => return Ok(Some(Move::Play(sq))),
                    _ => self.console.say("Illegal move. Try again.")?,
                },
            }
        }
    }
}

impl<R: BufRead, W: Write> Strategy for HumanStrategy<R, W> {
    /// `None` from the prompt (quit or end of input) aborts the game.
    fn choose_move(&mut self, player: Player, board: &Board) -> Result<Move, GameError> {
        match self.ask(player, board) {
            Ok(Some(mv)) => Ok(mv),
            Ok(None) => Err(GameError::Aborted(player)),
            Err(e) => Err(io_failure(player, e)),
        }
    }

    fn name(&self) -> &str {
        "Human"
    }
}

/// Minimax engine that offers a depth override before every move.
/// An accepted override stays in effect for later moves.
pub struct PromptedMinimax<R, W> {
    engine: MinimaxEngine,
    console: Console<R, W>,
}

impl<R: BufRead, W: Write> PromptedMinimax<R, W> {
    pub fn new(engine: MinimaxEngine, console: Console<R, W>) -> Self {
        Self { engine, console }
    }

    #[cfg(test)]
    pub fn depth(&self) -> u8 {
        self.engine.depth()
    }

    fn read_depth_override(&mut self) -> io::Result<()> {
        let prompt = format!(
            "[AI] Current search depth: {}. Press Enter to keep, or type a new integer depth: ",
            self.engine.depth()
        );
        let raw = self.console.prompt(&prompt)?.unwrap_or_default();
        if raw.is_empty() {
            return Ok(());
        }
        match raw.parse::<i64>() {
            Err(_) => self.console.say("Not an integer; keeping previous depth.")?,
            Ok(d) if d < 1 => self
                .console
                .say("Depth must be >= 1; keeping previous depth.")?,
            Ok(d) => match u8::try_from(d) {
                Ok(d) => {
                    debug!(from = self.engine.depth(), to = d, "search depth changed");
                    self.engine.set_depth(d);
                }
                Err(_) => self
                    .console
                    .say("Depth too large; keeping previous depth.")?,
            },
        }
        Ok(())
    }

    fn turn(&mut self, player: Player, board: &Board) -> io::Result<Move> {
        self.console.say(&format!("\n{board}"))?;

        if legal_moves(player, board).is_empty() {
            self.console
                .say(&format!("{player} (AI) has no legal moves and must pass."))?;
            return Ok(Move::Pass);
        }

        self.read_depth_override()?;

        let result = self.engine.search(board, player);
        self.console.say(&format!(
            "{player} (AI) chooses move {} [depth={}, eval={}, states_examined={}]",
            result.best_move, result.depth, result.score, result.nodes
        ))?;
        Ok(result.best_move)
    }
}

impl<R: BufRead, W: Write> Strategy for PromptedMinimax<R, W> {
    fn choose_move(&mut self, player: Player, board: &Board) -> Result<Move, GameError> {
        self.turn(player, board).map_err(|e| io_failure(player, e))
    }

    fn name(&self) -> &str {
        self.engine.name()
    }

    fn new_game(&mut self) {
        self.engine.new_game();
    }
}
