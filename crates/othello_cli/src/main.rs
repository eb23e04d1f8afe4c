//! Interactive Othello in the terminal.
//!
//! Squares are entered as two digits, row then column (`34` = row 3,
//! column 4). Black (`@`) moves first.

mod console;
mod players;

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use minimax_engine::{MinimaxEngine, DEFAULT_DEPTH};
use othello_core::{play, Board, GameError, Strategy};

use console::Console;
use players::{HumanStrategy, PromptedMinimax};

/// Play Othello against another human or the minimax engine.
#[derive(Parser)]
#[command(name = "othello", about = "Text-mode Othello")]
struct Cli {
    /// Initial search depth for the computer player
    #[arg(long, short, default_value_t = DEFAULT_DEPTH)]
    depth: u8,
}

fn run_game<R: BufRead, W: Write>(
    console: &Console<R, W>,
    black: &mut dyn Strategy,
    white: &mut dyn Strategy,
) -> Result<()> {
    console.say(&format!("\nStarting position:\n{}", Board::initial()))?;

    match play(black, white) {
        Ok(record) => {
            console.say(&format!("\nFinal position:\n{}", record.board))?;
            console.say(&record.summary())?;
            Ok(())
        }
        // Quitting is a normal way to leave; nothing is kept.
        Err(GameError::Aborted(_)) => Ok(()),
        Err(e) => Err(e.into()),
    }
}

fn session<R: BufRead, W: Write>(console: Console<R, W>, depth: u8) -> Result<()> {
    console.say("\n====== OTHELLO ======")?;
    console.say("1) Two humans play")?;
    console.say("2) Human vs AI")?;
    console.say("=====================\n")?;

    let Some(mode) = console.choose("Choose a mode (1 or 2): ", &["1", "2"])? else {
        return Ok(());
    };

    if mode == "1" {
        console.say("\nMode: Two humans")?;
        let mut black = HumanStrategy::new(console.clone());
        let mut white = HumanStrategy::new(console.clone());
        return run_game(&console, &mut black, &mut white);
    }

    console.say("\n=====Human vs AI setup=====")?;
    console.say("Who should play BLACK (@)?  (Black moves first.)")?;
    console.say("1) Human plays BLACK (@), Computer plays WHITE (o)")?;
    console.say("2) Computer plays BLACK (@), Human plays WHITE (o)")?;
    let Some(pick) = console.choose("Choose 1 or 2: ", &["1", "2"])? else {
        return Ok(());
    };

    let mut human = HumanStrategy::new(console.clone());
    let mut ai = PromptedMinimax::new(MinimaxEngine::with_depth(depth), console.clone());
    if pick == "1" {
        console.say("\nMode: HUMAN (BLACK @) vs AI (WHITE o)")?;
        run_game(&console, &mut human, &mut ai)
    } else {
        console.say("\nMode: AI (BLACK @) vs HUMAN (WHITE o)")?;
        run_game(&console, &mut ai, &mut human)
    }
}

fn main() -> Result<()> {
    // Logs go to stderr so they never interleave with prompts on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    if cli.depth == 0 {
        anyhow::bail!("--depth must be >= 1");
    }
    session(Console::new(io::stdin().lock(), io::stdout()), cli.depth)
}

#[cfg(test)]
mod tests {
    use super::*;
    use console::scripted;

    #[test]
    fn test_quit_from_menu_flow() {
        let console = scripted("9\n1\nq\n");
        session(console.clone(), 2).unwrap();
        let out = String::from_utf8(console.output()).unwrap();
        assert!(out.contains("Mode: Two humans"));
        assert!(out.contains("Starting position:"));
        assert!(out.contains("Exiting game."));
        assert!(!out.contains("Final position:"));
    }

    #[test]
    fn test_ai_vs_human_until_quit() {
        // AI is Black and keeps depth 1, then the human quits.
        let console = scripted("2\n2\n\nq\n");
        session(console.clone(), 1).unwrap();
        let out = String::from_utf8(console.output()).unwrap();
        assert!(out.contains("Mode: AI (BLACK @) vs HUMAN (WHITE o)"));
        assert!(out.contains("Black (AI) chooses move 34 [depth=1, eval=3, states_examined=5]"));
        assert!(out.contains("White's legal moves: [33, 35, 53]"));
    }

    #[test]
    fn test_end_of_input_at_menu() {
        let console = scripted("");
        assert!(session(console, 4).is_ok());
    }
}
