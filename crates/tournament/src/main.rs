//! Tournament CLI
//!
//! Run matches between Othello strategies and track Elo ratings.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use tournament::{
    create_engine, EloTracker, MatchConfig, MatchRunner, TournamentConfig, TournamentResults,
};

/// Play Othello engines against each other and track their ratings.
#[derive(Parser)]
#[command(name = "tournament", about = "ML-othello tournament runner")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "tournament.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Play a match between two engines (minimax, minimax:D, random, random:SEED)
    Match {
        first: String,
        second: String,
        /// Number of games
        #[arg(long, short)]
        games: Option<u32>,
        /// Depth for `minimax` specs without an explicit depth
        #[arg(long, short)]
        depth: Option<u8>,
    },
    /// Play one challenger against every configured opponent
    Gauntlet {
        challenger: String,
        #[arg(long, short)]
        games: Option<u32>,
        #[arg(long, short)]
        depth: Option<u8>,
        /// Write the full results as JSON
        #[arg(long)]
        save: Option<PathBuf>,
    },
    /// Show the current Elo leaderboard
    #[command(alias = "elo")]
    Leaderboard,
}

fn apply_overrides(config: &mut TournamentConfig, games: Option<u32>, depth: Option<u8>) {
    if let Some(games) = games {
        config.games_per_match = games;
    }
    if let Some(depth) = depth {
        config.search_depth = depth;
    }
}

fn run_match(config: &TournamentConfig, first_spec: &str, second_spec: &str) -> Result<()> {
    println!("=== Match: {} vs {} ===", first_spec, second_spec);
    println!(
        "Games: {}, Depth: {}",
        config.games_per_match, config.search_depth
    );
    println!();

    let mut first = create_engine(first_spec, config.search_depth)?;
    let mut second = create_engine(second_spec, config.search_depth)?;

    let runner = MatchRunner::new(MatchConfig {
        num_games: config.games_per_match,
        alternate_colors: config.alternate_colors,
        verbose: true,
    });
    let result = runner.run_match(first.as_mut(), second.as_mut())?;

    println!();
    println!("=== Final Result ===");
    println!(
        "{}: {} wins, {} losses, {} draws ({:+} discs)",
        first_spec, result.wins, result.losses, result.draws, result.disc_differential
    );
    println!("Score: {:.1}%", result.score() * 100.0);

    let mut tracker = EloTracker::load_or_default(&config.elo_file)?;
    tracker.update_ratings(first_spec, second_spec, &result);
    println!();
    println!("{}", tracker.leaderboard_report());

    if let Err(e) = tracker.save(&config.elo_file) {
        warn!("failed to save Elo tracker: {}", e);
    }
    Ok(())
}

fn run_gauntlet(
    config: &TournamentConfig,
    challenger_spec: &str,
    save: Option<PathBuf>,
) -> Result<()> {
    println!("=== Gauntlet: {} vs all ===", challenger_spec);
    println!("Opponents: {:?}", config.gauntlet_opponents);
    println!(
        "Games per match: {}, Depth: {}",
        config.games_per_match, config.search_depth
    );
    println!();

    let mut tracker = EloTracker::load_or_default(&config.elo_file)?;
    let mut results = TournamentResults::new(
        &format!("Gauntlet: {}", challenger_spec),
        std::iter::once(challenger_spec.to_string())
            .chain(config.gauntlet_opponents.iter().cloned())
            .collect(),
        config.clone(),
    );

    let runner = MatchRunner::new(MatchConfig {
        num_games: config.games_per_match,
        alternate_colors: config.alternate_colors,
        verbose: false,
    });

    for opponent in &config.gauntlet_opponents {
        println!("\n--- {} vs {} ---", challenger_spec, opponent);

        let mut challenger = create_engine(challenger_spec, config.search_depth)?;
        let mut opp_engine = create_engine(opponent, config.search_depth)?;

        let result = runner.run_match(challenger.as_mut(), opp_engine.as_mut())?;

        println!(
            "Result: {}-{}-{} (Score: {:.1}%, {:+} discs)",
            result.wins,
            result.losses,
            result.draws,
            result.score() * 100.0,
            result.disc_differential
        );

        tracker.update_ratings(challenger_spec, opponent, &result);
        results.add_match(challenger_spec, opponent, result);
    }

    println!();
    println!("{}", tracker.leaderboard_report());
    println!("{}", results.generate_report());

    if let Some(path) = save {
        results
            .save(&path)
            .with_context(|| format!("saving results to {}", path.display()))?;
    }
    if let Err(e) = tracker.save(&config.elo_file) {
        warn!("failed to save Elo tracker: {}", e);
    }
    Ok(())
}

fn show_leaderboard(config: &TournamentConfig) -> Result<()> {
    if !config.elo_file.exists() {
        println!("No tournament data found. Run some matches first!");
        return Ok(());
    }
    let tracker = EloTracker::load(&config.elo_file)
        .with_context(|| format!("loading {}", config.elo_file.display()))?;
    println!("{}", tracker.leaderboard_report());
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = TournamentConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    match cli.command {
        Command::Match {
            first,
            second,
            games,
            depth,
        } => {
            apply_overrides(&mut config, games, depth);
            config.validate()?;
            run_match(&config, &first, &second)
        }
        Command::Gauntlet {
            challenger,
            games,
            depth,
            save,
        } => {
            apply_overrides(&mut config, games, depth);
            config.validate()?;
            run_gauntlet(&config, &challenger, save)
        }
        Command::Leaderboard => show_leaderboard(&config),
    }
}
