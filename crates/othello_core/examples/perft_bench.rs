//! Perft benchmark for profiling with cargo-flamegraph.
//!
//! Usage:
//!   cargo flamegraph --example perft_bench -p othello_core -- [depth] [board]
//!
//! Examples:
//!   # Default: depth 7 over all test positions
//!   cargo flamegraph --example perft_bench -p othello_core
//!
//!   # Custom depth
//!   cargo flamegraph --example perft_bench -p othello_core -- 8
//!
//!   # Custom depth and position (Black to move)
//!   cargo flamegraph --example perft_bench -p othello_core -- 6 "......../......../......../...ooo../.@@oo@../.@o@@.../@o....../........"

use othello_core::{Board, Player, perft};
use std::env;
use std::time::Instant;

/// Test positions, Black to move in each
const TEST_POSITIONS: &[(&str, &str)] = &[
    (
        "Starting position",
        "......../......../......../...o@.../...@o.../......../......../........",
    ),
    (
        "Early midgame",
        "......../......../......../...ooo../.@@oo@../.@o@@.../@o....../........",
    ),
    (
        "Crowded midgame",
        "......../......../......../o.@@@@@./oo@@ooo./o@@@@@@./o@@o@@../o.o.....",
    ),
];

fn main() {
    let args: Vec<String> = env::args().collect();

    let depth: u8 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(7);

    // If a board is provided, use single position mode
    if let Some(text) = args.get(2) {
        match text.parse::<Board>() {
            Ok(board) => run_single_position(&board, depth),
            Err(e) => eprintln!("Invalid board: {e}"),
        }
    } else {
        run_all_positions(depth);
    }
}

fn nps(nodes: u64, secs: f64) -> f64 {
    if secs > 0.0 { nodes as f64 / secs } else { 0.0 }
}

fn run_single_position(board: &Board, depth: u8) {
    println!("{board}");
    println!("Depth: {depth}");
    println!();

    // Warm-up run at lower depth
    if depth > 2 {
        let _ = perft(board, Player::Black, depth.saturating_sub(2));
    }

    let start = Instant::now();
    let nodes = perft(board, Player::Black, depth);
    let elapsed = start.elapsed();

    println!("Nodes: {nodes}");
    println!("Time: {elapsed:.3?}");
    println!("NPS: {:.0}", nps(nodes, elapsed.as_secs_f64()));
}

fn run_all_positions(depth: u8) {
    println!("=== Perft Benchmark Suite ===");
    println!("Depth: {depth}");
    println!();

    let mut total_nodes = 0u64;
    let mut total_time = std::time::Duration::ZERO;

    for (name, text) in TEST_POSITIONS {
        let board: Board = match text.parse() {
            Ok(b) => b,
            Err(e) => {
                eprintln!("{name}: {e}");
                continue;
            }
        };

        print!("{name:.<30}");

        let start = Instant::now();
        let nodes = perft(&board, Player::Black, depth);
        let elapsed = start.elapsed();

        total_nodes += nodes;
        total_time += elapsed;

        println!(
            " {nodes:>12} nodes in {elapsed:>8.3?} ({:>10.0} nps)",
            nps(nodes, elapsed.as_secs_f64())
        );
    }

    println!();
    println!("{:=<70}", "");
    println!(
        "TOTAL: {total_nodes} nodes in {total_time:.3?} ({:.0} nps)",
        nps(total_nodes, total_time.as_secs_f64())
    );
}
