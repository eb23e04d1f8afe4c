//! Tournament Runner for ML-othello
//!
//! This crate provides infrastructure for:
//! - Running matches between different strategies
//! - Tracking Elo ratings across engine settings
//! - Generating reports to validate engine changes
//!
//! # Usage
//!
//! ```bash
//! # Run a match between a depth-4 and a depth-2 searcher
//! cargo run -p tournament -- match minimax:4 minimax:2 --games 20
//!
//! # Run a gauntlet (one engine vs the configured opponents)
//! cargo run -p tournament -- gauntlet minimax:5 --games 10
//! ```

mod config;
mod elo;
mod engines;
mod error;
mod match_runner;
mod results;

pub use config::*;
pub use elo::*;
pub use engines::*;
pub use error::*;
pub use match_runner::*;
pub use results::*;
