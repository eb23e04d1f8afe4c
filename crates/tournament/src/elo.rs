//! Game/match outcomes and Elo ratings per strategy spec

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::TournamentError;

/// Rating given to a strategy the first time it is seen
pub const DEFAULT_ELO: f64 = 1500.0;

/// Rating points moved per game at a full upset
pub const K_FACTOR: f64 = 32.0;

/// Outcome of one game for the side it is reported for
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameResult {
    Win,
    Loss,
    Draw,
}

impl GameResult {
    /// The same game seen from the other side.
    pub fn flipped(self) -> Self {
        match self {
            GameResult::Win => GameResult::Loss,
            GameResult::Loss => GameResult::Win,
            GameResult::Draw => GameResult::Draw,
        }
    }

    fn points(self) -> f64 {
        match self {
            GameResult::Win => 1.0,
            GameResult::Draw => 0.5,
            GameResult::Loss => 0.0,
        }
    }
}

/// Tally of a match, always from the first strategy's side
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchResult {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    /// Sum over games of own discs minus opponent discs
    #[serde(default)]
    pub disc_differential: i64,
}

impl MatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, result: GameResult, disc_diff: i32) {
        match result {
            GameResult::Win => self.wins += 1,
            GameResult::Loss => self.losses += 1,
            GameResult::Draw => self.draws += 1,
        }
        self.disc_differential += i64::from(disc_diff);
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Points per game in `[0, 1]`; an empty match counts as even.
    pub fn score(&self) -> f64 {
        let games = self.total_games();
        if games == 0 {
            return 0.5;
        }
        let points = GameResult::Win.points() * f64::from(self.wins)
            + GameResult::Draw.points() * f64::from(self.draws);
        points / f64::from(games)
    }

    /// The same tally from the second strategy's side.
    pub fn reversed(&self) -> Self {
        Self {
            wins: self.losses,
            losses: self.wins,
            draws: self.draws,
            disc_differential: -self.disc_differential,
        }
    }
}

/// Running record of one strategy across every rated match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub elo: f64,
    pub record: MatchResult,
}

impl Default for Rating {
    fn default() -> Self {
        Self {
            elo: DEFAULT_ELO,
            record: MatchResult::default(),
        }
    }
}

/// One rated match as stored in the history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRecord {
    pub first: String,
    pub second: String,
    pub result: MatchResult,
    /// Seconds since the Unix epoch
    pub timestamp: u64,
    /// Points gained by `first` (and lost by `second`)
    pub elo_change: f64,
}

/// Leaderboard row
#[derive(Debug, Clone, PartialEq)]
pub struct Standing {
    pub spec: String,
    pub elo: f64,
    pub games: u32,
    pub disc_differential: i64,
}

/// Elo ratings keyed by strategy spec (`minimax:4`, `random`, ...), persisted as JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EloTracker {
    pub ratings: BTreeMap<String, Rating>,
    pub history: Vec<MatchRecord>,
}

impl EloTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(path: &Path) -> Result<Self, TournamentError> {
        let contents = std::fs::read_to_string(path).map_err(|source| TournamentError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Like [`EloTracker::load`], but a missing file yields an empty tracker.
    pub fn load_or_default(path: &Path) -> Result<Self, TournamentError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::new())
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), TournamentError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|source| TournamentError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn rating(&self, spec: &str) -> f64 {
        self.ratings.get(spec).map_or(DEFAULT_ELO, |r| r.elo)
    }

    /// Expected points per game for `first` against `second`.
    pub fn expected_score(&self, first: &str, second: &str) -> f64 {
        let gap = self.rating(second) - self.rating(first);
        1.0 / (1.0 + 10.0_f64.powf(gap / 400.0))
    }

    /// Applies a finished match. The update is zero-sum and scales with the
    /// number of games played.
    pub fn update_ratings(&mut self, first: &str, second: &str, result: &MatchResult) {
        let games = f64::from(result.total_games());
        let elo_change = K_FACTOR * games * (result.score() - self.expected_score(first, second));

        for (spec, delta, tally) in [
            (first, elo_change, result.clone()),
            (second, -elo_change, result.reversed()),
        ] {
            let entry = self.ratings.entry(spec.to_string()).or_default();
            entry.elo += delta;
            entry.record.wins += tally.wins;
            entry.record.losses += tally.losses;
            entry.record.draws += tally.draws;
            entry.record.disc_differential += tally.disc_differential;
        }

        self.history.push(MatchRecord {
            first: first.to_string(),
            second: second.to_string(),
            result: result.clone(),
            timestamp: unix_now(),
            elo_change,
        });
    }

    /// Strategies by descending rating; equal ratings fall back to name order.
    pub fn leaderboard(&self) -> Vec<Standing> {
        let mut rows: Vec<Standing> = self
            .ratings
            .iter()
            .map(|(spec, r)| Standing {
                spec: spec.clone(),
                elo: r.elo,
                games: r.record.total_games(),
                disc_differential: r.record.disc_differential,
            })
            .collect();
        // BTreeMap iteration is already name-ordered, so a stable sort keeps ties sorted.
        rows.sort_by(|a, b| b.elo.total_cmp(&a.elo));
        rows
    }

    pub fn leaderboard_report(&self) -> String {
        let mut out = String::from("=== Strategy Leaderboard ===\n");
        out.push_str(&format!(
            "{:<24} {:>8} {:>7} {:>8}\n",
            "Strategy", "Elo", "Games", "Discs"
        ));
        out.push_str(&"-".repeat(50));
        out.push('\n');
        for row in self.leaderboard() {
            out.push_str(&format!(
                "{:<24} {:>8.1} {:>7} {:>+8}\n",
                row.spec, row.elo, row.games, row.disc_differential
            ));
        }
        out
    }
}

fn unix_now() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

#[cfg(test)]
#[path = "elo_tests.rs"]
mod elo_tests;
