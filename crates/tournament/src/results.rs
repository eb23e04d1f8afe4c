//! Gauntlet results: JSON persistence and a plain-text summary

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::TournamentConfig;
use crate::elo::MatchResult;
use crate::error::TournamentError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TournamentResults {
    pub name: String,
    /// Strategy specs taking part, challenger first
    pub strategies: Vec<String>,
    /// Matches in the order they were played
    pub matches: Vec<MatchEntry>,
    pub config: TournamentConfig,
}

/// One match, scored from `challenger`'s side
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchEntry {
    pub challenger: String,
    pub opponent: String,
    pub result: MatchResult,
}

impl TournamentResults {
    pub fn new(name: &str, strategies: Vec<String>, config: TournamentConfig) -> Self {
        Self {
            name: name.to_string(),
            strategies,
            matches: Vec::new(),
            config,
        }
    }

    pub fn add_match(&mut self, challenger: &str, opponent: &str, result: MatchResult) {
        self.matches.push(MatchEntry {
            challenger: challenger.to_string(),
            opponent: opponent.to_string(),
            result,
        });
    }

    /// Sum of every match, from the challengers' side.
    pub fn totals(&self) -> MatchResult {
        self.matches
            .iter()
            .fold(MatchResult::new(), |mut acc, entry| {
                acc.wins += entry.result.wins;
                acc.losses += entry.result.losses;
                acc.draws += entry.result.draws;
                acc.disc_differential += entry.result.disc_differential;
                acc
            })
    }

    pub fn save(&self, path: &Path) -> Result<(), TournamentError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|source| TournamentError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self, TournamentError> {
        let contents = std::fs::read_to_string(path).map_err(|source| TournamentError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&contents)?)
    }

    pub fn generate_report(&self) -> String {
        let line = |label: &str, r: &MatchResult| {
            format!(
                "{:<28} {:>4} {:>4} {:>4} {:>7.1}% {:>+8}\n",
                label,
                r.wins,
                r.losses,
                r.draws,
                r.score() * 100.0,
                r.disc_differential
            )
        };

        let mut report = format!("=== {} ===\n", self.name);
        report.push_str(&format!("Strategies: {}\n", self.strategies.join(", ")));
        report.push_str(&format!(
            "{} games per match, default depth {}\n\n",
            self.config.games_per_match, self.config.search_depth
        ));
        report.push_str(&format!(
            "{:<28} {:>4} {:>4} {:>4} {:>8} {:>8}\n",
            "Pairing", "W", "L", "D", "Score", "Discs"
        ));
        report.push_str(&"-".repeat(60));
        report.push('\n');

        for entry in &self.matches {
            let label = format!("{} v {}", entry.challenger, entry.opponent);
            report.push_str(&line(&label, &entry.result));
        }
        if self.matches.len() > 1 {
            report.push_str(&"-".repeat(60));
            report.push('\n');
            report.push_str(&line("Total", &self.totals()));
        }

        report
    }
}
