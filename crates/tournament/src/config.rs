//! Tournament configuration, loadable from TOML.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TournamentConfig {
    pub games_per_match: u32,
    /// Depth given to `minimax` specs without an explicit `:depth`
    pub search_depth: u8,
    pub alternate_colors: bool,
    /// Engine specs a gauntlet challenger plays against
    pub gauntlet_opponents: Vec<String>,
    /// Where ratings are persisted
    pub elo_file: PathBuf,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            games_per_match: 10,
            search_depth: minimax_engine::DEFAULT_DEPTH,
            alternate_colors: true,
            gauntlet_opponents: vec!["random".to_string(), "minimax".to_string()],
            elo_file: PathBuf::from("tournament_elo.json"),
        }
    }
}

impl TournamentConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: TournamentConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(
                "config file '{}' not found, using defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.games_per_match == 0 {
            return Err(ConfigError::Validation(
                "games_per_match must be > 0".into(),
            ));
        }
        if self.search_depth == 0 {
            return Err(ConfigError::Validation(
                "search_depth must be >= 1".into(),
            ));
        }
        if self.gauntlet_opponents.is_empty() {
            return Err(ConfigError::Validation(
                "gauntlet_opponents must not be empty".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(TournamentConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: TournamentConfig = toml::from_str("games_per_match = 4\nsearch_depth = 2\n").unwrap();
        assert_eq!(config.games_per_match, 4);
        assert_eq!(config.search_depth, 2);
        assert!(config.alternate_colors);
        assert_eq!(config.elo_file, PathBuf::from("tournament_elo.json"));
    }

    #[test]
    fn test_zero_depth_rejected() {
        let config = TournamentConfig {
            search_depth: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_bad_toml_is_parse_error() {
        let path = std::env::temp_dir().join(format!("othello_cfg_{}.toml", std::process::id()));
        std::fs::write(&path, "games_per_match = \"many\"").unwrap();
        assert!(matches!(
            TournamentConfig::load(&path),
            Err(ConfigError::TomlParse(_))
        ));
        let _ = std::fs::remove_file(&path);
    }
}
