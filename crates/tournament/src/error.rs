use std::path::PathBuf;

use othello_core::GameError;

/// Errors that can occur while running or persisting a tournament.
#[derive(Debug, thiserror::Error)]
pub enum TournamentError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown engine spec '{0}'")]
    UnknownEngine(String),

    #[error("invalid engine parameter in '{spec}': {reason}")]
    EngineParam { spec: String, reason: String },

    #[error("game aborted: {0}")]
    Game(#[from] GameError),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
