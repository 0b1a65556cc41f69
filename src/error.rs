use std::path::PathBuf;

/// Errors from dropping a piece into the board or a running game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {0} is out of range")]
    InvalidColumn(usize),

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("the game is already over")]
    GameOver,
}

/// Errors from the move search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("no legal move available")]
    NoLegalMove,
}

/// Errors from playing a game between two agents.
#[derive(Debug, thiserror::Error)]
pub enum PlayError {
    #[error("agent {agent} selected illegal column {column} (legal: {legal:?})")]
    IllegalMove {
        agent: String,
        column: usize,
        legal: Vec<usize>,
    },

    #[error("agent {agent} failed to select a move: {source}")]
    Search {
        agent: String,
        source: SearchError,
    },
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
