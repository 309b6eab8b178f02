use std::path::PathBuf;

/// Errors raised by board construction and insertion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("board dimensions {rows}x{columns} outside the allowed range {min}-{max}")]
    DimensionOutOfRange {
        rows: usize,
        columns: usize,
        min: usize,
        max: usize,
    },

    #[error("column {column} is out of range (board has {columns} columns)")]
    ColumnOutOfRange { column: usize, columns: usize },

    #[error("column {0} is full")]
    ColumnFull(usize),
}

/// Errors raised by the round/turn controller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("invalid game mode '{0}' (expected 'SinglePlayer' or 'Multiplayer')")]
    InvalidMode(String),

    #[error("no move is awaited: the round is over")]
    NotAwaitingMove,

    #[error("a round is still in progress")]
    RoundInProgress,

    #[error("the game is over")]
    GameOver,

    #[error(transparent)]
    Board(#[from] BoardError),
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
