use std::path::PathBuf;

/// Errors that can occur when creating a game.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("invalid board dimensions {height}x{width} (both must be between 4 and 1024)")]
    InvalidDimensions { height: usize, width: usize },

    #[error("the two players must have distinct tokens")]
    IndistinctPlayers,
}

/// Reasons a move is rejected. A rejected move leaves the game untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {column} is out of range (board has {width} columns)")]
    InvalidColumn { column: usize, width: usize },

    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("the game is already over")]
    GameAlreadyOver,
}

/// Errors that can occur when loading a game configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read game config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid game config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid game config: {0}")]
    Invalid(String),
}
