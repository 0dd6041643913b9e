use std::path::PathBuf;

use crate::engine::grid::Location;

/// Errors raised by the grid itself.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("grid dimensions must be positive (got {rows}x{cols})")]
    InvalidDimension { rows: usize, cols: usize },

    #[error("location {location} is outside the {rows}x{cols} grid")]
    OutOfBounds {
        location: Location,
        rows: usize,
        cols: usize,
    },
}

/// Errors raised while parsing a location string like `"3, 4"`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocationParseError {
    #[error("expected \"<row>, <col>\" with a comma between the numbers")]
    MissingComma,

    #[error("expected exactly two comma-separated numbers")]
    ExtraField,

    #[error("'{0}' is not a number")]
    NotANumber(String),
}

/// Semantic rejections of a requested move. The display strings double as
/// the re-prompt messages shown to the player.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("Invalid piece. Try again")]
    InvalidPieceSelection,

    #[error("Invalid destination. Try again")]
    InvalidDestination,

    #[error("the game is already over")]
    GameOver,
}

/// Errors that can abort a running session. Everything recoverable is
/// absorbed by the prompt retry loops; only console failures escape.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("board setup failed: {0}")]
    Grid(#[from] GridError),

    #[error("a session needs at least two players (got {0})")]
    NotEnoughPlayers(usize),
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

    #[error("invalid configuration: {0}")]
    Validation(String),
}
