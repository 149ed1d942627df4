use std::path::PathBuf;

/// Reasons a move can be rejected before the board is touched
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("invalid move, column {column} out of range for a board {cols} columns wide")]
    InvalidColumn { column: usize, cols: usize },

    #[error("invalid move, column {0} full")]
    ColumnFull(usize),

    #[error("no legal moves remain")]
    NoLegalMoves,
}

/// Errors building a board from a move string or a picture
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("could not parse '{0}' as a valid move")]
    InvalidMoveChar(char),

    #[error("invalid position, game is over after move {0}")]
    GameAlreadyOver(usize),

    #[error("unknown cell '{0}', expected '.', 'X' or 'O'")]
    UnknownCell(char),

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        found: usize,
        expected: usize,
    },

    #[error("piece at row {row}, column {col} is floating above an empty cell")]
    FloatingPiece { row: usize, col: usize },

    #[error(transparent)]
    Move(#[from] MoveError),
}

/// Errors playing through a `Game`
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("the game is already over")]
    GameOver,

    #[error(transparent)]
    Move(#[from] MoveError),
}

/// Errors loading an engine configuration
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
