use thiserror::Error;

/// Reasons a game cannot be set up.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("grid size must be at least 1, got {0}")]
    InvalidSize(i32),
    #[error("at least one treasure is required")]
    NoTreasures,
    #[error("{requested} treasures plus the player do not fit in {free} free cells")]
    TooManyTreasures { requested: usize, free: usize },
    #[error("gave up placing the {what} after {attempts} attempts")]
    PlacementExhausted { what: &'static str, attempts: u32 },
    #[error("layout row {row} has {found} cells, expected {expected}")]
    RaggedLayout {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("layout must be square, got {rows} rows of {cols} cells")]
    NotSquare { rows: usize, cols: usize },
    #[error("unknown layout glyph {ch:?} at row {row}, column {col}")]
    UnknownGlyph { ch: char, row: usize, col: usize },
    #[error("layout must contain exactly one player, found {0}")]
    PlayerCount(usize),
}

pub type Result<T> = core::result::Result<T, GameError>;
