//! Error types for the game.

use std::io;

/// Top-level error returned by the binary and by fallible library setup.
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Map parsing error: {0}")]
    MapParse(#[from] ParseError),

    #[error("Logging setup failed: {0}")]
    Logging(String),
}

/// Errors raised while turning an ASCII layout into a [`Maze`](crate::maze::Maze).
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown character in layout: {0:?}")]
    UnknownCharacter(char),

    #[error("Row {row} has width {found}, expected {expected}")]
    RaggedRow { row: usize, expected: usize, found: usize },

    #[error("Layout is empty")]
    Empty,

    #[error("Layout is {width}x{height}, need at least 3x3 for two start cells")]
    TooSmall { width: usize, height: usize },
}

pub type GameResult<T> = Result<T, GameError>;
