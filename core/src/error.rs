use crate::Orientation;
use thiserror::Error;

/// Why a puzzle could not be built from its clue records.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    #[error("Clue position ({row}, {col}) is outside the {size}x{size} grid")]
    PositionOutOfRange { row: usize, col: usize, size: usize },

    #[error("Answer of clue at ({row}, {col}) {orientation} runs off the grid")]
    SpanOutOfRange {
        row: usize,
        col: usize,
        orientation: Orientation,
    },

    #[error("Clue at ({row}, {col}) has an empty answer")]
    EmptyAnswer { row: usize, col: usize },

    #[error("Answer {answer:?} contains invalid character {invalid:?}")]
    InvalidAnswer { answer: String, invalid: char },

    #[error("Puzzle contains no clues")]
    NoClues,
}

/// Why a guess was rejected. The grid is never touched when one of these is returned.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessError {
    #[error("Guess length does not match the length of the clue.")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Guess contains invalid characters.")]
    InvalidCharacter(char),
}
