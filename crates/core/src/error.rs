//! Caller-facing errors.
//!
//! Malformed input is the only recoverable condition the kernels report.
//! Everything else (moving on a locked board, guessing after the game ended)
//! is a documented no-op.

use crate::types::{Tile, CODE_LENGTH, MAX_TILE};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidInput {
    #[error("guess must have {expected} digits, got {actual}")]
    GuessLength { expected: usize, actual: usize },

    #[error("guess position {position} holds {value}, expected a digit 0-9")]
    DigitOutOfRange { position: usize, value: u8 },

    #[error("guess position {position} holds {found:?}, expected a digit 0-9")]
    NotADigit { position: usize, found: char },

    #[error(
        "tile at row {row}, column {col} is {value}, expected 0 or a power of two up to {max}",
        max = MAX_TILE
    )]
    InvalidTile { row: usize, col: usize, value: Tile },
}

impl InvalidInput {
    pub(crate) fn guess_length(actual: usize) -> Self {
        InvalidInput::GuessLength {
            expected: CODE_LENGTH,
            actual,
        }
    }
}
