//! Read-only views of kernel state for the presentation layer.

use arrayvec::ArrayVec;

use crate::types::{Code, GameStatus, GuessFeedback, Grid, Tile, BOARD_SIZE, MAX_ATTEMPTS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileMergeSnapshot {
    pub grid: Grid,
    pub score: u64,
    pub moves: u32,
    pub status: GameStatus,
    pub paused: bool,
    pub max_tile: Tile,
    /// Full board with no merge left, whatever the status says
    pub locked: bool,
}

impl TileMergeSnapshot {
    pub fn playable(&self) -> bool {
        self.status != GameStatus::Lost && !self.locked && !self.paused
    }
}

impl Default for TileMergeSnapshot {
    fn default() -> Self {
        Self {
            grid: [[0; BOARD_SIZE]; BOARD_SIZE],
            score: 0,
            moves: 0,
            status: GameStatus::InProgress,
            paused: false,
            max_tile: 0,
            locked: false,
        }
    }
}

/// One scored guess, as shown in the attempt history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GuessRecord {
    pub guess: Code,
    pub feedback: GuessFeedback,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CodeBreakerSnapshot {
    /// 1-indexed number of the next guess
    pub attempt_number: usize,
    pub attempts_left: usize,
    pub status: GameStatus,
    pub history: ArrayVec<GuessRecord, MAX_ATTEMPTS>,
    /// The secret, once the game is finished
    pub revealed_secret: Option<Code>,
}

impl CodeBreakerSnapshot {
    pub fn playable(&self) -> bool {
        !self.status.is_terminal()
    }

    pub fn last_feedback(&self) -> Option<GuessFeedback> {
        self.history.last().map(|record| record.feedback)
    }
}
