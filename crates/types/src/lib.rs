//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used by both game kernels, the
//! input layer and the terminal shell. Everything here is plain data with no
//! external dependencies.
//!
//! # Fixed Game Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BOARD_SIZE` | 4 | Rows and columns of the 2048 grid |
//! | `WIN_TILE` | 2048 | Tile value that wins the 2048 game |
//! | `MAX_TILE` | 131072 | Largest tile a 4x4 game can build |
//! | `SPAWN_FOUR_PERCENT` | 10 | Chance (in percent) that a spawned tile is a 4 |
//! | `SEED_TILES` | 2 | Tiles placed on a fresh 2048 board |
//! | `CODE_LENGTH` | 4 | Digits in a Mastermind secret |
//! | `MAX_ATTEMPTS` | 10 | Guesses allowed per Mastermind game |
//! | `MIN_SWIPE_DISTANCE` | 50 | Minimum displacement for a swipe to count |
//!
//! These are implementation constants, not runtime configuration.
//!
//! # Examples
//!
//! ```
//! use arcade_puzzles_types::{Direction, GameStatus, TileCommand, BOARD_SIZE, WIN_TILE};
//!
//! let dir = Direction::from_str("Left").unwrap();
//! assert_eq!(dir, Direction::Left);
//! assert!(dir.is_horizontal());
//!
//! assert_eq!(TileCommand::from_str("up"), Some(TileCommand::Move(Direction::Up)));
//! assert!(GameStatus::Lost.is_terminal());
//!
//! assert_eq!(BOARD_SIZE, 4);
//! assert_eq!(WIN_TILE, 2048);
//! ```

/// Rows and columns of the 2048 grid
pub const BOARD_SIZE: usize = 4;

/// Total number of cells on the 2048 grid
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Tile value that wins the game
pub const WIN_TILE: Tile = 2048;

/// Largest tile reachable on a 4x4 board (every cell doubling from a spawned 4)
pub const MAX_TILE: Tile = 1 << 17;

/// Chance in percent that a spawned tile is a 4 instead of a 2
pub const SPAWN_FOUR_PERCENT: u32 = 10;

/// Number of tiles placed on a fresh board
pub const SEED_TILES: usize = 2;

/// Digits in a Mastermind code
pub const CODE_LENGTH: usize = 4;

/// Guesses allowed before a Mastermind game is lost
pub const MAX_ATTEMPTS: usize = 10;

/// Largest digit allowed in a code
pub const MAX_DIGIT: Digit = 9;

/// Minimum swipe displacement (in input units, pixels for touch) for a gesture to count
pub const MIN_SWIPE_DISTANCE: f32 = 50.0;

/// Identifier the best 2048 score is persisted under
pub const BEST_SCORE_KEY: &str = "2048-best-score";

/// A cell on the 2048 grid
///
/// - `0`: empty cell
/// - anything else: a tile, always a power of two (2, 4, 8, ...)
pub type Tile = u32;

/// The 2048 grid, row-major (`grid[row][col]`)
pub type Grid = [[Tile; BOARD_SIZE]; BOARD_SIZE];

/// A single Mastermind digit (0-9)
pub type Digit = u8;

/// A full Mastermind code or guess
pub type Code = [Digit; CODE_LENGTH];

/// The four slide directions of the 2048 board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions, in the order the shell probes them
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Parse direction from string
    ///
    /// Accepts full names or single letters (case-insensitive).
    ///
    /// # Examples
    ///
    /// ```
    /// use arcade_puzzles_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("up"), Some(Direction::Up));
    /// assert_eq!(Direction::from_str("R"), Some(Direction::Right));
    /// assert_eq!(Direction::from_str("sideways"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "u" => Some(Direction::Up),
            "down" | "d" => Some(Direction::Down),
            "left" | "l" => Some(Direction::Left),
            "right" | "r" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// Rows slide for left/right, columns for up/down
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// Whether the target edge sits at the high index end of each line
    pub fn is_reversed(&self) -> bool {
        matches!(self, Direction::Right | Direction::Down)
    }
}

/// Progress of a single game
///
/// Both kernels share the same three states. `Won` and `Lost` are terminal;
/// the 2048 kernel still accepts moves after `Won` (continued play).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::InProgress => "in_progress",
            GameStatus::Won => "won",
            GameStatus::Lost => "lost",
        }
    }
}

/// Commands accepted by the 2048 kernel
///
/// Human input (keys, swipes) is mapped to these by the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileCommand {
    /// Slide every tile toward one edge
    Move(Direction),
    /// Toggle pause state
    Pause,
    /// Start a fresh game
    Restart,
}

impl TileCommand {
    /// Parse a command from string
    ///
    /// # Examples
    ///
    /// ```
    /// use arcade_puzzles_types::{Direction, TileCommand};
    ///
    /// assert_eq!(TileCommand::from_str("down"), Some(TileCommand::Move(Direction::Down)));
    /// assert_eq!(TileCommand::from_str("Pause"), Some(TileCommand::Pause));
    /// assert_eq!(TileCommand::from_str("restart"), Some(TileCommand::Restart));
    /// assert_eq!(TileCommand::from_str("undo"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pause" => Some(TileCommand::Pause),
            "restart" => Some(TileCommand::Restart),
            other => Direction::from_str(other).map(TileCommand::Move),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TileCommand::Move(dir) => dir.as_str(),
            TileCommand::Pause => "pause",
            TileCommand::Restart => "restart",
        }
    }
}

/// Commands accepted by the Mastermind kernel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeCommand {
    /// Score a complete guess
    Submit(Code),
    /// Draw a new secret and clear the history
    Restart,
}

/// Black/white peg counts for one guess
///
/// Invariant: `exact + partial <= CODE_LENGTH`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GuessFeedback {
    /// Right digit in the right position (black pegs)
    pub exact: u8,
    /// Right digit in the wrong position (white pegs)
    pub partial: u8,
}

impl GuessFeedback {
    /// True when every position matched
    pub fn is_solved(&self) -> bool {
        self.exact as usize == CODE_LENGTH
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_constants() {
        assert_eq!(BOARD_SIZE, 4);
        assert_eq!(CELL_COUNT, 16);
        assert_eq!(WIN_TILE, 2048);
        assert_eq!(SPAWN_FOUR_PERCENT, 10);
        assert_eq!(CODE_LENGTH, 4);
        assert_eq!(MAX_ATTEMPTS, 10);
        assert_eq!(BEST_SCORE_KEY, "2048-best-score");
    }

    #[test]
    fn direction_orientation() {
        assert!(Direction::Left.is_horizontal());
        assert!(Direction::Right.is_horizontal());
        assert!(!Direction::Up.is_horizontal());
        assert!(Direction::Right.is_reversed());
        assert!(Direction::Down.is_reversed());
        assert!(!Direction::Left.is_reversed());
        assert!(!Direction::Up.is_reversed());
    }

    #[test]
    fn direction_string_roundtrip() {
        for dir in Direction::ALL {
            assert_eq!(Direction::from_str(dir.as_str()), Some(dir));
        }
    }

    #[test]
    fn status_terminality() {
        assert!(!GameStatus::InProgress.is_terminal());
        assert!(GameStatus::Won.is_terminal());
        assert!(GameStatus::Lost.is_terminal());
        assert_eq!(GameStatus::default(), GameStatus::InProgress);
    }

    #[test]
    fn feedback_solved_only_with_all_exact() {
        assert!(GuessFeedback { exact: 4, partial: 0 }.is_solved());
        assert!(!GuessFeedback { exact: 3, partial: 1 }.is_solved());
    }
}
