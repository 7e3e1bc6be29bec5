//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains both game kernels: the 2048 tile merge board and the
//! Mastermind code breaker. It has **zero dependencies** on rendering, input
//! or storage, which makes it:
//!
//! - **Deterministic**: randomness is injected, same seed gives the same game
//! - **Testable**: fixtures can be built from hand-written grids and secrets
//! - **Portable**: the terminal shell is just one possible presentation layer
//!
//! # Module Structure
//!
//! - [`board`]: 4x4 grid with the slide/merge algorithm and lock detection
//! - [`tile_merge`]: 2048 state machine (score, moves, status, spawns, pause)
//! - [`code_breaker`]: Mastermind secret, guess scoring and attempt tracking
//! - [`rng`]: the [`RandomSource`] trait, a seedable LCG and a scripted source
//! - [`snapshot`]: read-only views handed to the presentation layer
//! - [`error`]: the [`InvalidInput`] error
//!
//! # Example
//!
//! ```
//! use arcade_puzzles_core::{CodeBreaker, ScriptedRng, SimpleRng, TileMergeGame};
//! use arcade_puzzles_core::types::{Direction, GameStatus, GuessFeedback};
//!
//! // 2048 from a fixture; spawns land on the first empty cell as a 2
//! let mut game = TileMergeGame::from_grid(
//!     [[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]],
//!     ScriptedRng::new(vec![0, 99]),
//! )
//! .unwrap();
//! let outcome = game.apply_move(Direction::Left);
//! assert!(outcome.moved);
//! assert_eq!(game.score(), 4);
//! assert_eq!(game.grid()[0], [4, 2, 0, 0]);
//!
//! // Mastermind with a known secret
//! let mut breaker = CodeBreaker::with_secret(&[1, 2, 3, 4], SimpleRng::new(7)).unwrap();
//! let result = breaker.score_guess(&[1, 3, 2, 5]).unwrap();
//! assert_eq!(result.feedback, GuessFeedback { exact: 1, partial: 2 });
//! assert_eq!(breaker.status(), GameStatus::InProgress);
//! ```

pub mod board;
pub mod code_breaker;
pub mod error;
pub mod rng;
pub mod snapshot;
pub mod tile_merge;

pub use arcade_puzzles_types as types;

// Re-export commonly used types for convenience
pub use board::{slide_line, Board, SlideResult};
pub use code_breaker::{parse_guess, score, validate_guess, CodeBreaker, GuessOutcome};
pub use error::InvalidInput;
pub use rng::{RandomSource, ScriptedRng, SimpleRng};
pub use snapshot::{CodeBreakerSnapshot, GuessRecord, TileMergeSnapshot};
pub use tile_merge::{MoveOutcome, SpawnedTile, TileMergeGame};
