//! Best-score persistence.
//!
//! The 2048 game keeps a single best score under a fixed key
//! ([`BEST_SCORE_KEY`]). It is read once at startup and written whenever the
//! running score beats it. Storage is a small JSON object file:
//!
//! ```text
//! {
//!   "2048-best-score": 5120
//! }
//! ```
//!
//! A missing file reads as "no value". A file that is not valid JSON is
//! logged and treated the same way, so a corrupt score never blocks play.
//!
//! # Example
//!
//! ```
//! use arcade_puzzles_store::{BestScore, MemoryStore};
//!
//! let mut best = BestScore::load(MemoryStore::default()).unwrap();
//! assert_eq!(best.best(), 0);
//! assert!(best.record(128).unwrap());
//! assert!(!best.record(64).unwrap());
//! assert_eq!(best.best(), 128);
//! ```

pub mod best;
pub mod file;

pub use arcade_puzzles_types as types;

pub use best::BestScore;
pub use file::{JsonFileStore, MemoryStore, ScoreStore};
pub use types::BEST_SCORE_KEY;
