//! Arcade puzzles (workspace facade crate).
//!
//! Re-exports the member crates under `crates/` as
//! `arcade_puzzles::{core,input,store,term,types}` and owns the shell's
//! runtime configuration.

pub mod config;

pub use arcade_puzzles_core as core;
pub use arcade_puzzles_input as input;
pub use arcade_puzzles_store as store;
pub use arcade_puzzles_term as term;
pub use arcade_puzzles_types as types;
