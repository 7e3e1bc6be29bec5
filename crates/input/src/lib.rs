//! Terminal input module (kernel-facing).
//!
//! This crate is independent of any renderer. It maps `crossterm` key and
//! mouse events into the kernels' command vocabulary, resolves drag gestures
//! into swipe directions, and keeps the four digit slots of a Mastermind guess
//! while it is being typed.

pub mod guess_entry;
pub mod map;
pub mod swipe;

pub use arcade_puzzles_types as types;

pub use guess_entry::GuessEntry;
pub use map::{map_code_key, map_mouse_event, map_tile_key, should_quit, EntryKey};
pub use swipe::{resolve_swipe, SwipeTracker, MIN_TERMINAL_SWIPE};
