//! Terminal rendering for the puzzle shell.
//!
//! Views draw kernel snapshots into a plain framebuffer, and the renderer
//! flushes that framebuffer to a crossterm backend. Nothing here mutates
//! game state.

pub mod fb;
pub mod renderer;
pub mod view;

pub use arcade_puzzles_core as core;
pub use arcade_puzzles_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_full_into, TerminalRenderer};
pub use view::{group_thousands, tile_style, CodeView, TileView};
