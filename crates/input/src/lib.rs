//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::Signal`]s. Both games are
//! driven by single key presses (the snake turns once, 2048 slides once), so
//! there is no repeat handling here; key releases and auto-repeat are left to
//! the caller to filter.

pub mod map;

pub use tile_arcade_types as types;

pub use map::{handle_key_event, should_quit};
