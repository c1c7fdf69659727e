//! Tile Arcade (workspace facade crate).
//!
//! Two small grid games, 2048 and Snake, shown side by side in the terminal.
//! The engines and their lifecycle live in dedicated crates under `crates/`
//! and are re-exported here as `tile_arcade::{core,input,term,types}`. This
//! package adds the host pieces: configuration, logging setup and the
//! [`gallery::Gallery`] that routes input and time to the widgets.

pub use tile_arcade_core as core;
pub use tile_arcade_input as input;
pub use tile_arcade_term as term;
pub use tile_arcade_types as types;

pub mod config;
pub mod gallery;
pub mod telemetry;

pub use config::GalleryConfig;
pub use gallery::{Gallery, GallerySnapshot};
