//! Terminal "game renderer" module.
//!
//! Both widgets are drawn into a plain framebuffer which is then flushed to
//! the terminal as a diff against the previous frame. No widget toolkit is
//! involved, so cell aspect ratio and colours are fully under our control
//! (snake cells are 2 columns wide, 2048 tiles are 6x3 blocks).
//!
//! - `fb`: framebuffer and cell styles
//! - `gallery_view`: pure snapshot-to-framebuffer rendering, unit-testable
//! - `renderer`: terminal I/O

pub mod fb;
pub mod gallery_view;
pub mod renderer;

pub use tile_arcade_core as core;
pub use tile_arcade_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use gallery_view::{tile_colors, GalleryFrame, GalleryLayout, GalleryView, Rect, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
