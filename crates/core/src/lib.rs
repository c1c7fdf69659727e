//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the two game engines of the arcade and the small
//! amount of machinery needed to host them. It has **no dependencies** on
//! terminals, clocks or I/O:
//!
//! - **Deterministic**: every random decision goes through an injected
//!   [`RandomSource`]; the same seed replays the same game
//! - **Timer-free**: the snake only moves when [`Snake::tick`] is called; the
//!   host decides when with a [`TickScheduler`]
//! - **Testable**: tests script exact spawns and food cells with [`SequenceRng`]
//!
//! # Module Structure
//!
//! - [`board2048`]: 4x4 slide/merge/spawn engine
//! - [`snake`]: toroidal snake with growth, self-collision and a one-turn-per-tick lock
//! - [`lifecycle`]: `Idle -> Running -> Terminal` phases wrapped around either engine
//! - [`scheduler`]: fixed-interval tick accumulator
//! - [`rng`]: random source trait, seeded LCG and scripted test source
//! - [`snapshot`]: immutable copies of engine state for rendering
//!
//! # Example
//!
//! ```
//! use tile_arcade_core::{Board2048, Phase, SimpleRng, Snake, SnakeConfig, Widget};
//! use tile_arcade_types::Direction;
//!
//! let mut merge = Widget::new("2048", Board2048::new(SimpleRng::new(12345)));
//! merge.start();
//! merge.steer(Direction::Left);
//! assert_eq!(merge.phase(), Phase::Running);
//!
//! let mut snake = Snake::new(SnakeConfig::default(), SimpleRng::new(12345));
//! snake.set_direction(Direction::Left);
//! snake.tick();
//! assert_eq!(snake.head().x, 4);
//! ```

pub mod board2048;
pub mod lifecycle;
pub mod rng;
pub mod scheduler;
pub mod snake;
pub mod snapshot;

pub use tile_arcade_types as types;

// Re-export commonly used types for convenience
pub use board2048::{
    add_random_tile, is_terminal_grid, shift_grid, slide_and_merge, Board2048, Grid, MoveOutcome,
};
pub use lifecycle::{GameEngine, Phase, Widget};
pub use rng::{RandomSource, SequenceRng, SimpleRng};
pub use scheduler::TickScheduler;
pub use snake::{Ending, Snake, SnakeConfig, TickOutcome};
pub use snapshot::{Board2048Snapshot, SnakeSnapshot, WidgetSnapshot};
