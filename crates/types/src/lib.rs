//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used by both engines, the gallery
//! host and the terminal front end. All types are pure data structures with no
//! external dependencies.
//!
//! # Board Dimensions
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `GRID_SIZE` | 4 | Side length of the 2048 grid |
//! | `SNAKE_BOARD_SIZE` | 10 | Side length of the (toroidal) snake board |
//!
//! # Timing
//!
//! The snake advances on a fixed cadence of `SNAKE_TICK_MS` (200ms). The 2048
//! game has no timer; every accepted key press is one step.
//!
//! # Coordinates
//!
//! `(x, y)` with `x` growing to the right and `y` growing downward, so
//! [`Direction::Up`] is the vector `(0, -1)`.
//!
//! # Examples
//!
//! ```
//! use tile_arcade_types::{Direction, Point, SNAKE_BOARD_SIZE};
//!
//! assert_eq!(Direction::Up.opposite(), Direction::Down);
//! assert_eq!(Direction::Left.delta(), (-1, 0));
//!
//! // Toroidal stepping wraps at the edges.
//! let top = Point::new(3, 0);
//! assert_eq!(top.step(Direction::Up, SNAKE_BOARD_SIZE), Point::new(3, 9));
//! ```

/// Side length of the 2048 grid (4x4)
pub const GRID_SIZE: usize = 4;

/// Number of tiles placed on a fresh 2048 grid
pub const INITIAL_TILES: usize = 2;

/// A spawned tile is a 4 with probability `1 / SPAWN_FOUR_ONE_IN`, else a 2
pub const SPAWN_FOUR_ONE_IN: u32 = 10;

/// Side length of the snake board (10x10)
pub const SNAKE_BOARD_SIZE: u8 = 10;

/// Fixed snake step interval in milliseconds
pub const SNAKE_TICK_MS: u32 = 200;

/// Head position of a freshly started snake
pub const SNAKE_START: Point = Point::new(5, 5);

/// Initial heading of a freshly started snake
pub const SNAKE_START_DIRECTION: Direction = Direction::Up;

/// One of the four orthogonal directions.
///
/// Used as a slide direction by the 2048 engine and as a heading by the
/// snake engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in key-map order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit vector `(dx, dy)` with `y` growing downward.
    pub fn delta(&self) -> (i8, i8) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// The reverse direction.
    ///
    /// # Examples
    ///
    /// ```
    /// use tile_arcade_types::Direction;
    ///
    /// assert_eq!(Direction::Left.opposite(), Direction::Right);
    /// assert_eq!(Direction::Down.opposite(), Direction::Up);
    /// ```
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// True for `Left` and `Right`.
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// True when both directions lie on the same axis (equal or opposite).
    pub fn is_parallel(&self, other: Direction) -> bool {
        self.is_horizontal() == other.is_horizontal()
    }
}

/// A cell coordinate on a square board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub x: u8,
    pub y: u8,
}

impl Point {
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Move one cell in `direction` on a toroidal board of side `size`.
    ///
    /// Leaving one edge re-enters on the opposite edge.
    pub fn step(&self, direction: Direction, size: u8) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: wrap(self.x, dx, size),
            y: wrap(self.y, dy, size),
        }
    }

    /// Row-major flat index on a board of side `size`.
    #[inline(always)]
    pub fn index(&self, size: u8) -> usize {
        (self.y as usize) * (size as usize) + (self.x as usize)
    }
}

#[inline(always)]
fn wrap(v: u8, d: i8, size: u8) -> u8 {
    let size = size as i16;
    ((v as i16 + d as i16).rem_euclid(size)) as u8
}

/// Host input events.
///
/// Key presses are mapped into signals by the input crate; the gallery host
/// routes them to the focused widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// Directional input (slide for 2048, turn for snake)
    Steer(Direction),
    /// Start (or restart) the focused widget
    Start,
    /// Stop the focused widget and return it to idle
    Stop,
    /// Move focus to the next widget
    FocusNext,
    /// Move focus to the previous widget
    FocusPrev,
}

/// The widgets shown side by side in the gallery, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Merge2048,
    Snake,
}

impl Slot {
    pub const ALL: [Slot; 2] = [Slot::Merge2048, Slot::Snake];

    /// Next slot in focus order, wrapping around.
    pub fn next(self) -> Self {
        match self {
            Slot::Merge2048 => Slot::Snake,
            Slot::Snake => Slot::Merge2048,
        }
    }

    /// Previous slot in focus order, wrapping around.
    pub fn prev(self) -> Self {
        match self {
            Slot::Merge2048 => Slot::Snake,
            Slot::Snake => Slot::Merge2048,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Slot::Merge2048 => "2048",
            Slot::Snake => "snake",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposites_are_parallel() {
        for d in Direction::ALL {
            assert!(d.is_parallel(d.opposite()));
            assert!(d.is_parallel(d));
            assert_eq!(d.opposite().opposite(), d);
        }
        assert!(!Direction::Up.is_parallel(Direction::Left));
    }

    #[test]
    fn test_step_wraps_all_edges() {
        let size = 10;
        assert_eq!(Point::new(0, 4).step(Direction::Left, size), Point::new(9, 4));
        assert_eq!(Point::new(9, 4).step(Direction::Right, size), Point::new(0, 4));
        assert_eq!(Point::new(4, 0).step(Direction::Up, size), Point::new(4, 9));
        assert_eq!(Point::new(4, 9).step(Direction::Down, size), Point::new(4, 0));
        assert_eq!(Point::new(5, 5).step(Direction::Up, size), Point::new(5, 4));
    }

    #[test]
    fn test_point_index_row_major() {
        assert_eq!(Point::new(0, 0).index(10), 0);
        assert_eq!(Point::new(3, 2).index(10), 23);
    }

    #[test]
    fn test_slot_focus_cycles() {
        for slot in Slot::ALL {
            assert_eq!(slot.next().prev(), slot);
            assert_ne!(slot.next(), slot);
        }
        assert_eq!(Slot::Merge2048.next(), Slot::Snake);
        assert_eq!(Slot::Snake.next(), Slot::Merge2048);
    }
}
