use crate::lifecycle::Phase;
use crate::snake::Ending;
use crate::types::{
    Direction, Point, GRID_SIZE, SNAKE_BOARD_SIZE, SNAKE_START, SNAKE_START_DIRECTION,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board2048Snapshot {
    pub grid: [[u32; GRID_SIZE]; GRID_SIZE],
    pub terminal: bool,
    pub moves: u32,
    pub max_tile: u32,
}

impl Default for Board2048Snapshot {
    fn default() -> Self {
        Self {
            grid: [[0; GRID_SIZE]; GRID_SIZE],
            terminal: false,
            moves: 0,
            max_tile: 0,
        }
    }
}

/// Snake state for rendering. `segments` is head first.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SnakeSnapshot {
    pub board_size: u8,
    pub segments: Vec<Point>,
    pub food: Option<Point>,
    pub direction: Direction,
    pub ending: Option<Ending>,
    pub ticks: u32,
}

impl SnakeSnapshot {
    pub fn head(&self) -> Option<Point> {
        self.segments.first().copied()
    }

    pub fn terminal(&self) -> bool {
        self.ending.is_some()
    }
}

impl Default for SnakeSnapshot {
    fn default() -> Self {
        Self {
            board_size: SNAKE_BOARD_SIZE,
            segments: vec![SNAKE_START],
            food: None,
            direction: SNAKE_START_DIRECTION,
            ending: None,
            ticks: 0,
        }
    }
}

/// A widget's engine snapshot tagged with its lifecycle phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetSnapshot<S> {
    pub phase: Phase,
    pub game: S,
}

impl<S> WidgetSnapshot<S> {
    /// Whether the widget currently accepts input.
    pub fn playable(&self) -> bool {
        self.phase == Phase::Running
    }
}
