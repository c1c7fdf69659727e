//! Snake engine - toroidal movement, growth and self-collision
//!
//! The body is a deque of cells, head first, mirrored by an occupancy table so
//! collision and food placement never scan the body. The board wraps on both
//! axes, so the only way to lose is running into yourself.
//!
//! The engine knows nothing about time: the host calls [`Snake::tick`] at
//! whatever cadence it likes (see [`crate::scheduler::TickScheduler`]).
//!
//! # Turning
//!
//! Only one turn is accepted per tick. Without the lock a player could press
//! Left then Down between two steps while moving Up and fold the head back
//! into the neck. A turn must also change axis: requesting the current heading
//! or its reverse is ignored.

use std::collections::VecDeque;

use tracing::debug;

use crate::rng::RandomSource;
use crate::snapshot::SnakeSnapshot;
use crate::types::{Direction, Point, SNAKE_BOARD_SIZE, SNAKE_START, SNAKE_START_DIRECTION};

/// Board size and starting position for a snake game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnakeConfig {
    pub board_size: u8,
    pub start: Point,
    pub direction: Direction,
}

impl SnakeConfig {
    /// A board of side `board_size` (at least 1) with the snake in the middle,
    /// heading up.
    pub fn with_board_size(board_size: u8) -> Self {
        let board_size = board_size.max(1);
        let mid = board_size / 2;
        Self {
            board_size,
            start: Point::new(mid, mid),
            direction: SNAKE_START_DIRECTION,
        }
    }

    fn contains(&self, p: Point) -> bool {
        p.x < self.board_size && p.y < self.board_size
    }

    fn cell_count(&self) -> usize {
        (self.board_size as usize) * (self.board_size as usize)
    }
}

impl Default for SnakeConfig {
    fn default() -> Self {
        Self {
            board_size: SNAKE_BOARD_SIZE,
            start: SNAKE_START,
            direction: SNAKE_START_DIRECTION,
        }
    }
}

/// Why a snake game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ending {
    /// The head ran into the body
    Collision,
    /// The body covers every cell; there is nowhere left to put food
    BoardFilled,
}

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Advanced one cell, length unchanged
    Moved,
    /// Ate the food and grew by one
    Ate,
    /// Hit the body; the game is over and the body did not move
    Collided,
    /// Grew to fill the board; the game is over
    BoardFilled,
    /// The game was already over; nothing changed
    Halted,
}

impl TickOutcome {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            TickOutcome::Collided | TickOutcome::BoardFilled | TickOutcome::Halted
        )
    }
}

/// The snake game.
#[derive(Debug, Clone)]
pub struct Snake<R> {
    config: SnakeConfig,
    /// Head first.
    segments: VecDeque<Point>,
    /// Row-major occupancy, one entry per board cell.
    occupied: Vec<bool>,
    direction: Direction,
    /// Set by an accepted turn, cleared by the next tick.
    turn_locked: bool,
    food: Option<Point>,
    ending: Option<Ending>,
    ticks: u32,
    rng: R,
}

impl<R: RandomSource> Snake<R> {
    /// Create a new game with the given config and random source.
    pub fn new(config: SnakeConfig, rng: R) -> Self {
        let config = if config.contains(config.start) {
            config
        } else {
            SnakeConfig::with_board_size(config.board_size)
        };

        let mut snake = Self {
            config,
            segments: VecDeque::with_capacity(config.cell_count()),
            occupied: vec![false; config.cell_count()],
            direction: config.direction,
            turn_locked: false,
            food: None,
            ending: None,
            ticks: 0,
            rng,
        };
        snake.reset();
        snake
    }

    /// Build a game around an existing body (head first).
    ///
    /// Returns `None` if the body is empty, leaves the board or overlaps
    /// itself. Food is placed on a random free cell.
    pub fn from_body(
        config: SnakeConfig,
        body: impl IntoIterator<Item = Point>,
        direction: Direction,
        rng: R,
    ) -> Option<Self> {
        let mut occupied = vec![false; config.cell_count()];
        let mut segments = VecDeque::with_capacity(config.cell_count());

        for p in body {
            if !config.contains(p) || occupied[p.index(config.board_size)] {
                return None;
            }
            occupied[p.index(config.board_size)] = true;
            segments.push_back(p);
        }

        if segments.is_empty() {
            return None;
        }

        let mut snake = Self {
            config,
            segments,
            occupied,
            direction,
            turn_locked: false,
            food: None,
            ending: None,
            ticks: 0,
            rng,
        };
        snake.place_initial_food();
        Some(snake)
    }

    /// Back to a single segment at the start cell with fresh food.
    pub fn reset(&mut self) {
        self.segments.clear();
        self.occupied.fill(false);

        let start = self.config.start;
        self.segments.push_back(start);
        self.occupied[start.index(self.config.board_size)] = true;

        self.direction = self.config.direction;
        self.turn_locked = false;
        self.ending = None;
        self.ticks = 0;
        self.place_initial_food();
    }

    /// A body that already covers the board starts out finished.
    fn place_initial_food(&mut self) {
        self.food = self.generate_food();
        if self.food.is_none() {
            self.ending = Some(Ending::BoardFilled);
        }
    }

    pub fn board_size(&self) -> u8 {
        self.config.board_size
    }

    /// Body cells, head first.
    pub fn segments(&self) -> &VecDeque<Point> {
        &self.segments
    }

    pub fn head(&self) -> Point {
        // The body is never empty: reset and from_body both guarantee a head.
        self.segments.front().copied().unwrap_or(self.config.start)
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn food(&self) -> Option<Point> {
        self.food
    }

    pub fn ending(&self) -> Option<Ending> {
        self.ending
    }

    pub fn is_terminal(&self) -> bool {
        self.ending.is_some()
    }

    /// Whether a turn was already accepted since the last tick.
    pub fn turn_locked(&self) -> bool {
        self.turn_locked
    }

    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    pub fn is_occupied(&self, p: Point) -> bool {
        self.config.contains(p) && self.occupied[p.index(self.config.board_size)]
    }

    /// Move the food to `p`.
    ///
    /// Returns false (and leaves the food alone) if `p` is off the board or
    /// under the body.
    pub fn set_food(&mut self, p: Point) -> bool {
        if !self.config.contains(p) || self.is_occupied(p) {
            return false;
        }
        self.food = Some(p);
        true
    }

    /// Request a turn for the next tick.
    ///
    /// Ignored when the game is over, when a turn is already pending, or when
    /// `direction` is on the current axis (same heading or a reversal).
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if self.ending.is_some() || self.turn_locked {
            return false;
        }
        if direction.is_parallel(self.direction) {
            return false;
        }

        self.direction = direction;
        self.turn_locked = true;
        true
    }

    /// Advance the snake one cell.
    pub fn tick(&mut self) -> TickOutcome {
        if self.ending.is_some() {
            return TickOutcome::Halted;
        }

        let size = self.config.board_size;
        let new_head = self.head().step(self.direction, size);

        // The tail still counts: it has not moved out of the way yet.
        if self.occupied[new_head.index(size)] {
            self.ending = Some(Ending::Collision);
            debug!(x = new_head.x, y = new_head.y, len = self.len(), "snake hit itself");
            return TickOutcome::Collided;
        }

        self.segments.push_front(new_head);
        self.occupied[new_head.index(size)] = true;
        self.ticks = self.ticks.wrapping_add(1);
        self.turn_locked = false;

        if self.food == Some(new_head) {
            self.food = self.generate_food();
            if self.food.is_none() {
                self.ending = Some(Ending::BoardFilled);
                debug!(len = self.len(), "snake filled the board");
                return TickOutcome::BoardFilled;
            }
            return TickOutcome::Ate;
        }

        if let Some(tail) = self.segments.pop_back() {
            self.occupied[tail.index(size)] = false;
        }
        TickOutcome::Moved
    }

    /// Pick a uniformly random free cell, or `None` if the body covers the board.
    fn generate_food(&mut self) -> Option<Point> {
        let free = self.config.cell_count() - self.segments.len();
        if free == 0 {
            return None;
        }

        let target = self.rng.next_range(free as u32) as usize;
        let size = self.config.board_size;
        let food = (0..size)
            .flat_map(|y| (0..size).map(move |x| Point::new(x, y)))
            .filter(|p| !self.occupied[p.index(size)])
            .nth(target);

        if let Some(p) = food {
            debug!(x = p.x, y = p.y, "placed food");
        }
        food
    }

    pub fn snapshot_into(&self, out: &mut SnakeSnapshot) {
        out.board_size = self.config.board_size;
        out.segments.clear();
        out.segments.extend(self.segments.iter().copied());
        out.food = self.food;
        out.direction = self.direction;
        out.ending = self.ending;
        out.ticks = self.ticks;
    }

    pub fn snapshot(&self) -> SnakeSnapshot {
        let mut s = SnakeSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
