//! Widget lifecycle - `Idle -> Running -> Terminal -> Idle`, with a replay
//! shortcut from `Terminal` straight back to `Running`.
//!
//! An engine only holds game state. Whether the player is allowed to touch it
//! lives here, in a single [`Phase`] value, so "running" and "game over" can
//! never be true at the same time.
//!
//! | From | Event | To |
//! |------|-------|----|
//! | Idle | start | Running (fresh game) |
//! | Running | engine reports terminal | Terminal (final board kept) |
//! | Terminal | start | Running (fresh game, Idle is skipped) |
//! | Terminal | stop | Idle (fresh game) |
//! | Running | stop | Idle (fresh game) |
//!
//! A fresh game that is already over (a snake body covering the whole board)
//! goes from start directly to Terminal.

use tracing::info;

use crate::board2048::Board2048;
use crate::rng::RandomSource;
use crate::snake::{Snake, TickOutcome};
use crate::snapshot::{Board2048Snapshot, SnakeSnapshot, WidgetSnapshot};
use crate::types::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Waiting behind the play overlay
    Idle,
    /// Accepting input and ticks
    Running,
    /// Game over; the final state stays visible until start or stop
    Terminal,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Running => "running",
            Phase::Terminal => "terminal",
        }
    }
}

/// The operations a widget needs from a game.
pub trait GameEngine {
    type Snapshot;

    /// Discard the current game and set up a fresh one.
    fn restart(&mut self);

    /// Directional input. Returns whether the engine acted on it.
    fn steer(&mut self, direction: Direction) -> bool;

    /// One timed step. Returns whether the state changed.
    ///
    /// Engines without a timer keep the default no-op.
    fn step(&mut self) -> bool {
        false
    }

    /// Whether this engine must be driven by a periodic tick.
    fn is_timed(&self) -> bool {
        false
    }

    fn is_terminal(&self) -> bool;

    fn snapshot(&self) -> Self::Snapshot;
}

impl<R: RandomSource> GameEngine for Board2048<R> {
    type Snapshot = Board2048Snapshot;

    fn restart(&mut self) {
        self.reset();
    }

    fn steer(&mut self, direction: Direction) -> bool {
        self.move_tiles(direction).changed
    }

    fn is_terminal(&self) -> bool {
        Board2048::is_terminal(self)
    }

    fn snapshot(&self) -> Board2048Snapshot {
        Board2048::snapshot(self)
    }
}

impl<R: RandomSource> GameEngine for Snake<R> {
    type Snapshot = SnakeSnapshot;

    fn restart(&mut self) {
        self.reset();
    }

    fn steer(&mut self, direction: Direction) -> bool {
        self.set_direction(direction)
    }

    fn step(&mut self) -> bool {
        self.tick() != TickOutcome::Halted
    }

    fn is_timed(&self) -> bool {
        true
    }

    fn is_terminal(&self) -> bool {
        Snake::is_terminal(self)
    }

    fn snapshot(&self) -> SnakeSnapshot {
        Snake::snapshot(self)
    }
}

/// One game plus its lifecycle phase.
#[derive(Debug, Clone)]
pub struct Widget<E> {
    name: &'static str,
    engine: E,
    phase: Phase,
}

impl<E: GameEngine> Widget<E> {
    /// Wrap an engine; the widget starts idle.
    pub fn new(name: &'static str, engine: E) -> Self {
        Self {
            name,
            engine,
            phase: Phase::Idle,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Direct engine access, e.g. for tests that stage a position.
    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    /// Begin a fresh game. Ignored while already running.
    pub fn start(&mut self) -> bool {
        if self.phase == Phase::Running {
            return false;
        }
        self.engine.restart();
        self.phase = Phase::Running;
        info!(widget = self.name, "started");
        self.sync_terminal();
        true
    }

    /// Reset the game and return to idle. A no-op transition when already idle.
    pub fn stop(&mut self) {
        let was = self.phase;
        self.engine.restart();
        self.phase = Phase::Idle;
        if was != Phase::Idle {
            info!(widget = self.name, from = was.as_str(), "stopped");
        }
    }

    /// Forward directional input while running.
    pub fn steer(&mut self, direction: Direction) -> bool {
        if self.phase != Phase::Running {
            return false;
        }
        let accepted = self.engine.steer(direction);
        self.sync_terminal();
        accepted
    }

    /// Forward a timed step while running.
    pub fn tick(&mut self) -> bool {
        if self.phase != Phase::Running {
            return false;
        }
        let changed = self.engine.step();
        self.sync_terminal();
        changed
    }

    fn sync_terminal(&mut self) {
        if self.engine.is_terminal() {
            self.phase = Phase::Terminal;
            info!(widget = self.name, "game over");
        }
    }

    pub fn snapshot(&self) -> WidgetSnapshot<E::Snapshot> {
        WidgetSnapshot {
            phase: self.phase,
            game: self.engine.snapshot(),
        }
    }
}
