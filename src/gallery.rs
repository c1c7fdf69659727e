//! Gallery host: both widgets, keyboard focus and the snake's tick driver.
//!
//! The gallery is still pure state. The binary feeds it [`Signal`]s and
//! elapsed milliseconds; tests do the same with plain numbers.

use tracing::debug;

use crate::config::GalleryConfig;
use crate::core::{
    Board2048, Board2048Snapshot, Phase, RandomSource, SimpleRng, Snake, SnakeConfig,
    SnakeSnapshot, TickScheduler, Widget, WidgetSnapshot,
};
use crate::term::GalleryFrame;
use crate::types::{Signal, Slot};

/// Seed offset so the two engines do not share a random stream.
const SNAKE_SEED_SALT: u32 = 0x9E37_79B9;

/// Render copy of the whole gallery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GallerySnapshot {
    pub merge: WidgetSnapshot<Board2048Snapshot>,
    pub snake: WidgetSnapshot<SnakeSnapshot>,
    pub focus: Slot,
}

impl GallerySnapshot {
    /// Borrowed view for [`crate::term::GalleryView`].
    pub fn frame(&self) -> GalleryFrame<'_> {
        GalleryFrame {
            merge: &self.merge,
            snake: &self.snake,
            focus: self.focus,
        }
    }
}

pub struct Gallery<R = SimpleRng> {
    merge: Widget<Board2048<R>>,
    snake: Widget<Snake<R>>,
    focus: Slot,
    scheduler: TickScheduler,
}

impl Gallery<SimpleRng> {
    /// Both widgets idle, focus on 2048.
    pub fn new(config: &GalleryConfig) -> Self {
        Self::with_engines(
            Board2048::new(SimpleRng::new(config.seed)),
            Snake::new(
                SnakeConfig::default(),
                SimpleRng::new(config.seed ^ SNAKE_SEED_SALT),
            ),
            config.snake_tick_ms,
        )
    }
}

impl<R: RandomSource> Gallery<R> {
    pub fn with_engines(merge: Board2048<R>, snake: Snake<R>, snake_tick_ms: u32) -> Self {
        Self {
            merge: Widget::new("2048", merge),
            snake: Widget::new("snake", snake),
            focus: Slot::Merge2048,
            scheduler: TickScheduler::new(snake_tick_ms),
        }
    }

    pub fn focus(&self) -> Slot {
        self.focus
    }

    pub fn merge(&self) -> &Widget<Board2048<R>> {
        &self.merge
    }

    pub fn merge_mut(&mut self) -> &mut Widget<Board2048<R>> {
        &mut self.merge
    }

    pub fn snake(&self) -> &Widget<Snake<R>> {
        &self.snake
    }

    pub fn snake_mut(&mut self) -> &mut Widget<Snake<R>> {
        &mut self.snake
    }

    pub fn phase(&self, slot: Slot) -> Phase {
        match slot {
            Slot::Merge2048 => self.merge.phase(),
            Slot::Snake => self.snake.phase(),
        }
    }

    /// Move focus to `slot`.
    ///
    /// The widget losing focus is stopped unless it is already idle.
    pub fn set_focus(&mut self, slot: Slot) -> bool {
        if slot == self.focus {
            return false;
        }
        if self.phase(self.focus) != Phase::Idle {
            self.stop(self.focus);
        }
        debug!(from = self.focus.as_str(), to = slot.as_str(), "focus");
        self.focus = slot;
        true
    }

    /// Apply one input event. Returns whether anything changed.
    pub fn handle_signal(&mut self, signal: Signal) -> bool {
        match signal {
            Signal::Steer(direction) => match self.focus {
                Slot::Merge2048 => self.merge.steer(direction),
                Slot::Snake => self.snake.steer(direction),
            },
            Signal::Start => self.start(self.focus),
            Signal::Stop => {
                let was_idle = self.phase(self.focus) == Phase::Idle;
                self.stop(self.focus);
                !was_idle
            }
            Signal::FocusNext => self.set_focus(self.focus.next()),
            Signal::FocusPrev => self.set_focus(self.focus.prev()),
        }
    }

    fn start(&mut self, slot: Slot) -> bool {
        match slot {
            Slot::Merge2048 => self.merge.start(),
            Slot::Snake => {
                let started = self.snake.start();
                if started {
                    self.scheduler.reset();
                }
                started
            }
        }
    }

    fn stop(&mut self, slot: Slot) {
        match slot {
            Slot::Merge2048 => self.merge.stop(),
            Slot::Snake => {
                self.snake.stop();
                self.scheduler.reset();
            }
        }
    }

    /// Let `elapsed_ms` of wall time pass; returns the snake ticks applied.
    ///
    /// Time only accumulates while the snake is running. Ticks left over after
    /// the snake reaches a terminal state are dropped.
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        if !self.snake.is_running() {
            return 0;
        }
        let due = self.scheduler.advance(elapsed_ms);
        let mut applied = 0;
        for _ in 0..due {
            if !self.snake.is_running() {
                break;
            }
            self.snake.tick();
            applied += 1;
        }
        applied
    }

    /// Milliseconds until the next snake tick, if the snake is running.
    pub fn until_next_tick_ms(&self) -> Option<u32> {
        self.snake
            .is_running()
            .then(|| self.scheduler.until_next_ms())
    }

    /// Refresh `out` in place, reusing its snake segment buffer.
    pub fn snapshot_into(&self, out: &mut GallerySnapshot) {
        out.merge.phase = self.merge.phase();
        self.merge.engine().snapshot_into(&mut out.merge.game);
        out.snake.phase = self.snake.phase();
        self.snake.engine().snapshot_into(&mut out.snake.game);
        out.focus = self.focus;
    }

    pub fn snapshot(&self) -> GallerySnapshot {
        GallerySnapshot {
            merge: self.merge.snapshot(),
            snake: self.snake.snapshot(),
            focus: self.focus,
        }
    }
}
