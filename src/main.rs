//! Terminal arcade runner (default binary).
//!
//! Uses crossterm for input and the framebuffer renderer from the term crate.
//! Set `ARCADE_LOG_PATH` to get a log file; stdout belongs to the game.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;

use tile_arcade::input::{handle_key_event, should_quit};
use tile_arcade::term::{FrameBuffer, GalleryView, TerminalRenderer, Viewport};
use tile_arcade::{telemetry, Gallery, GalleryConfig};

/// Poll timeout when no widget needs ticking.
const IDLE_POLL: Duration = Duration::from_millis(500);

fn main() -> Result<()> {
    let config = GalleryConfig::from_env();
    if let Some(path) = &config.log_path {
        telemetry::init_file_logging(path)?;
    }
    info!(
        seed = config.seed,
        snake_tick_ms = config.snake_tick_ms,
        "tile arcade starting"
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    info!("tile arcade exiting");
    result
}

fn run(term: &mut TerminalRenderer, config: &GalleryConfig) -> Result<()> {
    let mut gallery = Gallery::new(config);
    let view = GalleryView::default();

    let mut snap = gallery.snapshot();
    let mut fb = FrameBuffer::new(0, 0);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        gallery.snapshot_into(&mut snap);
        view.render_into(&snap.frame(), Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until the next snake tick.
        let timeout = gallery
            .until_next_tick_ms()
            .map(|ms| Duration::from_millis(ms as u64))
            .unwrap_or(IDLE_POLL);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(signal) = handle_key_event(key) {
                        gallery.handle_signal(signal);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick. Whole milliseconds only; the fraction stays on the clock.
        let elapsed_ms = last_tick.elapsed().as_millis().min(u32::MAX as u128) as u32;
        last_tick += Duration::from_millis(elapsed_ms as u64);
        gallery.advance(elapsed_ms);
    }
}
