use tile_arcade::core::{Board2048, SequenceRng, Snake, SnakeConfig};
use tile_arcade::gallery::Gallery;
use tile_arcade::term::{
    encode_diff_into, encode_full_into, tile_colors, GalleryView, Rgb, Viewport,
};
use tile_arcade::types::{Signal, SNAKE_TICK_MS};

fn gallery() -> Gallery<SequenceRng> {
    Gallery::with_engines(
        Board2048::new(SequenceRng::new([0, 1, 0, 1])),
        Snake::new(SnakeConfig::default(), SequenceRng::new([0])),
        SNAKE_TICK_MS,
    )
}

fn row_text(fb: &tile_arcade::term::FrameBuffer, y: u16) -> String {
    (0..fb.width()).map(|x| fb.get(x, y).unwrap().ch).collect()
}

#[test]
fn term_view_draws_both_frames_with_corners() {
    let g = gallery();
    let snap = g.snapshot();
    let view = GalleryView::default();
    let vp = Viewport::new(80, 24);
    let fb = view.render(&snap.frame(), vp);
    let layout = view.layout(vp, 10);

    for rect in [layout.merge, layout.snake] {
        assert_eq!(fb.get(rect.x, rect.y).unwrap().ch, '┌');
        assert_eq!(fb.get(rect.x + rect.w - 1, rect.y).unwrap().ch, '┐');
        assert_eq!(fb.get(rect.x, rect.y + rect.h - 1).unwrap().ch, '└');
        assert_eq!(fb.get(rect.x + rect.w - 1, rect.y + rect.h - 1).unwrap().ch, '┘');
    }

    let labels = row_text(&fb, layout.merge.y - 1);
    assert!(labels.contains("2048"));
    assert!(labels.contains("SNAKE"));
}

#[test]
fn term_view_play_overlay_goes_away_on_start() {
    let mut g = gallery();
    let view = GalleryView::default();
    let vp = Viewport::new(80, 24);
    let layout = view.layout(vp, 10);
    let mid = layout.merge.y + layout.merge.h / 2;

    let idle = view.render(&g.snapshot().frame(), vp);
    assert!(row_text(&idle, mid - 1).contains("PLAY"));

    g.handle_signal(Signal::Start);
    let running = view.render(&g.snapshot().frame(), vp);
    let merge_row: String = (layout.merge.x..layout.merge.x + layout.merge.w)
        .map(|x| running.get(x, mid - 1).unwrap().ch)
        .collect();
    assert!(!merge_row.contains("PLAY"));

    // The first spawned tile (a 2 at the top-left) shows the 2048 palette.
    let tile = running.get(layout.merge.x + 2, layout.merge.y + 1).unwrap();
    assert_eq!(tile.style.bg, tile_colors(2).0);
    assert_eq!(tile.style.bg, Rgb::new(238, 228, 218));
}

#[test]
fn term_diff_only_touches_changed_cells() {
    let mut g = gallery();
    let view = GalleryView::default();
    let vp = Viewport::new(80, 24);

    g.handle_signal(Signal::FocusNext);
    g.handle_signal(Signal::Start);
    let a = view.render(&g.snapshot().frame(), vp);
    g.advance(SNAKE_TICK_MS);
    let b = view.render(&g.snapshot().frame(), vp);
    assert_ne!(a, b);

    let mut full = Vec::new();
    encode_full_into(&b, &mut full).unwrap();
    let mut diff = Vec::new();
    encode_diff_into(&a, &b, &mut diff).unwrap();
    assert!(diff.len() * 4 < full.len());
}
