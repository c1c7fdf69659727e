use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tile_arcade::core::{slide_and_merge, Board2048, SimpleRng, Snake, SnakeConfig};
use tile_arcade::gallery::Gallery;
use tile_arcade::term::{GalleryView, Viewport};
use tile_arcade::types::{Direction, Signal, SNAKE_TICK_MS};
use tile_arcade::GalleryConfig;

fn bench_slide_and_merge(c: &mut Criterion) {
    c.bench_function("slide_and_merge_row", |b| {
        b.iter(|| slide_and_merge(black_box([2u32, 2, 4, 4])))
    });
}

fn bench_2048_move(c: &mut Criterion) {
    let mut board = Board2048::new(SimpleRng::new(12345));
    let dirs = [Direction::Left, Direction::Down, Direction::Right, Direction::Up];
    let mut i = 0usize;

    c.bench_function("board2048_move", |b| {
        b.iter(|| {
            let out = board.move_tiles(black_box(dirs[i % dirs.len()]));
            i = i.wrapping_add(1);
            if out.terminal {
                board.reset();
            }
        })
    });
}

fn bench_snake_tick(c: &mut Criterion) {
    let mut snake = Snake::new(SnakeConfig::default(), SimpleRng::new(12345));

    c.bench_function("snake_tick", |b| {
        b.iter(|| {
            if snake.tick().is_terminal() {
                snake.reset();
            }
        })
    });
}

fn bench_render_gallery(c: &mut Criterion) {
    let mut gallery = Gallery::new(&GalleryConfig {
        seed: 12345,
        snake_tick_ms: SNAKE_TICK_MS,
        log_path: None,
    });
    gallery.handle_signal(Signal::Start);
    let snap = gallery.snapshot();
    let view = GalleryView::default();
    let vp = Viewport::new(80, 24);
    let mut fb = view.render(&snap.frame(), vp);

    c.bench_function("render_gallery_80x24", |b| {
        b.iter(|| view.render_into(black_box(&snap.frame()), vp, &mut fb))
    });
}

criterion_group!(
    benches,
    bench_slide_and_merge,
    bench_2048_move,
    bench_snake_tick,
    bench_render_gallery
);
criterion_main!(benches);
