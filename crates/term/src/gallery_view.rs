//! GalleryView: maps both widget snapshots into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{Board2048Snapshot, Ending, Phase, SnakeSnapshot, WidgetSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Slot, GRID_SIZE};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Screen rectangle in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

/// Where each part of the gallery lands for a given viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryLayout {
    pub title_y: u16,
    /// Bordered frame of the 2048 board.
    pub merge: Rect,
    /// Bordered frame of the snake board.
    pub snake: Rect,
    pub footer_y: u16,
}

/// Everything the view needs for one frame.
#[derive(Debug, Clone, Copy)]
pub struct GalleryFrame<'a> {
    pub merge: &'a WidgetSnapshot<Board2048Snapshot>,
    pub snake: &'a WidgetSnapshot<SnakeSnapshot>,
    pub focus: Slot,
}

const TITLE: &str = "TILE ARCADE";
const FOOTER: &str = "arrows/wasd steer  enter play  esc stop  tab switch  q quit";

const PANEL_GAP: u16 = 4;
/// Upper bounds for the cell metrics accepted by [`GalleryView::new`].
const MAX_TILE_W: u16 = 16;
const MAX_TILE_H: u16 = 8;
const MAX_SNAKE_CELL_W: u16 = 4;
/// Title, blank line, panel label.
const HEADER_ROWS: u16 = 3;
/// Blank line, footer.
const FOOTER_ROWS: u16 = 2;

const BORDER: Rgb = Rgb::new(90, 90, 100);
const BORDER_FOCUSED: Rgb = Rgb::new(237, 194, 46);
const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);

const BOARD_2048_BG: Rgb = Rgb::new(187, 173, 160);
const EMPTY_TILE: Rgb = Rgb::new(205, 193, 180);
const TEXT_DARK: Rgb = Rgb::new(119, 110, 101);
const TEXT_LIGHT: Rgb = Rgb::new(249, 246, 242);

const SNAKE_BG: Rgb = Rgb::new(34, 34, 34);
const SNAKE_BODY: Rgb = Rgb::new(0, 255, 0);
const SNAKE_FOOD: Rgb = Rgb::new(255, 0, 0);

/// Background and text colour for a 2048 tile.
pub fn tile_colors(value: u32) -> (Rgb, Rgb) {
    let bg = match value {
        0 => EMPTY_TILE,
        2 => Rgb::new(238, 228, 218),
        4 => Rgb::new(237, 224, 200),
        8 => Rgb::new(242, 177, 121),
        16 => Rgb::new(245, 149, 99),
        32 => Rgb::new(246, 124, 95),
        64 => Rgb::new(246, 94, 59),
        128 => Rgb::new(237, 207, 114),
        256 => Rgb::new(237, 204, 97),
        512 => Rgb::new(237, 200, 80),
        1024 => Rgb::new(237, 197, 63),
        2048 => Rgb::new(237, 194, 46),
        // Beyond 2048 tiles shade toward dark red as they grow.
        v => Rgb::new(255 - (v / 10).min(200) as u8, 0, 0),
    };
    let fg = if value > 4 { TEXT_LIGHT } else { TEXT_DARK };
    (bg, fg)
}

/// Side-by-side renderer for the two widgets.
pub struct GalleryView {
    /// Horizontal pitch of a 2048 tile (one column is left as a gutter).
    tile_w: u16,
    /// Height of a 2048 tile in rows.
    tile_h: u16,
    /// Snake cell width in terminal columns.
    snake_cell_w: u16,
}

impl Default for GalleryView {
    fn default() -> Self {
        // Snake cells are 2x1 to compensate for terminal glyph aspect ratio.
        Self {
            tile_w: 7,
            tile_h: 3,
            snake_cell_w: 2,
        }
    }
}

impl GalleryView {
    /// Metrics are clamped to a sane range so frame sizes always fit in u16.
    pub fn new(tile_w: u16, tile_h: u16, snake_cell_w: u16) -> Self {
        Self {
            tile_w: tile_w.clamp(2, MAX_TILE_W),
            tile_h: tile_h.clamp(1, MAX_TILE_H),
            snake_cell_w: snake_cell_w.clamp(1, MAX_SNAKE_CELL_W),
        }
    }

    fn merge_frame_size(&self) -> (u16, u16) {
        let n = GRID_SIZE as u16;
        (
            n.saturating_mul(self.tile_w).saturating_add(1 + 2),
            n.saturating_mul(self.tile_h).saturating_add(2),
        )
    }

    fn snake_frame_size(&self, board_size: u8) -> (u16, u16) {
        let n = board_size as u16;
        (n.saturating_mul(self.snake_cell_w).saturating_add(2), n + 2)
    }

    /// Compute panel placement; the whole gallery is centred in the viewport.
    pub fn layout(&self, viewport: Viewport, snake_board_size: u8) -> GalleryLayout {
        let (mw, mh) = self.merge_frame_size();
        let (sw, sh) = self.snake_frame_size(snake_board_size);

        let total_w = mw.saturating_add(PANEL_GAP).saturating_add(sw);
        let frame_h = mh.max(sh);
        let total_h = frame_h.saturating_add(HEADER_ROWS + FOOTER_ROWS);

        let x0 = viewport.width.saturating_sub(total_w) / 2;
        let y0 = viewport.height.saturating_sub(total_h) / 2;
        let frames_y = y0.saturating_add(HEADER_ROWS);

        GalleryLayout {
            title_y: y0,
            merge: Rect {
                x: x0,
                y: frames_y,
                w: mw,
                h: mh,
            },
            snake: Rect {
                x: x0.saturating_add(mw).saturating_add(PANEL_GAP),
                y: frames_y,
                w: sw,
                h: sh,
            },
            footer_y: frames_y.saturating_add(frame_h).saturating_add(1),
        }
    }

    /// Render the gallery into an existing framebuffer.
    ///
    /// Callers reuse the framebuffer across frames; it is only reallocated
    /// when the viewport size changes.
    pub fn render_into(&self, frame: &GalleryFrame<'_>, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::new(BORDER, SCREEN_BG).into_cell(' '));

        let layout = self.layout(viewport, frame.snake.game.board_size);

        let title = CellStyle::new(TEXT_LIGHT, SCREEN_BG).bold();
        fb.put_str_centered(0, viewport.width, layout.title_y, TITLE, title);

        self.draw_merge_panel(fb, frame.merge, layout.merge, frame.focus == Slot::Merge2048);
        self.draw_snake_panel(fb, frame.snake, layout.snake, frame.focus == Slot::Snake);

        let hint = CellStyle::new(BORDER, SCREEN_BG);
        fb.put_str_centered(0, viewport.width, layout.footer_y, FOOTER, hint);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, frame: &GalleryFrame<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(frame, viewport, &mut fb);
        fb
    }

    fn draw_merge_panel(
        &self,
        fb: &mut FrameBuffer,
        widget: &WidgetSnapshot<Board2048Snapshot>,
        rect: Rect,
        focused: bool,
    ) {
        let snap = &widget.game;
        draw_label(fb, rect, "2048", "max", snap.max_tile, focused);

        let inner = inner_rect(rect);
        let board_bg = CellStyle::new(TEXT_DARK, BOARD_2048_BG);
        fb.fill_rect(inner.x, inner.y, inner.w, inner.h, ' ', board_bg);
        draw_border(fb, rect, border_style(focused));

        for (row, cells) in snap.grid.iter().enumerate() {
            for (col, &value) in cells.iter().enumerate() {
                let x = inner.x + 1 + col as u16 * self.tile_w;
                let y = inner.y + row as u16 * self.tile_h;
                let w = self.tile_w - 1;

                let (bg, fg) = tile_colors(value);
                let style = CellStyle::new(fg, bg);
                fb.fill_rect(x, y, w, self.tile_h, ' ', style);
                if value != 0 {
                    let lx = x + w.saturating_sub(digit_count(value)) / 2;
                    fb.put_u32(lx, y + self.tile_h / 2, value, style.bold());
                }
            }
        }

        match widget.phase {
            Phase::Idle => draw_play_overlay(fb, inner, focused),
            Phase::Terminal => draw_game_over(fb, inner, "GAME OVER"),
            Phase::Running => {}
        }
    }

    fn draw_snake_panel(
        &self,
        fb: &mut FrameBuffer,
        widget: &WidgetSnapshot<SnakeSnapshot>,
        rect: Rect,
        focused: bool,
    ) {
        let snap = &widget.game;
        draw_label(fb, rect, "SNAKE", "len", snap.segments.len() as u32, focused);

        let inner = inner_rect(rect);
        let empty = CellStyle::new(SNAKE_BG, SNAKE_BG);
        fb.fill_rect(inner.x, inner.y, inner.w, inner.h, ' ', empty);
        draw_border(fb, rect, border_style(focused));

        if let Some(food) = snap.food {
            self.fill_snake_cell(fb, inner, food.x, food.y, CellStyle::new(SNAKE_FOOD, SNAKE_FOOD));
        }
        let body = CellStyle::new(SNAKE_BODY, SNAKE_BODY);
        for segment in &snap.segments {
            self.fill_snake_cell(fb, inner, segment.x, segment.y, body);
        }
        // Head gets a marker so the heading reads at a glance.
        if let Some(head) = snap.head() {
            let x = inner.x + head.x as u16 * self.snake_cell_w;
            let y = inner.y + head.y as u16;
            fb.put_char(x, y, '◆', CellStyle::new(SNAKE_BG, SNAKE_BODY).bold());
        }

        match widget.phase {
            Phase::Idle => draw_play_overlay(fb, inner, focused),
            Phase::Terminal => {
                let text = match snap.ending {
                    Some(Ending::BoardFilled) => "BOARD FILLED",
                    _ => "GAME OVER",
                };
                draw_game_over(fb, inner, text);
            }
            Phase::Running => {}
        }
    }

    fn fill_snake_cell(&self, fb: &mut FrameBuffer, inner: Rect, x: u8, y: u8, style: CellStyle) {
        let px = inner.x + x as u16 * self.snake_cell_w;
        let py = inner.y + y as u16;
        fb.fill_rect(px, py, self.snake_cell_w, 1, ' ', style);
    }
}

fn inner_rect(rect: Rect) -> Rect {
    Rect {
        x: rect.x + 1,
        y: rect.y + 1,
        w: rect.w.saturating_sub(2),
        h: rect.h.saturating_sub(2),
    }
}

fn border_style(focused: bool) -> CellStyle {
    if focused {
        CellStyle::new(BORDER_FOCUSED, SCREEN_BG).bold()
    } else {
        CellStyle::new(BORDER, SCREEN_BG)
    }
}

/// Name on the left above the frame, a stat on the right.
fn draw_label(fb: &mut FrameBuffer, rect: Rect, name: &str, stat: &str, value: u32, focused: bool) {
    let y = rect.y.saturating_sub(1);
    fb.put_str(rect.x, y, name, border_style(focused));

    let stat_w = stat.len() as u16 + 1 + digit_count(value);
    let sx = (rect.x + rect.w).saturating_sub(stat_w);
    let style = CellStyle::new(BORDER, SCREEN_BG);
    fb.put_str(sx, y, stat, style);
    fb.put_u32(sx + stat.len() as u16 + 1, y, value, style);
}

fn draw_border(fb: &mut FrameBuffer, rect: Rect, style: CellStyle) {
    let Rect { x, y, w, h } = rect;
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

/// Idle widgets are dimmed behind a play prompt.
fn draw_play_overlay(fb: &mut FrameBuffer, inner: Rect, focused: bool) {
    fb.dim_rect(inner.x, inner.y, inner.w, inner.h);

    let mid = inner.y + inner.h / 2;
    let text = CellStyle::new(TEXT_LIGHT, SCREEN_BG).bold();
    fb.put_str_centered(inner.x, inner.w, mid.saturating_sub(1), " PLAY ", text);

    let hint = if focused { "press enter" } else { "tab to focus" };
    fb.put_str_centered(inner.x, inner.w, mid + 1, hint, CellStyle::new(TEXT_LIGHT, SCREEN_BG));
}

fn draw_game_over(fb: &mut FrameBuffer, inner: Rect, text: &str) {
    let mid = inner.y + inner.h / 2;
    let style = CellStyle::new(Rgb::new(255, 255, 255), SCREEN_BG).bold();
    fb.put_str_centered(inner.x, inner.w, mid.saturating_sub(1), text, style);
    let hint = CellStyle::new(TEXT_LIGHT, SCREEN_BG);
    fb.put_str_centered(inner.x, inner.w, mid + 1, "enter to retry", hint);
}

fn digit_count(mut value: u32) -> u16 {
    let mut n = 1;
    while value >= 10 {
        value /= 10;
        n += 1;
    }
    n
}
