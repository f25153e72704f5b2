//! GameView: maps a `GameSnapshot` plus HUD state into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, top to bottom:
//!
//! | Rows | Content |
//! |------|---------|
//! | 1 | HUD: score, best, mute/pause markers |
//! | ceil(surface / 2) | Board: square raster, two pixels per row via half blocks |
//! | 3 (optional) | Gap, then the ▲ / ◀ ▼ ▶ control pad |
//!
//! The surface side is the largest multiple of the grid size that fits, so
//! every cell is a whole number of pixels.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::raster::Raster;
use crate::scene::draw_scene;
use crate::types::{Direction, HudView, Screen, GRID_SIZE};

const HUD_ROWS: u16 = 1;
/// Blank row plus two button rows.
const PAD_ROWS: u16 = 3;
const PAD_WIDTH: u16 = 11;
const BUTTON_WIDTH: u16 = 3;
/// Below this height the pad is dropped in favour of a bigger board.
const PAD_MIN_HEIGHT: u16 = 16;

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

/// Where things land for a given viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub board_x: u16,
    pub board_y: u16,
    /// Square surface side in pixels (0 when nothing fits).
    pub surface_px: u16,
    /// Top-left of the control pad, if shown.
    pub pad: Option<(u16, u16)>,
}

impl Layout {
    pub fn compute(viewport: Viewport) -> Self {
        let with_pad = viewport.height >= PAD_MIN_HEIGHT && viewport.width >= PAD_WIDTH;
        let reserved = HUD_ROWS + if with_pad { PAD_ROWS } else { 0 };
        let rows = viewport.height.saturating_sub(reserved);

        let max_px = viewport.width.min(rows.saturating_mul(2));
        let grid = u16::from(GRID_SIZE);
        let surface_px = max_px - max_px % grid;

        let board_x = viewport.width.saturating_sub(surface_px) / 2;
        let board_y = HUD_ROWS;
        let board_rows = surface_px.div_ceil(2);

        let pad = with_pad.then(|| {
            (
                viewport.width.saturating_sub(PAD_WIDTH) / 2,
                board_y + board_rows + 1,
            )
        });

        Self {
            board_x,
            board_y,
            surface_px,
            pad,
        }
    }

    pub fn board_rows(&self) -> u16 {
        self.surface_px.div_ceil(2)
    }

    /// Screen rectangle (x, y, width) of each pad button, one row high.
    fn buttons(&self) -> Option<[(Direction, u16, u16, u16); 4]> {
        let (x, y) = self.pad?;
        Some([
            (Direction::Up, x + 4, y, BUTTON_WIDTH),
            (Direction::Left, x, y + 1, BUTTON_WIDTH),
            (Direction::Down, x + 4, y + 1, BUTTON_WIDTH),
            (Direction::Right, x + 8, y + 1, BUTTON_WIDTH),
        ])
    }

    /// Which pad button, if any, covers terminal cell (`col`, `row`).
    pub fn hit_test(&self, col: u16, row: u16) -> Option<Direction> {
        self.buttons()?
            .into_iter()
            .find(|&(_, x, y, w)| row == y && col >= x && col < x + w)
            .map(|(dir, ..)| dir)
    }
}

/// Surface side in pixels for `viewport`; 0 when the board cannot be drawn.
pub fn surface_px(viewport: Viewport) -> u16 {
    Layout::compute(viewport).surface_px
}

/// Resolve a click at terminal cell (`col`, `row`) against the control pad.
pub fn hit_test(viewport: Viewport, col: u16, row: u16) -> Option<Direction> {
    Layout::compute(viewport).hit_test(col, row)
}

const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);

fn text_style() -> CellStyle {
    CellStyle::new(Rgb::new(220, 220, 220), SCREEN_BG)
}

fn label_style() -> CellStyle {
    CellStyle::new(Rgb::new(140, 200, 150), SCREEN_BG).bold()
}

fn button_style() -> CellStyle {
    CellStyle::new(Rgb::new(240, 240, 240), Rgb::new(34, 77, 49)).bold()
}

fn overlay_style() -> CellStyle {
    CellStyle::new(Rgb::new(255, 255, 255), SCREEN_BG).bold()
}

/// Terminal renderer for the snake game. Owns the raster scratch so the
/// per-frame path does not allocate once sizes settle.
#[derive(Debug, Default)]
pub struct GameView {
    raster: Raster,
}

impl GameView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render into an existing framebuffer.
    pub fn render_into(
        &mut self,
        snap: &GameSnapshot,
        hud: &HudView,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(text_style().into_cell(' '));

        let layout = Layout::compute(viewport);
        self.draw_hud(fb, hud, viewport);

        self.raster.resize(layout.surface_px);
        if draw_scene(snap, &mut self.raster) {
            fb.blit_half_blocks(layout.board_x, layout.board_y, &self.raster);
        } else {
            let msg = "enlarge the terminal";
            let x = viewport.width.saturating_sub(msg.len() as u16) / 2;
            fb.put_str(x, viewport.height / 2, msg, text_style().dim());
            return;
        }

        self.draw_pad(fb, &layout);
        self.draw_overlay(fb, hud, &layout);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&mut self, snap: &GameSnapshot, hud: &HudView, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, hud, viewport, &mut fb);
        fb
    }

    fn draw_hud(&self, fb: &mut FrameBuffer, hud: &HudView, viewport: Viewport) {
        let mut x = fb.put_str(1, 0, "SCORE ", label_style());
        x = fb.put_u32(x, 0, hud.score, text_style());
        x = fb.put_str(x.saturating_add(2), 0, "BEST ", label_style());
        fb.put_u32(x, 0, hud.high_score, text_style());

        let mut right = viewport.width.saturating_sub(1);
        for (on, marker) in [(hud.muted, "MUTED"), (hud.paused, "PAUSED")] {
            if !on {
                continue;
            }
            right = right.saturating_sub(marker.len() as u16);
            fb.put_str(right, 0, marker, text_style().dim());
            right = right.saturating_sub(1);
        }
    }

    fn draw_pad(&self, fb: &mut FrameBuffer, layout: &Layout) {
        let Some(buttons) = layout.buttons() else {
            return;
        };
        for (dir, x, y, w) in buttons {
            let glyph = match dir {
                Direction::Up => "▲",
                Direction::Down => "▼",
                Direction::Left => "◀",
                Direction::Right => "▶",
            };
            fb.fill_rect(x, y, w, 1, ' ', button_style());
            fb.put_str(x + w / 2, y, glyph, button_style());
        }
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, hud: &HudView, layout: &Layout) {
        let mid = layout.board_y + layout.board_rows() / 2;
        match hud.screen {
            Screen::Home => {
                self.center_line(fb, layout, mid.saturating_sub(1), "SNAKE", overlay_style());
                self.center_line(fb, layout, mid + 1, "ENTER to start", text_style());
            }
            Screen::Playing if hud.paused => {
                self.center_line(fb, layout, mid, "PAUSED", overlay_style());
                self.center_line(fb, layout, mid + 1, "P to resume", text_style());
            }
            Screen::Playing => {}
            Screen::GameOver => {
                self.center_line(fb, layout, mid.saturating_sub(1), "GAME OVER", overlay_style());
                let label = "SCORE ";
                let digits = digit_count(hud.score);
                let w = label.len() as u16 + digits;
                let x = layout.board_x + layout.surface_px.saturating_sub(w) / 2;
                let x = fb.put_str(x, mid, label, text_style());
                fb.put_u32(x, mid, hud.score, text_style());
                self.center_line(fb, layout, mid + 1, "R restart  ESC home", text_style());
            }
        }
    }

    fn center_line(&self, fb: &mut FrameBuffer, layout: &Layout, y: u16, text: &str, style: CellStyle) {
        let w = text.chars().count() as u16;
        let x = layout.board_x + layout.surface_px.saturating_sub(w) / 2;
        fb.put_str(x, y, text, style);
    }
}

fn digit_count(mut n: u32) -> u16 {
    let mut d = 1;
    while n >= 10 {
        n /= 10;
        d += 1;
    }
    d
}
