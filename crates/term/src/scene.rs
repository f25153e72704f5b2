//! Scene projection: snapshot to pixels.
//!
//! Draw order is background, grid, snake, food. The cell size is the surface
//! size divided by the grid dimension; any leftover pixels on the right and
//! bottom stay background.

use crate::core::GameSnapshot;
use crate::fb::Rgb;
use crate::raster::Raster;
use crate::types::{Position, GRID_SIZE};

pub const BACKGROUND: Rgb = Rgb::hex(0x1a4d2e);
pub const GRID_LINE: Rgb = Rgb::hex(0x224d31);
pub const SNAKE: Rgb = Rgb::hex(0x00ff41);
pub const FOOD: Rgb = Rgb::hex(0xff3b30);

const HEAD_PADDING: u16 = 1;
const BODY_PADDING: u16 = 2;

/// Pixels per grid cell for a surface of `size` pixels.
pub fn cell_px(size: u16) -> u16 {
    size / u16::from(GRID_SIZE)
}

/// Render `snap` onto `raster`. Returns `false` and leaves the raster alone
/// when the surface has no area.
pub fn draw_scene(snap: &GameSnapshot, raster: &mut Raster) -> bool {
    let size = raster.size();
    if size == 0 {
        return false;
    }

    raster.clear(BACKGROUND);

    let cell = cell_px(size);
    if cell == 0 {
        return true;
    }

    for i in 0..=u16::from(GRID_SIZE) {
        let at = (i * cell).min(size - 1);
        raster.vline(at, GRID_LINE);
        raster.hline(at, GRID_LINE);
    }

    for (index, &segment) in snap.snake.iter().enumerate() {
        let padding = if index == 0 { HEAD_PADDING } else { BODY_PADDING };
        fill_cell(raster, segment, cell, padding);
    }

    let radius = (f32::from(cell) / 2.0 - 2.0).max(2.0);
    let half = f32::from(cell) / 2.0;
    raster.fill_circle(
        f32::from(snap.food.x) * f32::from(cell) + half,
        f32::from(snap.food.y) * f32::from(cell) + half,
        radius,
        FOOD,
    );

    true
}

fn fill_cell(raster: &mut Raster, pos: Position, cell: u16, padding: u16) {
    // Too small to show a gap: fill the whole cell.
    let padding = if cell > padding * 2 + 1 { padding } else { 0 };
    let cell = i32::from(cell);
    let padding = i32::from(padding);
    let extent = cell - padding * 2;
    raster.fill_rect(
        i32::from(pos.x) * cell + padding,
        i32::from(pos.y) * cell + padding,
        extent,
        extent,
        SNAKE,
    );
}
