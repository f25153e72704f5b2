//! Food placement.
//!
//! Food goes on a uniformly random free cell. When the snake covers the whole
//! grid there is nowhere to go, and the fixed [`FALLBACK_FOOD`] cell is used.

use rand::seq::IteratorRandom;
use rand::Rng;

use crate::snake::Snake;
use crate::types::{Position, FALLBACK_FOOD, GRID_CELLS, GRID_SIZE};

/// Occupancy bitmap for the current snake, row-major.
fn occupancy(snake: &Snake) -> [bool; GRID_CELLS] {
    let mut occupied = [false; GRID_CELLS];
    for cell in snake.iter() {
        if let Some(idx) = cell.cell_index() {
            occupied[idx] = true;
        }
    }
    occupied
}

/// Iterate every cell not covered by `snake`.
pub fn free_cells(snake: &Snake) -> impl Iterator<Item = Position> {
    let occupied = occupancy(snake);
    (0..GRID_SIZE as i8)
        .flat_map(|y| (0..GRID_SIZE as i8).map(move |x| Position::new(x, y)))
        .filter(move |p| p.cell_index().is_some_and(|idx| !occupied[idx]))
}

/// Pick the next food cell.
pub fn spawn_food<R: Rng + ?Sized>(snake: &Snake, rng: &mut R) -> Position {
    match free_cells(snake).choose(rng) {
        Some(cell) => cell,
        None => {
            tracing::warn!(
                snake_len = snake.len(),
                "no free cell for food, using fallback ({}, {})",
                FALLBACK_FOOD.x,
                FALLBACK_FOOD.y
            );
            FALLBACK_FOOD
        }
    }
}
