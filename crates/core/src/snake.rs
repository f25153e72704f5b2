//! Snake body - ordered cells, head first.
//!
//! The body never leaves the grid and never overlaps itself; both are
//! enforced by [`crate::GameState`] before a move is committed.

use std::collections::VecDeque;

use crate::types::{Direction, Position, GRID_CELLS, GRID_SIZE, INITIAL_SNAKE_LEN};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    body: VecDeque<Position>,
}

impl Snake {
    /// Initial snake: head on the centre cell, body trailing to the left so
    /// it can safely head right.
    pub fn centered() -> Self {
        let mid = (GRID_SIZE / 2) as i8;
        let mut body = VecDeque::with_capacity(GRID_CELLS);
        for i in 0..INITIAL_SNAKE_LEN as i8 {
            body.push_back(Position::new(mid - i, mid));
        }
        Self { body }
    }

    /// Build a snake from explicit cells (head first).
    ///
    /// Returns `None` for an empty body, off-grid cells, duplicate cells or
    /// segments that are not orthogonally adjacent.
    pub fn from_cells(cells: &[Position]) -> Option<Self> {
        if cells.is_empty() || cells.len() > GRID_CELLS {
            return None;
        }

        let mut seen = [false; GRID_CELLS];
        for &cell in cells {
            let idx = cell.cell_index()?;
            if seen[idx] {
                return None;
            }
            seen[idx] = true;
        }

        let connected = cells.windows(2).all(|pair| {
            let dx = (pair[0].x - pair[1].x).abs();
            let dy = (pair[0].y - pair[1].y).abs();
            dx + dy == 1
        });
        if !connected {
            return None;
        }

        let mut body = VecDeque::with_capacity(GRID_CELLS);
        body.extend(cells.iter().copied());
        Some(Self { body })
    }

    pub fn head(&self) -> Position {
        // Non-empty by construction.
        self.body[0]
    }

    pub fn tail(&self) -> Position {
        self.body[self.body.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Position> + '_ {
        self.body.iter()
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Check whether moving the head onto `pos` would hit the body.
    ///
    /// The tail is excluded: it is vacated on the same tick the head moves.
    pub fn collides_with(&self, pos: Position) -> bool {
        let keep = self.body.len().saturating_sub(1);
        self.body.iter().take(keep).any(|&segment| segment == pos)
    }

    /// The cell the head would enter moving in `dir`.
    pub fn next_head(&self, dir: Direction) -> Position {
        self.head().step(dir)
    }

    /// Prepend `new_head`; drop the tail unless `grow` is set.
    pub(crate) fn advance(&mut self, new_head: Position, grow: bool) {
        self.body.push_front(new_head);
        if !grow {
            self.body.pop_back();
        }
    }
}

impl Default for Snake {
    fn default() -> Self {
        Self::centered()
    }
}
