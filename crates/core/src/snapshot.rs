use arrayvec::ArrayVec;

use crate::types::{Direction, GamePhase, Position, GRID_CELLS, INPUT_BUFFER_CAPACITY};

/// Read-only projection of the engine, taken once per frame.
///
/// Renderers and the HUD only ever see this; it never feeds back into the
/// simulation. Fixed-capacity storage keeps `snapshot_into` allocation-free.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    /// Snake cells, head first.
    pub snake: ArrayVec<Position, GRID_CELLS>,
    pub food: Position,
    pub direction: Direction,
    pub pending: ArrayVec<Direction, INPUT_BUFFER_CAPACITY>,
    pub phase: GamePhase,
    pub paused: bool,
    pub episode_id: u32,
    pub tick_count: u64,
    pub score: u32,
    pub tick_interval_ms: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.snake.clear();
        self.food = Position::default();
        self.direction = Direction::Right;
        self.pending.clear();
        self.phase = GamePhase::Idle;
        self.paused = false;
        self.episode_id = 0;
        self.tick_count = 0;
        self.score = 0;
        self.tick_interval_ms = 0;
    }

    pub fn head(&self) -> Option<Position> {
        self.snake.first().copied()
    }

    pub fn occupies(&self, pos: Position) -> bool {
        self.snake.contains(&pos)
    }

    pub fn playable(&self) -> bool {
        self.phase == GamePhase::Playing && !self.paused
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            snake: ArrayVec::new(),
            food: Position::default(),
            direction: Direction::Right,
            pending: ArrayVec::new(),
            phase: GamePhase::Idle,
            paused: false,
            episode_id: 0,
            tick_count: 0,
            score: 0,
            tick_interval_ms: 0,
        }
    }
}
