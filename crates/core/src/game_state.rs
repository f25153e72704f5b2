//! Game state module - the authoritative simulation
//!
//! This module ties together the snake, the input buffer, food placement and
//! the tick curve. It owns every piece of mutable game state; input sources
//! only reach it through [`GameState::submit_direction`].
//!
//! Each logic tick runs in a fixed order:
//!
//! 1. consume at most one buffered direction (reversals are discarded)
//! 2. compute the new head
//! 3. check walls and body (the outgoing tail does not count)
//! 4. grow on food, or move and drop the tail
//! 5. commit the heading

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::food::spawn_food;
use crate::input_buffer::InputBuffer;
use crate::observer::GameObserver;
use crate::snake::Snake;
use crate::snapshot::GameSnapshot;
use crate::timing::tick_interval_ms;
use crate::types::*;

/// Result of a single logic tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Head advanced, tail dropped
    Moved,
    /// Head advanced onto food, tail kept
    Grew,
    /// Wall or body hit; the game is over
    Collided,
    /// Engine was not playing; nothing happened
    Idle,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    phase: GamePhase,
    snake: Snake,
    food: Position,
    direction: Direction,
    input: InputBuffer,
    score: u32,
    paused: bool,
    /// Timestamp of the last logic tick; `None` until the first frame after start.
    last_tick_ms: Option<u64>,
    /// Portion of the current interval already elapsed when pause began.
    paused_elapsed_ms: Option<u64>,
    /// Monotonic episode id (increments on every start).
    episode_id: u32,
    /// Successful moves in the current episode.
    tick_count: u64,
    seed: u64,
    rng: ChaCha8Rng,
}

impl GameState {
    /// Create an idle game with the given RNG seed
    pub fn new(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let snake = Snake::centered();
        let food = spawn_food(&snake, &mut rng);

        Self {
            phase: GamePhase::Idle,
            snake,
            food,
            direction: Direction::Right,
            input: InputBuffer::new(),
            score: 0,
            paused: false,
            last_tick_ms: None,
            paused_elapsed_ms: None,
            episode_id: 0,
            tick_count: 0,
            seed,
            rng,
        }
    }

    /// Build a playing game from an explicit layout.
    ///
    /// `body` is head first. Returns `None` if the body is not a valid snake,
    /// the food is off-grid or under the snake, or `heading` points back into
    /// the neck.
    pub fn from_layout(
        seed: u64,
        body: &[Position],
        heading: Direction,
        food: Position,
    ) -> Option<Self> {
        let snake = Snake::from_cells(body)?;
        if !food.in_bounds() || snake.contains(food) {
            return None;
        }
        if body.len() > 1 && snake.next_head(heading) == body[1] {
            return None;
        }

        let mut state = Self::new(seed);
        state.snake = snake;
        state.food = food;
        state.direction = heading;
        state.phase = GamePhase::Playing;
        state.episode_id = 1;
        Some(state)
    }

    /// Enter `Playing`, re-initialising the board.
    ///
    /// Works from any phase, so it doubles as restart.
    pub fn start(&mut self) {
        self.reinitialize();
        self.episode_id = self.episode_id.wrapping_add(1);
        self.phase = GamePhase::Playing;
        tracing::debug!(
            episode = self.episode_id,
            food_x = self.food.x,
            food_y = self.food.y,
            "game started"
        );
    }

    /// Go back to `Idle`, dropping the current game.
    pub fn reset(&mut self) {
        self.reinitialize();
        self.phase = GamePhase::Idle;
        tracing::debug!(episode = self.episode_id, "game reset");
    }

    fn reinitialize(&mut self) {
        self.snake = Snake::centered();
        self.direction = Direction::Right;
        self.input.clear();
        self.score = 0;
        self.paused = false;
        self.last_tick_ms = None;
        self.paused_elapsed_ms = None;
        self.tick_count = 0;
        self.food = spawn_food(&self.snake, &mut self.rng);
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    pub fn game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn food(&self) -> Position {
        self.food
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn pending_inputs(&self) -> &InputBuffer {
        &self.input
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Current movement interval (shrinks with score).
    pub fn tick_interval_ms(&self) -> u32 {
        tick_interval_ms(self.score)
    }

    /// Queue a heading change for a later tick.
    ///
    /// Returns `false` when not playing or when the buffer is full; the intent
    /// is then dropped.
    pub fn submit_direction(&mut self, dir: Direction) -> bool {
        if self.phase != GamePhase::Playing {
            return false;
        }
        let accepted = self.input.push(dir);
        if !accepted {
            tracing::trace!(dir = dir.as_str(), "input buffer full, intent dropped");
        }
        accepted
    }

    /// Freeze or resume the tick timer.
    ///
    /// Time spent paused does not count towards the next tick.
    pub fn set_paused(&mut self, paused: bool, now_ms: u64) {
        if self.phase != GamePhase::Playing || paused == self.paused {
            return;
        }

        if paused {
            self.paused_elapsed_ms = self.last_tick_ms.map(|t| now_ms.saturating_sub(t));
        } else {
            self.last_tick_ms = self
                .paused_elapsed_ms
                .take()
                .map(|elapsed| now_ms.saturating_sub(elapsed));
        }
        self.paused = paused;
    }

    /// Frame entry point: run one logic tick if the interval has elapsed.
    ///
    /// Returns `true` when a tick ran. The first frame after start only
    /// records the timer baseline.
    pub fn advance<O: GameObserver + ?Sized>(&mut self, now_ms: u64, observer: &mut O) -> bool {
        if self.phase != GamePhase::Playing || self.paused {
            return false;
        }

        let Some(last) = self.last_tick_ms else {
            self.last_tick_ms = Some(now_ms);
            return false;
        };

        let interval = u64::from(self.tick_interval_ms());
        if now_ms.saturating_sub(last) < interval {
            return false;
        }

        self.last_tick_ms = Some(now_ms);
        self.step(observer);
        true
    }

    /// One logic tick, ignoring the timer.
    pub fn step<O: GameObserver + ?Sized>(&mut self, observer: &mut O) -> StepOutcome {
        if self.phase != GamePhase::Playing {
            return StepOutcome::Idle;
        }

        let mut next_dir = self.direction;
        if let Some(buffered) = self.input.pop_front() {
            if buffered.is_reversal_of(self.direction) {
                tracing::trace!(dir = buffered.as_str(), "reversal discarded");
            } else {
                next_dir = buffered;
            }
        }

        let new_head = self.snake.next_head(next_dir);
        if !new_head.in_bounds() || self.snake.collides_with(new_head) {
            self.phase = GamePhase::GameOver;
            tracing::debug!(
                episode = self.episode_id,
                score = self.score,
                head_x = new_head.x,
                head_y = new_head.y,
                "collision, game over"
            );
            observer.on_game_over(self.score);
            return StepOutcome::Collided;
        }

        let ate = new_head == self.food;
        self.snake.advance(new_head, ate);
        self.tick_count = self.tick_count.wrapping_add(1);

        let outcome = if ate {
            self.score += 1;
            observer.on_score_update(self.score);
            self.food = spawn_food(&self.snake, &mut self.rng);
            StepOutcome::Grew
        } else {
            StepOutcome::Moved
        };

        self.direction = next_dir;
        outcome
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.snake.clear();
        for &cell in self.snake.iter() {
            // Capacity equals the grid size; a valid snake always fits.
            let _ = out.snake.try_push(cell);
        }
        out.food = self.food;
        out.direction = self.direction;
        out.pending.clear();
        for &dir in self.input.as_slice() {
            let _ = out.pending.try_push(dir);
        }
        out.phase = self.phase;
        out.paused = self.paused;
        out.episode_id = self.episode_id;
        out.tick_count = self.tick_count;
        out.score = self.score;
        out.tick_interval_ms = self.tick_interval_ms();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
