//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (simulation, input mapping, rendering, persistence).
//!
//! # Grid
//!
//! The playfield is a fixed square:
//!
//! - **Size**: 15x15 cells (indexed 0-14 on both axes)
//! - **Origin**: (0, 0) is the top-left cell, `y` grows downwards
//! - **Initial snake**: 3 segments, head on the centre cell, heading right
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_MS` | 16 | Default frame cadence (~60 FPS) |
//! | `BASE_TICK_MS` | 180 | Movement interval at score 0 |
//! | `TICK_DELTA_MS` | 4 | Interval reduction per point |
//! | `TICK_FLOOR_MS` | 80 | Fastest movement interval |
//!
//! The movement interval is `max(TICK_FLOOR_MS, BASE_TICK_MS - score * TICK_DELTA_MS)`,
//! so the floor is reached at score 25.
//!
//! # Examples
//!
//! ```
//! use tui_snake_types::{Direction, GameAction, Position, GRID_SIZE};
//!
//! // Parse from string (case-insensitive)
//! let dir = Direction::from_str("left").unwrap();
//! assert_eq!(dir, Direction::Left);
//! assert!(dir.is_reversal_of(Direction::Right));
//!
//! // Step a position
//! let p = Position::new(0, 7).step(Direction::Left);
//! assert_eq!(p, Position::new(-1, 7));
//! assert!(!p.in_bounds());
//!
//! // Parse a game action
//! assert_eq!(GameAction::from_str("turnUp"), Some(GameAction::Turn(Direction::Up)));
//!
//! assert_eq!(GRID_SIZE, 15);
//! ```

/// Grid side length in cells (15x15)
pub const GRID_SIZE: u8 = 15;

/// Total number of grid cells
pub const GRID_CELLS: usize = (GRID_SIZE as usize) * (GRID_SIZE as usize);

/// Snake length after (re)initialisation
pub const INITIAL_SNAKE_LEN: usize = 3;

/// Maximum number of pending direction changes
pub const INPUT_BUFFER_CAPACITY: usize = 2;

/// Minimum swipe displacement (on either axis) before a gesture counts
pub const SWIPE_THRESHOLD_PX: f32 = 30.0;

/// Default frame cadence in milliseconds (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

/// Movement interval at score 0
pub const BASE_TICK_MS: u32 = 180;

/// Movement interval reduction per point scored
pub const TICK_DELTA_MS: u32 = 4;

/// Fastest movement interval
pub const TICK_FLOOR_MS: u32 = 80;

/// Food cell used when the snake fills the whole grid.
pub const FALLBACK_FOOD: Position = Position { x: 10, y: 7 };


/// Heading of the snake
///
/// Screen coordinates: `Up` decreases `y`, `Down` increases it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in a fixed order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The 180° opposite heading
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_types::Direction;
    ///
    /// assert_eq!(Direction::Up.opposite(), Direction::Down);
    /// assert_eq!(Direction::Left.opposite(), Direction::Right);
    /// ```
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// True if `self` would turn the snake straight back onto `current`.
    pub fn is_reversal_of(&self, current: Direction) -> bool {
        *self == current.opposite()
    }

    /// Unit offset `(dx, dy)` for one step
    pub fn delta(&self) -> (i8, i8) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Parse direction from string
    ///
    /// Accepts full names or single letters (case-insensitive):
    /// "up" | "u", "down" | "d", "left" | "l", "right" | "r"
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "u" => Some(Direction::Up),
            "down" | "d" => Some(Direction::Down),
            "left" | "l" => Some(Direction::Left),
            "right" | "r" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// A grid cell coordinate
///
/// Signed so that a head stepping off the grid (e.g. `x = -1`) can be
/// represented and rejected by the collision check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i8,
    pub y: i8,
}

impl Position {
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell in `dir` (may be off-grid).
    pub fn step(&self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }

    /// Check whether the position lies inside `[0, GRID_SIZE)` on both axes
    pub fn in_bounds(&self) -> bool {
        self.x >= 0 && self.y >= 0 && (self.x as u8) < GRID_SIZE && (self.y as u8) < GRID_SIZE
    }

    /// Row-major index into a `GRID_CELLS` array, `None` when off-grid.
    pub fn cell_index(&self) -> Option<usize> {
        if !self.in_bounds() {
            return None;
        }
        Some((self.y as usize) * (GRID_SIZE as usize) + (self.x as usize))
    }
}

/// Simulation state machine
///
/// `Idle → Playing → GameOver`; `Playing → Idle` on reset. Only an explicit
/// start re-enters `Playing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GamePhase {
    #[default]
    Idle,
    Playing,
    GameOver,
}

impl GamePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Idle => "idle",
            GamePhase::Playing => "playing",
            GamePhase::GameOver => "gameover",
        }
    }
}

/// Which screen the front end is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    #[default]
    Home,
    Playing,
    GameOver,
}

/// Status line contents, produced by the session and drawn by the view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HudView {
    pub screen: Screen,
    pub score: u32,
    pub high_score: u32,
    pub muted: bool,
    pub paused: bool,
}

/// Player intents that drive the session
///
/// These are produced by every input source (keyboard, swipe, on-screen
/// buttons) and consumed by the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Request a heading change (buffered, applied on a later tick)
    Turn(Direction),
    /// Leave the home or game-over screen and start playing
    Start,
    /// Start a fresh game
    Restart,
    /// Toggle pause state
    Pause,
    /// Abandon the game and go back to the home screen
    Home,
    /// Toggle the persisted mute flag
    ToggleMute,
}

impl GameAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_types::{Direction, GameAction};
    ///
    /// assert_eq!(GameAction::from_str("turnLeft"), Some(GameAction::Turn(Direction::Left)));
    /// assert_eq!(GameAction::from_str("pause"), Some(GameAction::Pause));
    /// assert_eq!(GameAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "turnup" => Some(GameAction::Turn(Direction::Up)),
            "turndown" => Some(GameAction::Turn(Direction::Down)),
            "turnleft" => Some(GameAction::Turn(Direction::Left)),
            "turnright" => Some(GameAction::Turn(Direction::Right)),
            "start" => Some(GameAction::Start),
            "restart" => Some(GameAction::Restart),
            "pause" => Some(GameAction::Pause),
            "home" => Some(GameAction::Home),
            "togglemute" => Some(GameAction::ToggleMute),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Turn(Direction::Up) => "turnUp",
            GameAction::Turn(Direction::Down) => "turnDown",
            GameAction::Turn(Direction::Left) => "turnLeft",
            GameAction::Turn(Direction::Right) => "turnRight",
            GameAction::Start => "start",
            GameAction::Restart => "restart",
            GameAction::Pause => "pause",
            GameAction::Home => "home",
            GameAction::ToggleMute => "toggleMute",
        }
    }
}
