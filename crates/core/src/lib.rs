//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the simulation: snake movement, collision detection,
//! food placement, scoring and the input buffer. It has **no dependencies**
//! on terminals, persistence or wall-clock time, making it:
//!
//! - **Deterministic**: Same seed and inputs produce identical games
//! - **Testable**: Every rule is reachable through [`GameState::step`]
//! - **Portable**: Can run behind any front end (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`game_state`]: Authoritative state, lifecycle and the per-tick update
//! - [`snake`]: Ordered body cells with tail-aware collision checks
//! - [`input_buffer`]: Bounded FIFO of pending heading changes
//! - [`food`]: Uniform free-cell food placement
//! - [`timing`]: Score-driven tick interval curve
//! - [`observer`]: Score and game-over signals
//! - [`snapshot`]: Read-only per-frame projection
//!
//! # Example
//!
//! ```
//! use tui_snake_core::{GameState, GameEvent};
//! use tui_snake_types::{Direction, GamePhase};
//!
//! let mut game = GameState::new(12345);
//! game.start();
//!
//! // Queue a turn; it takes effect on the next tick.
//! game.submit_direction(Direction::Up);
//!
//! let mut events: Vec<GameEvent> = Vec::new();
//! game.advance(0, &mut events); // baseline
//! game.advance(180, &mut events); // one tick at score 0
//!
//! assert_eq!(game.direction(), Direction::Up);
//! assert_eq!(game.phase(), GamePhase::Playing);
//! ```
//!
//! # Timing
//!
//! Call [`GameState::advance`] once per frame with a monotonic timestamp.
//! A logic tick runs when at least [`GameState::tick_interval_ms`] has passed
//! since the previous one; otherwise the frame is render-only.

pub mod food;
pub mod game_state;
pub mod input_buffer;
pub mod observer;
pub mod snake;
pub mod snapshot;
pub mod timing;

pub use tui_snake_types as types;

// Re-export commonly used types for convenience
pub use food::{free_cells, spawn_food};
pub use game_state::{GameState, StepOutcome};
pub use input_buffer::InputBuffer;
pub use observer::{GameEvent, GameObserver};
pub use snake::Snake;
pub use snapshot::GameSnapshot;
pub use timing::tick_interval_ms;
