//! Session orchestration for the snake game.
//!
//! Wraps the simulation in what a player actually interacts with:
//!
//! | Piece | Role |
//! |-------|------|
//! | [`Session`] | Screens, pause, score/high score, action routing, per-frame drive |
//! | [`FrameScheduler`] | One cancellable outstanding frame request |
//! | [`Config`] | `TUI_SNAKE_*` environment configuration |
//!
//! ```
//! use tui_snake_engine::Session;
//! use tui_snake_engine::store::MemoryStore;
//! use tui_snake_engine::types::{GameAction, Screen};
//!
//! let mut session = Session::new(7, MemoryStore::new());
//! session.apply_action(GameAction::Start, 0);
//! assert_eq!(session.screen(), Screen::Playing);
//! assert!(session.wants_frames());
//! ```

pub mod config;
pub mod scheduler;
pub mod session;

pub use tui_snake_core as core;
pub use tui_snake_store as store;
pub use tui_snake_types as types;

pub use config::Config;
pub use scheduler::{FrameId, FrameScheduler};
pub use session::{FrameReport, Scoreboard, Session};
