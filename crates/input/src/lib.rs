//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of the simulation. It maps
//! `crossterm` key and mouse events into [`crate::types::GameAction`]s and
//! interprets drags as swipe gestures. Everything it produces goes through
//! the engine's bounded input buffer; nothing here touches game state.

pub mod handler;
pub mod map;
pub mod swipe;

pub use tui_snake_types as types;

pub use handler::{InputHandler, InputIntent};
pub use map::{handle_key_event, should_quit};
pub use swipe::{classify_swipe, SwipeTracker};
