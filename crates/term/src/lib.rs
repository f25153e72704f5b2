//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer. It avoids widget libraries and
//! renders in two stages:
//!
//! 1. [`draw_scene`] projects a snapshot onto a square pixel [`Raster`]
//!    (background, grid, snake, food).
//! 2. [`GameView`] lays out the HUD, blits the raster as half blocks (two
//!    pixels per terminal row), adds the control pad and overlays, and
//!    [`TerminalRenderer`] flushes the resulting [`FrameBuffer`].
//!
//! Everything except `TerminalRenderer` is pure and unit-tested.

pub mod fb;
pub mod game_view;
pub mod raster;
pub mod renderer;
pub mod scene;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb, HALF_BLOCK};
pub use game_view::{hit_test, surface_px, GameView, Layout, Viewport};
pub use raster::Raster;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use scene::{cell_px, draw_scene};
