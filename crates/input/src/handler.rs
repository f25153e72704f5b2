//! Terminal event handler.
//!
//! Folds keyboard and mouse events into [`InputIntent`]s. Mouse drags with
//! the left button are swipe gestures; a press/release that does not travel
//! far enough is reported as a click so the view can hit-test its on-screen
//! buttons.

use crossterm::event::{Event, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};

use crate::map::{handle_key_event, should_quit};
use crate::swipe::SwipeTracker;
use crate::types::{Direction, GameAction};

/// Horizontal pixels per terminal column used to scale drags.
pub const DEFAULT_CELL_PX_W: f32 = 8.0;

/// Vertical pixels per terminal row used to scale drags.
pub const DEFAULT_CELL_PX_H: f32 = 16.0;

/// What a terminal event means to the runner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputIntent {
    Action(GameAction),
    /// Short press/release at a terminal cell (column, row).
    Click { column: u16, row: u16 },
    Resize { width: u16, height: u16 },
    Quit,
}

#[derive(Debug, Clone)]
pub struct InputHandler {
    swipe: SwipeTracker,
    cell_px_w: f32,
    cell_px_h: f32,
    press_at: Option<(u16, u16)>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::with_cell_px(DEFAULT_CELL_PX_W, DEFAULT_CELL_PX_H)
    }

    pub fn with_cell_px(cell_px_w: f32, cell_px_h: f32) -> Self {
        Self {
            swipe: SwipeTracker::new(),
            cell_px_w,
            cell_px_h,
            press_at: None,
        }
    }

    pub fn with_swipe_threshold(mut self, threshold: f32) -> Self {
        self.swipe = SwipeTracker::with_threshold(threshold);
        self
    }

    /// Translate one terminal event.
    ///
    /// `heading` is the snake's committed direction, used by the swipe guard.
    pub fn handle_event(&mut self, event: &Event, heading: Direction) -> Option<InputIntent> {
        match event {
            Event::Key(key) => self.handle_key(*key),
            Event::Mouse(mouse) => self.handle_mouse(*mouse, heading),
            Event::Resize(width, height) => Some(InputIntent::Resize {
                width: *width,
                height: *height,
            }),
            _ => None,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<InputIntent> {
        // Auto-repeat would flood the two-slot buffer; releases carry no intent.
        if key.kind != KeyEventKind::Press {
            return None;
        }
        if should_quit(key) {
            return Some(InputIntent::Quit);
        }
        handle_key_event(key).map(InputIntent::Action)
    }

    fn handle_mouse(&mut self, mouse: MouseEvent, heading: Direction) -> Option<InputIntent> {
        let (x, y) = self.to_px(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.press_at = Some((mouse.column, mouse.row));
                self.swipe.touch_start(x, y);
                None
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                self.swipe.touch_move(x, y);
                None
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let pressed = self.press_at.take();
                // Terminals report the release position; count it as the last move.
                self.swipe.touch_move(x, y);
                if let Some(dir) = self.swipe.touch_end(heading) {
                    return Some(InputIntent::Action(GameAction::Turn(dir)));
                }
                match pressed {
                    Some((column, row)) if column == mouse.column && row == mouse.row => {
                        Some(InputIntent::Click { column, row })
                    }
                    _ => None,
                }
            }
            _ => None,
        }
    }

    fn to_px(&self, column: u16, row: u16) -> (f32, f32) {
        (
            f32::from(column) * self.cell_px_w,
            f32::from(row) * self.cell_px_h,
        )
    }

    pub fn reset(&mut self) {
        self.swipe.cancel();
        self.press_at = None;
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
