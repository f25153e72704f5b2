//! Input reconciliation: terminal events through the handler into a session.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

use tui_snake::engine::Session;
use tui_snake::input::{classify_swipe, InputHandler, InputIntent, SwipeTracker};
use tui_snake::store::MemoryStore;
use tui_snake::term::{hit_test, Viewport};
use tui_snake::types::{Direction, GameAction, Screen, SWIPE_THRESHOLD_PX};

fn key(code: KeyCode, kind: KeyEventKind) -> Event {
    Event::Key(KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind,
        state: KeyEventState::NONE,
    })
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

fn drag(handler: &mut InputHandler, from: (u16, u16), to: (u16, u16), heading: Direction) -> Option<InputIntent> {
    assert_eq!(
        handler.handle_event(&mouse(MouseEventKind::Down(MouseButton::Left), from.0, from.1), heading),
        None
    );
    assert_eq!(
        handler.handle_event(&mouse(MouseEventKind::Drag(MouseButton::Left), to.0, to.1), heading),
        None
    );
    handler.handle_event(&mouse(MouseEventKind::Up(MouseButton::Left), to.0, to.1), heading)
}

fn playing_session() -> Session<MemoryStore> {
    let mut session = Session::new(11, MemoryStore::new());
    session.apply_action(GameAction::Start, 0);
    session
}

#[test]
fn test_key_press_reaches_buffer() {
    let mut handler = InputHandler::new();
    let mut session = playing_session();

    let intent = handler.handle_event(&key(KeyCode::Up, KeyEventKind::Press), session.heading());
    let Some(InputIntent::Action(action)) = intent else {
        panic!("expected an action, got {intent:?}");
    };
    assert!(session.apply_action(action, 0));
    assert_eq!(session.game().pending_inputs().as_slice(), &[Direction::Up]);
}

#[test]
fn test_key_repeat_and_release_are_ignored() {
    let mut handler = InputHandler::new();
    assert_eq!(
        handler.handle_event(&key(KeyCode::Up, KeyEventKind::Repeat), Direction::Right),
        None
    );
    assert_eq!(
        handler.handle_event(&key(KeyCode::Up, KeyEventKind::Release), Direction::Right),
        None
    );
}

#[test]
fn test_quit_keys() {
    let mut handler = InputHandler::new();
    assert_eq!(
        handler.handle_event(&key(KeyCode::Char('q'), KeyEventKind::Press), Direction::Right),
        Some(InputIntent::Quit)
    );
}

#[test]
fn test_vertical_swipe_turns() {
    let mut handler = InputHandler::new();
    // 4 rows at 16 px per row = 64 px downwards.
    assert_eq!(
        drag(&mut handler, (10, 10), (10, 14), Direction::Right),
        Some(InputIntent::Action(GameAction::Turn(Direction::Down)))
    );
}

#[test]
fn test_horizontal_swipe_turns() {
    let mut handler = InputHandler::new();
    // 5 columns at 8 px = 40 px left, while heading up.
    assert_eq!(
        drag(&mut handler, (20, 10), (15, 10), Direction::Up),
        Some(InputIntent::Action(GameAction::Turn(Direction::Left)))
    );
}

#[test]
fn test_reversing_swipe_is_dropped() {
    let mut handler = InputHandler::new();
    assert_eq!(drag(&mut handler, (20, 10), (10, 10), Direction::Right), None);
}

#[test]
fn test_short_drag_is_ignored() {
    let mut handler = InputHandler::new();
    // 3 columns = 24 px, below the threshold; not a click either (moved).
    assert_eq!(drag(&mut handler, (20, 10), (23, 10), Direction::Up), None);
}

#[test]
fn test_press_release_in_place_is_click() {
    let mut handler = InputHandler::new();
    let heading = Direction::Right;
    handler.handle_event(&mouse(MouseEventKind::Down(MouseButton::Left), 38, 17), heading);
    assert_eq!(
        handler.handle_event(&mouse(MouseEventKind::Up(MouseButton::Left), 38, 17), heading),
        Some(InputIntent::Click { column: 38, row: 17 })
    );
}

#[test]
fn test_click_on_pad_steers() {
    let viewport = Viewport::new(80, 24);
    let mut session = playing_session();

    let dir = hit_test(viewport, 38, 17).unwrap();
    assert_eq!(dir, Direction::Up);
    assert!(session.apply_action(GameAction::Turn(dir), 0));
    assert_eq!(session.game().pending_inputs().as_slice(), &[Direction::Up]);
}

#[test]
fn test_all_sources_share_the_buffer() {
    let mut handler = InputHandler::new();
    let mut session = playing_session();

    // Keyboard, then swipe, then pad: the third is dropped (buffer full).
    let intent = handler.handle_event(&key(KeyCode::Up, KeyEventKind::Press), session.heading());
    assert_eq!(intent, Some(InputIntent::Action(GameAction::Turn(Direction::Up))));
    assert!(session.apply_action(GameAction::Turn(Direction::Up), 0));

    // The swipe guard checks the committed heading (still right), so a
    // downward swipe is accepted even though it reverses the buffered turn.
    let intent = drag(&mut handler, (30, 5), (30, 10), session.heading());
    assert_eq!(intent, Some(InputIntent::Action(GameAction::Turn(Direction::Down))));
    assert!(session.apply_action(GameAction::Turn(Direction::Down), 0));

    assert!(!session.apply_action(GameAction::Turn(Direction::Left), 0));

    assert_eq!(
        session.game().pending_inputs().as_slice(),
        &[Direction::Up, Direction::Down]
    );
    assert_eq!(session.screen(), Screen::Playing);
}

#[test]
fn test_classify_swipe_boundaries() {
    let t = SWIPE_THRESHOLD_PX;
    assert_eq!(classify_swipe(t - 1.0, t - 1.0, t), None);
    assert_eq!(classify_swipe(t, 0.0, t), Some(Direction::Right));
    assert_eq!(classify_swipe(0.0, -t, t), Some(Direction::Up));
    // Equal magnitudes resolve vertically.
    assert_eq!(classify_swipe(40.0, 40.0, t), Some(Direction::Down));
}

#[test]
fn test_swipe_without_move_is_ignored() {
    let mut tracker = SwipeTracker::new();
    tracker.touch_start(100.0, 100.0);
    assert_eq!(tracker.touch_end(Direction::Up), None);
    assert!(!tracker.is_tracking());
}
