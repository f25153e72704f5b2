use tui_snake::core::GameState;
use tui_snake::term::scene::{GRID_LINE, SNAKE};
use tui_snake::term::{FrameBuffer, GameView, Layout, Viewport, HALF_BLOCK};
use tui_snake::types::{HudView, Screen};

fn text(fb: &FrameBuffer) -> String {
    let mut out = String::new();
    for y in 0..fb.height() {
        for x in 0..fb.width() {
            out.push(fb.get(x, y).map(|c| c.ch).unwrap_or(' '));
        }
        out.push('\n');
    }
    out
}

fn row(fb: &FrameBuffer, y: u16) -> String {
    (0..fb.width()).filter_map(|x| fb.get(x, y)).map(|c| c.ch).collect()
}

fn playing_hud() -> HudView {
    HudView {
        screen: Screen::Playing,
        ..HudView::default()
    }
}

#[test]
fn term_view_draws_hud_row() {
    let mut state = GameState::new(1);
    state.start();
    let hud = HudView {
        screen: Screen::Playing,
        score: 12,
        high_score: 40,
        muted: true,
        paused: false,
    };

    let fb = GameView::new().render(&state.snapshot(), &hud, Viewport::new(80, 24));
    let top = row(&fb, 0);
    assert!(top.contains("SCORE 12"), "{top}");
    assert!(top.contains("BEST 40"), "{top}");
    assert!(top.contains("MUTED"), "{top}");
    assert!(!top.contains("PAUSED"), "{top}");
}

#[test]
fn term_view_blits_board_as_half_blocks() {
    let mut state = GameState::new(1);
    state.start();
    let vp = Viewport::new(80, 24);
    let layout = Layout::compute(vp);

    let fb = GameView::new().render(&state.snapshot(), &playing_hud(), vp);

    // Top-left pixel pair sits on the grid lines.
    let corner = fb.get(layout.board_x, layout.board_y).unwrap();
    assert_eq!(corner.ch, HALF_BLOCK);
    assert_eq!(corner.style.fg, GRID_LINE);

    // The head starts at (7,7); 2 px cells put it at pixels 14..16.
    let head = fb.get(layout.board_x + 14, layout.board_y + 7).unwrap();
    assert_eq!(head.style.fg, SNAKE);
    assert_eq!(head.style.bg, SNAKE);
}

#[test]
fn term_view_draws_control_pad_when_tall_enough() {
    let state = GameState::new(1);
    let fb = GameView::new().render(&state.snapshot(), &HudView::default(), Viewport::new(80, 24));
    let all = text(&fb);
    for glyph in ['▲', '◀', '▼', '▶'] {
        assert!(all.contains(glyph), "missing {glyph}");
    }

    let fb = GameView::new().render(&state.snapshot(), &HudView::default(), Viewport::new(80, 12));
    assert!(!text(&fb).contains('▲'));
}

#[test]
fn term_view_overlays_follow_screen() {
    let state = GameState::new(1);
    let snap = state.snapshot();
    let vp = Viewport::new(80, 24);
    let mut view = GameView::new();

    let home = text(&view.render(&snap, &HudView::default(), vp));
    assert!(home.contains("SNAKE"));
    assert!(home.contains("ENTER to start"));

    let paused = HudView {
        paused: true,
        ..playing_hud()
    };
    let paused = text(&view.render(&snap, &paused, vp));
    assert!(paused.contains("PAUSED"));

    let over = HudView {
        screen: Screen::GameOver,
        score: 7,
        ..HudView::default()
    };
    let over = text(&view.render(&snap, &over, vp));
    assert!(over.contains("GAME OVER"));
    assert!(over.contains("SCORE 7"));

    let playing = text(&view.render(&snap, &playing_hud(), vp));
    assert!(!playing.contains("GAME OVER"));
    assert!(!playing.contains("ENTER to start"));
}

#[test]
fn term_view_reports_tiny_terminal() {
    let state = GameState::new(1);
    let fb = GameView::new().render(&state.snapshot(), &HudView::default(), Viewport::new(30, 6));
    assert!(text(&fb).contains("enlarge the terminal"));
    assert!(!text(&fb).contains(HALF_BLOCK));
}

#[test]
fn term_view_render_into_reuses_buffer() {
    let mut state = GameState::new(1);
    state.start();
    let snap = state.snapshot();
    let mut view = GameView::new();

    let mut fb = FrameBuffer::new(0, 0);
    view.render_into(&snap, &playing_hud(), Viewport::new(80, 24), &mut fb);
    let first = fb.clone();
    view.render_into(&snap, &playing_hud(), Viewport::new(80, 24), &mut fb);
    assert_eq!(first, fb);

    view.render_into(&snap, &playing_hud(), Viewport::new(100, 30), &mut fb);
    assert_eq!((fb.width(), fb.height()), (100, 30));
}
