//! Terminal Snake runner (default binary).
//!
//! Uses crossterm for input and the framebuffer renderer from `term`. Frames
//! are driven by a `FrameScheduler` that only has a request outstanding while
//! a game is actually running; otherwise the loop blocks on input.

use std::fs::OpenOptions;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use tracing_subscriber::EnvFilter;

use tui_snake::core::GameSnapshot;
use tui_snake::engine::{Config, FrameScheduler, Session};
use tui_snake::input::{InputHandler, InputIntent};
use tui_snake::store::{JsonFileStore, KeyValueStore, MemoryStore};
use tui_snake::term::{hit_test, surface_px, FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_snake::types::{GameAction, Screen};

type BoxedStore = Box<dyn KeyValueStore>;

fn main() -> Result<()> {
    let config = Config::from_env();
    init_logging(&config)?;

    let seed = config.seed.unwrap_or_else(rand::random);
    tracing::info!(seed, frame_ms = config.frame_ms, "starting");

    let session = Session::new(seed, open_store(&config));

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, session, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(e) = &result {
        tracing::error!(error = %e, "exiting with error");
    }
    result
}

fn init_logging(config: &Config) -> Result<()> {
    // stdout is the game screen; without a file there is nowhere to log.
    let Some(path) = &config.log_path else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    let filter = EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
}

fn open_store(config: &Config) -> BoxedStore {
    let Some(path) = &config.store_path else {
        return Box::new(MemoryStore::new());
    };
    match JsonFileStore::open(path) {
        Ok(store) => Box::new(store),
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "settings store unavailable, keeping settings in memory"
            );
            Box::new(MemoryStore::new())
        }
    }
}

fn run(term: &mut TerminalRenderer, mut session: Session<BoxedStore>, config: &Config) -> Result<()> {
    let clock = Instant::now();
    let now_ms = || clock.elapsed().as_millis() as u64;

    let mut view = GameView::new();
    let mut input = InputHandler::new();
    let mut scheduler = FrameScheduler::new(u64::from(config.frame_ms));
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut viewport = Viewport::new(w, h);
    let mut dirty = true;

    loop {
        scheduler.sync(session.wants_frames(), now_ms());

        if dirty {
            session.snapshot_into(&mut snap);
            view.render_into(&snap, &session.hud(), viewport, &mut fb);
            term.draw_swap(&mut fb)?;
            dirty = false;
        }

        // Wait for input until the next frame is due, or indefinitely when idle.
        let ready = match scheduler.time_until_due(now_ms()) {
            Some(wait) => event::poll(Duration::from_millis(wait))?,
            None => true,
        };

        if ready {
            let ev = event::read()?;
            match input.handle_event(&ev, session.heading()) {
                Some(InputIntent::Quit) => return Ok(()),
                Some(InputIntent::Action(action)) => {
                    dirty |= session.apply_action(action, now_ms());
                }
                Some(InputIntent::Click { column, row }) => {
                    dirty |= handle_click(&mut session, viewport, column, row, now_ms());
                }
                Some(InputIntent::Resize { width, height }) => {
                    viewport = Viewport::new(width, height);
                    term.invalidate();
                    dirty = true;
                }
                None => {}
            }
        }

        let now = now_ms();
        if scheduler.take_due(now).is_some() {
            let report = session.frame(now, surface_px(viewport));
            dirty |= report.render;
        }
    }
}

/// Control pad buttons steer; a click elsewhere starts a game from the
/// home and game-over screens.
fn handle_click(
    session: &mut Session<BoxedStore>,
    viewport: Viewport,
    column: u16,
    row: u16,
    now_ms: u64,
) -> bool {
    if let Some(dir) = hit_test(viewport, column, row) {
        return session.apply_action(GameAction::Turn(dir), now_ms);
    }
    match session.screen() {
        Screen::Home | Screen::GameOver => session.apply_action(GameAction::Start, now_ms),
        Screen::Playing => false,
    }
}
