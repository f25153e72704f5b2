//! Session - screens, pause, scoring and persistence around one `GameState`.
//!
//! The session is what the front end talks to. It routes player actions,
//! drives the simulation once per frame, keeps the current/high score and
//! writes the two persisted settings through the store.

use crate::core::{GameObserver, GameSnapshot, GameState};
use crate::store::{KeyValueStore, Settings};
use crate::types::{Direction, GameAction, HudView, Screen};

/// Score, high score and mute flag, backed by a store.
#[derive(Debug)]
pub struct Scoreboard<S> {
    store: S,
    score: u32,
    high_score: u32,
    muted: bool,
}

impl<S: KeyValueStore> Scoreboard<S> {
    pub fn load(store: S) -> Self {
        let settings = Settings::load(&store);
        tracing::info!(
            high_score = settings.high_score,
            muted = settings.muted,
            "settings loaded"
        );
        Self {
            store,
            score: 0,
            high_score: settings.high_score,
            muted: settings.muted,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn muted(&self) -> bool {
        self.muted
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn reset_score(&mut self) {
        self.score = 0;
    }

    /// Record the live score; raises and persists the high score when beaten.
    ///
    /// Returns `true` when a new high score was set.
    pub fn record_score(&mut self, score: u32) -> bool {
        self.score = score;
        if score <= self.high_score {
            return false;
        }
        self.high_score = score;
        Settings::save_high_score(&mut self.store, score);
        true
    }

    pub fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        Settings::save_muted(&mut self.store, self.muted);
        self.muted
    }
}

/// Result of one scheduled frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameReport {
    /// A logic tick ran.
    pub stepped: bool,
    /// The frame should be drawn.
    pub render: bool,
}

/// Routes engine signals into the scoreboard and screen.
struct SessionObserver<'a, S> {
    scoreboard: &'a mut Scoreboard<S>,
    screen: &'a mut Screen,
}

impl<S: KeyValueStore> GameObserver for SessionObserver<'_, S> {
    fn on_score_update(&mut self, score: u32) {
        if self.scoreboard.record_score(score) {
            tracing::debug!(high_score = score, "new high score");
        }
    }

    fn on_game_over(&mut self, final_score: u32) {
        if *self.screen == Screen::Playing {
            *self.screen = Screen::GameOver;
            tracing::info!(
                score = final_score,
                high_score = self.scoreboard.high_score(),
                "game over"
            );
        }
    }
}

#[derive(Debug)]
pub struct Session<S> {
    game: GameState,
    scoreboard: Scoreboard<S>,
    screen: Screen,
}

impl<S: KeyValueStore> Session<S> {
    pub fn new(seed: u64, store: S) -> Self {
        Self {
            game: GameState::new(seed),
            scoreboard: Scoreboard::load(store),
            screen: Screen::Home,
        }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn scoreboard(&self) -> &Scoreboard<S> {
        &self.scoreboard
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn paused(&self) -> bool {
        self.game.paused()
    }

    pub fn heading(&self) -> Direction {
        self.game.direction()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.game.snapshot_into(out);
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.game.snapshot()
    }

    pub fn hud(&self) -> HudView {
        HudView {
            screen: self.screen,
            score: self.scoreboard.score(),
            high_score: self.scoreboard.high_score(),
            muted: self.scoreboard.muted(),
            paused: self.game.paused(),
        }
    }

    /// Whether the frame loop should keep running.
    pub fn wants_frames(&self) -> bool {
        self.screen == Screen::Playing && self.game.is_playing() && !self.game.paused()
    }

    /// Apply a player action. Returns `true` if anything changed.
    pub fn apply_action(&mut self, action: GameAction, now_ms: u64) -> bool {
        match action {
            GameAction::Turn(dir) => self.submit_direction(dir),
            GameAction::Start => match self.screen {
                Screen::Home | Screen::GameOver => {
                    self.start_game();
                    true
                }
                Screen::Playing if self.game.paused() => {
                    self.toggle_pause(now_ms);
                    true
                }
                Screen::Playing => false,
            },
            GameAction::Restart => {
                self.start_game();
                true
            }
            GameAction::Pause => self.toggle_pause(now_ms),
            GameAction::Home => {
                if self.screen == Screen::Home {
                    return false;
                }
                self.reset_game();
                true
            }
            GameAction::ToggleMute => {
                self.scoreboard.toggle_mute();
                true
            }
        }
    }

    /// The only path from input sources into the simulation.
    pub fn submit_direction(&mut self, dir: Direction) -> bool {
        if self.screen != Screen::Playing {
            return false;
        }
        self.game.submit_direction(dir)
    }

    pub fn start_game(&mut self) {
        self.scoreboard.reset_score();
        self.game.start();
        self.screen = Screen::Playing;
    }

    pub fn reset_game(&mut self) {
        self.scoreboard.reset_score();
        self.game.reset();
        self.screen = Screen::Home;
    }

    /// Toggle pause while a game is running. Returns `true` if toggled.
    pub fn toggle_pause(&mut self, now_ms: u64) -> bool {
        if self.screen != Screen::Playing || !self.game.is_playing() {
            return false;
        }
        let paused = !self.game.paused();
        self.game.set_paused(paused, now_ms);
        tracing::debug!(paused, "pause toggled");
        true
    }

    /// Run one scheduled frame against a surface of `surface_px` pixels.
    ///
    /// A zero-sized surface (not yet measured) suppresses both the logic
    /// step and rendering for this frame.
    pub fn frame(&mut self, now_ms: u64, surface_px: u16) -> FrameReport {
        if surface_px == 0 {
            return FrameReport::default();
        }

        let mut observer = SessionObserver {
            scoreboard: &mut self.scoreboard,
            screen: &mut self.screen,
        };
        let stepped = self.game.advance(now_ms, &mut observer);
        FrameReport {
            stepped,
            render: true,
        }
    }
}
