//! Outbound signals from the simulation.
//!
//! The engine calls into a [`GameObserver`] when the score changes and when
//! the game ends. Game over is delivered once per collision.

/// Receiver for score and game-over signals.
pub trait GameObserver {
    fn on_score_update(&mut self, _score: u32) {}

    fn on_game_over(&mut self, _final_score: u32) {}
}

/// Discard all signals.
impl GameObserver for () {}

/// Recorded signal, for callers that prefer polling over callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    ScoreUpdated(u32),
    GameOver { score: u32 },
}

impl GameObserver for Vec<GameEvent> {
    fn on_score_update(&mut self, score: u32) {
        self.push(GameEvent::ScoreUpdated(score));
    }

    fn on_game_over(&mut self, final_score: u32) {
        self.push(GameEvent::GameOver { score: final_score });
    }
}

impl<T: GameObserver + ?Sized> GameObserver for &mut T {
    fn on_score_update(&mut self, score: u32) {
        (**self).on_score_update(score);
    }

    fn on_game_over(&mut self, final_score: u32) {
        (**self).on_game_over(final_score);
    }
}
