use crate::KeyValueStore;

pub const HIGH_SCORE_KEY: &str = "snake.high_score";
pub const MUTED_KEY: &str = "snake.muted";

/// The persisted scalars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Settings {
    pub high_score: u32,
    pub muted: bool,
}

impl Settings {
    /// Read settings, degrading to defaults on any problem.
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Self {
        let high_score = match store.get(HIGH_SCORE_KEY) {
            Ok(Some(raw)) => raw.trim().parse::<u32>().unwrap_or_else(|_| {
                tracing::warn!(value = %raw, "ignoring unparsable high score");
                0
            }),
            Ok(None) => 0,
            Err(e) => {
                tracing::warn!(error = %e, "high score unavailable, using 0");
                0
            }
        };

        let muted = match store.get(MUTED_KEY) {
            Ok(Some(raw)) => raw.trim() == "true",
            Ok(None) => false,
            Err(e) => {
                tracing::warn!(error = %e, "mute flag unavailable, using unmuted");
                false
            }
        };

        Self { high_score, muted }
    }

    /// Persist the high score. Failures are logged, never raised.
    pub fn save_high_score<S: KeyValueStore + ?Sized>(store: &mut S, high_score: u32) -> bool {
        match store.set(HIGH_SCORE_KEY, &high_score.to_string()) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(error = %e, high_score, "failed to persist high score");
                false
            }
        }
    }

    /// Persist the mute flag. Failures are logged, never raised.
    pub fn save_muted<S: KeyValueStore + ?Sized>(store: &mut S, muted: bool) -> bool {
        let value = if muted { "true" } else { "false" };
        match store.set(MUTED_KEY, value) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(error = %e, muted, "failed to persist mute flag");
                false
            }
        }
    }
}
