use std::path::PathBuf;

use crate::types::FRAME_MS;

const DEFAULT_STORE_FILE: &str = ".tui-snake.json";
const DEFAULT_LOG_FILTER: &str = "info";

/// Runtime configuration, read from `TUI_SNAKE_*` environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Settings file; `None` keeps settings in memory for this run.
    pub store_path: Option<PathBuf>,
    /// RNG seed; `None` picks one at startup.
    pub seed: Option<u64>,
    pub frame_ms: u32,
    /// Log file; `None` disables logging (stdout is the game screen).
    pub log_path: Option<PathBuf>,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_path: None,
            seed: None,
            frame_ms: FRAME_MS,
            log_path: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source. Unparsable values fall back
    /// to their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let store_path = match lookup("TUI_SNAKE_STORE_PATH") {
            Some(s) => non_empty(s).map(PathBuf::from),
            None => lookup("HOME")
                .and_then(non_empty)
                .map(|home| PathBuf::from(home).join(DEFAULT_STORE_FILE)),
        };

        let seed = lookup("TUI_SNAKE_SEED").and_then(|s| s.trim().parse().ok());

        let frame_ms = lookup("TUI_SNAKE_FRAME_MS")
            .and_then(|s| s.trim().parse::<u32>().ok())
            .unwrap_or(FRAME_MS)
            .max(1);

        let log_path = lookup("TUI_SNAKE_LOG_PATH")
            .and_then(non_empty)
            .map(PathBuf::from);

        let log_filter = lookup("TUI_SNAKE_LOG")
            .and_then(non_empty)
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Self {
            store_path,
            seed,
            frame_ms,
            log_path,
            log_filter,
        }
    }
}

fn non_empty(s: String) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Config {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults_without_variables() {
        assert_eq!(config(&[]), Config::default());
    }

    #[test]
    fn test_store_defaults_under_home() {
        let c = config(&[("HOME", "/home/player")]);
        assert_eq!(
            c.store_path,
            Some(PathBuf::from("/home/player/.tui-snake.json"))
        );
    }

    #[test]
    fn test_empty_store_path_means_memory() {
        let c = config(&[("HOME", "/home/player"), ("TUI_SNAKE_STORE_PATH", "")]);
        assert_eq!(c.store_path, None);
    }

    #[test]
    fn test_explicit_values() {
        let c = config(&[
            ("TUI_SNAKE_STORE_PATH", "/tmp/s.json"),
            ("TUI_SNAKE_SEED", "42"),
            ("TUI_SNAKE_FRAME_MS", "33"),
            ("TUI_SNAKE_LOG_PATH", "/tmp/snake.log"),
            ("TUI_SNAKE_LOG", "debug"),
        ]);
        assert_eq!(c.store_path, Some(PathBuf::from("/tmp/s.json")));
        assert_eq!(c.seed, Some(42));
        assert_eq!(c.frame_ms, 33);
        assert_eq!(c.log_path, Some(PathBuf::from("/tmp/snake.log")));
        assert_eq!(c.log_filter, "debug");
    }

    #[test]
    fn test_bad_numbers_fall_back() {
        let c = config(&[("TUI_SNAKE_SEED", "abc"), ("TUI_SNAKE_FRAME_MS", "-5")]);
        assert_eq!(c.seed, None);
        assert_eq!(c.frame_ms, FRAME_MS);
    }

    #[test]
    fn test_frame_ms_minimum_is_one() {
        assert_eq!(config(&[("TUI_SNAKE_FRAME_MS", "0")]).frame_ms, 1);
    }

    #[test]
    fn test_from_env_does_not_panic() {
        let _config = Config::from_env();
    }
}
