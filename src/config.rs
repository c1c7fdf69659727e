//! Startup configuration read from the environment.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::types::SNAKE_TICK_MS;

pub const ENV_SEED: &str = "ARCADE_SEED";
pub const ENV_SNAKE_TICK_MS: &str = "ARCADE_SNAKE_TICK_MS";
pub const ENV_LOG_PATH: &str = "ARCADE_LOG_PATH";

/// Gallery configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryConfig {
    /// Seed shared by both engines' random sources.
    pub seed: u32,
    /// Snake step interval in milliseconds (at least 1).
    pub snake_tick_ms: u32,
    /// Log file; `None` disables logging.
    pub log_path: Option<PathBuf>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            seed: time_seed(),
            snake_tick_ms: SNAKE_TICK_MS,
            log_path: None,
        }
    }
}

impl GalleryConfig {
    /// Create from environment variables. Unparsable values use the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`GalleryConfig::from_env`] with an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seed = lookup(ENV_SEED)
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(time_seed);

        let snake_tick_ms = lookup(ENV_SNAKE_TICK_MS)
            .and_then(|s| s.trim().parse::<u32>().ok())
            .unwrap_or(SNAKE_TICK_MS)
            .max(1);

        let log_path = lookup(ENV_LOG_PATH)
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(PathBuf::from(s)) });

        Self {
            seed,
            snake_tick_ms,
            log_path,
        }
    }
}

fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_reads_all_variables() {
        let config = GalleryConfig::from_lookup(vars(&[
            (ENV_SEED, "42"),
            (ENV_SNAKE_TICK_MS, " 150 "),
            (ENV_LOG_PATH, "/tmp/arcade.log"),
        ]));
        assert_eq!(config.seed, 42);
        assert_eq!(config.snake_tick_ms, 150);
        assert_eq!(config.log_path, Some(PathBuf::from("/tmp/arcade.log")));
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = GalleryConfig::from_lookup(vars(&[
            (ENV_SNAKE_TICK_MS, "fast"),
            (ENV_LOG_PATH, "   "),
        ]));
        assert_eq!(config.snake_tick_ms, SNAKE_TICK_MS);
        assert_eq!(config.log_path, None);
    }

    #[test]
    fn test_zero_interval_is_clamped() {
        let config = GalleryConfig::from_lookup(vars(&[(ENV_SNAKE_TICK_MS, "0")]));
        assert_eq!(config.snake_tick_ms, 1);
    }
}
