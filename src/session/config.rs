use std::time::{SystemTime, UNIX_EPOCH};

use crate::types::FRAME_MS;

/// Session configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Seed for shape selection
    pub seed: u32,
    pub frame_ms: u32,
    /// Append JSONL session records here when set
    pub log_path: Option<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            frame_ms: FRAME_MS,
            log_path: None,
        }
    }
}

impl SessionConfig {
    /// Create from environment variables
    ///
    /// - `BLOCKFALL_SEED`: u32 seed (default: derived from the system clock)
    /// - `BLOCKFALL_LOG_PATH`: session log file (empty or unset: no log)
    pub fn from_env() -> Self {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Same as [`SessionConfig::from_env`], with an injectable lookup.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let seed = var("BLOCKFALL_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(clock_seed);

        let log_path = var("BLOCKFALL_LOG_PATH")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Self {
            seed,
            frame_ms: FRAME_MS,
            log_path,
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
