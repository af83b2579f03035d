//! Runtime configuration from environment variables.

use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

use blockfall_core::SessionConfig;

use crate::types::FRAME_MS;

/// Default bound of the command channel between front-end and game loop.
pub const DEFAULT_MAX_PENDING: usize = 64;

/// Runtime configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub session: SessionConfig,
    /// Length of one game-loop frame in milliseconds.
    pub frame_ms: u32,
    /// Capacity of the command channel; extra commands are dropped.
    pub max_pending_commands: usize,
    /// JSON-lines event log, disabled when `None`.
    pub log_path: Option<String>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            session: SessionConfig::default(),
            frame_ms: FRAME_MS,
            max_pending_commands: DEFAULT_MAX_PENDING,
            log_path: None,
        }
    }
}

impl RuntimeConfig {
    /// Create from environment variables.
    ///
    /// - `BLOCKFALL_SEED`: piece generator seed (defaults to the wall clock)
    /// - `BLOCKFALL_FRAME_MS`: frame length, at least 1
    /// - `BLOCKFALL_MAX_PENDING`: command channel capacity, at least 1
    /// - `BLOCKFALL_LOG_PATH`: event log file; empty disables logging
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let seed = lookup("BLOCKFALL_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(clock_seed);

        let frame_ms = lookup("BLOCKFALL_FRAME_MS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.frame_ms)
            .max(1);

        let max_pending_commands = lookup("BLOCKFALL_MAX_PENDING")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.max_pending_commands)
            .max(1);

        let log_path = lookup("BLOCKFALL_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Self {
            session: defaults.session.with_seed(seed),
            frame_ms,
            max_pending_commands,
            log_path,
        }
    }
}

/// Seed derived from the current time, for sessions without an explicit seed.
pub fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
