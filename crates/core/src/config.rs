//! Session configuration.

use crate::types::{BASE_TICK_MS, BOARD_HEIGHT, BOARD_WIDTH, RESTART_DELAY_MS};

/// Fixed parameters of a session, set once at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub width: u8,
    pub height: u8,
    /// Gravity interval below the first speed threshold.
    pub base_tick_ms: u32,
    /// Pause between game over and the automatic restart.
    pub restart_delay_ms: u32,
    /// Seed of the uniform piece generator.
    pub seed: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            base_tick_ms: BASE_TICK_MS,
            restart_delay_ms: RESTART_DELAY_MS,
            seed: 1,
        }
    }
}

impl SessionConfig {
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }
}
