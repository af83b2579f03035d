//! Scoring module - line-clear points, level and gravity speed
//!
//! Level and tick interval are both step functions of the score. Their
//! breakpoints happen to coincide, but each has its own table in `types` and
//! they are evaluated independently.

use crate::types::{LEVEL_THRESHOLDS, LINE_CLEAR_POINTS, TICK_INTERVAL_THRESHOLDS};

/// Points for clearing `lines` rows in a single lock event.
pub fn line_clear_score(lines: usize) -> u32 {
    LINE_CLEAR_POINTS.saturating_mul(lines as u32)
}

/// Level for a score (1 through 5).
pub fn level_for_score(score: u32) -> u32 {
    LEVEL_THRESHOLDS
        .iter()
        .find(|&&(min_score, _)| score >= min_score)
        .map(|&(_, level)| level)
        .unwrap_or(1)
}

/// Gravity interval for a score (in milliseconds).
///
/// Returns `base_ms` until the score reaches the first speed threshold.
pub fn tick_interval_ms(score: u32, base_ms: u32) -> u32 {
    TICK_INTERVAL_THRESHOLDS
        .iter()
        .find(|&&(min_score, _)| score >= min_score)
        .map(|&(_, interval)| interval)
        .unwrap_or(base_ms)
}
