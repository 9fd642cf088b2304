//! Time-window selection
//!
//! Maps a (start, duration) pair in milliseconds onto a sample-index range
//! of one channel buffer.

use std::ops::Range;

use log::{debug, warn};

use crate::error::AnalysisError;

/// Recommended transform duration bounds in milliseconds
pub const MIN_DURATION_MS: u64 = 15;
pub const MAX_DURATION_MS: u64 = 30;

/// Slice of time to analyse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeWindow {
    /// Start time in milliseconds
    pub start_ms: u64,

    /// Transform duration in milliseconds
    pub duration_ms: u64,
}

impl TimeWindow {
    /// Build a window from caller-supplied (possibly negative) values
    ///
    /// Durations outside [`MIN_DURATION_MS`, `MAX_DURATION_MS`] are accepted
    /// with a warning.
    pub fn new(start_ms: i64, duration_ms: i64) -> Result<Self, AnalysisError> {
        let start_ms = u64::try_from(start_ms).map_err(|_| AnalysisError::NegativeStartTime(start_ms))?;
        let duration_ms =
            u64::try_from(duration_ms).map_err(|_| AnalysisError::NegativeDuration(duration_ms))?;

        let window = Self { start_ms, duration_ms };
        if !window.has_recommended_duration() {
            warn!(
                "transform duration {} ms outside recommended range [{}, {}] ms",
                duration_ms, MIN_DURATION_MS, MAX_DURATION_MS
            );
        }

        Ok(window)
    }

    pub fn has_recommended_duration(&self) -> bool {
        (MIN_DURATION_MS..=MAX_DURATION_MS).contains(&self.duration_ms)
    }

    /// Start time in seconds
    pub fn start_secs(&self) -> f64 {
        self.start_ms as f64 / 1000.0
    }

    pub fn end_ms(&self) -> u64 {
        self.start_ms.saturating_add(self.duration_ms)
    }
}

impl Default for TimeWindow {
    fn default() -> Self {
        Self {
            start_ms: 0,
            duration_ms: 20,
        }
    }
}

/// Sample index for a time in milliseconds: floor(ms / 1000 * sample_rate)
pub fn time_to_index(time_ms: u64, sample_rate: u32) -> usize {
    (time_ms as f64 / 1000.0 * sample_rate as f64).floor() as usize
}

/// Index range [start, end) of `window` in a buffer of `len` samples
///
/// The end is clamped to `len`; a start beyond the clamped end yields an
/// empty range.
pub fn sample_range(len: usize, sample_rate: u32, window: TimeWindow) -> Range<usize> {
    let start = time_to_index(window.start_ms, sample_rate);
    let unclamped_end = time_to_index(window.end_ms(), sample_rate);
    let end = unclamped_end.min(len);

    if len > 0 && unclamped_end > len {
        warn!(
            "selection end {} clamped to buffer length {}",
            unclamped_end, len
        );
    }

    if start > end {
        return end..end;
    }

    start..end
}

/// Select the samples of `buffer` that fall inside `window`
pub fn select(buffer: &[f64], sample_rate: u32, window: TimeWindow) -> &[f64] {
    let range = sample_range(buffer.len(), sample_rate, window);
    debug!("selected samples {:?} of {}", range, buffer.len());
    &buffer[range]
}
