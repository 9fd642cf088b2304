//! Boundary errors for slice analysis
//!
//! Raised before a pipeline run starts; the stages themselves never fail.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Sample rate must be positive (found: {0} Hz)")]
    InvalidSampleRate(i64),

    #[error("Start time must not be negative (found: {0} ms)")]
    NegativeStartTime(i64),

    #[error("Transform duration must not be negative (found: {0} ms)")]
    NegativeDuration(i64),

    #[error("Channel {channel} has {found} samples, expected {expected}")]
    ChannelLengthMismatch {
        channel: usize,
        expected: usize,
        found: usize,
    },

    #[error("Channel {channel} out of range ({channels} channels available)")]
    ChannelOutOfRange { channel: usize, channels: usize },

    #[error("Invalid channel layout: {0}")]
    Shape(#[from] ndarray::ShapeError),
}

/// Check a caller-supplied sample rate
pub fn validate_sample_rate(sample_rate: i64) -> Result<u32, AnalysisError> {
    u32::try_from(sample_rate)
        .ok()
        .filter(|&sr| sr > 0)
        .ok_or(AnalysisError::InvalidSampleRate(sample_rate))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_sample_rate() {
        assert_eq!(validate_sample_rate(48000).unwrap(), 48000);
        assert!(matches!(validate_sample_rate(0), Err(AnalysisError::InvalidSampleRate(0))));
        assert!(matches!(
            validate_sample_rate(-44100),
            Err(AnalysisError::InvalidSampleRate(-44100))
        ));
        assert!(validate_sample_rate(i64::MAX).is_err());
    }
}
