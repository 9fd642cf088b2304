//! Decoded multi-channel audio
//!
//! Equal-length channel buffers stored as one channels × frames array

use ndarray::{s, Array2, ArrayView1};

use super::selector::{sample_range, TimeWindow};
use crate::error::{validate_sample_rate, AnalysisError};

/// Summary of a decoded file
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AudioInfo {
    /// Duration in seconds
    pub duration_secs: f64,

    /// Samples per channel
    pub length: usize,

    /// Sample rate in Hz
    pub sample_rate: u32,

    /// Number of channels
    pub channels: usize,
}

/// Immutable arena of channel buffers sharing one sample rate
#[derive(Debug, Clone)]
pub struct ChannelBuffers {
    /// Samples, one row per channel
    data: Array2<f64>,
    sample_rate: u32,
}

impl ChannelBuffers {
    /// Wrap a channels × frames array
    pub fn new(data: Array2<f64>, sample_rate: i64) -> Result<Self, AnalysisError> {
        let sample_rate = validate_sample_rate(sample_rate)?;
        Ok(Self { data, sample_rate })
    }

    /// Build from per-channel vectors, which must all have the same length
    pub fn from_channels(channels: Vec<Vec<f64>>, sample_rate: i64) -> Result<Self, AnalysisError> {
        let frames = channels.first().map_or(0, Vec::len);

        if let Some((channel, buffer)) = channels
            .iter()
            .enumerate()
            .find(|(_, buffer)| buffer.len() != frames)
        {
            return Err(AnalysisError::ChannelLengthMismatch {
                channel,
                expected: frames,
                found: buffer.len(),
            });
        }

        let num_channels = channels.len();
        let flat: Vec<f64> = channels.into_iter().flatten().collect();
        let data = Array2::from_shape_vec((num_channels, frames), flat)?;

        Self::new(data, sample_rate)
    }

    /// Single-channel convenience constructor
    pub fn mono(samples: Vec<f64>, sample_rate: i64) -> Result<Self, AnalysisError> {
        Self::from_channels(vec![samples], sample_rate)
    }

    pub fn num_channels(&self) -> usize {
        self.data.nrows()
    }

    /// Samples per channel
    pub fn len(&self) -> usize {
        self.data.ncols()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn info(&self) -> AudioInfo {
        AudioInfo {
            duration_secs: self.len() as f64 / self.sample_rate as f64,
            length: self.len(),
            sample_rate: self.sample_rate,
            channels: self.num_channels(),
        }
    }

    /// Full buffer of one channel
    pub fn channel(&self, channel: usize) -> Result<ArrayView1<'_, f64>, AnalysisError> {
        self.check_channel(channel)?;
        Ok(self.data.row(channel))
    }

    /// Copy of the samples of `channel` inside `window`
    pub fn select_channel(&self, channel: usize, window: TimeWindow) -> Result<Vec<f64>, AnalysisError> {
        self.check_channel(channel)?;
        let range = sample_range(self.len(), self.sample_rate, window);
        Ok(self.data.slice(s![channel, range]).to_vec())
    }

    fn check_channel(&self, channel: usize) -> Result<(), AnalysisError> {
        if channel >= self.num_channels() {
            return Err(AnalysisError::ChannelOutOfRange {
                channel,
                channels: self.num_channels(),
            });
        }
        Ok(())
    }
}
