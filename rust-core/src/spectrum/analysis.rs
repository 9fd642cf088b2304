//! High-level slice spectrum analyzer
//!
//! Runs select → window → DFT → rescale per channel, channels in parallel

use std::sync::Arc;
use std::thread;

use log::debug;

use super::fft::{DftEngine, Spectrum};
use super::rescale::rescale;
use super::windowing::{apply_window, WindowType};
use crate::audio::buffer::ChannelBuffers;
use crate::audio::selector::TimeWindow;
use crate::error::AnalysisError;

/// Spectrum analyzer configuration
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzerConfig {
    /// Time slice to analyse
    pub window: TimeWindow,

    /// Window type applied before the DFT
    pub window_type: WindowType,

    /// Multiplier for non-DC, non-Nyquist bins (2.0 for single-sided amplitude)
    pub multiplier: f64,

    /// Analyse channels on worker threads
    pub parallel: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            window: TimeWindow::default(),
            window_type: WindowType::Hann,
            multiplier: 2.0,
            parallel: true,
        }
    }
}

/// Result of one pipeline run for one channel
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelAnalysis {
    /// Channel index
    pub channel: usize,

    /// Analysed time slice
    pub window: TimeWindow,

    /// Raw (unwindowed) selected samples
    pub samples: Vec<f64>,

    /// Rescaled magnitude spectrum, one bin per selected sample
    pub spectrum: Spectrum,
}

impl ChannelAnalysis {
    /// Start of the slice in seconds
    pub fn start_secs(&self) -> f64 {
        self.window.start_secs()
    }
}

/// Window, transform and rescale one already-selected slice
pub fn transform_slice(
    engine: &mut DftEngine,
    samples: &[f64],
    sample_rate: u32,
    config: &AnalyzerConfig,
) -> Spectrum {
    let windowed = apply_window(samples, config.window_type);
    let spectrum = engine.transform(&windowed, sample_rate);
    rescale(&spectrum, config.multiplier, windowed.len())
}

/// Run the full pipeline for a single channel
pub fn analyze_channel(
    engine: &mut DftEngine,
    buffers: &ChannelBuffers,
    channel: usize,
    config: &AnalyzerConfig,
) -> Result<ChannelAnalysis, AnalysisError> {
    let samples = buffers.select_channel(channel, config.window)?;

    debug!(
        "channel {}: {} samples from {} ms",
        channel,
        samples.len(),
        config.window.start_ms
    );

    let spectrum = transform_slice(engine, &samples, buffers.sample_rate(), config);

    Ok(ChannelAnalysis {
        channel,
        window: config.window,
        samples,
        spectrum,
    })
}

/// Run the pipeline for every channel, results in channel order
///
/// With `config.parallel` set and more than one channel, each channel runs
/// on its own scoped thread with its own [`DftEngine`].
pub fn analyze_channels(
    buffers: &ChannelBuffers,
    config: &AnalyzerConfig,
) -> Result<Vec<ChannelAnalysis>, AnalysisError> {
    let num_channels = buffers.num_channels();

    if !config.parallel || num_channels < 2 {
        let mut engine = DftEngine::new();
        return (0..num_channels)
            .map(|channel| analyze_channel(&mut engine, buffers, channel, config))
            .collect();
    }

    thread::scope(|scope| {
        let handles: Vec<_> = (0..num_channels)
            .map(|channel| {
                scope.spawn(move || {
                    let mut engine = DftEngine::new();
                    analyze_channel(&mut engine, buffers, channel, config)
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| match handle.join() {
                Ok(result) => result,
                Err(panic) => std::panic::resume_unwind(panic),
            })
            .collect()
    })
}

/// Multi-channel analyzer over one decoded file
///
/// Remembers the last result until the window or configuration changes.
pub struct SpectrumAnalyzer {
    buffers: ChannelBuffers,
    config: AnalyzerConfig,
    cached: Option<Arc<Vec<ChannelAnalysis>>>,
}

impl SpectrumAnalyzer {
    /// Create new spectrum analyzer
    pub fn new(buffers: ChannelBuffers, config: AnalyzerConfig) -> Self {
        Self {
            buffers,
            config,
            cached: None,
        }
    }

    /// Analyse all channels for the configured window
    pub fn analyze(&mut self) -> Result<Arc<Vec<ChannelAnalysis>>, AnalysisError> {
        if let Some(cached) = &self.cached {
            return Ok(Arc::clone(cached));
        }

        let results = Arc::new(analyze_channels(&self.buffers, &self.config)?);
        self.cached = Some(Arc::clone(&results));
        Ok(results)
    }

    /// Move the analysed slice; a no-op if the window is unchanged
    pub fn set_window(&mut self, window: TimeWindow) {
        if window != self.config.window {
            self.config.window = window;
            self.cached = None;
        }
    }

    /// Update configuration
    pub fn update_config(&mut self, config: AnalyzerConfig) {
        if config != self.config {
            self.config = config;
            self.cached = None;
        }
    }

    /// Get current configuration
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    pub fn buffers(&self) -> &ChannelBuffers {
        &self.buffers
    }

    pub fn is_cached(&self) -> bool {
        self.cached.is_some()
    }
}
