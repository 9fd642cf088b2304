//! Python bindings for multi-channel slice analysis

use numpy::{PyArray1, PyReadonlyArray2};
use pyo3::prelude::*;

use crate::audio::{ChannelBuffers, TimeWindow};
use crate::error::AnalysisError;
use crate::plot::waveform_points;
use crate::spectrum::analysis::{AnalyzerConfig, ChannelAnalysis, SpectrumAnalyzer};

/// Slice spectrum analyzer exposed to Python
#[pyclass(name = "SliceSpectrumAnalyzer")]
pub struct PySliceSpectrumAnalyzer {
    analyzer: SpectrumAnalyzer,
}

impl PySliceSpectrumAnalyzer {
    fn channel_result(&mut self, channel: usize) -> PyResult<ChannelAnalysis> {
        let results = self.analyzer.analyze()?;
        results.get(channel).cloned().ok_or_else(|| {
            AnalysisError::ChannelOutOfRange {
                channel,
                channels: results.len(),
            }
            .into()
        })
    }
}

#[pymethods]
impl PySliceSpectrumAnalyzer {
    /// Create a new analyzer over decoded audio
    ///
    /// Args:
    ///     channels: Samples as a (channels, frames) numpy array
    ///     sample_rate: Sample rate in Hz
    ///     start_time_ms: Slice start in milliseconds
    ///     duration_ms: Slice duration in milliseconds (15-30 recommended)
    ///     multiplier: Scale for non-DC, non-Nyquist bins
    #[new]
    #[pyo3(signature = (channels, sample_rate, start_time_ms=0, duration_ms=20, multiplier=2.0))]
    fn new(
        channels: PyReadonlyArray2<f64>,
        sample_rate: i64,
        start_time_ms: i64,
        duration_ms: i64,
        multiplier: f64,
    ) -> PyResult<Self> {
        let buffers = ChannelBuffers::new(channels.as_array().to_owned(), sample_rate)?;
        let config = AnalyzerConfig {
            window: TimeWindow::new(start_time_ms, duration_ms)?,
            multiplier,
            ..Default::default()
        };

        Ok(Self {
            analyzer: SpectrumAnalyzer::new(buffers, config),
        })
    }

    /// Move the analysed slice
    fn set_window(&mut self, start_time_ms: i64, duration_ms: i64) -> PyResult<()> {
        self.analyzer.set_window(TimeWindow::new(start_time_ms, duration_ms)?);
        Ok(())
    }

    /// Rescaled magnitude spectrum of one channel
    fn spectrum<'py>(&mut self, py: Python<'py>, channel: usize) -> PyResult<&'py PyArray1<f64>> {
        let result = self.channel_result(channel)?;
        Ok(PyArray1::from_vec(py, result.spectrum.magnitudes))
    }

    /// Frequency of each spectrum bin in Hz
    fn frequencies<'py>(&mut self, py: Python<'py>, channel: usize) -> PyResult<&'py PyArray1<f64>> {
        let result = self.channel_result(channel)?;
        Ok(PyArray1::from_vec(py, result.spectrum.frequency_axis()))
    }

    /// Selected (unwindowed) samples of one channel
    fn slice<'py>(&mut self, py: Python<'py>, channel: usize) -> PyResult<&'py PyArray1<f64>> {
        let result = self.channel_result(channel)?;
        Ok(PyArray1::from_vec(py, result.samples))
    }

    /// Time in seconds of each selected sample
    fn slice_times<'py>(&mut self, py: Python<'py>, channel: usize) -> PyResult<&'py PyArray1<f64>> {
        let sample_rate = self.analyzer.buffers().sample_rate();
        let result = self.channel_result(channel)?;
        let times = waveform_points(&result.samples, sample_rate, result.start_secs())
            .into_iter()
            .map(|(t, _)| t)
            .collect();
        Ok(PyArray1::from_vec(py, times))
    }

    /// (duration_secs, length, sample_rate, channels)
    fn info(&self) -> (f64, usize, u32, usize) {
        let info = self.analyzer.buffers().info();
        (info.duration_secs, info.length, info.sample_rate, info.channels)
    }

    /// Number of channels
    fn num_channels(&self) -> usize {
        self.analyzer.buffers().num_channels()
    }
}
