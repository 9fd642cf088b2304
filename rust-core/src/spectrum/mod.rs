//! Spectral analysis of short time slices

pub mod fft;
pub mod windowing;
pub mod rescale;
pub mod analysis;

pub use fft::{DftEngine, Spectrum, discrete_fourier_transform};
pub use windowing::{WindowType, apply_hanning, apply_window};
pub use rescale::{multiply_spectrum, rescale};
pub use analysis::{AnalyzerConfig, ChannelAnalysis, SpectrumAnalyzer, analyze_channels};
