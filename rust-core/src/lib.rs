//! Slice Spectrum - windowed DFT analysis of short audio slices
//! 
//! Selects a 15-30 ms slice of each channel, applies a Hanning window,
//! computes the full DFT magnitude spectrum and rescales it to single-sided
//! amplitude. Optional Python bindings behind the `python` feature.

// Suppress PyO3 non-local impl warnings (harmless macro-generated code)
#![cfg_attr(feature = "python", allow(non_local_definitions))]

pub mod audio;
pub mod error;
pub mod plot;
pub mod spectrum;
#[cfg(feature = "python")]
pub mod python_bindings;

pub use audio::{ChannelBuffers, TimeWindow};
pub use error::AnalysisError;
pub use spectrum::{SpectrumAnalyzer, Spectrum, WindowType};
