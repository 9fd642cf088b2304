//! Windowing functions for spectral analysis
//!
//! Tapers a time-domain slice before the DFT to reduce spectral leakage

use std::f64::consts::PI;

/// Window function types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowType {
    /// Hann window: w[n] = 0.5 - 0.5*cos(2πn/(L-1))
    /// Also known as the Hanning window
    #[default]
    Hann,

    /// Rectangular window (no windowing)
    Rectangular,
}

/// Generate window coefficients
///
/// # Arguments
/// * `window_type` - Type of window function
/// * `length` - Number of samples (L)
///
/// # Returns
/// Vector of window coefficients w[n] for n = 0..L-1
pub fn generate_window(window_type: WindowType, length: usize) -> Vec<f64> {
    match window_type {
        WindowType::Hann => hanning_window(length),
        WindowType::Rectangular => vec![1.0; length],
    }
}

/// Hanning coefficients for a window of `length` samples
///
/// A single-sample window has no (L-1) denominator, so its only
/// coefficient is defined as 1. An empty window has no coefficients.
pub fn hanning_window(length: usize) -> Vec<f64> {
    if length <= 1 {
        return vec![1.0; length];
    }

    let denom = (length - 1) as f64;
    (0..length)
        .map(|n| 0.5 - 0.5 * (2.0 * PI * n as f64 / denom).cos())
        .collect()
}

/// Apply window to signal
///
/// # Arguments
/// * `signal` - Input signal
/// * `window_type` - Type of window to apply
///
/// # Returns
/// Windowed copy of the signal; the input is left untouched
pub fn apply_window(signal: &[f64], window_type: WindowType) -> Vec<f64> {
    let window = generate_window(window_type, signal.len());

    signal
        .iter()
        .zip(window.iter())
        .map(|(&s, &w)| s * w)
        .collect()
}

/// Apply a Hanning window to signal
pub fn apply_hanning(signal: &[f64]) -> Vec<f64> {
    apply_window(signal, WindowType::Hann)
}
