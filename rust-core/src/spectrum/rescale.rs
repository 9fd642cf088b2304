//! Single-sided amplitude rescaling
//!
//! Folds negative-frequency energy into the positive bins by multiplying
//! every bin except DC (and Nyquist for even-length slices).

use log::debug;

use super::fft::Spectrum;

/// Multiply all bins except the DC bin and, for even `num_samples`, the last bin
///
/// # Arguments
/// * `spectrum` - Magnitude spectrum
/// * `multiplier` - Scale for the remaining bins (2.0 for single-sided amplitude)
/// * `num_samples` - Length of the windowed slice the spectrum came from
///
/// Only `num_samples` decides parity; the last bin is always
/// `spectrum.len() - 1`. Callers are expected to pass
/// `num_samples == spectrum.len()`.
pub fn multiply_spectrum(spectrum: &[f64], multiplier: f64, num_samples: usize) -> Vec<f64> {
    if num_samples != spectrum.len() {
        debug!(
            "rescaling {} bins with num_samples = {}",
            spectrum.len(),
            num_samples
        );
    }

    let is_even = num_samples % 2 == 0;
    let last = spectrum.len().saturating_sub(1);

    spectrum
        .iter()
        .enumerate()
        .map(|(i, &mag)| {
            if i == 0 || (is_even && i == last) {
                mag
            } else {
                mag * multiplier
            }
        })
        .collect()
}

/// Rescale a [`Spectrum`], keeping its sample rate
pub fn rescale(spectrum: &Spectrum, multiplier: f64, num_samples: usize) -> Spectrum {
    Spectrum::new(
        multiply_spectrum(&spectrum.magnitudes, multiplier, num_samples),
        spectrum.sample_rate,
    )
}
