//! Chart feeds: (x, y) point series for waveform and spectrum plots

use crate::spectrum::Spectrum;

/// (time in seconds, amplitude) for each sample
///
/// `start_secs` offsets the time axis, so a selected slice plots at its
/// position in the full file.
pub fn waveform_points(samples: &[f64], sample_rate: u32, start_secs: f64) -> Vec<(f64, f64)> {
    let period = 1.0 / sample_rate as f64;

    samples
        .iter()
        .enumerate()
        .map(|(n, &s)| (n as f64 * period + start_secs, s))
        .collect()
}

/// (frequency in Hz, magnitude) for each bin
pub fn spectrum_points(spectrum: &Spectrum) -> Vec<(f64, f64)> {
    spectrum
        .magnitudes
        .iter()
        .enumerate()
        .map(|(bin, &mag)| (spectrum.bin_to_frequency(bin), mag))
        .collect()
}
