//! DFT engine using rustfft for windowed slices
//!
//! Produces the full two-sided magnitude spectrum: one bin per input sample,
//! no zero-padding and no folding

use num_complex::Complex;
use rustfft::FftPlanner;

/// Magnitude spectrum of one windowed slice
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrum {
    /// |X[k]| for k = 0..N-1
    pub magnitudes: Vec<f64>,

    /// Sample rate of the analysed slice in Hz
    pub sample_rate: u32,
}

impl Spectrum {
    pub fn new(magnitudes: Vec<f64>, sample_rate: u32) -> Self {
        Self { magnitudes, sample_rate }
    }

    /// Number of bins (N)
    pub fn len(&self) -> usize {
        self.magnitudes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.magnitudes.is_empty()
    }

    /// Frequency of bin `bin` in Hz
    ///
    /// The N bins are spread evenly over [0, sample_rate/2):
    /// f(i) = i * (sample_rate/2) / N
    pub fn bin_to_frequency(&self, bin: usize) -> f64 {
        bin_to_frequency(bin, self.len(), self.sample_rate)
    }

    /// Frequency axis in Hz, one entry per bin
    pub fn frequency_axis(&self) -> Vec<f64> {
        (0..self.len()).map(|bin| self.bin_to_frequency(bin)).collect()
    }
}

/// Frequency of bin `bin` out of `num_bins` for a given sample rate
pub fn bin_to_frequency(bin: usize, num_bins: usize, sample_rate: u32) -> f64 {
    if num_bins == 0 {
        return 0.0;
    }
    bin as f64 * (sample_rate as f64 / 2.0) / num_bins as f64
}

/// DFT engine for real-valued slices of arbitrary length
///
/// Holds a planner so transforms of a recurring slice length reuse the plan.
pub struct DftEngine {
    planner: FftPlanner<f64>,

    /// Reusable complex work buffer
    buffer: Vec<Complex<f64>>,
}

impl DftEngine {
    pub fn new() -> Self {
        Self {
            planner: FftPlanner::new(),
            buffer: Vec::new(),
        }
    }

    /// Compute the magnitude spectrum |X[k]| for k = 0..L-1
    ///
    /// # Arguments
    /// * `signal` - Windowed input of length L (any L, including 0 and 1)
    pub fn compute_magnitude(&mut self, signal: &[f64]) -> Vec<f64> {
        if signal.is_empty() {
            return Vec::new();
        }

        self.buffer.clear();
        self.buffer
            .extend(signal.iter().map(|&s| Complex::new(s, 0.0)));

        let fft = self.planner.plan_fft_forward(signal.len());
        fft.process(&mut self.buffer);

        self.buffer.iter().map(|c| c.norm()).collect()
    }

    /// Transform a windowed slice into a [`Spectrum`]
    pub fn transform(&mut self, windowed: &[f64], sample_rate: u32) -> Spectrum {
        Spectrum::new(self.compute_magnitude(windowed), sample_rate)
    }
}

impl Default for DftEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// One-shot DFT magnitude of a windowed slice
pub fn discrete_fourier_transform(windowed: &[f64], sample_rate: u32) -> Spectrum {
    DftEngine::new().transform(windowed, sample_rate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    /// Direct O(n²) DFT magnitude, straight from the definition
    fn direct_dft(signal: &[f64]) -> Vec<f64> {
        let n = signal.len();
        (0..n)
            .map(|k| {
                let sum = signal.iter().enumerate().fold(Complex::new(0.0, 0.0), |acc, (i, &x)| {
                    let angle = -2.0 * PI * (k * i) as f64 / n as f64;
                    acc + Complex::new(angle.cos(), angle.sin()) * x
                });
                sum.norm()
            })
            .collect()
    }

    #[test]
    fn test_matches_direct_dft() {
        // Odd, even, prime and power-of-two lengths
        for &n in &[1usize, 2, 3, 7, 16, 30, 97] {
            let signal: Vec<f64> = (0..n)
                .map(|i| (0.3 * i as f64).sin() + 0.25 * (i % 3) as f64)
                .collect();

            let fast = DftEngine::new().compute_magnitude(&signal);
            let slow = direct_dft(&signal);

            assert_eq!(fast.len(), n);
            for (k, (a, b)) in fast.iter().zip(slow.iter()).enumerate() {
                assert!((a - b).abs() < 1e-9, "bin {} differs for n={}: {} vs {}", k, n, a, b);
            }
        }
    }

    #[test]
    fn test_dc_bin_is_abs_sum() {
        let signal = vec![0.5, -2.0, 0.25, -1.0, 0.1];
        let spectrum = discrete_fourier_transform(&signal, 8000);
        let sum: f64 = signal.iter().sum();

        assert!((spectrum.magnitudes[0] - sum.abs()).abs() < 1e-12);
    }

    #[test]
    fn test_empty_and_single_sample() {
        let empty = discrete_fourier_transform(&[], 44100);
        assert!(empty.is_empty());

        let single = discrete_fourier_transform(&[5.0], 44100);
        assert_eq!(single.len(), 1);
        assert!((single.magnitudes[0] - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_sine_peak_and_mirror() {
        // 64 samples, 8 cycles: peak in bin 8 and its mirror 64-8
        let n = 64;
        let signal: Vec<f64> = (0..n)
            .map(|i| (2.0 * PI * 8.0 * i as f64 / n as f64).sin())
            .collect();

        let spectrum = DftEngine::new().compute_magnitude(&signal);

        assert!((spectrum[8] - 32.0).abs() < 1e-9);
        assert!((spectrum[56] - 32.0).abs() < 1e-9);
        assert!(spectrum[3] < 1e-9);
        assert!(spectrum.iter().all(|&m| m >= 0.0));
    }

    #[test]
    fn test_engine_reuse_across_lengths() {
        let mut engine = DftEngine::new();
        assert_eq!(engine.compute_magnitude(&[1.0; 10]).len(), 10);
        assert_eq!(engine.compute_magnitude(&[1.0; 4]).len(), 4);
        assert_eq!(engine.compute_magnitude(&[1.0; 10]).len(), 10);
    }

    #[test]
    fn test_frequency_axis() {
        let spectrum = Spectrum::new(vec![0.0; 100], 1000);
        let freqs = spectrum.frequency_axis();

        assert_eq!(freqs.len(), 100);
        assert_eq!(freqs[0], 0.0);
        assert!((freqs[1] - 5.0).abs() < 1e-12);
        assert!((freqs[99] - 495.0).abs() < 1e-12);
    }
}
