//! Python bindings for the individual pipeline stages

use numpy::{PyArray1, PyReadonlyArray1};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::spectrum::fft::DftEngine;
use crate::spectrum::{rescale, windowing};

fn contiguous<'a>(array: &'a PyReadonlyArray1<f64>) -> PyResult<&'a [f64]> {
    array
        .as_slice()
        .map_err(|e| PyValueError::new_err(e.to_string()))
}

/// Multiply a signal by a Hanning window
///
/// Args:
///     signal: Input signal as numpy array
///
/// Returns:
///     Windowed copy of the signal
#[pyfunction]
pub fn apply_hanning<'py>(
    py: Python<'py>,
    signal: PyReadonlyArray1<f64>,
) -> PyResult<&'py PyArray1<f64>> {
    let windowed = windowing::apply_hanning(contiguous(&signal)?);
    Ok(PyArray1::from_vec(py, windowed))
}

/// Full two-sided DFT magnitude spectrum
///
/// Args:
///     signal: Windowed signal as numpy array
///
/// Returns:
///     |X[k]| for k = 0..len(signal)-1
#[pyfunction]
pub fn dft_magnitude<'py>(
    py: Python<'py>,
    signal: PyReadonlyArray1<f64>,
) -> PyResult<&'py PyArray1<f64>> {
    let magnitude = DftEngine::new().compute_magnitude(contiguous(&signal)?);
    Ok(PyArray1::from_vec(py, magnitude))
}

/// Multiply every bin except DC (and the last bin for even num_samples)
///
/// Args:
///     spectrum: Magnitude spectrum as numpy array
///     multiplier: Scale for the remaining bins
///     num_samples: Length of the windowed slice
#[pyfunction]
#[pyo3(signature = (spectrum, multiplier=2.0, num_samples=None))]
pub fn multiply_spectrum<'py>(
    py: Python<'py>,
    spectrum: PyReadonlyArray1<f64>,
    multiplier: f64,
    num_samples: Option<usize>,
) -> PyResult<&'py PyArray1<f64>> {
    let spectrum = contiguous(&spectrum)?;
    let num_samples = num_samples.unwrap_or(spectrum.len());
    let rescaled = rescale::multiply_spectrum(spectrum, multiplier, num_samples);
    Ok(PyArray1::from_vec(py, rescaled))
}
