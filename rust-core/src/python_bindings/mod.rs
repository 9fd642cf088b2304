//! PyO3 bindings for Python integration

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::error::AnalysisError;

mod spectrum_bindings;
mod transform_bindings;

impl From<AnalysisError> for PyErr {
    fn from(err: AnalysisError) -> Self {
        PyValueError::new_err(err.to_string())
    }
}

/// Python module definition
#[pymodule]
fn slice_spectrum(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_class::<spectrum_bindings::PySliceSpectrumAnalyzer>()?;

    m.add_function(wrap_pyfunction!(transform_bindings::apply_hanning, m)?)?;
    m.add_function(wrap_pyfunction!(transform_bindings::dft_magnitude, m)?)?;
    m.add_function(wrap_pyfunction!(transform_bindings::multiply_spectrum, m)?)?;

    Ok(())
}
