//! Python bindings for the Hilbert analyzer

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use numpy::{Complex64, PyArray1, PyReadonlyArray1};
use crate::hilbert::{AnalyzerConfig, HilbertAnalyzer, HilbertError};

fn to_py_err(err: HilbertError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Hilbert analyzer exposed to Python
#[pyclass(name = "HilbertAnalyzer")]
pub struct PyHilbertAnalyzer {
    analyzer: HilbertAnalyzer,
}

#[pymethods]
impl PyHilbertAnalyzer {
    /// Create a new Hilbert analyzer
    ///
    /// Args:
    ///     length: Number of samples per signal
    ///     normalization: "backward" (default), "forward" or "ortho"
    ///
    /// Raises:
    ///     ValueError: Unknown normalization name
    #[new]
    #[pyo3(signature = (length, normalization="backward"))]
    fn new(length: usize, normalization: &str) -> PyResult<Self> {
        let config = AnalyzerConfig::with_normalization_name(length, normalization)
            .map_err(to_py_err)?;

        Ok(Self {
            analyzer: HilbertAnalyzer::from_config(&config),
        })
    }

    /// Signal length the analyzer was built for
    fn len(&self) -> usize {
        self.analyzer.len()
    }

    fn __len__(&self) -> usize {
        self.analyzer.len()
    }

    /// Spectral mask as numpy array
    fn mask<'py>(&self, py: Python<'py>) -> &'py PyArray1<f64> {
        PyArray1::from_slice(py, self.analyzer.mask())
    }

    /// Compute the analytic signal
    ///
    /// Args:
    ///     signal: Real input signal as numpy array
    ///
    /// Returns:
    ///     Complex analytic signal as numpy array
    fn analytic_signal<'py>(
        &self,
        py: Python<'py>,
        signal: PyReadonlyArray1<f64>,
    ) -> PyResult<&'py PyArray1<Complex64>> {
        let sig = signal.as_array().to_vec();
        let analytic = self.analyzer.analyze(&sig).map_err(to_py_err)?;

        Ok(PyArray1::from_vec(py, analytic))
    }

    /// Compute the Hilbert transform (imaginary part of the analytic signal)
    fn hilbert<'py>(
        &self,
        py: Python<'py>,
        signal: PyReadonlyArray1<f64>,
    ) -> PyResult<&'py PyArray1<f64>> {
        let sig = signal.as_array().to_vec();
        let h = self.analyzer.hilbert_transform(&sig).map_err(to_py_err)?;

        Ok(PyArray1::from_vec(py, h))
    }

    /// Compute the instantaneous amplitude
    fn envelope<'py>(
        &self,
        py: Python<'py>,
        signal: PyReadonlyArray1<f64>,
    ) -> PyResult<&'py PyArray1<f64>> {
        let sig = signal.as_array().to_vec();
        let env = self.analyzer.envelope(&sig).map_err(to_py_err)?;

        Ok(PyArray1::from_vec(py, env))
    }

    /// Compute the instantaneous phase in radians
    ///
    /// Args:
    ///     signal: Real input signal as numpy array
    ///     unwrap: Remove 2π discontinuities (default: False)
    #[pyo3(signature = (signal, unwrap=false))]
    fn instantaneous_phase<'py>(
        &self,
        py: Python<'py>,
        signal: PyReadonlyArray1<f64>,
        unwrap: bool,
    ) -> PyResult<&'py PyArray1<f64>> {
        let sig = signal.as_array().to_vec();
        let phase = if unwrap {
            self.analyzer.unwrapped_phase(&sig)
        } else {
            self.analyzer.instantaneous_phase(&sig)
        }
        .map_err(to_py_err)?;

        Ok(PyArray1::from_vec(py, phase))
    }

    /// Compute the instantaneous frequency in Hz
    ///
    /// Args:
    ///     signal: Real input signal as numpy array
    ///     sample_rate: Sample rate in Hz
    ///
    /// Returns:
    ///     len(signal) - 1 frequency values
    fn instantaneous_frequency<'py>(
        &self,
        py: Python<'py>,
        signal: PyReadonlyArray1<f64>,
        sample_rate: f64,
    ) -> PyResult<&'py PyArray1<f64>> {
        let sig = signal.as_array().to_vec();
        let freq = self
            .analyzer
            .instantaneous_frequency(&sig, sample_rate)
            .map_err(to_py_err)?;

        Ok(PyArray1::from_vec(py, freq))
    }
}
