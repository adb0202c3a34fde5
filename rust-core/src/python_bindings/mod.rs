//! PyO3 bindings for Python integration

use pyo3::prelude::*;

mod hilbert_bindings;

/// Python module definition
#[pymodule]
fn hilbert_analyzer(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_class::<hilbert_bindings::PyHilbertAnalyzer>()?;

    Ok(())
}
