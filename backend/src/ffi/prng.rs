//! PyO3 wrapper for AhcPrng
//!
//! This module provides the Python interface to the Rust generator.

use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyBytes;

use crate::rng::{AhcPrng, PrngError};

fn to_py_err(err: PrngError) -> PyErr {
    match err {
        PrngError::InvalidRange { .. } => PyValueError::new_err(err.to_string()),
        other => PyRuntimeError::new_err(other.to_string()),
    }
}

/// Python wrapper for the Rust generator
///
/// # Example (from Python)
///
/// ```python
/// from ahc_prng_core_rs import AHC_PRNG
///
/// prng = AHC_PRNG(seed=0xDEADBEEFCAFEBABE)
/// samples = [prng.next_uint64() for _ in range(10)]
/// prng.reseed(123456789)
/// floats = [prng.random() for _ in range(5)]
/// salt = prng.randbytes(16)
/// ```
#[pyclass(name = "AHC_PRNG")]
pub struct PyAhcPrng {
    inner: AhcPrng,
}

#[pymethods]
impl PyAhcPrng {
    /// Create a generator, drawing a seed from OS entropy when `seed` is None
    ///
    /// # Errors
    ///
    /// Raises RuntimeError if OS entropy is unavailable
    #[new]
    #[pyo3(signature = (seed=None))]
    fn new(seed: Option<u64>) -> PyResult<Self> {
        let inner = AhcPrng::seed_or_random(seed).map_err(to_py_err)?;
        Ok(PyAhcPrng { inner })
    }

    /// Seed the current state was derived from
    #[getter]
    fn seed(&self) -> u64 {
        self.inner.seed()
    }

    /// Next whitened 64-bit value
    fn next_uint64(&mut self) -> u64 {
        self.inner.next_uint64()
    }

    /// Uniform float in [0.0, 1.0)
    fn random(&mut self) -> f64 {
        self.inner.random()
    }

    /// Uniform integer in [a, b]
    ///
    /// # Errors
    ///
    /// Raises ValueError if a > b
    fn randint(&mut self, a: i64, b: i64) -> PyResult<i64> {
        self.inner.randint(a, b).map_err(to_py_err)
    }

    /// `n` random bytes
    fn randbytes<'py>(&mut self, py: Python<'py>, n: usize) -> Bound<'py, PyBytes> {
        let bytes = self.inner.randbytes(n);
        PyBytes::new_bound(py, &bytes)
    }

    /// Re-derive the whole state from `seed`
    fn reseed(&mut self, seed: u64) {
        self.inner.reseed(seed);
    }

    /// Snapshot as a JSON string (for checkpointing)
    fn snapshot_json(&self) -> PyResult<String> {
        self.inner.snapshot().to_json().map_err(to_py_err)
    }

    fn __repr__(&self) -> String {
        format!("AHC_PRNG(seed={:#x})", self.inner.seed())
    }
}
