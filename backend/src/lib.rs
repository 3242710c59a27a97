//! AHC-PRNG Core - Rust Engine
//!
//! Deterministic, seedable pseudo-random number generator with hash-whitened
//! output, for simulation, procedural generation and sampling.
//!
//! # Architecture
//!
//! - **rng**: Seeding, state transition, whitening and derived outputs
//! - **ffi**: Python bindings (behind the `pyo3` feature)
//!
//! # Critical Invariants
//!
//! 1. Same seed → same output sequence (bit-exact)
//! 2. All state arithmetic wraps modulo 2^64
//! 3. Entropy is only consulted when no seed is given
//! 4. Not a CSPRNG: hashing is for mixing, not secrecy

// Module declarations
pub mod rng;

// Re-exports for convenience
pub use rng::{AhcPrng, EntropySource, GeneratorSnapshot, OsEntropy, PrngError};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn ahc_prng_core_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ffi::prng::PyAhcPrng>()?;
    Ok(())
}
