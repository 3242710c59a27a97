//! Entropy collaborators for unseeded construction
//!
//! Entropy is only ever consumed once, to pick a seed when the caller did not
//! supply one. The source is passed in explicitly so tests can substitute a
//! deterministic fake.

use super::error::PrngError;
use rand_core::{OsRng, RngCore};

/// Source of unpredictable bytes
pub trait EntropySource {
    /// Fill `dest` entirely with entropy, or report why that was impossible
    fn fill_entropy(&mut self, dest: &mut [u8]) -> Result<(), PrngError>;
}

/// Operating system entropy (`getrandom` via [`OsRng`])
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill_entropy(&mut self, dest: &mut [u8]) -> Result<(), PrngError> {
        OsRng
            .try_fill_bytes(dest)
            .map_err(|e| PrngError::EntropyUnavailable(e.to_string()))
    }
}

/// Adapter that lets any [`RngCore`] act as an entropy source
///
/// # Example
/// ```
/// use ahc_prng_core_rs::rng::{AhcPrng, RngEntropy};
///
/// // Seed a child generator from a parent
/// let mut parent = RngEntropy(AhcPrng::new(7));
/// let child = AhcPrng::from_entropy_source(&mut parent).unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct RngEntropy<R>(pub R);

impl<R: RngCore> EntropySource for RngEntropy<R> {
    fn fill_entropy(&mut self, dest: &mut [u8]) -> Result<(), PrngError> {
        self.0
            .try_fill_bytes(dest)
            .map_err(|e| PrngError::EntropyUnavailable(e.to_string()))
    }
}

/// Draw 8 bytes from `source` and read them as a little-endian seed
pub fn draw_seed<E: EntropySource + ?Sized>(source: &mut E) -> Result<u64, PrngError> {
    let mut bytes = [0u8; 8];
    source.fill_entropy(&mut bytes)?;
    Ok(u64::from_le_bytes(bytes))
}
