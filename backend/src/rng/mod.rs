//! Deterministic random number generation
//!
//! Uses the AHC construction: a xoshiro-style 256-bit state transition whose
//! output is whitened through SHA-256 before it leaves the generator.
//! CRITICAL: same seed → same sequence, on every platform.

mod ahc;
mod entropy;
mod error;
mod rand_compat;
mod snapshot;
mod splitmix;
mod whiten;

pub use ahc::{AhcPrng, COUNTER_INCREMENT};
pub use entropy::{draw_seed, EntropySource, OsEntropy, RngEntropy};
pub use error::PrngError;
pub use snapshot::GeneratorSnapshot;
pub use splitmix::{derive_state, splitmix64, GOLDEN_GAMMA};
pub use whiten::{
    whitening_block, DigestWhitener, Sha256Whitener, Sha512_256Whitener, Whitener,
    WHITEN_BLOCK_LEN,
};
