//! Hash-based output whitening
//!
//! Every raw output is hashed together with the post-transition state and the
//! counter. Only the first 8 bytes of the digest leave the generator.
//!
//! # Block Layout
//!
//! ```text
//! offset  0        8        16       24       32       40
//!         | raw    | s0     | s1     | s2     | counter|
//! ```
//!
//! Each field is a little-endian `u64`. The layout is part of the bit-level
//! contract: changing it changes every output.

use sha2::{Digest, Sha256, Sha512_256};
use std::fmt;
use std::marker::PhantomData;

/// Size of the whitening input: five little-endian `u64` words
pub const WHITEN_BLOCK_LEN: usize = 40;

/// Digest collaborator used to whiten raw output
///
/// Implementations must be deterministic: the same block always yields the
/// same value.
pub trait Whitener {
    /// Hash `block` and return the first 8 digest bytes as a little-endian `u64`
    fn whiten(block: &[u8; WHITEN_BLOCK_LEN]) -> u64;
}

/// Whitener backed by any `sha2`-style [`Digest`]
///
/// The digest must produce at least 8 bytes of output.
pub struct DigestWhitener<D>(PhantomData<fn() -> D>);

/// SHA-256 whitening (the default)
pub type Sha256Whitener = DigestWhitener<Sha256>;

/// SHA-512/256 whitening
pub type Sha512_256Whitener = DigestWhitener<Sha512_256>;

impl<D: Digest> Whitener for DigestWhitener<D> {
    fn whiten(block: &[u8; WHITEN_BLOCK_LEN]) -> u64 {
        let digest = D::digest(block);
        let mut head = [0u8; 8];
        head.copy_from_slice(&digest[..8]);
        u64::from_le_bytes(head)
    }
}

// Manual impls: the marker carries no data, so no bounds on `D`.
impl<D> Clone for DigestWhitener<D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D> Copy for DigestWhitener<D> {}

impl<D> Default for DigestWhitener<D> {
    fn default() -> Self {
        DigestWhitener(PhantomData)
    }
}

impl<D> PartialEq for DigestWhitener<D> {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl<D> Eq for DigestWhitener<D> {}

impl<D> fmt::Debug for DigestWhitener<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DigestWhitener")
    }
}

/// Pack `[raw, s0, s1, s2, counter]` into the whitening block
pub fn whitening_block(words: [u64; 5]) -> [u8; WHITEN_BLOCK_LEN] {
    let mut block = [0u8; WHITEN_BLOCK_LEN];
    for (chunk, word) in block.chunks_exact_mut(8).zip(words) {
        chunk.copy_from_slice(&word.to_le_bytes());
    }
    block
}
