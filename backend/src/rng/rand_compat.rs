//! `rand_core` trait impls
//!
//! Lets the generator plug into code written against `RngCore` /
//! `SeedableRng` without changing its own output stream.

use super::ahc::AhcPrng;
use super::whiten::Whitener;
use rand_core::{RngCore, SeedableRng};

impl<W: Whitener> RngCore for AhcPrng<W> {
    /// Upper 32 bits of one draw
    fn next_u32(&mut self) -> u32 {
        (self.next_uint64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.next_uint64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.fill(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.fill(dest);
        Ok(())
    }
}

impl<W: Whitener> SeedableRng for AhcPrng<W> {
    /// Little-endian `u64` seed
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::with_seed(u64::from_le_bytes(seed))
    }

    // The default would expand the u64 through PCG first
    fn seed_from_u64(state: u64) -> Self {
        Self::with_seed(state)
    }
}
