//! Entropy Injection Tests
//!
//! Unseeded construction must go through an explicit entropy source, so a
//! deterministic fake can stand in for the operating system.

use ahc_prng_core_rs::rng::{AhcPrng, EntropySource, PrngError, RngEntropy};

// ============================================================================
// Test Doubles
// ============================================================================

/// Replays fixed bytes and counts how often it was asked
struct FixedEntropy {
    bytes: [u8; 8],
    calls: usize,
}

impl FixedEntropy {
    fn new(seed: u64) -> Self {
        FixedEntropy {
            bytes: seed.to_le_bytes(),
            calls: 0,
        }
    }
}

impl EntropySource for FixedEntropy {
    fn fill_entropy(&mut self, dest: &mut [u8]) -> Result<(), PrngError> {
        self.calls += 1;
        for (i, byte) in dest.iter_mut().enumerate() {
            *byte = self.bytes[i % 8];
        }
        Ok(())
    }
}

struct BrokenEntropy;

impl EntropySource for BrokenEntropy {
    fn fill_entropy(&mut self, _dest: &mut [u8]) -> Result<(), PrngError> {
        Err(PrngError::EntropyUnavailable("device offline".to_string()))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[test]
fn test_unseeded_uses_injected_entropy() {
    let mut source = FixedEntropy::new(0xDEAD_BEEF_CAFE_BABE);
    let mut rng = AhcPrng::from_entropy_source(&mut source).unwrap();

    assert_eq!(source.calls, 1);
    assert_eq!(rng.seed(), 0xDEAD_BEEF_CAFE_BABE);
    assert_eq!(rng.next_uint64(), 0x68E4_8074_09E3_A13D);
}

#[test]
fn test_explicit_seed_skips_entropy() {
    let mut source = FixedEntropy::new(1);
    let rng: AhcPrng = AhcPrng::seed_or_random_with(Some(77), &mut source).unwrap();

    assert_eq!(source.calls, 0, "entropy must not be drawn when a seed is given");
    assert_eq!(rng, AhcPrng::new(77));
}

#[test]
fn test_entropy_failure_propagates() {
    let result: Result<AhcPrng, PrngError> =
        AhcPrng::seed_or_random_with(None, &mut BrokenEntropy);
    assert_eq!(
        result.unwrap_err(),
        PrngError::EntropyUnavailable("device offline".to_string())
    );
}

#[test]
fn test_os_entropy_seeds_differ() {
    let a = AhcPrng::from_os_entropy().unwrap();
    let b = AhcPrng::seed_or_random(None).unwrap();
    assert_ne!(a.seed(), b.seed());
}

#[test]
fn test_child_seeded_from_parent_is_reproducible() {
    let mut parent1 = RngEntropy(AhcPrng::new(5));
    let mut parent2 = RngEntropy(AhcPrng::new(5));

    let mut child1 = AhcPrng::from_entropy_source(&mut parent1).unwrap();
    let mut child2 = AhcPrng::from_entropy_source(&mut parent2).unwrap();

    assert_eq!(child1.seed(), AhcPrng::new(5).next_uint64());
    assert_eq!(child1.next_uint64(), child2.next_uint64());
}
