//! SplitMix64 finalizer and state derivation
//!
//! The seed never enters the state directly. It is first passed through the
//! SplitMix64 finalizer, and each of the four state words is then derived
//! independently from that intermediate value plus a small offset.

/// Additive constant of the SplitMix64 finalizer (2^64 / golden ratio, odd)
pub const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

const MIX_MUL_1: u64 = 0xBF58_476D_1CE4_E5B9;
const MIX_MUL_2: u64 = 0x94D0_49BB_1331_11EB;

/// SplitMix64 finalizer
///
/// Pure 64-bit mixing function: add the golden gamma, then two rounds of
/// xor-shift-multiply, then a final xor-shift. All arithmetic wraps.
///
/// # Example
/// ```
/// use ahc_prng_core_rs::rng::splitmix64;
///
/// assert_eq!(splitmix64(0), 0xE220_A839_7B1D_CDAF);
/// ```
pub fn splitmix64(x: u64) -> u64 {
    let mut z = x.wrapping_add(GOLDEN_GAMMA);
    z = (z ^ (z >> 30)).wrapping_mul(MIX_MUL_1);
    z = (z ^ (z >> 27)).wrapping_mul(MIX_MUL_2);
    z ^ (z >> 31)
}

/// Derive the four state words `[s0, s1, s2, s3]` from a seed
///
/// `sm = splitmix64(seed)`, then `s_i = splitmix64(sm + i)` for `i` in 1..=4.
/// Each word depends only on `sm` and its own offset, never on the
/// previously derived word.
pub fn derive_state(seed: u64) -> [u64; 4] {
    let sm = splitmix64(seed);
    [1u64, 2, 3, 4].map(|offset| splitmix64(sm.wrapping_add(offset)))
}
