//! AHC pseudo-random number generator
//!
//! Deterministic, seedable PRNG with strong statistical mixing, intended for
//! simulation, procedural generation and sampling.
//!
//! # Algorithm
//!
//! Each output runs three stages:
//!
//! 1. **Transition**: xoshiro-style xor-shift-rotate over four `u64` words.
//!    The raw candidate is `s0 + s3` of the new state.
//! 2. **Whitening**: `[raw, s0, s1, s2, counter]` is hashed (SHA-256 by
//!    default) and the first 8 digest bytes are the output.
//! 3. **Feedback**: the output is xored into `s0` and the counter advances by
//!    an odd constant.
//!
//! The generator is NOT a CSPRNG. It hashes for mixing, nothing more.
//!
//! # Determinism
//!
//! Same seed → same sequence of outputs, on every platform. All state
//! arithmetic wraps modulo 2^64.
//!
//! # Ownership
//!
//! Every draw takes `&mut self`. Share across threads by giving each thread
//! its own generator, or by wrapping one in a `Mutex`.

use std::marker::PhantomData;

use super::entropy::{draw_seed, EntropySource, OsEntropy};
use super::error::PrngError;
use super::snapshot::GeneratorSnapshot;
use super::splitmix::derive_state;
use super::whiten::{whitening_block, Sha256Whitener, Whitener};

/// Odd increment applied to the counter after every output
pub const COUNTER_INCREMENT: u64 = 0x517C_C1B7_2722_0A95;

const COUNTER_START: u64 = 1;
const XOSHIRO_SHIFT: u32 = 17;
const XOSHIRO_ROTATE: u32 = 45;

/// 2^-53, exact in an f64
const F64_UNIT: f64 = 1.0 / (1u64 << 53) as f64;

/// Deterministic random number generator with hash-whitened output
///
/// # Example
/// ```
/// use ahc_prng_core_rs::AhcPrng;
///
/// let mut rng = AhcPrng::new(12345);
/// let value = rng.next_uint64();
/// let die = rng.randint(1, 6).unwrap();
/// let probability = rng.random();
/// let salt = rng.randbytes(16);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AhcPrng<W: Whitener = Sha256Whitener> {
    /// Seed the current state was derived from
    seed: u64,

    /// State words `[s0, s1, s2, s3]`
    s: [u64; 4],

    /// Output counter, starts at 1
    counter: u64,

    _whitener: PhantomData<W>,
}

impl AhcPrng {
    /// Create a new SHA-256 whitened generator from a seed
    ///
    /// Any `u64` is a valid seed, including zero.
    ///
    /// # Example
    /// ```
    /// use ahc_prng_core_rs::AhcPrng;
    ///
    /// let rng = AhcPrng::new(0);
    /// assert_eq!(rng.seed(), 0);
    /// assert_eq!(rng.counter(), 1);
    /// ```
    pub fn new(seed: u64) -> Self {
        Self::with_seed(seed)
    }

    /// Create a generator seeded from operating system entropy
    ///
    /// The sequence is not reproducible unless the drawn seed is recorded
    /// (see [`AhcPrng::seed`]).
    pub fn from_os_entropy() -> Result<Self, PrngError> {
        Self::from_entropy_source(&mut OsEntropy)
    }

    /// Create a generator seeded from an explicit entropy source
    pub fn from_entropy_source<E: EntropySource + ?Sized>(
        source: &mut E,
    ) -> Result<Self, PrngError> {
        Self::seed_or_random_with(None, source)
    }

    /// Use `seed` when given, otherwise draw one from OS entropy
    ///
    /// # Example
    /// ```
    /// use ahc_prng_core_rs::AhcPrng;
    ///
    /// let seeded = AhcPrng::seed_or_random(Some(42)).unwrap();
    /// assert_eq!(seeded, AhcPrng::new(42));
    /// ```
    pub fn seed_or_random(seed: Option<u64>) -> Result<Self, PrngError> {
        Self::seed_or_random_with(seed, &mut OsEntropy)
    }
}

impl<W: Whitener> AhcPrng<W> {
    /// Create a generator with a non-default whitener
    ///
    /// # Example
    /// ```
    /// use ahc_prng_core_rs::rng::{AhcPrng, Sha512_256Whitener};
    ///
    /// let mut rng = AhcPrng::<Sha512_256Whitener>::with_seed(9);
    /// let _ = rng.next_uint64();
    /// ```
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            s: derive_state(seed),
            counter: COUNTER_START,
            _whitener: PhantomData,
        }
    }

    /// Use `seed` when given, otherwise draw 8 little-endian bytes from `source`
    ///
    /// The entropy source is untouched when a seed is supplied.
    pub fn seed_or_random_with<E: EntropySource + ?Sized>(
        seed: Option<u64>,
        source: &mut E,
    ) -> Result<Self, PrngError> {
        let seed = match seed {
            Some(seed) => seed,
            None => draw_seed(source)?,
        };
        Ok(Self::with_seed(seed))
    }

    /// Restore a generator from a snapshot
    ///
    /// # Errors
    /// Returns `InvalidSnapshot` if all four state words are zero.
    pub fn from_snapshot(snapshot: GeneratorSnapshot) -> Result<Self, PrngError> {
        snapshot.validate()?;
        Ok(Self {
            seed: snapshot.seed,
            s: snapshot.state,
            counter: snapshot.counter,
            _whitener: PhantomData,
        })
    }

    /// Replace the entire state with the derivation from `seed`
    ///
    /// Afterwards the generator is indistinguishable from `with_seed(seed)`:
    /// all four state words are re-derived and the counter returns to 1.
    pub fn reseed(&mut self, seed: u64) {
        *self = Self::with_seed(seed);
    }

    /// Seed the current state was derived from
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Current state words `[s0, s1, s2, s3]`
    pub fn state(&self) -> [u64; 4] {
        self.s
    }

    /// Current counter value
    pub fn counter(&self) -> u64 {
        self.counter
    }

    /// Capture seed, state and counter (for checkpointing/replay)
    ///
    /// # Example
    /// ```
    /// use ahc_prng_core_rs::AhcPrng;
    ///
    /// let mut rng = AhcPrng::new(12345);
    /// rng.next_uint64();
    /// let snapshot = rng.snapshot();
    ///
    /// let mut resumed: AhcPrng = AhcPrng::from_snapshot(snapshot).unwrap();
    /// assert_eq!(resumed.next_uint64(), rng.next_uint64());
    /// ```
    pub fn snapshot(&self) -> GeneratorSnapshot {
        GeneratorSnapshot {
            seed: self.seed,
            state: self.s,
            counter: self.counter,
        }
    }

    /// Overwrite this generator with a snapshot
    ///
    /// On error the generator is left unchanged.
    pub fn restore(&mut self, snapshot: GeneratorSnapshot) -> Result<(), PrngError> {
        *self = Self::from_snapshot(snapshot)?;
        Ok(())
    }

    /// xoshiro-style transition; returns the raw (unwhitened) candidate
    ///
    /// The xor steps apply in place, in order: each step sees the words
    /// already updated by the steps before it.
    fn transition(&mut self) -> u64 {
        let [mut s0, mut s1, mut s2, mut s3] = self.s;
        let t = s1 << XOSHIRO_SHIFT;

        s2 ^= s0;
        s3 ^= s1;
        s1 ^= s2;
        s0 ^= s3;
        s2 ^= t;
        s3 = s3.rotate_left(XOSHIRO_ROTATE);

        self.s = [s0, s1, s2, s3];
        s0.wrapping_add(s3)
    }

    /// Generate the next whitened u64 value
    ///
    /// This advances the state words and the counter.
    ///
    /// # Example
    /// ```
    /// use ahc_prng_core_rs::AhcPrng;
    ///
    /// let mut rng = AhcPrng::new(0xDEAD_BEEF_CAFE_BABE);
    /// assert_eq!(rng.next_uint64(), 0x68E4_8074_09E3_A13D);
    /// ```
    pub fn next_uint64(&mut self) -> u64 {
        let raw = self.transition();
        let [s0, s1, s2, _] = self.s;

        let out = W::whiten(&whitening_block([raw, s0, s1, s2, self.counter]));

        // Only feedback path from output into state
        self.s[0] ^= out;
        self.counter = self.counter.wrapping_add(COUNTER_INCREMENT);
        out
    }

    /// Generate random f64 in range [0.0, 1.0)
    ///
    /// Uses the top 53 bits of one draw, so every representable multiple of
    /// 2^-53 in the range is reachable.
    ///
    /// # Example
    /// ```
    /// use ahc_prng_core_rs::AhcPrng;
    ///
    /// let mut rng = AhcPrng::new(12345);
    /// let probability = rng.random();
    /// assert!(probability >= 0.0 && probability < 1.0);
    /// ```
    pub fn random(&mut self) -> f64 {
        (self.next_uint64() >> 11) as f64 * F64_UNIT
    }

    /// Generate a uniform integer in the inclusive range [a, b]
    ///
    /// Rejection sampling removes modulo bias: draws at or above the largest
    /// multiple of the span that fits in 2^64 are discarded. Every draw,
    /// accepted or not, advances the state.
    ///
    /// # Errors
    /// Returns `InvalidRange` if `a > b`. No draw is consumed in that case.
    ///
    /// # Example
    /// ```
    /// use ahc_prng_core_rs::AhcPrng;
    ///
    /// let mut rng = AhcPrng::new(12345);
    /// let roll = rng.randint(1, 6).unwrap();
    /// assert!((1..=6).contains(&roll));
    ///
    /// assert!(rng.randint(5, 3).is_err());
    /// ```
    pub fn randint(&mut self, a: i64, b: i64) -> Result<i64, PrngError> {
        if a > b {
            return Err(PrngError::InvalidRange { a, b });
        }

        // Span is at most 2^64, so u128 holds it and the limit exactly
        let span = (i128::from(b) - i128::from(a) + 1) as u128;
        let limit = ((1u128 << 64) / span) * span;

        loop {
            let draw = u128::from(self.next_uint64());
            if draw < limit {
                let offset = (draw % span) as i128;
                return Ok((i128::from(a) + offset) as i64);
            }
        }
    }

    /// Generate `n` random bytes
    ///
    /// Each draw contributes 8 little-endian bytes; the unused tail of the
    /// last draw is discarded. `randbytes(0)` consumes nothing.
    ///
    /// # Example
    /// ```
    /// use ahc_prng_core_rs::AhcPrng;
    ///
    /// let mut rng = AhcPrng::new(12345);
    /// assert_eq!(rng.randbytes(9).len(), 9);
    /// ```
    pub fn randbytes(&mut self, n: usize) -> Vec<u8> {
        let mut out = vec![0u8; n];
        self.fill(&mut out);
        out
    }

    /// Fill `dest` with the same byte stream [`randbytes`](Self::randbytes) returns
    pub fn fill(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let word = self.next_uint64().to_le_bytes();
            chunk.copy_from_slice(&word[..chunk.len()]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sets_counter_and_seed() {
        let rng = AhcPrng::new(99);
        assert_eq!(rng.seed(), 99);
        assert_eq!(rng.counter(), 1);
        assert_eq!(rng.state(), derive_state(99));
    }

    #[test]
    fn test_counter_advances_by_odd_increment() {
        let mut rng = AhcPrng::new(1);
        rng.next_uint64();
        assert_eq!(rng.counter(), 1u64.wrapping_add(COUNTER_INCREMENT));
        rng.next_uint64();
        assert_eq!(
            rng.counter(),
            1u64.wrapping_add(COUNTER_INCREMENT.wrapping_mul(2))
        );
        assert_eq!(COUNTER_INCREMENT % 2, 1);
    }

    #[test]
    fn test_state_after_first_draw_golden() {
        let mut rng = AhcPrng::new(0xDEAD_BEEF_CAFE_BABE);
        let outputs: Vec<u64> = (0..3).map(|_| rng.next_uint64()).collect();

        assert_eq!(
            outputs,
            vec![
                0x68E4_8074_09E3_A13D,
                0x3140_810E_69F3_7F2E,
                0x5FB6_B8E5_7690_339A,
            ]
        );
        assert_eq!(rng.counter(), 0xF476_4525_7566_1FC0);
        assert_eq!(
            rng.state(),
            [
                0xABF3_0207_079F_9B22,
                0x140B_51F2_E479_92E9,
                0x2F29_707F_3C66_CD67,
                0x5AEA_841C_3BC5_78EB,
            ]
        );
    }

    #[test]
    fn test_output_feeds_back_into_s0_only() {
        let mut rng = AhcPrng::new(5);
        let mut shadow = rng.clone();

        let raw = shadow.transition();
        let after_transition = shadow.state();
        let out = rng.next_uint64();

        assert_ne!(raw, out, "output must be whitened");
        assert_eq!(rng.state()[0], after_transition[0] ^ out);
        assert_eq!(rng.state()[1..], after_transition[1..]);
    }

    #[test]
    fn test_randint_full_i64_span() {
        let mut rng = AhcPrng::new(42);
        assert_eq!(rng.randint(i64::MIN, i64::MAX).unwrap(), 20_954_148_021_450_043);
        assert_eq!(
            rng.randint(i64::MIN, i64::MAX).unwrap(),
            1_654_008_390_298_713_871
        );
    }

    #[test]
    fn test_randint_single_value_range() {
        let mut rng = AhcPrng::new(3);
        for _ in 0..100 {
            assert_eq!(rng.randint(-7, -7).unwrap(), -7);
        }
    }

    #[test]
    fn test_randint_invalid_range_leaves_state() {
        let mut rng = AhcPrng::new(12345);
        let before = rng.clone();

        let err = rng.randint(100, 50).unwrap_err();
        assert_eq!(err, PrngError::InvalidRange { a: 100, b: 50 });
        assert_eq!(rng, before);
    }

    #[test]
    fn test_fill_matches_randbytes() {
        let mut a = AhcPrng::new(77);
        let mut b = AhcPrng::new(77);

        let mut buf = [0u8; 13];
        a.fill(&mut buf);
        assert_eq!(buf.to_vec(), b.randbytes(13));
        assert_eq!(a, b);
    }

    #[test]
    fn test_random_deterministic() {
        let mut rng1 = AhcPrng::new(99999);
        let mut rng2 = AhcPrng::new(99999);

        for _ in 0..100 {
            assert_eq!(rng1.random(), rng2.random(), "random() not deterministic");
        }
    }
}
