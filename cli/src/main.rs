//! AHC-PRNG self-test / demo
//!
//! Prints a fixed-seed sample run so the output can be compared by eye
//! across builds and platforms.

use ahc_prng_core_rs::AhcPrng;

const DEMO_SEED: u64 = 0xDEAD_BEEF_CAFE_BABE;
const RESEED: u64 = 123_456_789;

fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

fn main() {
    println!("AHC-PRNG self-test / demo");

    let mut prng = AhcPrng::new(DEMO_SEED);
    println!("Seed: {:#x}", prng.seed());

    let samples: Vec<u64> = (0..10).map(|_| prng.next_uint64()).collect();
    println!("10 samples: {:?}", samples);

    prng.reseed(RESEED);
    let floats: Vec<f64> = (0..5).map(|_| prng.random()).collect();
    println!("5 random floats: {:?}", floats);

    println!("Random bytes: {}", to_hex(&prng.randbytes(16)));
}
