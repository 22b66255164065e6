//! Benchmark inputs for the underlay construction algorithms.
//!
//! Provides deterministic, seeded input generators so bench runs are
//! comparable across machines and commits:
//!
//! - [`seeded_strings`]: owned strings of varied length (per-slot path)
//! - [`seeded_bytes`]: raw byte buffers (character fast path)
//! - [`seeded_words`]: plain `u64` sequences (bulk path)

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Generate `n` lowercase ASCII strings of length 0..32, deterministically
/// from `seed`.
pub fn seeded_strings(n: usize, seed: u64) -> Vec<String> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            let len = rng.random_range(0..32);
            (0..len).map(|_| rng.random_range(b'a'..=b'z') as char).collect()
        })
        .collect()
}

/// Generate `n` bytes deterministically from `seed`.
pub fn seeded_bytes(n: usize, seed: u64) -> Vec<u8> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n).map(|_| rng.random()).collect()
}

/// Generate `n` words deterministically from `seed`.
pub fn seeded_words(n: usize, seed: u64) -> Vec<u64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n).map(|_| rng.random()).collect()
}
