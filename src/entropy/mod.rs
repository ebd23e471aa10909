//! Random sources and unbiased index sampling.

mod source;

use rand::RngCore;

pub use source::{Entropy, Source};

const RANGE: u64 = 1 << 32;

/// Uniform index in `0..n` from 32-bit draws.
///
/// Draws at or above the largest multiple of `n` that fits in `2^32` are
/// rejected and redrawn, so every index is exactly equally likely.
#[inline]
pub fn uniform_index<R: RngCore + ?Sized>(rng: &mut R, n: usize) -> usize {
    assert!(n > 0 && n as u64 <= RANGE, "alphabet size out of range: {n}");
    let n = n as u64;
    let limit = RANGE - RANGE % n;
    loop {
        let draw = rng.next_u32() as u64;
        if draw < limit {
            return (draw % n) as usize;
        }
    }
}

/// Pearson chi-square statistic of observed counts against a flat expectation.
pub fn chi_square(counts: &[u64]) -> f64 {
    if counts.is_empty() {
        return 0.0;
    }
    let total: u64 = counts.iter().sum();
    let expected = total as f64 / counts.len() as f64;
    if expected == 0.0 {
        return 0.0;
    }
    counts
        .iter()
        .map(|&observed| {
            let diff = observed as f64 - expected;
            diff * diff / expected
        })
        .sum()
}
