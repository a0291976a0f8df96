//! Map → filter → reduce pipeline fixture.
//!
//! ## Design notes
//!
//! * **Materialized stages**: The mapped and filtered sequences are each
//!   collected into their own allocation before the fold, matching the
//!   corpus's comprehension-style pipeline. Fusing the stages into a single
//!   iterator chain would change the allocation pattern being measured.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Square `0..n`, keep the even squares, and sum them.
///
/// For the corpus default `n = 10000` the result is 166_616_670_000.
pub fn square_even_sum(n: usize) -> u64 {
    let xs: Vec<u64> = (0..n as u64).collect();
    let mapped: Vec<u64> = xs.iter().map(|&x| x * x).collect();
    let filtered: Vec<u64> = mapped.iter().copied().filter(|&x| x % 2 == 0).collect();

    filtered.iter().fold(0, |acc, &x| acc + x)
}
