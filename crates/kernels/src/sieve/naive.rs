//! Naive filter-and-shrink prime counting.
//!
//! ## Purpose
//!
//! This module counts primes by repeatedly taking the head of a candidate
//! sequence as a confirmed prime and rebuilding the remainder without its
//! multiples. It is the reference member of the sieve family and exists to
//! exercise allocation-heavy sequence filtering.
//!
//! ## Design notes
//!
//! * **Allocation per pass**: Each outer iteration materializes a fresh
//!   filtered sequence. The reallocation is part of the kernel's contract
//!   and must not be replaced by in-place partitioning.
//! * **No early exit**: The loop runs until the sequence is empty, with no
//!   `p² > limit` shortcut. The O(n²) shape is intentional.
//!
//! ## Invariants
//!
//! * After processing pivot `p`, no remaining candidate is a multiple of any
//!   pivot processed so far; the head of the sequence is therefore prime.
//! * The candidate sequence is strictly shorter after every pass.
//!
//! ## Non-goals
//!
//! * This module does not share boundary conventions with [`crate::sieve::table`];
//!   it counts over `[2, limit]` by construction.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// ============================================================================
// Naive Sieve
// ============================================================================

/// Count the primes in `[2, limit]` by repeated filter-and-shrink.
///
/// Initializes the candidate sequence `2..=limit` in ascending order. While
/// candidates remain, the head `p` is counted as prime and the sequence is
/// rebuilt as a newly allocated filter of the tail, keeping only values not
/// divisible by `p`.
///
/// # Edge cases
///
/// * `limit < 2` produces an empty candidate sequence and returns 0.
pub fn count_primes_naive(limit: usize) -> usize {
    let mut candidates: Vec<usize> = (2..=limit).collect();
    let mut count = 0;

    while let Some(&p) = candidates.first() {
        count += 1;

        // Rebuild from the tail: a fresh allocation every pass.
        candidates = candidates[1..]
            .iter()
            .copied()
            .filter(|&x| x % p != 0)
            .collect();
    }

    count
}
