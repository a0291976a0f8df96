//! Boolean-table Sieve of Eratosthenes.
//!
//! ## Purpose
//!
//! This module counts primes with the classical marking sieve: a fixed-size
//! indicator table where `true` means "not yet proven composite", struck
//! through by multiples of each discovered prime.
//!
//! ## Design notes
//!
//! * **Quadratic start**: The inner marking loop starts at `i*i`, not `2*i`;
//!   smaller multiples of `i` were already struck by smaller prime factors.
//! * **Single allocation**: The table is allocated once at entry, mutated in
//!   place, summed and discarded on return.
//!
//! ## Invariants
//!
//! * After the marking loop, entry `i` (for `i` in `[2, limit]`) is `false`
//!   exactly when `i` has a divisor in `[2, i-1]`.
//!
//! ## Non-goals
//!
//! * This module does not share boundary conventions with
//!   [`crate::sieve::naive`]; indices 0 and 1 are forced false explicitly.

// ============================================================================
// Boolean Sieve
// ============================================================================

/// Count the primes in `[0, limit]` with a boolean marking table.
///
/// Allocates `limit + 1` entries, all `true`; forces indices 0 and 1 `false`
/// where they exist; then for each `i` with `i*i <= limit` that is still
/// marked prime, strikes every multiple of `i` from `i*i` upward.
///
/// # Edge cases
///
/// * `limit = 0` allocates a one-entry table; index 1 does not exist and is
///   not touched. The result is 0.
/// * `limit = 1` forces both boundary indices false and returns 0.
pub fn count_primes_table(limit: usize) -> usize {
    let mut is_prime = vec![true; limit + 1];

    // 0 and 1 are not prime; force only the indices that exist.
    is_prime[0] = false;
    if limit >= 1 {
        is_prime[1] = false;
    }

    let mut i = 2;
    while i * i <= limit {
        if is_prime[i] {
            let mut j = i * i;
            while j <= limit {
                is_prime[j] = false;
                j += i;
            }
        }
        i += 1;
    }

    is_prime.iter().filter(|&&p| p).count()
}
