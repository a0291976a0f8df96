//! # Kernels — a corpus of self-contained computational kernels
//!
//! A corpus of small, deterministic computational kernels, each a pure
//! function from one non-negative integer to one non-negative integer. The
//! corpus exists so equivalent implementations across language runtimes can
//! be compared: identical input must produce identical output, so observed
//! timing differences reflect runtime characteristics rather than
//! algorithmic drift.
//!
//! ## The kernels
//!
//! Core kernels, the entries with real algorithmic structure:
//!
//! | Kernel | Input | Output | Shape |
//! |---|---|---|---|
//! | `sieve_naive` | `limit` (e.g. 1000) | primes in `[2, limit]` | O(n²), deliberately unoptimized |
//! | `sieve_table` | `limit` (e.g. 1000) | primes in `[0, limit]` | O(n log log n) |
//! | `nqueens` | `n` (e.g. 8) | solution count | exponential worst case |
//!
//! Fixture kernels, straight-line single-pass entries with fixed scalar
//! contracts: `map_filter_reduce`, `list_build`, `method_dispatch`,
//! `tag_dispatch`, `record_filter`, each driven with `n = 10000`.
//!
//! ## Quick Start
//!
//! ```rust
//! use kernels::prelude::*;
//!
//! let primes = Kernel::TableSieve.run(1000)?;
//! assert_eq!(primes, 168);
//!
//! let solutions = Kernel::Queens.run(8)?;
//! assert_eq!(solutions, 92);
//! # Result::<(), KernelError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! [`Kernel::run`] returns `Result<u64, KernelError>`. Kernels are total
//! over non-negative input; the only failures are a negative driver value or
//! one that does not fit the platform's `usize`. The `?` operator is
//! idiomatic:
//!
//! ```rust
//! use kernels::prelude::*;
//!
//! let count = Kernel::NaiveSieve.run(1000)?;
//! assert_eq!(count, 168);
//!
//! assert!(Kernel::Queens.run(-1).is_err());
//! # Result::<(), KernelError>::Ok(())
//! ```
//!
//! ## Fidelity
//!
//! Each kernel's asymptotic shape is part of its contract. The naive sieve
//! rebuilds its candidate sequence with a fresh allocation every pass and
//! must not be replaced by an equivalent boolean sieve; the pipeline fixture
//! materializes every intermediate stage. A port that optimizes these away
//! measures a different computational pattern.
//!
//! ## Minimal Usage (no_std)
//!
//! The crate supports `no_std` environments. Disable default features to
//! remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! kernels = { version = "0.1", default-features = false }
//! ```
//!
//! ## Features
//!
//! - `std` (default): standard library support.
//! - `parallel`: data-parallel row-0 split of the N-Queens search via rayon.
//! - `dev`: exposes internal modules for integration tests.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - error type shared by every kernel.
mod primitives;

// Layer 2: Sieve - the two prime-counting kernels.
mod sieve;

// Layer 3: Search - the N-Queens backtracking kernel.
mod search;

// Layer 4: Fixtures - straight-line single-pass kernels.
mod fixtures;

// Layer 5: Engine - driver-boundary input validation.
mod engine;

// High-level API for invoking corpus kernels.
mod api;

// Standard corpus prelude.
pub mod prelude {
    pub use crate::api::{Kernel, KernelError};
    pub use crate::search::queens::{count_solutions, enumerate_solutions};
    pub use crate::sieve::naive::count_primes_naive;
    pub use crate::sieve::table::count_primes_table;

    #[cfg(feature = "parallel")]
    pub use crate::search::queens::count_solutions_parallel;
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing
// purposes. It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod sieve {
        pub use crate::sieve::*;
    }
    pub mod search {
        pub use crate::search::*;
    }
    pub mod fixtures {
        pub use crate::fixtures::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
