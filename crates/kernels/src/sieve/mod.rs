//! Layer 2: Sieve
//!
//! # Purpose
//!
//! This layer provides the two prime-counting kernels. Both answer a
//! near-identical question (how many primes up to `limit`) with deliberately
//! different computational patterns:
//!
//! - [`naive`] rebuilds a shrinking candidate sequence once per discovered
//!   prime (allocation-heavy filtering, O(n²)).
//! - [`table`] strikes composites in a fixed boolean table
//!   (O(n log log n)).
//!
//! The two kernels keep their own boundary conventions at 0 and 1; they are
//! separate stress cases, not two views of one function.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Fixtures
//!   ↓
//! Layer 3: Search
//!   ↓
//! Layer 2: Sieve ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Naive filter-and-shrink prime counting (reference semantics).
pub mod naive;

/// Boolean-table Sieve of Eratosthenes (optimized variant).
pub mod table;
