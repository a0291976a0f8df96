//! Layer 3: Search
//!
//! # Purpose
//!
//! This layer provides the backtracking search kernel: the N-Queens solver.
//! It is the only kernel in the corpus with a genuine search space and a
//! pruning rule, and it carries the most branching and state.
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
//! Layer 3: Search ← You are here
//!   ↓
//! Layer 2: Sieve
//!   ↓
//! Layer 1: Primitives
//! ```

/// N-Queens backtracking solver.
pub mod queens;
