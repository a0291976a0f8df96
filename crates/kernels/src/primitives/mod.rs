//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the primitive abstractions shared by every kernel:
//! the error type raised at the driver boundary. It has zero internal
//! dependencies within the crate.
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
//! Layer 2: Sieve
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Error type for kernel invocation.
pub mod errors;
