//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer sits at the driver boundary: it turns the signed integers an
//! external harness supplies into the `usize` sizes the kernels consume,
//! rejecting anything a kernel cannot represent.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 4: Fixtures
//!   ↓
//! Layer 3: Search
//!   ↓
//! Layer 2: Sieve
//!   ↓
//! Layer 1: Primitives
//! ```

/// Driver-boundary input validation.
pub mod validator;
