//! Layer 4: Fixtures
//!
//! # Purpose
//!
//! This layer provides the straight-line fixture kernels: single-pass
//! operations with fixed contracts but no branching complexity. Each one
//! exercises a distinct runtime behavior (comprehension-style filtering,
//! object allocation, attribute and field dispatch) and prints one scalar
//! when driven.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Fixtures ← You are here
//!   ↓
//! Layer 3: Search
//!   ↓
//! Layer 2: Sieve
//!   ↓
//! Layer 1: Primitives
//! ```

/// Map → filter → reduce pipeline with materialized stages.
pub mod pipeline;

/// Singly-linked list build and traversal.
pub mod list;

/// Single-method and tag-based dispatch loops.
pub mod dispatch;

/// Record generation, filtering, and summation.
pub mod records;
