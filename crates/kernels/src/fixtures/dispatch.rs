//! Dispatch loop fixtures.
//!
//! ## Purpose
//!
//! Two fixtures that exercise call dispatch:
//!
//! - [`method_loop`] calls one polymorphic method through a trait object,
//!   `n` times, on a single receiver.
//! - [`tag_loop`] selects one of three arithmetic operations by a tag field
//!   on a request value, `n` times.
//!
//! ## Design notes
//!
//! * **Dynamic dispatch**: `method_loop` goes through `&dyn Compute` so the
//!   call stays an indirect dispatch, matching the polymorphic call the
//!   corpus measures.
//! * **Generics**: The tagged evaluator is generic over `num_traits::PrimInt`;
//!   the corpus drives it with small non-negative operands, so wrapping
//!   behavior is never reached.

// External dependencies
use num_traits::PrimInt;

// ============================================================================
// Single-Method Dispatch
// ============================================================================

/// One polymorphic operation.
trait Compute {
    fn compute(&self, x: u64) -> u64;
}

/// Receiver with a single scaling factor.
struct Scaler {
    factor: u64,
}

impl Compute for Scaler {
    fn compute(&self, x: u64) -> u64 {
        self.factor * x
    }
}

/// Call `compute(i)` on a factor-3 receiver for `i` in `0..n`, summing.
///
/// For the corpus default `n = 10000` the result is 149_985_000.
pub fn method_loop(n: usize) -> u64 {
    let scaler = Scaler { factor: 3 };
    let receiver: &dyn Compute = &scaler;

    let mut total = 0;
    for i in 0..n as u64 {
        total += receiver.compute(i);
    }
    total
}

// ============================================================================
// Tag-Based Dispatch
// ============================================================================

/// Operation selector carried in a request's tag field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Add,
    Mul,
    Sub,
}

/// One dispatch request: a tag plus two operands.
#[derive(Debug, Clone, Copy)]
pub struct Request<T> {
    pub tag: Tag,
    pub a: T,
    pub b: T,
}

/// Apply the operation selected by the request's tag.
pub fn apply<T: PrimInt>(req: &Request<T>) -> T {
    match req.tag {
        Tag::Add => req.a + req.b,
        Tag::Mul => req.a * req.b,
        Tag::Sub => req.a - req.b,
    }
}

/// Apply the corpus's fixed request (`add`, operands 3 and 4) `n` times.
///
/// For the corpus default `n = 10000` the result is 70_000.
pub fn tag_loop(n: usize) -> u64 {
    let req = Request {
        tag: Tag::Add,
        a: 3u64,
        b: 4u64,
    };

    let mut total = 0;
    for _ in 0..n {
        total += apply(&req);
    }
    total
}
