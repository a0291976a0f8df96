//! Input validation at the driver boundary.
//!
//! ## Purpose
//!
//! This module validates the single integer each kernel receives from an
//! external driver. Kernels are total over `usize`; the validator is where a
//! signed, possibly-negative driver value either becomes a size or is
//! rejected.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first violation; no kernel state
//!   is allocated for a rejected input.
//! * **Explicit boundaries**: The reference corpus leans on permissive
//!   range semantics for `limit < 2` and `n = 0`; those stay valid inputs
//!   here, documented per kernel, while negatives are rejected outright.
//!
//! ## Invariants
//!
//! * A returned `usize` round-trips to the original driver value.
//! * Validation is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not clamp, wrap, or otherwise correct invalid inputs.
//! * This module does not run any kernel.

// Internal dependencies
use crate::primitives::errors::KernelError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for driver-supplied kernel inputs.
///
/// All methods return `Result` and fail fast on the first violation.
pub struct Validator;

impl Validator {
    /// Validate a driver-supplied input and convert it to a kernel size.
    ///
    /// Rejects negative values, then values that do not fit the platform's
    /// `usize` (relevant on 32-bit targets).
    pub fn validate_input(kernel: &'static str, value: i64) -> Result<usize, KernelError> {
        // Check 1: Non-negative
        if value < 0 {
            return Err(KernelError::NegativeInput { kernel, got: value });
        }

        // Check 2: Representable as a size on this platform
        usize::try_from(value).map_err(|_| KernelError::InputOutOfRange { kernel, got: value })
    }
}
