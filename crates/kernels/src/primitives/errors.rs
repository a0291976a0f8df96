//! Error types for kernel invocation.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur when an external
//! driver invokes a kernel. Kernels themselves are total functions over
//! `usize`; errors arise only at the driver boundary, where inputs arrive as
//! signed integers.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the kernel name and the offending value.
//! * **Fail-Fast**: A negative or unrepresentable input rejects the call
//!   before any kernel state is allocated.
//! * **No-std**: Supports `no_std` environments; `std::error::Error` is
//!   implemented only when the `std` feature is enabled.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Numeric values in errors use the same types as the driver boundary.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery; each call either returns
//!   a count or is rejected whole.

// Feature-gated imports
#[cfg(feature = "std")]
use std::error::Error;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for kernel invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KernelError {
    /// Kernel inputs are sizes and counts; negative values are rejected
    /// rather than silently mapped to an empty result.
    NegativeInput {
        /// Name of the kernel that was invoked.
        kernel: &'static str,
        /// The value supplied by the driver.
        got: i64,
    },

    /// Input does not fit in the platform's `usize`.
    InputOutOfRange {
        /// Name of the kernel that was invoked.
        kernel: &'static str,
        /// The value supplied by the driver.
        got: i64,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for KernelError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::NegativeInput { kernel, got } => {
                write!(f, "Invalid input for kernel '{kernel}': {got} (must be >= 0)")
            }
            Self::InputOutOfRange { kernel, got } => {
                write!(
                    f,
                    "Invalid input for kernel '{kernel}': {got} does not fit in usize"
                )
            }
        }
    }
}

// ============================================================================
// Error Trait Implementation
// ============================================================================

#[cfg(feature = "std")]
impl Error for KernelError {}
