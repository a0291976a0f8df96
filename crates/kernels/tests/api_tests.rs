#![cfg(feature = "dev")]
//! Tests for the high-level kernel API.
//!
//! These tests verify the uniform driver-facing contract:
//! - Every kernel produces its corpus scalar at its default input
//! - Every kernel rejects negative input
//! - Names and default inputs are stable
//!
//! ## Test Organization
//!
//! 1. **Corpus Scalars** - Default-input outputs for all eight kernels
//! 2. **Validation** - Uniform rejection of negative input
//! 3. **Metadata** - Names and defaults
//! 4. **Purity** - Repeated invocations agree

use kernels::internals::api::{Kernel, KernelError};

// ============================================================================
// Corpus Scalars
// ============================================================================

/// Each kernel's printed scalar at its corpus default input.
#[test]
fn test_default_scalars() -> Result<(), KernelError> {
    let expected: [(Kernel, u64); 8] = [
        (Kernel::NaiveSieve, 168),
        (Kernel::TableSieve, 168),
        (Kernel::Queens, 92),
        (Kernel::Pipeline, 166_616_670_000),
        (Kernel::ListBuild, 10000),
        (Kernel::MethodDispatch, 149_985_000),
        (Kernel::TagDispatch, 70_000),
        (Kernel::RecordFilter, 33_336_666),
    ];

    for (kernel, scalar) in expected {
        let got = kernel.run(kernel.default_input())?;
        assert_eq!(got, scalar, "kernel {} printed the wrong scalar", kernel.name());
    }
    Ok(())
}

// ============================================================================
// Validation
// ============================================================================

/// Every kernel rejects negative input at the driver boundary.
#[test]
fn test_negative_input_rejected_everywhere() {
    for kernel in Kernel::ALL {
        let err = kernel.run(-1).unwrap_err();
        assert_eq!(
            err,
            KernelError::NegativeInput {
                kernel: kernel.name(),
                got: -1,
            }
        );
    }
}

// ============================================================================
// Metadata
// ============================================================================

/// `ALL` covers every kernel exactly once, with distinct stable names.
#[test]
fn test_names_are_distinct() {
    let names: Vec<&str> = Kernel::ALL.iter().map(|k| k.name()).collect();
    for (i, name) in names.iter().enumerate() {
        assert!(!name.is_empty());
        assert!(!names[..i].contains(name), "duplicate kernel name {name}");
    }
}

/// Default inputs match the reference corpus configuration.
#[test]
fn test_default_inputs() {
    assert_eq!(Kernel::NaiveSieve.default_input(), 1000);
    assert_eq!(Kernel::TableSieve.default_input(), 1000);
    assert_eq!(Kernel::Queens.default_input(), 8);
    assert_eq!(Kernel::Pipeline.default_input(), 10000);
    assert_eq!(Kernel::RecordFilter.default_input(), 10000);
}

// ============================================================================
// Purity
// ============================================================================

/// Running a kernel twice with the same input yields the same scalar.
#[test]
fn test_repeated_runs_agree() -> Result<(), KernelError> {
    for kernel in [Kernel::TableSieve, Kernel::Queens, Kernel::Pipeline] {
        let input = kernel.default_input();
        assert_eq!(kernel.run(input)?, kernel.run(input)?);
    }
    Ok(())
}
