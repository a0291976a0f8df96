#![cfg(feature = "dev")]
//! Tests for the N-Queens backtracking solver.
//!
//! These tests verify the search kernel:
//! - Known solution counts for `n = 0..=8`
//! - Validity of every enumerated placement (pairwise column and diagonal
//!   distinctness)
//! - Consistency between counting and enumeration
//! - Purity, and agreement of the parallel split with the serial search
//!
//! ## Test Organization
//!
//! 1. **Solution Counts** - Reference values including degenerate boards
//! 2. **Placement Validity** - Constraint checks on enumerated solutions
//! 3. **Count/Enumeration Consistency**
//! 4. **Purity & Parallel Agreement**

use kernels::internals::search::queens::{count_solutions, enumerate_solutions};

#[cfg(feature = "parallel")]
use kernels::internals::search::queens::count_solutions_parallel;

// ============================================================================
// Helper Functions
// ============================================================================

/// Assert that a placement satisfies the non-attacking constraint for all
/// pairs of rows.
fn assert_valid_placement(n: usize, placement: &[usize]) {
    assert_eq!(placement.len(), n, "placement must cover every row");

    for row in 0..n {
        for r in 0..row {
            let (col, qc) = (placement[row], placement[r]);
            assert!(qc != col, "rows {r} and {row} share column {col}");
            assert!(
                qc.abs_diff(col) != row - r,
                "rows {r} and {row} share a diagonal"
            );
        }
    }
}

// ============================================================================
// Solution Counts
// ============================================================================

/// The empty placement trivially satisfies the constraint.
#[test]
fn test_zero_board_has_one_solution() {
    assert_eq!(count_solutions(0), 1);
}

/// A single queen on a 1x1 board.
#[test]
fn test_one_board() {
    assert_eq!(count_solutions(1), 1);
}

/// No valid arrangement exists for 2x2 or 3x3 boards.
#[test]
fn test_degenerate_boards() {
    assert_eq!(count_solutions(2), 0);
    assert_eq!(count_solutions(3), 0);
}

/// Reference counts for small boards.
#[test]
fn test_reference_counts() {
    assert_eq!(count_solutions(4), 2);
    assert_eq!(count_solutions(5), 10);
    assert_eq!(count_solutions(6), 4);
    assert_eq!(count_solutions(7), 40);
}

/// The corpus reference value: 92 solutions on the standard board.
#[test]
fn test_corpus_default() {
    assert_eq!(count_solutions(8), 92);
}

// ============================================================================
// Placement Validity
// ============================================================================

/// Every enumerated solution is pairwise column- and diagonal-distinct.
#[test]
fn test_enumerated_solutions_are_valid() {
    for n in 0..=8 {
        for placement in enumerate_solutions(n) {
            assert_valid_placement(n, &placement);
        }
    }
}

/// The two 4x4 solutions are the known mirror pair, in depth-first order.
#[test]
fn test_four_board_solutions() {
    let found = enumerate_solutions(4);
    assert_eq!(found, vec![vec![1, 3, 0, 2], vec![2, 0, 3, 1]]);
}

// ============================================================================
// Count/Enumeration Consistency
// ============================================================================

/// Enumeration finds exactly as many solutions as the counting search.
#[test]
fn test_enumeration_matches_count() {
    for n in 0..=8 {
        assert_eq!(enumerate_solutions(n).len(), count_solutions(n));
    }
}

// ============================================================================
// Purity & Parallel Agreement
// ============================================================================

/// Repeated calls with the same input agree.
#[test]
fn test_idempotent() {
    assert_eq!(count_solutions(6), count_solutions(6));
}

/// The row-0 parallel split produces the serial count.
#[cfg(feature = "parallel")]
#[test]
fn test_parallel_matches_serial() {
    for n in 0..=9 {
        assert_eq!(count_solutions_parallel(n), count_solutions(n));
    }
}
