//! N-Queens backtracking solver.
//!
//! ## Purpose
//!
//! This module counts the distinct placements of `n` non-attacking queens on
//! an `n`×`n` board, one queen per row, by exhaustive depth-first search with
//! pruning on constraint violation.
//!
//! ## Design notes
//!
//! * **Explicit context**: The placement stack and solution counter live in
//!   a [`SearchContext`] owned by the top-level call and passed `&mut`
//!   through the recursion. No captured ambient state.
//! * **Traversal order**: Columns are tried in ascending order at every row;
//!   the most recent placement is popped before the next column is tried.
//!   The count is order-independent, but the traversal order is part of the
//!   kernel's observable shape.
//! * **Parallelism** (`parallel` feature): Uses `rayon` to split the row-0
//!   column choices across threads, one independent context per branch, with
//!   the counts summed by reduction.
//!
//! ## Key concepts
//!
//! * **Placement stack**: One column index per placed row; rows are distinct
//!   by construction, so only column and diagonal conflicts are checked.
//! * **Safety**: Candidate `(row, col)` conflicts with a placed `(r, qc)`
//!   iff `qc == col` or `|qc - col| == row - r`.
//!
//! ## Invariants
//!
//! * At every point during search, no two stack entries share a column or a
//!   diagonal.
//! * The stack is empty before the search starts and after it completes.
//! * The solution counter is incremented exactly once per full placement.
//!
//! ## Non-goals
//!
//! * This module does not deduplicate solutions under rotation or
//!   reflection; all distinct placements are counted.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
#[cfg(feature = "parallel")]
use rayon::prelude::*;

// ============================================================================
// Search Context
// ============================================================================

/// Call-scoped state for one N-Queens search.
///
/// Owned by the top-level entry point and threaded `&mut` through the
/// recursion; nothing escapes the search but the final tallies.
struct SearchContext {
    /// Board dimension.
    n: usize,

    /// Column chosen for each already-placed row.
    queens: Vec<usize>,

    /// Completed placements seen so far.
    solutions: usize,

    /// Full placements, recorded only when enumeration was requested.
    collected: Option<Vec<Vec<usize>>>,
}

impl SearchContext {
    fn new(n: usize, collect: bool) -> Self {
        Self {
            n,
            queens: Vec::with_capacity(n),
            solutions: 0,
            collected: if collect { Some(Vec::new()) } else { None },
        }
    }

    /// Check `(row, col)` against every placed queen.
    ///
    /// Rows are distinct by construction; only column and diagonal
    /// conflicts can occur.
    fn is_safe(&self, row: usize, col: usize) -> bool {
        self.queens
            .iter()
            .enumerate()
            .all(|(r, &qc)| qc != col && qc.abs_diff(col) != row - r)
    }

    /// Depth-first descent from `row`, trying columns in ascending order.
    fn descend(&mut self, row: usize) {
        if row == self.n {
            self.solutions += 1;
            if let Some(found) = self.collected.as_mut() {
                found.push(self.queens.clone());
            }
            return;
        }

        for col in 0..self.n {
            if self.is_safe(row, col) {
                self.queens.push(col);
                self.descend(row + 1);
                self.queens.pop();
            }
        }
    }
}

// ============================================================================
// Entry Points
// ============================================================================

/// Count the distinct placements of `n` non-attacking queens.
///
/// # Edge cases
///
/// * `n = 0` returns 1: the empty placement trivially satisfies the
///   constraint.
/// * `n = 2` and `n = 3` return 0: no valid arrangement exists.
pub fn count_solutions(n: usize) -> usize {
    let mut ctx = SearchContext::new(n, false);
    ctx.descend(0);
    ctx.solutions
}

/// Enumerate every solution as its placement stack (column per row).
///
/// Same traversal as [`count_solutions`]; solutions appear in the order the
/// depth-first search completes them.
pub fn enumerate_solutions(n: usize) -> Vec<Vec<usize>> {
    let mut ctx = SearchContext::new(n, true);
    ctx.descend(0);
    ctx.collected.unwrap_or_default()
}

/// Count solutions with the row-0 column choices split across threads.
///
/// Each branch runs an independent [`SearchContext`]; the per-branch counts
/// are summed by reduction, so the total matches [`count_solutions`].
#[cfg(feature = "parallel")]
pub fn count_solutions_parallel(n: usize) -> usize {
    if n == 0 {
        return 1;
    }

    (0..n)
        .into_par_iter()
        .map(|col| {
            let mut ctx = SearchContext::new(n, false);
            ctx.queens.push(col);
            ctx.descend(1);
            ctx.solutions
        })
        .sum()
}
