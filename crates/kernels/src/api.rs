//! High-level API for invoking corpus kernels.
//!
//! ## Purpose
//!
//! This module is the seam an external benchmark driver calls: every kernel
//! in the corpus appears as one variant of [`Kernel`], invoked uniformly as
//! a single integer in, a single integer out. The driver is responsible for
//! printing or recording the scalar and timing the call; nothing here
//! measures anything.
//!
//! ## Design notes
//!
//! * **Uniform contract**: One `i64` in, one `u64` out, for every kernel.
//!   Inputs pass through [`Validator`] before any kernel state exists.
//! * **Corpus defaults**: Each kernel carries the input the reference corpus
//!   drives it with (`limit = 1000`, `n = 8`, `n = 10000`).
//! * **Stateless**: `Kernel` is a plain `Copy` selector; all kernel state is
//!   call-scoped.
//!
//! ## Key concepts
//!
//! * **Core kernels**: the two sieves and the N-Queens solver, the entries
//!   with real algorithmic structure.
//! * **Fixture kernels**: straight-line single-pass entries with fixed
//!   scalar contracts.

// Internal dependencies
use crate::engine::validator::Validator;
use crate::fixtures::{dispatch, list, pipeline, records};
use crate::search::queens;
use crate::sieve::{naive, table};

// Publicly re-exported types
pub use crate::primitives::errors::KernelError;

// ============================================================================
// Kernel Selector
// ============================================================================

/// Every entry point the corpus recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kernel {
    /// Naive filter-and-shrink prime counting, O(n²) by design.
    NaiveSieve,

    /// Boolean-table Sieve of Eratosthenes, O(n log log n).
    TableSieve,

    /// N-Queens backtracking solution count, exponential worst case.
    Queens,

    /// Map → filter → reduce pipeline with materialized stages.
    Pipeline,

    /// Prepend-built singly-linked list, counted by traversal.
    ListBuild,

    /// Polymorphic single-method dispatch loop.
    MethodDispatch,

    /// Tag-selected arithmetic dispatch loop.
    TagDispatch,

    /// Record generation, filter on `active`, sum of `value`.
    RecordFilter,
}

impl Kernel {
    /// All corpus kernels, in corpus order.
    pub const ALL: [Kernel; 8] = [
        Kernel::NaiveSieve,
        Kernel::TableSieve,
        Kernel::Queens,
        Kernel::Pipeline,
        Kernel::ListBuild,
        Kernel::MethodDispatch,
        Kernel::TagDispatch,
        Kernel::RecordFilter,
    ];

    /// Stable kernel name, used in error messages and driver output.
    pub fn name(&self) -> &'static str {
        match self {
            Self::NaiveSieve => "sieve_naive",
            Self::TableSieve => "sieve_table",
            Self::Queens => "nqueens",
            Self::Pipeline => "map_filter_reduce",
            Self::ListBuild => "list_build",
            Self::MethodDispatch => "method_dispatch",
            Self::TagDispatch => "tag_dispatch",
            Self::RecordFilter => "record_filter",
        }
    }

    /// The input the reference corpus drives this kernel with.
    pub fn default_input(&self) -> i64 {
        match self {
            Self::NaiveSieve | Self::TableSieve => 1000,
            Self::Queens => 8,
            Self::Pipeline
            | Self::ListBuild
            | Self::MethodDispatch
            | Self::TagDispatch
            | Self::RecordFilter => 10000,
        }
    }

    /// Run the kernel on a driver-supplied input.
    ///
    /// The input is validated first; a negative or unrepresentable value is
    /// rejected before any kernel state is allocated.
    pub fn run(&self, input: i64) -> Result<u64, KernelError> {
        let size = Validator::validate_input(self.name(), input)?;

        let count = match self {
            Self::NaiveSieve => naive::count_primes_naive(size) as u64,
            Self::TableSieve => table::count_primes_table(size) as u64,
            Self::Queens => queens::count_solutions(size) as u64,
            Self::Pipeline => pipeline::square_even_sum(size),
            Self::ListBuild => list::build_and_count(size) as u64,
            Self::MethodDispatch => dispatch::method_loop(size),
            Self::TagDispatch => dispatch::tag_loop(size),
            Self::RecordFilter => records::active_value_sum(size),
        };

        Ok(count)
    }
}
