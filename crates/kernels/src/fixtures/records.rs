//! Record filter-and-sum fixture.
//!
//! ## Design notes
//!
//! * **Materialized records**: All `n` records are built into one sequence
//!   before the filtering pass; generating and summing in one fused loop
//!   would skip the field-access pattern the corpus measures.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// One generated record.
struct Record {
    #[allow(dead_code)]
    id: usize,
    value: u64,
    active: bool,
}

/// Build `n` records `{id: i, value: 2i, active: i % 3 == 0}` and sum
/// `value` over the active subset.
///
/// For the corpus default `n = 10000` the result is 33_336_666.
pub fn active_value_sum(n: usize) -> u64 {
    let records: Vec<Record> = (0..n)
        .map(|i| Record {
            id: i,
            value: 2 * i as u64,
            active: i % 3 == 0,
        })
        .collect();

    records
        .iter()
        .filter(|r| r.active)
        .map(|r| r.value)
        .sum()
}
