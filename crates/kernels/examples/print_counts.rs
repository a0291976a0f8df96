//! Corpus driver example.
//!
//! Runs every kernel at its corpus default input and prints one scalar per
//! kernel, matching the one-print-per-script behavior of the reference
//! corpus. An external harness would time each call around this point.
//!
//! Expected output:
//!
//! ```text
//! sieve_naive(1000) = 168
//! sieve_table(1000) = 168
//! nqueens(8) = 92
//! map_filter_reduce(10000) = 166616670000
//! list_build(10000) = 10000
//! method_dispatch(10000) = 149985000
//! tag_dispatch(10000) = 70000
//! record_filter(10000) = 33336666
//! ```

use kernels::prelude::*;

fn main() -> Result<(), KernelError> {
    for kernel in Kernel::ALL {
        let input = kernel.default_input();
        let scalar = kernel.run(input)?;
        println!("{}({}) = {}", kernel.name(), input, scalar);
    }
    Ok(())
}
