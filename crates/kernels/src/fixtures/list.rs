//! Singly-linked list fixture.
//!
//! ## Design notes
//!
//! * **Prepend-built**: The list is built head-first, one heap node per
//!   element, then counted by pointer-chasing traversal. The kernel measures
//!   per-node allocation and traversal, so the node chain is real boxes, not
//!   a contiguous buffer.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::boxed::Box;

/// One heap-allocated list node.
struct Node {
    val: usize,
    next: Option<Box<Node>>,
}

/// Build a list of `n` nodes by prepending, then count them by traversal.
///
/// The returned count is always `n`; the work, not the answer, is the point.
pub fn build_and_count(n: usize) -> usize {
    let mut head: Option<Box<Node>> = None;
    for i in 0..n {
        head = Some(Box::new(Node { val: i, next: head }));
    }

    let mut count = 0;
    let mut cur = head.as_deref();
    while let Some(node) = cur {
        count += 1;
        // Touch the payload so the traversal cannot collapse to a counter.
        let _ = node.val;
        cur = node.next.as_deref();
    }

    drop_iterative(head);
    count
}

/// Unlink the chain front-to-back so drop depth stays constant.
///
/// A recursive `Drop` over ten thousand boxes would walk the whole chain on
/// the call stack.
fn drop_iterative(mut head: Option<Box<Node>>) {
    while let Some(mut node) = head {
        head = node.next.take();
    }
}
