//! In-place heap sort over the directory view.
//!
//! Classic max-heap selection sort: build the heap bottom-up, then swap the
//! root with the last unsorted slot and restore the heap property over the
//! shrinking prefix. Only view indices move; contact payloads are never
//! copied or compared by address. O(N log N) comparisons, O(1) extra space.
//!
//! The heap is 1-indexed conceptually (children of `i` at `2i` and
//! `2i + 1`); the code subtracts one at each access rather than wasting a
//! slot. Sift-down is iterative so a pathological directory cannot grow the
//! stack.

use std::cmp::Ordering;

use crate::types::{contact_order, Contact};

/// Sort `view` so that the contacts it references are non-decreasing under
/// [`contact_order`]. `view` must hold valid indices into `contacts`.
///
/// Empty and single-element views return immediately; no heap operation
/// touches them.
pub fn sort_view(contacts: &[Contact], view: &mut [u32]) {
    let n = view.len();
    if n < 2 {
        return;
    }

    // Bottom-up heap construction: every subtree rooted below n/2 is a leaf.
    for i in (1..=n / 2).rev() {
        sift_down(contacts, view, i, n);
    }

    // Repeatedly move the max to the end of the unsorted prefix.
    for end in (2..=n).rev() {
        view.swap(0, end - 1);
        sift_down(contacts, view, 1, end - 1);
    }
}

/// Restore the max-heap property for the subtree rooted at 1-indexed `root`,
/// within the first `n` slots of `view`.
///
/// Picks the larger of the two children before comparing against the
/// parent, and stops as soon as the parent dominates or no child is in
/// range.
fn sift_down(contacts: &[Contact], view: &mut [u32], mut root: usize, n: usize) {
    loop {
        let left = 2 * root;
        let right = 2 * root + 1;
        let mut largest = root;

        if left <= n && greater(contacts, view, left, largest) {
            largest = left;
        }
        if right <= n && greater(contacts, view, right, largest) {
            largest = right;
        }
        if largest == root {
            return;
        }
        view.swap(root - 1, largest - 1);
        root = largest;
    }
}

/// Does the contact at 1-indexed heap slot `a` order strictly after the one
/// at slot `b`?
fn greater(contacts: &[Contact], view: &[u32], a: usize, b: usize) -> bool {
    contact_order(
        &contacts[view[a - 1] as usize],
        &contacts[view[b - 1] as usize],
    ) == Ordering::Greater
}
