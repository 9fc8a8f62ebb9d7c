//! Prefix search over the sorted view.
//!
//! A query is answered in three moves over the sorted view:
//!
//! 1. **Anchor**: binary search on the family-name field only (3-way
//!    compare against the key) narrows `[a, z]` to a single position.
//! 2. **Best length**: walk the candidate prefix length `n` down from
//!    `key.len()` until the anchor's family name actually shares `n`
//!    leading bytes with the key. `n == 0` means nothing matches.
//! 3. **Expand**: scan left from the anchor while neighbors share `n`
//!    bytes; a neighbor sharing `n + 1` bytes tightens `n` and resets the
//!    match midpoint (and the right bound) to that entry. The right scan
//!    then extends the window using the final `n`; it never tightens
//!    further. The asymmetry is deliberate: tightening on the left
//!    invalidates everything previously accepted to the right, so the
//!    right bound restarts from the midpoint.
//!
//! The result window therefore covers exactly the entries sharing the
//! *longest* prefix length found among the anchor's neighborhood, not
//! merely the anchor's own.

use std::cmp::Ordering;

use crate::types::{shares_prefix, Directory};

/// Inclusive range of view positions whose family names share the best
/// prefix length with a query key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchWindow {
    /// First matching view position.
    pub first: usize,
    /// Last matching view position (inclusive).
    pub last: usize,
}

impl MatchWindow {
    /// Number of contacts in the window.
    pub fn count(&self) -> usize {
        self.last - self.first + 1
    }
}

/// Find the window of contacts whose family name shares the longest common
/// prefix with `key`. The directory view must already be sorted.
///
/// Returns `None` when the directory is empty or no entry shares even the
/// first byte of the key (a single shared leading byte counts as found).
pub fn prefix_search(directory: &Directory, key: &str) -> Option<MatchWindow> {
    if directory.is_empty() {
        return None;
    }
    let anchor = locate_anchor(directory, key);
    let family = |pos: usize| directory.at(pos).name.family.as_str();

    // Longest prefix the anchor itself shares with the key.
    let mut n = key.len();
    while n != 0 && !shares_prefix(family(anchor), key, n) {
        n -= 1;
    }
    if n == 0 {
        return None;
    }

    // Left scan. `mid` tracks the entry that defined the current best
    // length; every tightening drags the right scan's start back to it.
    let mut mid = anchor;
    let mut lo = anchor as isize;
    while lo >= 0 && shares_prefix(family(lo as usize), key, n) {
        if shares_prefix(family(lo as usize), key, n + 1) {
            n += 1;
            mid = lo as usize;
        }
        lo -= 1;
    }
    let first = (lo + 1) as usize;

    // Right scan with the final n, restarting from the midpoint.
    let mut hi = mid;
    while hi < directory.len() && shares_prefix(family(hi), key, n) {
        hi += 1;
    }
    let last = hi - 1;

    debug_assert!(first <= mid && mid <= last);
    Some(MatchWindow { first, last })
}

/// Binary search on family name only, narrowing `[a, z]` to the single
/// position the key's family-name ordering points at.
///
/// The loop invariant is that the answer lies in `[a, z]`; each midpoint
/// comparison discards one half, and an exact hit collapses the range at
/// once. For a non-empty directory the result is always in `0..len`, even
/// when the key orders before the first or after the last entry.
fn locate_anchor(directory: &Directory, key: &str) -> usize {
    let mut a: isize = 0;
    let mut z: isize = directory.len() as isize - 1;
    while a < z {
        let mid = (a + z) / 2;
        match directory.at(mid as usize).name.family.as_str().cmp(key) {
            Ordering::Less => a = mid + 1,
            Ordering::Equal => {
                a = mid;
                z = mid;
            }
            Ordering::Greater => z = mid - 1,
        }
    }
    a as usize
}
