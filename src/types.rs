//! The building blocks of a directory: contacts and the sortable view.
//!
//! A [`Directory`] owns two parallel structures:
//!
//! ```text
//! contacts: [ C0 ][ C1 ][ C2 ][ C3 ]     fixed after load, never moved
//!
//! view:      [ 3 ][ 0 ][ 2 ][ 1 ]        the only thing sorting touches
//! ```
//!
//! All ordering operations permute `view`; the backing `contacts` vector is
//! immutable in position once loaded. Every swap is an index swap, and the
//! "unsorted replica then sorted snapshot" sequence falls out of printing
//! the same storage through the view before and after sorting.
//!
//! # Invariants
//!
//! - `view` is always a permutation of `0..contacts.len()`. Construction
//!   starts from the identity permutation and [`Directory::sort`] only ever
//!   swaps entries, so the invariant holds by induction.
//! - `Name` fields are single whitespace-free tokens of at most
//!   [`MAX_NAME_BYTES`] bytes; the flat-format reader rejects anything
//!   longer instead of truncating.

use std::cmp::Ordering;

/// Upper bound on each name field, in bytes. Matches the classic 128-byte
/// fixed buffer minus its terminator.
pub const MAX_NAME_BYTES: usize = 127;

/// A contact's name, split into the sort-major and sort-minor fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Name {
    /// Family name; primary sort key and the field queries match against.
    pub family: String,
    /// Given name; tie-breaker within a family.
    pub given: String,
}

/// A phone number as three plain numeric fields. No validation beyond
/// representability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhoneNumber {
    pub country: u16,
    pub area: u16,
    pub number: i64,
}

/// One directory entry. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub name: Name,
    pub phone: PhoneNumber,
}

/// Total order over contacts: family name first, given name on ties.
///
/// Byte-lexicographic on both fields, which for `&str` is exactly what
/// `strcmp` gives over the same bytes. Consistency (transitivity, equal
/// keys compare equal) comes from `Ord` on `str`; both the heap sorter and
/// the binary search rely on it.
pub fn contact_order(a: &Contact, b: &Contact) -> Ordering {
    a.name
        .family
        .cmp(&b.name.family)
        .then_with(|| a.name.given.cmp(&b.name.given))
}

/// Do `a` and `b` share a common prefix of `n` leading bytes?
///
/// False whenever either string is shorter than `n`, so callers can probe
/// candidate lengths downward without length checks of their own.
pub fn shares_prefix(a: &str, b: &str, n: usize) -> bool {
    a.len() >= n && b.len() >= n && a.as_bytes()[..n] == b.as_bytes()[..n]
}

/// A loaded directory: fixed backing storage plus the permutable view.
#[derive(Debug, Clone)]
pub struct Directory {
    contacts: Vec<Contact>,
    view: Vec<u32>,
}

impl Directory {
    /// Build a directory over `contacts` with the identity view
    /// (view position `i` maps to storage position `i`).
    pub fn new(contacts: Vec<Contact>) -> Self {
        let view = (0..contacts.len() as u32).collect();
        Directory { contacts, view }
    }

    /// Number of contacts.
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Current view order, as indices into the backing storage.
    pub fn view(&self) -> &[u32] {
        &self.view
    }

    /// Contact at view position `pos` (not storage position).
    pub fn at(&self, pos: usize) -> &Contact {
        &self.contacts[self.view[pos] as usize]
    }

    /// Iterate contacts in view order.
    pub fn iter(&self) -> impl Iterator<Item = &Contact> {
        self.view.iter().map(|&i| &self.contacts[i as usize])
    }

    /// Sort the view in place by [`contact_order`]. The backing storage
    /// does not move.
    pub fn sort(&mut self) {
        crate::sort::sort_view(&self.contacts, &mut self.view);
    }
}

#[cfg(test)]
pub(crate) fn contact(family: &str, given: &str) -> Contact {
    Contact {
        name: Name {
            family: family.to_string(),
            given: given.to_string(),
        },
        phone: PhoneNumber {
            country: 41,
            area: 21,
            number: 6_931_111,
        },
    }
}
