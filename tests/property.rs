//! Property-based tests using proptest.
//!
//! Random directories exercise the sort and query invariants that the
//! fixed fixtures in `integration.rs` cannot: sortedness and permutation
//! for arbitrary inputs, idempotence, and the window invariants of the
//! prefix search (contiguity, shared length, tight boundaries).

use std::cmp::Ordering;

use proptest::prelude::*;
use ypages::{
    contact_order, prefix_search, shares_prefix, Contact, Directory, Name, PhoneNumber,
};

// ============================================================================
// STRATEGIES
// ============================================================================

/// Single whitespace-free name token, as the flat format requires.
fn name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z]{1,10}").unwrap()
}

fn contact_strategy() -> impl Strategy<Value = Contact> {
    (
        name_strategy(),
        name_strategy(),
        0u16..10_000,
        0u16..10_000,
        any::<i64>(),
    )
        .prop_map(|(family, given, country, area, number)| Contact {
            name: Name { family, given },
            phone: PhoneNumber {
                country,
                area,
                number,
            },
        })
}

fn directory_strategy() -> impl Strategy<Value = Vec<Contact>> {
    prop::collection::vec(contact_strategy(), 0..32)
}

/// Keys drawn from the same alphabet as family names so that hits and
/// misses both occur.
fn key_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z]{1,6}").unwrap()
}

fn shared_len(family: &str, key: &str) -> usize {
    family
        .as_bytes()
        .iter()
        .zip(key.as_bytes())
        .take_while(|(a, b)| a == b)
        .count()
}

// ============================================================================
// SORT PROPERTIES
// ============================================================================

proptest! {
    #[test]
    fn sorted_view_is_non_decreasing(contacts in directory_strategy()) {
        let mut dir = Directory::new(contacts);
        dir.sort();
        for pos in 1..dir.len() {
            prop_assert_ne!(
                contact_order(dir.at(pos - 1), dir.at(pos)),
                Ordering::Greater
            );
        }
    }

    #[test]
    fn sorting_is_a_permutation(contacts in directory_strategy()) {
        let n = contacts.len();
        let mut dir = Directory::new(contacts);
        dir.sort();

        let mut seen: Vec<u32> = dir.view().to_vec();
        seen.sort_unstable();
        let identity: Vec<u32> = (0..n as u32).collect();
        prop_assert_eq!(seen, identity);
    }

    #[test]
    fn sorting_never_mutates_contacts(contacts in directory_strategy()) {
        let mut original: Vec<(String, String)> = contacts
            .iter()
            .map(|c| (c.name.family.clone(), c.name.given.clone()))
            .collect();
        let mut dir = Directory::new(contacts);
        dir.sort();

        let mut after: Vec<(String, String)> = dir
            .iter()
            .map(|c| (c.name.family.clone(), c.name.given.clone()))
            .collect();
        original.sort();
        after.sort();
        prop_assert_eq!(original, after);
    }

    #[test]
    fn sorting_is_idempotent(contacts in directory_strategy()) {
        let mut dir = Directory::new(contacts);
        dir.sort();
        let first = dir.view().to_vec();
        dir.sort();
        prop_assert_eq!(dir.view(), first.as_slice());
    }
}

// ============================================================================
// QUERY PROPERTIES
// ============================================================================

proptest! {
    #[test]
    fn match_window_is_in_bounds_and_contiguous(
        contacts in directory_strategy(),
        key in key_strategy(),
    ) {
        let mut dir = Directory::new(contacts);
        dir.sort();

        if let Some(w) = prefix_search(&dir, &key) {
            prop_assert!(w.first <= w.last);
            prop_assert!(w.last < dir.len());
            prop_assert_eq!(w.count(), w.last - w.first + 1);
        }
    }

    #[test]
    fn every_match_shares_a_prefix_and_boundaries_are_tight(
        contacts in directory_strategy(),
        key in key_strategy(),
    ) {
        let mut dir = Directory::new(contacts);
        dir.sort();

        if let Some(w) = prefix_search(&dir, &key) {
            // The window's guaranteed shared length is the minimum over
            // its members; it must be at least one byte.
            let n = (w.first..=w.last)
                .map(|pos| shared_len(&dir.at(pos).name.family, &key))
                .min()
                .unwrap();
            prop_assert!(n >= 1);
            for pos in w.first..=w.last {
                prop_assert!(shares_prefix(&dir.at(pos).name.family, &key, n));
            }

            // Entries adjacent to the window share strictly less than the
            // window's minimum, otherwise the scans would have taken them.
            if w.first > 0 {
                prop_assert!(shared_len(&dir.at(w.first - 1).name.family, &key) < n);
            }
            if w.last + 1 < dir.len() {
                prop_assert!(shared_len(&dir.at(w.last + 1).name.family, &key) < n);
            }
        }
    }

    #[test]
    fn empty_directory_never_matches(key in key_strategy()) {
        let dir = Directory::new(Vec::new());
        prop_assert!(prefix_search(&dir, &key).is_none());
    }

    #[test]
    fn single_contact_matches_iff_first_byte_shared(
        contact in contact_strategy(),
        key in key_strategy(),
    ) {
        let first_byte_shared = shared_len(&contact.name.family, &key) >= 1;
        let mut dir = Directory::new(vec![contact]);
        dir.sort();

        match prefix_search(&dir, &key) {
            Some(w) => {
                prop_assert!(first_byte_shared);
                prop_assert_eq!(w.count(), 1);
            }
            None => prop_assert!(!first_byte_shared),
        }
    }

    #[test]
    fn exact_key_is_always_found(contacts in directory_strategy(), pick in any::<prop::sample::Index>()) {
        prop_assume!(!contacts.is_empty());
        let key = contacts[pick.index(contacts.len())].name.family.clone();
        let mut dir = Directory::new(contacts);
        dir.sort();

        let w = prefix_search(&dir, &key).expect("exact family name must match");
        let hit = (w.first..=w.last).any(|pos| dir.at(pos).name.family == key);
        prop_assert!(hit);
    }
}

// ============================================================================
// FORMAT PROPERTIES
// ============================================================================

proptest! {
    #[test]
    fn flat_format_round_trips(contacts in directory_strategy()) {
        let dir = Directory::new(contacts);
        let mut buf = Vec::new();
        ypages::write_directory(&dir, &mut buf).unwrap();

        let tmp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(tmp.path(), &buf).unwrap();
        let replica = ypages::load_directory(tmp.path()).unwrap();

        prop_assert_eq!(replica.len(), dir.len());
        for (a, b) in dir.iter().zip(replica.iter()) {
            prop_assert_eq!(a, b);
        }
    }
}
