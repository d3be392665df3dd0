//! Ordering
//!
//! ## Algorithm
//! Adjacent-swap bubble sort over a copy of the input. Catalogs hold tens to
//! low thousands of entries, so O(n²) is acceptable.
//!
//! ## Null policy
//! Keys are `Option`s. For each adjacent pair `(a, b)`:
//! - `a` is `None`: never swapped
//! - `a` is `Some`, `b` is `None`: swapped
//! - both `Some`: ascending swaps when `a > b`, descending when `a < b`
//!
//! A null key steps one slot left each time a non-null key sits right before
//! it, and never moves right on its own, in both directions.

use std::cmp::Ordering;

use crate::model::{Country, SortField};

/// Sort `items` by `key` without touching the input
pub fn bubble_sort_by_key<T, K, F>(items: &[T], key: F, descending: bool) -> Vec<T>
where
    T: Clone,
    K: PartialOrd,
    F: Fn(&T) -> Option<K>,
{
    let mut sorted = items.to_vec();
    let n = sorted.len();

    for i in 0..n {
        let mut swapped = false;

        for j in 0..n - i - 1 {
            let Some(a) = key(&sorted[j]) else {
                continue;
            };

            let out_of_order = match key(&sorted[j + 1]) {
                None => true,
                Some(b) => {
                    let wanted = if descending {
                        Ordering::Less
                    } else {
                        Ordering::Greater
                    };
                    a.partial_cmp(&b) == Some(wanted)
                }
            };

            if out_of_order {
                sorted.swap(j, j + 1);
                swapped = true;
            }
        }

        // A pass without swaps leaves nothing for later passes to do
        if !swapped {
            break;
        }
    }

    sorted
}

/// Countries ordered by `field`; names compare case-insensitively
pub fn sort_by(countries: &[Country], field: SortField, descending: bool) -> Vec<Country> {
    match field {
        SortField::Name => {
            bubble_sort_by_key(countries, |c| Some(c.name.to_lowercase()), descending)
        }
        SortField::Population => bubble_sort_by_key(countries, |c| Some(c.population), descending),
        SortField::Area => bubble_sort_by_key(countries, |c| Some(c.area), descending),
    }
}
