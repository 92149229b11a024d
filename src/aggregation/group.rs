//! Group-by / reduce building blocks shared by every aggregator.
//!
//! An aggregator picks a key for each item and an accumulator type made of
//! named reductions ([`Sum`], [`Max`], [`CountDistinct`]); [`group_by`] does the
//! rest. Groups come back ordered by key.

use crate::types::rental_record::RiderCounts;
use std::collections::{BTreeMap, HashSet};
use std::hash::Hash;

/// Folds one item into a running per-group state.
pub trait Accumulate<T: ?Sized> {
    fn accumulate(&mut self, item: &T);
}

/// Groups `items` by `key` and folds every group into a fresh `A`.
///
/// Only keys that occur in `items` get a group, so no group is ever empty.
///
/// # Examples
///
/// ```
/// use rentalstat::aggregation::group::{group_by, Accumulate, Sum};
///
/// #[derive(Default)]
/// struct Total(Sum);
///
/// impl Accumulate<(char, u64)> for Total {
///     fn accumulate(&mut self, item: &(char, u64)) {
///         self.0.push(item.1);
///     }
/// }
///
/// let items = [('b', 2), ('a', 1), ('b', 5)];
/// let groups = group_by::<_, _, Total>(&items, |item| item.0);
/// let sums: Vec<(char, u64)> = groups.into_iter().map(|(k, t)| (k, t.0.finish())).collect();
/// assert_eq!(sums, [('a', 1), ('b', 7)]);
/// ```
pub fn group_by<'a, T, K, A>(
    items: impl IntoIterator<Item = &'a T>,
    mut key: impl FnMut(&T) -> K,
) -> BTreeMap<K, A>
where
    T: 'a,
    K: Ord,
    A: Accumulate<T> + Default,
{
    let mut groups: BTreeMap<K, A> = BTreeMap::new();
    for item in items {
        groups.entry(key(item)).or_default().accumulate(item);
    }
    groups
}

/// Sum of counts. Saturates instead of overflowing.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Sum(u64);

impl Sum {
    pub fn push(&mut self, value: u64) {
        self.0 = self.0.saturating_add(value);
    }

    pub fn finish(self) -> u64 {
        self.0
    }
}

/// Largest value seen, `None` if nothing was pushed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Max<T>(Option<T>);

impl<T> Default for Max<T> {
    fn default() -> Self {
        Self(None)
    }
}

impl<T: Ord + Copy> Max<T> {
    pub fn push(&mut self, value: T) {
        self.0 = Some(match self.0 {
            Some(current) => current.max(value),
            None => value,
        });
    }

    pub fn finish(self) -> Option<T> {
        self.0
    }
}

/// Number of distinct values seen.
#[derive(Debug, Clone)]
pub struct CountDistinct<T>(HashSet<T>);

impl<T> Default for CountDistinct<T> {
    fn default() -> Self {
        Self(HashSet::new())
    }
}

impl<T: Hash + Eq> CountDistinct<T> {
    pub fn push(&mut self, value: T) {
        self.0.insert(value);
    }

    pub fn finish(self) -> u64 {
        self.0.len() as u64
    }
}

/// Sums of the casual, registered and total counts of a group.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CountTotals {
    pub casual: Sum,
    pub registered: Sum,
    pub total: Sum,
}

impl<T: RiderCounts> Accumulate<T> for CountTotals {
    fn accumulate(&mut self, item: &T) {
        self.casual.push(item.casual_count());
        self.registered.push(item.registered_count());
        self.total.push(item.total_count());
    }
}
