//! Array and map helpers.

use std::collections::{BTreeMap, HashSet};
use std::hash::Hash;

/// Removes duplicates, keeping the first occurrence of each item.
pub fn unique<T: Eq + Hash + Clone>(items: &[T]) -> Vec<T> {
    let mut seen = HashSet::with_capacity(items.len());
    items
        .iter()
        .filter(|item| seen.insert((*item).clone()))
        .cloned()
        .collect()
}

/// Splits `items` into chunks of `size`; the last chunk may be shorter.
///
/// A `size` of zero yields no chunks.
pub fn chunked<T: Clone>(items: &[T], size: usize) -> Vec<Vec<T>> {
    if size == 0 {
        return Vec::new();
    }
    items.chunks(size).map(<[T]>::to_vec).collect()
}

/// Groups items by a key, preserving input order within each group.
pub fn group_by<T, K, F>(items: impl IntoIterator<Item = T>, mut key: F) -> BTreeMap<K, Vec<T>>
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    let mut groups: BTreeMap<K, Vec<T>> = BTreeMap::new();
    for item in items {
        groups.entry(key(&item)).or_default().push(item);
    }
    groups
}
