//! A map is a sequence of key/value pairs.
//!
//! Keys are not required to be unique: inserting an existing key creates a
//! duplicate entry, and lookups find the first one. Like sequences, maps are
//! immutable and every operation returns a new map.
mod cluster;

pub use cluster::clustered_index;

use std::cmp::Ordering;
use std::fmt;

use crate::indexed::Indexed;
use crate::pair::Pair;
use crate::search::{BinarySearch, Comparer};
use crate::sequence::Sequence;

/// An ordered collection of key/value pairs.
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Map<K, V> {
    contents: Sequence<Pair<K, V>>,
}

impl<K, V> Map<K, V> {
    pub fn new(contents: Sequence<Pair<K, V>>) -> Self {
        Self { contents }
    }

    pub fn empty() -> Self {
        Self::new(Sequence::empty())
    }

    /// The underlying sequence of pairs.
    pub fn contents(&self) -> &Sequence<Pair<K, V>> {
        &self.contents
    }

    pub fn into_contents(self) -> Sequence<Pair<K, V>> {
        self.contents
    }

    pub fn len(&self) -> usize {
        self.contents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Pair<K, V>> {
        self.contents.iter()
    }

    /// Prepare a binary search over the keys of this map, which must be
    /// sorted by key according to `comparer`.
    pub fn binary_search<C>(&self, comparer: C) -> BinarySearch<'_, Pair<K, V>, KeyComparer<C>> {
        self.contents.binary_search(KeyComparer(comparer))
    }
}

impl<K: PartialEq, V> Map<K, V> {
    /// The value of the first entry with this key.
    pub fn find(&self, key: &K) -> Option<&V> {
        self.entry(key).map(|pair| pair.second())
    }

    /// The value of the first entry with this key, or `default` if there is
    /// no such entry.
    pub fn find_or(&self, key: &K, default: V) -> V
    where
        V: Clone,
    {
        self.find(key).cloned().unwrap_or(default)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.entry(key).is_some()
    }

    fn entry(&self, key: &K) -> Option<&Pair<K, V>> {
        self.contents.search(|pair| pair.first() == key)
    }

    /// Call the visitor with the first entry that has this key.
    ///
    /// Returns `false` without calling the visitor if the key is absent.
    pub fn visit(&self, key: &K, visitor: impl FnOnce(Indexed<&Pair<K, V>>)) -> bool {
        match self.contents.iter().position(|pair| pair.first() == key) {
            Some(index) => self.contents.visit(index, visitor),
            None => false,
        }
    }
}

impl<K: Clone, V: Clone> Map<K, V> {
    /// Build a map from a sequence, deriving the key and the value from each
    /// of its items.
    pub fn from_list<T>(
        list: &Sequence<T>,
        mut key: impl FnMut(&T) -> K,
        mut value: impl FnMut(&T) -> V,
    ) -> Self {
        list.iter()
            .map(|item| Pair::new(key(item), value(item)))
            .collect()
    }

    /// All keys, in entry order.
    pub fn keys(&self) -> Sequence<K> {
        self.contents.transform(|pair| pair.first().clone())
    }

    /// All values, in entry order.
    pub fn mapped(&self) -> Sequence<V> {
        self.contents.transform(|pair| pair.second().clone())
    }

    /// Insert an entry before all others.
    pub fn push_front(&self, key: K, value: V) -> Self {
        self.push_front_pair(Pair::new(key, value))
    }

    pub fn push_front_pair(&self, pair: Pair<K, V>) -> Self {
        Self::new(self.contents.push_front([pair]))
    }

    /// Insert an entry after all others.
    pub fn push_back(&self, key: K, value: V) -> Self {
        self.push_back_pair(Pair::new(key, value))
    }

    pub fn push_back_pair(&self, pair: Pair<K, V>) -> Self {
        Self::new(self.contents.push_back([pair]))
    }

    /// Insert an entry in no particular order.
    ///
    /// Use `replace` to update the value of an existing key instead.
    pub fn insert(&self, key: K, value: V) -> Self {
        self.push_back(key, value)
    }

    pub fn insert_pair(&self, pair: Pair<K, V>) -> Self {
        self.push_back_pair(pair)
    }

    /// Insert an entry at its sorted position according to the order `less`
    /// defines on keys.
    pub fn insert_sorted(&self, key: K, value: V, less: impl FnMut(&K, &K) -> bool) -> Self {
        self.insert_pair_sorted(Pair::new(key, value), less)
    }

    pub fn insert_pair_sorted(&self, pair: Pair<K, V>, mut less: impl FnMut(&K, &K) -> bool) -> Self {
        Self::new(
            self.contents
                .insert_sorted(pair, |a, b| less(a.first(), b.first())),
        )
    }

    /// Apply transforms to every key and value.
    pub fn transform<K2, V2>(
        &self,
        mut key: impl FnMut(&K) -> K2,
        mut value: impl FnMut(&V) -> V2,
    ) -> Map<K2, V2> {
        Map::new(
            self.contents
                .transform(|pair| Pair::new(key(pair.first()), value(pair.second()))),
        )
    }

    /// Swap keys and values.
    pub fn invert(&self) -> Map<V, K> {
        self.invert_with(K::clone, V::clone)
    }

    /// Transform keys and values, then swap them.
    pub fn invert_with<K2, V2>(
        &self,
        mut key: impl FnMut(&K) -> K2,
        mut value: impl FnMut(&V) -> V2,
    ) -> Map<V2, K2> {
        Map::new(
            self.contents
                .transform(|pair| Pair::new(key(pair.first()), value(pair.second())).invert()),
        )
    }

    /// Sort entries by key with a stable merge sort.
    pub fn merge_sort(&self, mut less: impl FnMut(&K, &K) -> bool) -> Self {
        Self::new(
            self.contents
                .merge_sort(|a, b| less(a.first(), b.first())),
        )
    }

    /// Partition into the entries whose key is accepted by the predicate
    /// (first) and the rest (second).
    pub fn filter(&self, mut predicate: impl FnMut(&K) -> bool) -> Pair<Self, Self> {
        let (accepted, rejected) = self
            .contents
            .filter(|pair| predicate(pair.first()))
            .into_tuple();
        Pair::new(Self::new(accepted), Self::new(rejected))
    }
}

impl<K: Clone + PartialEq, V: Clone> Map<K, V> {
    /// Apply transforms to the entries with this key, leaving the others
    /// as they are.
    pub fn transform_at(
        &self,
        key: &K,
        mut key_transform: impl FnMut(&K) -> K,
        mut value_transform: impl FnMut(&V) -> V,
    ) -> Self {
        Self::new(self.contents.transform(|pair| {
            if pair.first() == key {
                Pair::new(key_transform(pair.first()), value_transform(pair.second()))
            } else {
                pair.clone()
            }
        }))
    }

    /// Replace the value of every entry with this key.
    pub fn replace(&self, key: &K, value: V) -> Self {
        self.transform_at(key, K::clone, |_| value.clone())
    }

    /// Remove all entries whose key is one of `keys`.
    pub fn remove(&self, keys: &[K]) -> Self {
        self.filter(|key| !keys.contains(key)).into_first()
    }
}

/// Adapts a key comparer to compare against map entries.
#[derive(Debug, Clone, Copy)]
pub struct KeyComparer<C>(pub C);

impl<N, K, V, C> Comparer<N, Pair<K, V>> for KeyComparer<C>
where
    N: ?Sized,
    C: Comparer<N, K>,
{
    fn compare(&self, needle: &N, item: Indexed<&Pair<K, V>>) -> Ordering {
        self.0.compare(needle, item.map(|pair| pair.first()))
    }
}

impl<K, V> Default for Map<K, V> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Map<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|pair| (pair.first(), pair.second())))
            .finish()
    }
}

impl<K, V> From<Sequence<Pair<K, V>>> for Map<K, V> {
    fn from(contents: Sequence<Pair<K, V>>) -> Self {
        Self::new(contents)
    }
}

impl<K, V> From<Vec<(K, V)>> for Map<K, V> {
    fn from(entries: Vec<(K, V)>) -> Self {
        entries.into_iter().collect()
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Map<K, V> {
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl<K, V> FromIterator<(K, V)> for Map<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Pair::from).collect())
    }
}

impl<K, V> FromIterator<Pair<K, V>> for Map<K, V> {
    fn from_iter<I: IntoIterator<Item = Pair<K, V>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a, K, V> IntoIterator for &'a Map<K, V> {
    type Item = &'a Pair<K, V>;
    type IntoIter = std::slice::Iter<'a, Pair<K, V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.contents.iter()
    }
}
