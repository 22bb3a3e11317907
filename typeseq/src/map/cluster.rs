use crate::pair::Pair;
use crate::sequence::Sequence;

use super::Map;

impl<K: Clone + PartialEq, V: Clone> Map<K, V> {
    /// Group the values of entries that share a key.
    ///
    /// Keys appear in the order they are first seen, and each group keeps
    /// its values in their original relative order.
    pub fn cluster(&self) -> Map<K, Sequence<V>> {
        self.cluster_with(K::clone, V::clone)
    }

    /// Transform keys and values, then group the transformed values by
    /// transformed key.
    pub fn cluster_with<K2: PartialEq, V2>(
        &self,
        mut key: impl FnMut(&K) -> K2,
        mut value: impl FnMut(&V) -> V2,
    ) -> Map<K2, Sequence<V2>> {
        let mut groups: Vec<(K2, Vec<V2>)> = Vec::new();
        for pair in self.iter() {
            let k = key(pair.first());
            let v = value(pair.second());
            match groups.iter_mut().find(|(existing, _)| *existing == k) {
                Some((_, values)) => values.push(v),
                None => groups.push((k, vec![v])),
            }
        }
        groups
            .into_iter()
            .map(|(k, values)| Pair::new(k, Sequence::new(values)))
            .collect()
    }
}

/// Group the items of a sequence by a derived key.
///
/// Keys appear in first-seen order; each group holds the items with that
/// key in their original order.
pub fn clustered_index<T: Clone, K: Clone + PartialEq>(
    list: &Sequence<T>,
    key: impl FnMut(&T) -> K,
) -> Map<K, Sequence<T>> {
    Map::from_list(list, key, T::clone).cluster()
}
