//! A sequence is an ordered, immutable list of symbols.
//!
//! Every structural operation produces a new sequence and leaves the
//! original untouched. Cloning a sequence is cheap, as the items are
//! shared.
mod order;
mod structure;
mod visit;

#[cfg(test)]
mod proptests;

use std::fmt;
use std::sync::Arc;

use crate::error::{Error, Result};

/// An ordered, fixed size, immutable collection of symbols.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Sequence<T> {
    items: Arc<[T]>,
}

impl<T> Sequence<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items: items.into(),
        }
    }

    /// Construct an empty sequence
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Get the length of the sequence
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check whether the sequence is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Get the item at the index, if it exists
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    /// Get the item at the index.
    ///
    /// An index past the end of the sequence is an error.
    pub fn at(&self, index: usize) -> Result<&T> {
        self.items.get(index).ok_or(Error::IndexOutOfBounds {
            index,
            len: self.len(),
        })
    }

    /// Search for the first item that satisfies the predicate.
    pub fn search(&self, mut predicate: impl FnMut(&T) -> bool) -> Option<&T> {
        self.items.iter().find(|item| predicate(item))
    }

    /// Search for the first item that satisfies the predicate, falling back
    /// to `default` when there is none.
    pub fn search_or<'a>(&'a self, predicate: impl FnMut(&T) -> bool, default: &'a T) -> &'a T {
        self.search(predicate).unwrap_or(default)
    }
}

impl<T: Clone> Sequence<T> {
    /// A sequence holding just the item at the index, or an empty sequence
    /// if the index is out of bounds.
    pub fn try_at(&self, index: usize) -> Self {
        match self.items.get(index) {
            Some(item) => Self::new(vec![item.clone()]),
            None => Self::empty(),
        }
    }
}

impl<T: PartialEq> Sequence<T> {
    /// The position of the first item equal to `symbol`.
    ///
    /// When the symbol is absent this returns the length of the sequence.
    pub fn index_of(&self, symbol: &T) -> usize {
        self.items
            .iter()
            .position(|item| item == symbol)
            .unwrap_or(self.len())
    }

    pub fn contains(&self, symbol: &T) -> bool {
        self.items.contains(symbol)
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: fmt::Debug> fmt::Debug for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

impl<T, const N: usize> From<[T; N]> for Sequence<T> {
    fn from(items: [T; N]) -> Self {
        Self::new(items.into())
    }
}

impl<T: Clone> From<&[T]> for Sequence<T> {
    fn from(items: &[T]) -> Self {
        Self { items: items.into() }
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
