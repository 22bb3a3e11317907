use crate::error::{Error, Result};
use crate::indexed::Indexed;
use crate::pair::Pair;

use super::Sequence;

impl<T: Clone> Sequence<T> {
    /// Prepend items, keeping their order.
    pub fn push_front(&self, items: impl IntoIterator<Item = T>) -> Self {
        let mut result: Vec<T> = items.into_iter().collect();
        result.extend(self.iter().cloned());
        result.into()
    }

    /// Append items, keeping their order.
    pub fn push_back(&self, items: impl IntoIterator<Item = T>) -> Self {
        self.iter().cloned().chain(items).collect()
    }

    /// Concatenate two sequences producing a new sequence.
    pub fn concat(&self, other: &Sequence<T>) -> Self {
        if other.is_empty() {
            return self.clone();
        }
        if self.is_empty() {
            return other.clone();
        }
        let mut result = Vec::with_capacity(self.len() + other.len());
        result.extend(self.iter().cloned());
        result.extend(other.iter().cloned());
        result.into()
    }

    /// Split into the items before `index` and the items from `index` on.
    pub fn split(&self, index: usize) -> Result<Pair<Self, Self>> {
        if index > self.len() {
            return Err(Error::IndexOutOfBounds {
                index,
                len: self.len(),
            });
        }
        let (left, right) = self.as_slice().split_at(index);
        Ok(Pair::new(left.into(), right.into()))
    }

    /// The leftmost `size` items.
    pub fn left(&self, size: usize) -> Result<Self> {
        self.slice(0, size)
    }

    /// The rightmost `size` items.
    pub fn right(&self, size: usize) -> Result<Self> {
        if size > self.len() {
            return Err(Error::IndexOutOfBounds {
                index: size,
                len: self.len(),
            });
        }
        self.slice(self.len() - size, self.len())
    }

    /// The items from `offset` to the end.
    ///
    /// This is the same as `right(len - offset)`.
    pub fn tail(&self, offset: usize) -> Result<Self> {
        self.slice(offset, self.len())
    }

    /// The items whose position lies in `begin..end`.
    pub fn slice(&self, begin: usize, end: usize) -> Result<Self> {
        if begin > end || end > self.len() {
            return Err(Error::InvalidRange {
                begin,
                end,
                len: self.len(),
            });
        }
        if begin == 0 && end == self.len() {
            return Ok(self.clone());
        }
        Ok(self.as_slice()[begin..end].into())
    }

    /// Partition into the items accepted by the predicate (first) and the
    /// ones rejected by it (second). Both keep their relative order.
    pub fn filter(&self, mut predicate: impl FnMut(&T) -> bool) -> Pair<Self, Self> {
        let (accepted, rejected): (Vec<T>, Vec<T>) =
            self.iter().cloned().partition(|item| predicate(item));
        Pair::new(accepted.into(), rejected.into())
    }

    /// Interleave the items of both sequences.
    ///
    /// Once the shorter sequence runs out, the rest of the longer one is
    /// appended as is.
    pub fn zip(&self, other: &Sequence<T>) -> Self {
        let mut result = Vec::with_capacity(self.len() + other.len());
        let mut left = self.iter();
        let mut right = other.iter();
        loop {
            match (left.next(), right.next()) {
                (Some(a), Some(b)) => {
                    result.push(a.clone());
                    result.push(b.clone());
                }
                (Some(a), None) => {
                    result.push(a.clone());
                    result.extend(left.cloned());
                    break;
                }
                (None, Some(b)) => {
                    result.push(b.clone());
                    result.extend(right.cloned());
                    break;
                }
                (None, None) => break,
            }
        }
        result.into()
    }

    /// Pick every `step`-th item, starting at `offset`.
    pub fn unzip(&self, step: usize, offset: usize) -> Result<Self> {
        if step == 0 {
            return Err(Error::InvalidStep);
        }
        Ok(self.iter().skip(offset).step_by(step).cloned().collect())
    }

    /// Combine two sequences of equal length item by item.
    pub fn combine<U, R>(
        &self,
        other: &Sequence<U>,
        mut combiner: impl FnMut(&T, &U) -> R,
    ) -> Result<Sequence<R>> {
        if self.len() != other.len() {
            return Err(Error::LengthMismatch {
                left: self.len(),
                right: other.len(),
            });
        }
        Ok(self
            .iter()
            .zip(other.iter())
            .map(|(a, b)| combiner(a, b))
            .collect())
    }

    /// Replace every occurrence of `from` with `to`.
    pub fn replace(&self, from: &T, to: &T) -> Self
    where
        T: PartialEq,
    {
        self.transform(|item| if item == from { to.clone() } else { item.clone() })
    }
}

impl<T> Sequence<T> {
    /// Apply a transform to each item.
    pub fn transform<U>(&self, f: impl FnMut(&T) -> U) -> Sequence<U> {
        self.iter().map(f).collect()
    }

    /// Apply a transform to each item along with its position.
    pub fn indexed_transform<U>(&self, mut f: impl FnMut(Indexed<&T>) -> U) -> Sequence<U> {
        self.iter()
            .enumerate()
            .map(|(index, value)| f(Indexed::new(value, index)))
            .collect()
    }
}

impl<T: Clone + PartialEq> Sequence<T> {
    /// Remove every occurrence of the given symbols.
    pub fn remove(&self, symbols: &[T]) -> Self {
        self.filter(|item| !symbols.contains(item)).into_first()
    }
}
