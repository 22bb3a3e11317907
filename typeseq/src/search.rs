//! Binary search over sorted sequences.
//!
//! The sequence must be sorted in ascending order according to the
//! comparer in use; this is not checked. A comparer compares a needle
//! against an item along with its index, so it can also search by position.
use std::cmp::Ordering;

use crate::indexed::Indexed;
use crate::sequence::Sequence;

/// Compares a needle against an item of the sequence being searched.
///
/// The result tells whether the needle is less than, equal to or greater
/// than the item.
pub trait Comparer<N: ?Sized, T> {
    fn compare(&self, needle: &N, item: Indexed<&T>) -> Ordering;
}

impl<N: ?Sized, T, F> Comparer<N, T> for F
where
    F: Fn(&N, Indexed<&T>) -> Ordering,
{
    fn compare(&self, needle: &N, item: Indexed<&T>) -> Ordering {
        self(needle, item)
    }
}

/// Compares the needle against the item's value.
///
/// Incomparable values (such as NaN) compare as equal.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValueComparer;

impl<N, T> Comparer<N, T> for ValueComparer
where
    N: PartialOrd<T> + ?Sized,
{
    fn compare(&self, needle: &N, item: Indexed<&T>) -> Ordering {
        needle.partial_cmp(item.value).unwrap_or(Ordering::Equal)
    }
}

/// Compares a position against the item's index.
#[derive(Debug, Clone, Copy, Default)]
pub struct IndexComparer;

impl<T> Comparer<usize, T> for IndexComparer {
    fn compare(&self, needle: &usize, item: Indexed<&T>) -> Ordering {
        needle.cmp(&item.index)
    }
}

/// Binary search over a sorted sequence using a given comparer.
///
/// Each search calls its visitor at most once, with the item found and the
/// needle, and returns whether it did.
pub struct BinarySearch<'a, T, C> {
    items: &'a [T],
    comparer: C,
}

impl<'a, T, C> BinarySearch<'a, T, C> {
    pub fn new(items: &'a [T], comparer: C) -> Self {
        Self { items, comparer }
    }

    fn item(&self, index: usize) -> Indexed<&'a T> {
        Indexed::new(&self.items[index], index)
    }

    /// Find the item equal to the needle.
    pub fn exact<N: ?Sized>(&self, needle: &N, visitor: impl FnOnce(Indexed<&'a T>, &N)) -> bool
    where
        C: Comparer<N, T>,
    {
        match self.exact_in(needle, 0, self.items.len()) {
            Some(index) => {
                visitor(self.item(index), needle);
                true
            }
            None => false,
        }
    }

    fn exact_in<N: ?Sized>(&self, needle: &N, begin: usize, end: usize) -> Option<usize>
    where
        C: Comparer<N, T>,
    {
        if begin == end {
            return None;
        }
        let pivot = begin + (end - begin) / 2;
        match self.comparer.compare(needle, self.item(pivot)) {
            Ordering::Less => self.exact_in(needle, begin, pivot),
            Ordering::Greater => self.exact_in(needle, pivot + 1, end),
            Ordering::Equal => Some(pivot),
        }
    }

    /// Find the greatest item that is less than or equal to the needle.
    ///
    /// Fails if the needle is less than the first item.
    pub fn lower_bound<N: ?Sized>(
        &self,
        needle: &N,
        visitor: impl FnOnce(Indexed<&'a T>, &N),
    ) -> bool
    where
        C: Comparer<N, T>,
    {
        if self.items.is_empty() || self.comparer.compare(needle, self.item(0)).is_lt() {
            return false;
        }
        let index = self.lower_bound_in(needle, 0, self.items.len());
        visitor(self.item(index), needle);
        true
    }

    fn lower_bound_in<N: ?Sized>(&self, needle: &N, begin: usize, end: usize) -> usize
    where
        C: Comparer<N, T>,
    {
        if end - begin == 1 {
            return begin;
        }
        // the pivot is the first item of the right half
        let pivot = begin + (end - begin) / 2;
        if self.comparer.compare(needle, self.item(pivot)).is_lt() {
            self.lower_bound_in(needle, begin, pivot)
        } else {
            self.lower_bound_in(needle, pivot, end)
        }
    }

    /// Find the least item that is strictly greater than the needle.
    ///
    /// Fails if the needle is greater than or equal to the last item.
    pub fn upper_bound<N: ?Sized>(
        &self,
        needle: &N,
        visitor: impl FnOnce(Indexed<&'a T>, &N),
    ) -> bool
    where
        C: Comparer<N, T>,
    {
        match self.upper_bound_in(needle, 0, self.items.len()) {
            Some(index) => {
                visitor(self.item(index), needle);
                true
            }
            None => false,
        }
    }

    fn upper_bound_in<N: ?Sized>(&self, needle: &N, begin: usize, end: usize) -> Option<usize>
    where
        C: Comparer<N, T>,
    {
        match end - begin {
            0 => None,
            1 => self
                .comparer
                .compare(needle, self.item(begin))
                .is_lt()
                .then_some(begin),
            len => {
                // the pivot is the last item of the left half
                let split = begin + (len + 1) / 2;
                if self.comparer.compare(needle, self.item(split - 1)).is_lt() {
                    self.upper_bound_in(needle, begin, split)
                } else {
                    self.upper_bound_in(needle, split, end)
                }
            }
        }
    }
}

impl<T> Sequence<T> {
    /// Prepare a binary search over this sequence, which must be sorted
    /// according to `comparer`.
    pub fn binary_search<C>(&self, comparer: C) -> BinarySearch<'_, T, C> {
        BinarySearch::new(self.as_slice(), comparer)
    }
}
