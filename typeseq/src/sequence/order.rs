use tracing::trace;

use super::Sequence;

impl<T: Clone> Sequence<T> {
    /// Insert `value` before the first item it compares less than.
    ///
    /// Applied to a sorted sequence this keeps it sorted, and a value equal
    /// to existing items ends up after them.
    pub fn insert_sorted(&self, value: T, mut less: impl FnMut(&T, &T) -> bool) -> Self {
        let position = self
            .iter()
            .position(|item| less(&value, item))
            .unwrap_or(self.len());
        let mut result = Vec::with_capacity(self.len() + 1);
        result.extend(self.as_slice()[..position].iter().cloned());
        result.push(value);
        result.extend(self.as_slice()[position..].iter().cloned());
        result.into()
    }

    /// Check whether no item compares less than the item before it.
    pub fn is_sorted(&self, mut less: impl FnMut(&T, &T) -> bool) -> bool {
        self.as_slice()
            .windows(2)
            .all(|window| !less(&window[1], &window[0]))
    }

    /// Merge two sorted sequences into a new sorted sequence.
    ///
    /// An item of `self` is taken only when it compares strictly less than
    /// the current item of `other`; on ties the item of `other` goes first.
    pub fn merge(&self, other: &Sequence<T>, mut less: impl FnMut(&T, &T) -> bool) -> Self {
        debug_assert!(
            self.is_sorted(&mut less),
            "left hand side sequence is not sorted"
        );
        debug_assert!(
            other.is_sorted(&mut less),
            "right hand side sequence is not sorted"
        );
        self.merge_with(other, &mut less)
    }

    fn merge_with<F>(&self, other: &Sequence<T>, less: &mut F) -> Self
    where
        F: FnMut(&T, &T) -> bool,
    {
        let left = self.as_slice();
        let right = other.as_slice();
        let mut result = Vec::with_capacity(left.len() + right.len());
        let (mut i, mut j) = (0, 0);
        while i < left.len() && j < right.len() {
            if less(&left[i], &right[j]) {
                result.push(left[i].clone());
                i += 1;
            } else {
                result.push(right[j].clone());
                j += 1;
            }
        }
        result.extend(left[i..].iter().cloned());
        result.extend(right[j..].iter().cloned());
        result.into()
    }

    /// Sort using a stable merge sort.
    pub fn merge_sort(&self, mut less: impl FnMut(&T, &T) -> bool) -> Self {
        trace!(len = self.len(), "merge sort");
        self.merge_sort_with(&mut less)
    }

    fn merge_sort_with<F>(&self, less: &mut F) -> Self
    where
        F: FnMut(&T, &T) -> bool,
    {
        if self.len() < 2 {
            return self.clone();
        }
        let (left, right) = self.as_slice().split_at(self.len() / 2);
        let left = Sequence::from(left).merge_sort_with(less);
        let right = Sequence::from(right).merge_sort_with(less);
        // ties favor the argument, so the left half goes there
        right.merge_with(&left, less)
    }

    /// Remove duplicates, keeping the first occurrence of each item.
    pub fn unique(&self) -> Self
    where
        T: PartialEq,
    {
        self.unique_by(|item| item.clone())
    }

    /// Remove items whose transformed key was already seen, keeping the
    /// first occurrence.
    pub fn unique_by<K: PartialEq>(&self, mut transform: impl FnMut(&T) -> K) -> Self {
        let mut seen: Vec<K> = Vec::new();
        let mut result = Vec::new();
        for item in self.iter() {
            let key = transform(item);
            if !seen.contains(&key) {
                seen.push(key);
                result.push(item.clone());
            }
        }
        result.into()
    }
}
