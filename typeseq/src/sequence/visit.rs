use crate::indexed::Indexed;

use super::Sequence;

impl<T> Sequence<T> {
    /// Call the visitor for each item that satisfies the condition, in order.
    ///
    /// Returns the number of items visited.
    pub fn foreach_if(
        &self,
        mut condition: impl FnMut(&T) -> bool,
        mut visitor: impl FnMut(Indexed<&T>),
    ) -> usize {
        let mut visited = 0;
        for (index, value) in self.iter().enumerate() {
            if condition(value) {
                visitor(Indexed::new(value, index));
                visited += 1;
            }
        }
        visited
    }

    /// Call the visitor for every item, in order.
    ///
    /// Returns `true` if the visitor was called at all, which is to say
    /// whether the sequence is non-empty.
    pub fn foreach(&self, visitor: impl FnMut(Indexed<&T>)) -> bool {
        self.foreach_if(|_| true, visitor) > 0
    }

    /// Call the visitor for the item at an index only known at runtime.
    ///
    /// Returns `false` without calling the visitor if the index is out of
    /// bounds.
    pub fn visit(&self, index: usize, visitor: impl FnOnce(Indexed<&T>)) -> bool {
        match self.get(index) {
            Some(value) => {
                visitor(Indexed::new(value, index));
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_foreach() {
        let s: Sequence<_> = ["a", "b", "c"].into();
        let mut seen = Vec::new();
        assert!(s.foreach(|tag| seen.push((tag.index, *tag.value))));
        assert_eq!(seen, vec![(0, "a"), (1, "b"), (2, "c")]);
    }

    #[test]
    fn test_foreach_empty() {
        let s: Sequence<&str> = Sequence::empty();
        let mut called = false;
        assert!(!s.foreach(|_| called = true));
        assert!(!called);
    }

    #[test]
    fn test_foreach_if() {
        let s: Sequence<_> = [1, 2, 3, 4, 5].into();
        let mut seen = Vec::new();
        let visited = s.foreach_if(|n| n % 2 == 1, |tag| seen.push(tag.index));
        assert_eq!(visited, 3);
        assert_eq!(seen, vec![0, 2, 4]);
    }

    #[test]
    fn test_visit() {
        let s: Sequence<_> = ['x', 'y', 'z'].into();
        let mut found = None;
        assert!(s.visit(1, |tag| found = Some(tag.cloned())));
        assert_eq!(found, Some(Indexed::new('y', 1)));

        found = None;
        assert!(!s.visit(3, |tag| found = Some(tag.cloned())));
        assert_eq!(found, None);
    }
}
