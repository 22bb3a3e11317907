use crate::sequence::Sequence;

/// An item of a sequence that may itself hold a sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Nested<T> {
    Leaf(T),
    List(Sequence<Nested<T>>),
}

impl<T> Nested<T> {
    pub fn list(items: impl IntoIterator<Item = Nested<T>>) -> Self {
        Nested::List(items.into_iter().collect())
    }

    pub fn leaves(items: impl IntoIterator<Item = T>) -> Self {
        Nested::List(items.into_iter().map(Nested::Leaf).collect())
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Nested::Leaf(_))
    }
}

impl<T: Clone> Sequence<Nested<T>> {
    /// Splice the items of nested lists into this one, up to `depth` levels
    /// deep.
    ///
    /// The result is laid out as if walking the nested lists depth first. A
    /// depth of 0 returns the sequence unchanged; lists nested more deeply
    /// than `depth` are kept as they are.
    pub fn flatten(&self, depth: usize) -> Self {
        if depth == 0 {
            return self.clone();
        }
        let mut result = Vec::with_capacity(self.len());
        flatten_into(self, depth, &mut result);
        result.into()
    }

    /// Flatten all the way down, leaving only leaves.
    pub fn flatten_all(&self) -> Sequence<T> {
        let mut result = Vec::new();
        for item in self.flatten(usize::MAX).iter() {
            if let Nested::Leaf(value) = item {
                result.push(value.clone());
            }
        }
        result.into()
    }
}

fn flatten_into<T: Clone>(items: &Sequence<Nested<T>>, depth: usize, out: &mut Vec<Nested<T>>) {
    for item in items.iter() {
        match item {
            Nested::List(inner) if depth > 0 => flatten_into(inner, depth - 1, out),
            other => out.push(other.clone()),
        }
    }
}
