/// An ordered two element tuple.
///
/// Map entries are pairs, and partitioning operations such as
/// [`Sequence::split`](crate::Sequence::split) and
/// [`Sequence::filter`](crate::Sequence::filter) return their two halves
/// as a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Pair<A, B> {
    first: A,
    second: B,
}

impl<A, B> Pair<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    pub fn first(&self) -> &A {
        &self.first
    }

    pub fn second(&self) -> &B {
        &self.second
    }

    pub fn into_first(self) -> A {
        self.first
    }

    pub fn into_second(self) -> B {
        self.second
    }

    pub fn into_tuple(self) -> (A, B) {
        (self.first, self.second)
    }

    /// Swap the two elements.
    pub fn invert(self) -> Pair<B, A> {
        Pair {
            first: self.second,
            second: self.first,
        }
    }

    /// Apply a transform to each element.
    pub fn transform<C, D>(
        self,
        first: impl FnOnce(A) -> C,
        second: impl FnOnce(B) -> D,
    ) -> Pair<C, D> {
        Pair {
            first: first(self.first),
            second: second(self.second),
        }
    }
}

impl<A, B> From<(A, B)> for Pair<A, B> {
    fn from((first, second): (A, B)) -> Self {
        Self { first, second }
    }
}

impl<A, B> From<Pair<A, B>> for (A, B) {
    fn from(pair: Pair<A, B>) -> Self {
        pair.into_tuple()
    }
}
