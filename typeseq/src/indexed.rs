/// An element together with its position in the sequence it came from.
///
/// Every visitor receives one of these as its first argument, so it can
/// tell both which element it is looking at and where that element lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Indexed<T> {
    pub value: T,
    pub index: usize,
}

impl<T> Indexed<T> {
    pub fn new(value: T, index: usize) -> Self {
        Self { value, index }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Indexed<U> {
        Indexed {
            value: f(self.value),
            index: self.index,
        }
    }
}

impl<T: Clone> Indexed<&T> {
    pub fn cloned(self) -> Indexed<T> {
        Indexed {
            value: self.value.clone(),
            index: self.index,
        }
    }
}
