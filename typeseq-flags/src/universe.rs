use typeseq::Sequence;

use crate::error::{Error, Result};
use crate::width::Width;

/// The largest number of flags a universe can hold.
pub const MAX_FLAGS: usize = 128;

/// The ordered list of flags a flag set can hold.
///
/// The position of a flag in the universe is the position of its bit in
/// the set. Flags are unique.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Universe<F> {
    flags: Sequence<F>,
    width: Width,
}

impl<F: Clone + PartialEq> Universe<F> {
    pub fn new(flags: impl IntoIterator<Item = F>) -> Result<Self> {
        let flags: Sequence<F> = flags.into_iter().collect();
        let width = Width::smallest_for(flags.len()).ok_or(Error::too_many(flags.len()))?;
        if flags.unique().len() != flags.len() {
            return Err(Error::DuplicateFlag);
        }
        Ok(Self { flags, width })
    }

    /// The universe without any flags.
    pub fn empty() -> Self {
        Self {
            flags: Sequence::empty(),
            width: Width::U8,
        }
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    pub fn flags(&self) -> &Sequence<F> {
        &self.flags
    }

    pub fn width(&self) -> Width {
        self.width
    }

    /// The bit position of a flag.
    pub fn index_of(&self, flag: &F) -> Option<usize> {
        let index = self.flags.index_of(flag);
        (index < self.len()).then_some(index)
    }

    pub fn contains(&self, flag: &F) -> bool {
        self.flags.contains(flag)
    }

    /// A mask with the bits of every flag in the universe set.
    pub fn range_mask(&self) -> u128 {
        match self.len() {
            MAX_FLAGS => u128::MAX,
            len => (1u128 << len) - 1,
        }
    }

    pub(crate) fn bit(&self, flag: &F) -> Option<u128> {
        self.index_of(flag).map(|index| 1u128 << index)
    }

    /// The mask with the bits of the given flags set.
    ///
    /// A flag outside the universe is an error.
    pub fn mask_for(&self, flags: &[F]) -> Result<u128> {
        flags.iter().try_fold(0, |mask, flag| {
            self.bit(flag)
                .map(|bit| mask | bit)
                .ok_or(Error::UnsupportedFlag)
        })
    }

    /// This universe with `flag` appended, or the same universe if it
    /// already holds it.
    ///
    /// Existing flags keep their positions.
    pub fn expanded(&self, flag: F) -> Result<Self> {
        if self.contains(&flag) {
            return Ok(self.clone());
        }
        Self::new(self.flags.push_back([flag]).iter().cloned())
    }
}

impl<F: Clone + PartialEq> Default for Universe<F> {
    fn default() -> Self {
        Self::empty()
    }
}
