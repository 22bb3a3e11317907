use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// The width of the unsigned integer that stores the bits of a flag set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter, EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[strum(serialize_all = "lowercase")]
pub enum Width {
    U8,
    U16,
    U32,
    U64,
    U128,
}

impl Width {
    /// The number of bits in an integer of this width.
    pub fn bits(self) -> usize {
        match self {
            Width::U8 => 8,
            Width::U16 => 16,
            Width::U32 => 32,
            Width::U64 => 64,
            Width::U128 => 128,
        }
    }

    /// The smallest width that holds at least `bits` bits, or `None` if no
    /// native integer is wide enough.
    pub fn smallest_for(bits: usize) -> Option<Width> {
        Width::iter().find(|width| width.bits() >= bits)
    }
}
