use std::fmt;

use tracing::debug;

use crate::error::Result;
use crate::universe::Universe;
use crate::width::Width;

/// A set of flags drawn from a universe, stored as one bit per flag.
///
/// Bit `i` is set when the flag at position `i` of the universe is in the
/// set. Bits outside the universe are never set.
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FlagSet<F> {
    universe: Universe<F>,
    bits: u128,
}

impl<F: Clone + PartialEq> FlagSet<F> {
    /// A set over `universe` with every flag clear.
    pub fn new(universe: Universe<F>) -> Self {
        Self { universe, bits: 0 }
    }

    /// A set over `universe` with the given flags set.
    pub fn with_flags(universe: Universe<F>, flags: &[F]) -> Result<Self> {
        let bits = universe.mask_for(flags)?;
        Ok(Self { universe, bits })
    }

    /// Import the flags of a set over another universe.
    ///
    /// Flags set in `other` that this universe doesn't hold are dropped.
    pub fn from_foreign(universe: Universe<F>, other: &FlagSet<F>) -> Self {
        let bits = import(&universe, other);
        Self { universe, bits }
    }

    pub fn universe(&self) -> &Universe<F> {
        &self.universe
    }

    pub fn width(&self) -> Width {
        self.universe.width()
    }

    /// The bits of the set, the first flag of the universe being the least
    /// significant bit.
    pub fn get(&self) -> u128 {
        self.bits
    }

    /// The bits of the set as an integer of type `U`.
    ///
    /// Any unsigned type at least as wide as [`width`](Self::width) holds
    /// every set over this universe; a narrower one yields `None` once a
    /// bit beyond its range is set.
    pub fn get_as<U: TryFrom<u128>>(&self) -> Option<U> {
        U::try_from(self.bits).ok()
    }

    pub fn set(&mut self, flags: &[F]) -> Result<&mut Self> {
        self.bits |= self.universe.mask_for(flags)?;
        self.check();
        Ok(self)
    }

    /// Set `flag` if `condition` holds, otherwise leave the set unchanged.
    pub fn set_if(&mut self, flag: F, condition: bool) -> Result<&mut Self> {
        if condition {
            self.set(&[flag])?;
        }
        Ok(self)
    }

    /// Make the set hold exactly the given flags.
    pub fn reset(&mut self, flags: &[F]) -> Result<&mut Self> {
        self.bits = self.universe.mask_for(flags)?;
        self.check();
        Ok(self)
    }

    pub fn clear(&mut self) -> &mut Self {
        self.bits = 0;
        self
    }

    pub fn with(mut self, flags: &[F]) -> Result<Self> {
        self.set(flags)?;
        Ok(self)
    }

    pub fn with_if(mut self, flag: F, condition: bool) -> Result<Self> {
        self.set_if(flag, condition)?;
        Ok(self)
    }

    /// Whether all the given flags are set.
    ///
    /// A flag outside the universe is never set. Asking about no flags at
    /// all yields `true`.
    pub fn is_set(&self, flags: &[F]) -> bool {
        flags.iter().all(|flag| {
            self.universe
                .bit(flag)
                .is_some_and(|bit| self.bits & bit != 0)
        })
    }

    /// The flags that are set, in universe order.
    pub fn iter(&self) -> impl Iterator<Item = &F> + '_ {
        self.universe
            .flags()
            .iter()
            .enumerate()
            .filter(|(index, _)| self.bits & (1u128 << index) != 0)
            .map(|(_, flag)| flag)
    }

    /// A copy over a universe widened with `flag`, with `flag` set.
    pub fn expand(&self, flag: F) -> Result<Self> {
        self.expand_if(flag, true)
    }

    /// A copy over a universe widened with `flag`, setting `flag` only if
    /// `condition` holds.
    ///
    /// The universe is widened either way.
    pub fn expand_if(&self, flag: F, condition: bool) -> Result<Self> {
        let universe = self.universe.expanded(flag.clone())?;
        // existing flags keep their positions, so the bits carry over
        let mut expanded = Self {
            universe,
            bits: self.bits,
        };
        expanded.set_if(flag, condition)?;
        Ok(expanded)
    }

    /// Make this set hold exactly the flags of `other` that this universe
    /// holds.
    pub fn assign(&mut self, other: &FlagSet<F>) -> &mut Self {
        self.bits = import(&self.universe, other);
        self
    }

    fn check(&self) {
        debug_assert_eq!(
            self.bits & self.universe.range_mask(),
            self.bits,
            "bits set outside of the universe"
        );
    }
}

fn import<F: Clone + PartialEq>(universe: &Universe<F>, other: &FlagSet<F>) -> u128 {
    let mut bits = 0;
    let mut dropped = 0;
    for flag in other.iter() {
        match universe.bit(flag) {
            Some(bit) => bits |= bit,
            None => dropped += 1,
        }
    }
    if dropped > 0 {
        debug!(dropped, "flags not in universe dropped on import");
    }
    bits
}

impl<F: fmt::Debug + Clone + PartialEq> fmt::Debug for FlagSet<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Flag {
        F1,
        F2,
        F3,
        F4,
    }
    use Flag::*;

    fn universe() -> Universe<Flag> {
        Universe::new([F1, F2, F3]).unwrap()
    }

    #[test]
    fn test_set_and_set_if() {
        let mut flags = FlagSet::new(universe());
        flags.set(&[F1]).unwrap().set_if(F2, false).unwrap();
        assert!(flags.is_set(&[F1]));
        assert!(!flags.is_set(&[F2]));
        assert_eq!(flags.get(), 0b001);
    }

    #[test]
    fn test_get_bit_layout() {
        let set = |flags: &[Flag]| FlagSet::with_flags(universe(), flags).unwrap().get();
        assert_eq!(set(&[F1, F3, F3]), 0b101);
        assert_eq!(set(&[F1, F2, F3]), 0b111);
        assert_eq!(set(&[F3]), 0b100);
        assert_eq!(set(&[]), 0);
    }

    #[test]
    fn test_get_as() {
        let flags = FlagSet::with_flags(universe(), &[F1, F3]).unwrap();
        assert_eq!(flags.width(), Width::U8);
        assert_eq!(flags.get_as::<u8>(), Some(0b101));
        assert_eq!(flags.get_as::<u64>(), Some(0b101));

        let wide = FlagSet::with_flags(Universe::new(0..12u16).unwrap(), &[0, 11]).unwrap();
        assert_eq!(wide.width(), Width::U16);
        assert_eq!(wide.get_as::<u16>(), Some(0b1000_0000_0001));
        assert_eq!(wide.get_as::<u8>(), None);
        // fits as long as no high bit is set
        let low = FlagSet::with_flags(Universe::new(0..12u16).unwrap(), &[3]).unwrap();
        assert_eq!(low.get_as::<u8>(), Some(0b1000));
    }

    #[test]
    fn test_is_set() {
        let flags = FlagSet::with_flags(universe(), &[F1, F3]).unwrap();
        assert!(flags.is_set(&[F1, F3]));
        assert!(flags.is_set(&[F1]));
        assert!(!flags.is_set(&[F1, F2]));
        assert!(!flags.is_set(&[F2]));
        assert!(flags.is_set(&[]));
        // not part of the universe
        assert!(!flags.is_set(&[F4]));
    }

    #[test]
    fn test_unsupported_flag() {
        let mut flags = FlagSet::new(universe());
        assert_eq!(flags.set(&[F4]).err(), Some(Error::UnsupportedFlag));
        assert_eq!(flags.get(), 0);
        assert_eq!(
            FlagSet::with_flags(universe(), &[F1, F4]).err(),
            Some(Error::UnsupportedFlag)
        );
    }

    #[test]
    fn test_reset_and_clear() {
        let mut flags = FlagSet::with_flags(universe(), &[F1, F3]).unwrap();
        flags.reset(&[F2]).unwrap();
        assert_eq!(flags.get(), 0b010);
        flags.clear();
        assert_eq!(flags.get(), 0);
    }

    #[test]
    fn test_fluent() {
        let flags = FlagSet::new(universe())
            .with(&[F2])
            .unwrap()
            .with_if(F3, true)
            .unwrap()
            .with_if(F1, false)
            .unwrap();
        insta::assert_snapshot!(format!("{:?}", flags), @"{F2, F3}");
    }

    #[test]
    fn test_expand() {
        let flags = FlagSet::with_flags(universe(), &[F2]).unwrap();
        let expanded = flags.expand(F4).unwrap();
        assert_eq!(expanded.universe().len(), 4);
        assert_eq!(expanded.get(), 0b1010);

        let same = flags.expand(F1).unwrap();
        assert_eq!(same.universe(), flags.universe());
        assert_eq!(same.get(), 0b011);

        let empty = FlagSet::new(Universe::empty()).expand(F1).unwrap();
        assert_eq!(empty.get(), 0b1);
    }

    #[test]
    fn test_expand_if() {
        let flags = FlagSet::with_flags(universe(), &[F2]).unwrap();
        let expanded = flags.expand_if(F4, false).unwrap();
        assert!(expanded.universe().contains(&F4));
        assert_eq!(expanded.get(), 0b010);
        assert_eq!(flags.expand_if(F4, true).unwrap().get(), 0b1010);
    }

    #[test]
    fn test_from_foreign() {
        let other_universe = Universe::new([F2, F3, F4]).unwrap();
        let other = FlagSet::with_flags(other_universe, &[F3, F4]).unwrap();
        let imported = FlagSet::from_foreign(universe(), &other);
        assert_eq!(imported.iter().copied().collect::<Vec<_>>(), vec![F3]);
        assert_eq!(imported.get(), 0b100);
    }

    #[test]
    fn test_assign() {
        let mut flags = FlagSet::with_flags(universe(), &[F1]).unwrap();
        let other = FlagSet::with_flags(Universe::new([F4, F2]).unwrap(), &[F4, F2]).unwrap();
        flags.assign(&other);
        assert_eq!(flags.get(), 0b010);

        let same = FlagSet::with_flags(universe(), &[F1, F3]).unwrap();
        flags.assign(&same);
        assert_eq!(flags, same);
    }

    #[test]
    fn test_iter() {
        let flags = FlagSet::with_flags(universe(), &[F3, F1]).unwrap();
        assert_eq!(flags.iter().copied().collect::<Vec<_>>(), vec![F1, F3]);
    }

    #[test]
    fn test_wide_universe() {
        let universe = Universe::new(0..128u32).unwrap();
        let flags = FlagSet::with_flags(universe, &[0, 127]).unwrap();
        assert_eq!(flags.width(), Width::U128);
        assert_eq!(flags.get(), 1 | (1 << 127));
        assert!(flags.is_set(&[127]));
    }

    mod properties {
        use proptest::prelude::*;

        use super::super::*;

        fn arb_flags() -> impl Strategy<Value = Vec<u8>> {
            prop::collection::vec(0u8..16, 0..16)
        }

        proptest! {
            #[test]
            fn prop_bits_stay_in_range(len in 0u8..16, flags in arb_flags()) {
                let universe = Universe::new(0..len).unwrap();
                let supported: Vec<u8> = flags.into_iter().filter(|flag| *flag < len).collect();
                let set = FlagSet::with_flags(universe.clone(), &supported).unwrap();
                prop_assert_eq!(set.get() & universe.range_mask(), set.get());
                prop_assert!(set.is_set(&supported));
            }

            #[test]
            fn prop_import_keeps_shared_flags(flags in arb_flags()) {
                let other = FlagSet::with_flags(Universe::new(0..16).unwrap(), &flags).unwrap();
                let imported = FlagSet::from_foreign(Universe::new((0..16).rev().step_by(2)).unwrap(), &other);
                for flag in 0u8..16 {
                    let expected = flag % 2 == 1 && flags.contains(&flag);
                    prop_assert_eq!(imported.is_set(&[flag]), expected);
                }
            }
        }
    }
}
