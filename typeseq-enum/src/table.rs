use std::cmp::Ordering;

use strum::IntoEnumIterator;
use tracing::{debug, trace};
use typeseq::{Comparer, Indexed, Sequence};

use crate::error::{Error, Result};

/// The integer value of an enumeration member.
pub trait Ordinal {
    fn ordinal(&self) -> i64;
}

/// A member of an enumeration: its name, its ordinal and the value itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member<E> {
    pub name: &'static str,
    pub ordinal: i64,
    pub value: E,
}

/// Lookup tables between the members of an enumeration, their names and
/// their ordinals.
///
/// Members are kept sorted both by name and by ordinal, so lookups in
/// either direction are binary searches.
#[derive(Debug, Clone)]
pub struct EnumTable<E> {
    by_name: Sequence<Member<E>>,
    by_ordinal: Sequence<Member<E>>,
}

struct ByName;

impl<E> Comparer<str, Member<E>> for ByName {
    fn compare(&self, needle: &str, item: Indexed<&Member<E>>) -> Ordering {
        needle.cmp(item.value.name)
    }
}

struct ByOrdinal;

impl<E> Comparer<i64, Member<E>> for ByOrdinal {
    fn compare(&self, needle: &i64, item: Indexed<&Member<E>>) -> Ordering {
        needle.cmp(&item.value.ordinal)
    }
}

impl<E: Clone> EnumTable<E> {
    /// Build the table from `(name, ordinal, value)` triples.
    pub fn new(members: impl IntoIterator<Item = (&'static str, i64, E)>) -> Self {
        let members: Sequence<Member<E>> = members
            .into_iter()
            .map(|(name, ordinal, value)| Member {
                name,
                ordinal,
                value,
            })
            .collect();
        debug!(members = members.len(), "building enum table");
        Self {
            by_name: members.merge_sort(|a, b| a.name < b.name),
            by_ordinal: members.merge_sort(|a, b| a.ordinal < b.ordinal),
        }
    }

    /// Build the table from the variants strum enumerates, named the way
    /// strum names them.
    pub fn from_variants() -> Self
    where
        E: IntoEnumIterator + Into<&'static str> + Ordinal,
    {
        Self::new(E::iter().map(|value| {
            let ordinal = value.ordinal();
            (value.clone().into(), ordinal, value)
        }))
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// The members in ordinal order.
    pub fn members(&self) -> &Sequence<Member<E>> {
        &self.by_ordinal
    }

    /// The name of the member with this ordinal, if there is one.
    pub fn to_str(&self, ordinal: i64) -> Option<&'static str> {
        let mut name = None;
        self.by_ordinal
            .binary_search(ByOrdinal)
            .exact(&ordinal, |tag, _| name = Some(tag.value.name));
        name
    }

    /// The member with exactly this name, if there is one.
    pub fn find(&self, text: &str) -> Option<E> {
        let mut value = None;
        self.by_name
            .binary_search(ByName)
            .exact(text, |tag, _| value = Some(tag.value.value.clone()));
        value
    }

    /// The member with exactly this name.
    pub fn parse(&self, text: &str) -> Result<E> {
        self.find(text).ok_or_else(|| {
            trace!(text, "no enum member with this name");
            Error::InvalidArgument(text.to_string())
        })
    }

    /// Parse `text` into `out`, leaving `out` untouched if it doesn't name
    /// a member.
    pub fn try_parse(&self, out: &mut E, text: &str) -> bool {
        match self.find(text) {
            Some(value) => {
                *out = value;
                true
            }
            None => false,
        }
    }
}
