//! Conversion between the members of a closed enumeration, their names and
//! their ordinals.
//!
//! An [`EnumTable`] holds the members sorted by name and by ordinal and
//! looks them up with binary search. Enums declared with [`enumeration!`]
//! implement [`Enumeration`], which exposes the table through the type.
mod enumeration;
mod error;
mod table;

pub use enumeration::Enumeration;
pub use error::{Error, Result};
pub use table::{EnumTable, Member, Ordinal};
