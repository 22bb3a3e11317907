//! Compact sets of flags.
//!
//! A [`Universe`] is the ordered list of flags a [`FlagSet`] can hold. The
//! set stores one bit per flag, the flag at position `i` of the universe
//! being bit `i`, in an integer of the smallest [`Width`] that fits.
mod error;
mod flag_set;
mod universe;
mod width;

pub use error::{Error, Result};
pub use flag_set::FlagSet;
pub use universe::{Universe, MAX_FLAGS};
pub use width::Width;
