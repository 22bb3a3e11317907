//! Immutable sequences of symbols, and maps built on top of them.
//!
//! A [`Sequence`] is an ordered, fixed size collection. Structural
//! operations (splitting, filtering, merging, sorting) never change a
//! sequence; they return a new one. A [`Map`] is a sequence of
//! [`Pair`]s, with lookups by key.
pub mod error;
mod indexed;
mod map;
mod nested;
mod pair;
mod search;
mod sequence;

pub use error::{Error, Result};
pub use indexed::Indexed;
pub use map::{clustered_index, KeyComparer, Map};
pub use nested::Nested;
pub use pair::Pair;
pub use search::{BinarySearch, Comparer, IndexComparer, ValueComparer};
pub use sequence::Sequence;
