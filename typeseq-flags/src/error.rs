use thiserror::Error;

use crate::universe::MAX_FLAGS;

/// Errors raised while building a universe or naming flags in it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("a flag set supports at most {max} flags, got {count}")]
    TooManyFlags { count: usize, max: usize },
    #[error("flag appears more than once in the universe")]
    DuplicateFlag,
    #[error("flag is not part of the universe")]
    UnsupportedFlag,
}

impl Error {
    pub(crate) fn too_many(count: usize) -> Self {
        Error::TooManyFlags {
            count,
            max: MAX_FLAGS,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
