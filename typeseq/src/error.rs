use thiserror::Error;

/// Contract violations raised by sequence and map operations.
///
/// These indicate a caller bug: an index or range that doesn't fit the
/// sequence, or two sequences whose lengths were required to match.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("index {index} out of bounds for sequence of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
    #[error("invalid range {begin}..{end} for sequence of length {len}")]
    InvalidRange { begin: usize, end: usize, len: usize },
    #[error("sequence lengths differ: {left} != {right}")]
    LengthMismatch { left: usize, right: usize },
    #[error("step must be greater than zero")]
    InvalidStep,
}

pub type Result<T> = std::result::Result<T, Error>;
