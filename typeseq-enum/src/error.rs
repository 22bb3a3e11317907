use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The text doesn't name a member of the enumeration.
    #[error("invalid argument: no member named {0:?}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, Error>;
