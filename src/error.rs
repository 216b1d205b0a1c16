//! Defines [`Error`], representing all failures of this crate.
use std::fmt::{Debug, Display, Formatter};

/// Enum with all errors in this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Returned when the replacement keys and values have different lengths.
    DimensionMismatch {
        /// number of keys (values to match against)
        keys: usize,
        /// number of replacements
        replacements: usize,
    },
    /// Wrong arguments, e.g. arrays of different physical types.
    InvalidArgumentError(String),
}

impl Error {
    /// Returns [`Error::DimensionMismatch`] unless both lengths are equal.
    #[inline]
    pub(crate) fn check_dimensions(keys: usize, replacements: usize) -> Result<()> {
        if keys != replacements {
            return Err(Self::DimensionMismatch { keys, replacements });
        }
        Ok(())
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::DimensionMismatch { keys, replacements } => {
                write!(
                    f,
                    "Dimension mismatch: {} keys but {} replacements",
                    keys, replacements
                )
            }
            Error::InvalidArgumentError(desc) => {
                write!(f, "Invalid argument error: {}", desc)
            }
        }
    }
}

impl std::error::Error for Error {}

/// Typedef for a [`std::result::Result`] of an [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
