//! Errors related to this crate.

use thiserror::Error;

/// Error while reading an input.
#[derive(Error, Debug)]
pub enum Error {
    /// Input exceeded the buffering limit.
    #[error("input larger than {limit} bytes")]
    InputTooLarge {
        /// Maximum number of bytes allowed.
        limit: u64,
    },

    /// IO error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Reasons an input cannot be split into header and body.
///
/// These are outcomes of the input itself. Splitting the same input again
/// fails identically.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitError {
    /// Input has zero length.
    #[error("empty input")]
    EmptyInput,

    /// Input has fewer lines than requested.
    #[error("insufficient lines: requested {requested}, found {found}")]
    InsufficientLines {
        /// Number of lines requested.
        requested: usize,
        /// Number of lines present in the input.
        found: usize,
    },
}

/// Property value or name not accepted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PropertyError {
    /// Value is not a positive integer.
    #[error("property '{name}' must be a positive integer, got '{value}'")]
    InvalidLineCount {
        /// Name of the property.
        name: String,
        /// Rejected value.
        value: String,
    },

    /// Value is not `true` or `false`.
    #[error("property '{name}' must be 'true' or 'false', got '{value}'")]
    InvalidBoolean {
        /// Name of the property.
        name: String,
        /// Rejected value.
        value: String,
    },

    /// Name does not match a supported property.
    #[error("unknown property '{0}'")]
    UnknownProperty(String),
}
