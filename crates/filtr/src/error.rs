//! Error types for the filtr crate.

use thiserror::Error;

/// Errors that can occur when building or reading a [`Filtration`](crate::Filtration).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FiltrError {
    /// The builder was finished without a sequence to view.
    #[error("a filtration requires a sequence, none was supplied")]
    MissingSequence,

    /// The index argument has no `usize` representation (e.g. it is negative).
    #[error("invalid index: {reason}")]
    InvalidIndex { reason: String },

    /// The position is past the end of the filter.
    #[error("filter index {index} out of range for filter of length {len}")]
    FilterIndexOutOfRange { index: usize, len: usize },

    /// The filter index has no element in the underlying sequence.
    #[error("sequence index {index} out of range for sequence of length {len}")]
    SequenceIndexOutOfRange { index: isize, len: usize },
}

/// Result type for filtr operations.
pub type Result<T> = std::result::Result<T, FiltrError>;
