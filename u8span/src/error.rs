use thiserror::Error;

/// Error types for bounded split operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum SplitError {
    /// The output slice cannot hold another fragment
    #[error("Too many pieces: output capacity of {capacity} fragments exceeded")]
    TooManyPieces {
        /// Capacity of the caller-provided output slice
        capacity: usize,
    },
}

/// An invalid or truncated UTF-8 sequence was encountered while decoding.
///
/// `offset` is the byte offset of the rejected sequence, relative to the
/// start of the data being decoded.
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
#[error("Invalid UTF-8 sequence at byte offset {offset}")]
pub struct Utf8Error {
    /// Byte offset of the rejected sequence
    pub offset: usize,
}
