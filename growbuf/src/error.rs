use thiserror::Error;

/// Error types for `Arena` operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum ArenaError {
    /// The request can never be satisfied from a single chunk
    #[error("Allocation of {requested} bytes exceeds the chunk capacity of {max} bytes")]
    ChunkOverflow {
        /// Number of bytes requested
        requested: usize,
        /// Usable capacity of one chunk
        max: usize,
    },
}
