use crate::error::ArenaError;

/// Chunk size used when `Arena::new` is given 0.
const DEFAULT_CHUNK_SIZE: usize = 4096;

/// Chunk sizes are rounded up to at least two pointer widths.
const MIN_CHUNK_SIZE: usize = 2 * core::mem::size_of::<usize>();

/// Allocations are rounded up to a 4-byte boundary.
const ALIGN: usize = 4;

/// Handle to a block allocated from an [`Arena`].
///
/// Handles are offsets, not pointers, so they stay valid for the
/// arena's whole lifetime: chunks never relocate and blocks are never
/// individually freed. A handle must only be resolved against the arena
/// it came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ArenaRef {
    chunk: usize,
    offset: usize,
    len: usize,
}

impl ArenaRef {
    /// Length of the block in bytes, as requested (before rounding).
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// True for zero-length blocks.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// A bump allocator carving blocks out of fixed-size chunks.
///
/// Blocks are handed out front to back from the current chunk; when it
/// cannot hold a request, a fresh chunk is opened. No block is ever
/// freed individually — [`Arena::clear`] (or drop) releases everything
/// at once. A request larger than one chunk always fails; the arena
/// never falls back to an oversized chunk.
#[derive(Debug)]
pub struct Arena {
    chunks: Vec<Box<[u8]>>,
    chunk_size: usize,
    tail_used: usize,
}

impl Arena {
    /// Creates an arena with the given chunk size and allocates the
    /// first chunk eagerly.
    ///
    /// A `chunk_size` of 0 selects the 4096-byte default; other values
    /// are rounded up to at least two pointer widths.
    #[must_use]
    pub fn new(chunk_size: usize) -> Self {
        let chunk_size = if chunk_size == 0 {
            DEFAULT_CHUNK_SIZE
        } else {
            chunk_size.max(MIN_CHUNK_SIZE)
        };
        Arena {
            chunks: vec![vec![0u8; chunk_size].into_boxed_slice()],
            chunk_size,
            tail_used: 0,
        }
    }

    /// Allocates a block of `len` bytes and returns its handle.
    ///
    /// The consumed space is `len` rounded up to a 4-byte boundary. When
    /// the current chunk lacks room, a new chunk is opened first.
    /// Zero-length requests succeed without consuming space.
    ///
    /// # Errors
    ///
    /// `ArenaError::ChunkOverflow` when the rounded request exceeds one
    /// chunk's capacity. The arena is unchanged.
    pub fn alloc(&mut self, len: usize) -> Result<ArenaRef, ArenaError> {
        let rounded = len.div_ceil(ALIGN) * ALIGN;
        if rounded > self.chunk_size {
            return Err(ArenaError::ChunkOverflow {
                requested: len,
                max: self.chunk_size,
            });
        }
        if self.chunks.is_empty() || self.chunk_size - self.tail_used < rounded {
            self.chunks
                .push(vec![0u8; self.chunk_size].into_boxed_slice());
            self.tail_used = 0;
        }
        let chunk = self.chunks.len() - 1;
        let offset = self.tail_used;
        self.tail_used += rounded;
        Ok(ArenaRef { chunk, offset, len })
    }

    /// Copies `data` into a freshly allocated block.
    ///
    /// # Errors
    ///
    /// `ArenaError::ChunkOverflow` as for [`Arena::alloc`].
    pub fn alloc_bytes(&mut self, data: &[u8]) -> Result<ArenaRef, ArenaError> {
        let handle = self.alloc(data.len())?;
        self.chunks[handle.chunk][handle.offset..handle.offset + handle.len]
            .copy_from_slice(data);
        Ok(handle)
    }

    /// Resolves a handle to its block.
    ///
    /// # Panics
    ///
    /// Panics if the handle did not come from this arena (or predates a
    /// [`Arena::clear`]).
    #[must_use]
    pub fn get(&self, handle: ArenaRef) -> &[u8] {
        &self.chunks[handle.chunk][handle.offset..handle.offset + handle.len]
    }

    /// Resolves a handle to its block, mutably.
    ///
    /// # Panics
    ///
    /// Panics if the handle did not come from this arena (or predates a
    /// [`Arena::clear`]).
    #[must_use]
    pub fn get_mut(&mut self, handle: ArenaRef) -> &mut [u8] {
        &mut self.chunks[handle.chunk][handle.offset..handle.offset + handle.len]
    }

    /// Releases every chunk at once. Outstanding handles become invalid;
    /// the arena itself is reusable and will allocate a fresh chunk on
    /// the next request.
    pub fn clear(&mut self) {
        self.chunks.clear();
        self.tail_used = 0;
    }

    /// Gross capacity: chunk size times the number of chunks, regardless
    /// of how much has actually been handed out.
    #[must_use]
    pub fn total(&self) -> usize {
        self.chunk_size * self.chunks.len()
    }

    /// Number of chunks currently allocated.
    #[must_use]
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Unused bytes in the chunk currently being carved.
    #[must_use]
    pub fn remaining(&self) -> usize {
        if self.chunks.is_empty() {
            0
        } else {
            self.chunk_size - self.tail_used
        }
    }

    /// The configured chunk size.
    #[must_use]
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }
}
