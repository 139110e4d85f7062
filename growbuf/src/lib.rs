//! `growbuf`: owning growable byte storage.
//!
//! [`Buffer`] is a growable byte container with an explicit capacity
//! policy: capacity is always a power of two of at least 8 bytes once
//! anything has been allocated, and growth never happens when the
//! current capacity already suffices.
//!
//! ```
//! use growbuf::Buffer;
//!
//! let mut buffer = Buffer::from_str("hello");
//! buffer.push(b',');
//! buffer.push_str(" world");
//! assert_eq!(buffer.as_bytes(), b"hello, world");
//! assert!(buffer.capacity().is_power_of_two());
//! ```
//!
//! Views are handed out as [`u8span::Span`] borrows, so a view taken
//! before a mutation cannot be used after it — the stale-pointer hazard
//! of the ancestral C library is a compile error here.
//!
//! [`Arena`] is a chunked bump allocator: blocks are carved from
//! fixed-size chunks, identified by stable [`ArenaRef`] handles, and
//! freed only all at once.

mod arena;
mod buffer;
mod error;
mod io;

pub use arena::{Arena, ArenaRef};
pub use buffer::Buffer;
pub use error::ArenaError;

pub use u8span;
