#![no_std]

//! `u8span`: non-owning byte spans and chained span sequences.
//!
//! A [`Span`] is a cheap, copyable view over a contiguous byte range. It
//! never owns memory; the borrow ties its lifetime to whatever storage it
//! was sliced from, so a stale view is a compile error rather than a
//! dangling pointer.
//!
//! ```
//! use u8span::Span;
//!
//! let span = Span::from_str("  hello, world  ");
//! let trimmed = span.trim();
//! assert_eq!(trimmed.as_bytes(), b"hello, world");
//! assert_eq!(trimmed.slice(7, 5).as_bytes(), b"world");
//! ```
//!
//! A [`Chain`] strings multiple spans together into one logical byte
//! sequence that may be physically fragmented. The chain owns only its
//! node list, never the referenced bytes. Iteration, comparison, and
//! numeric parsing all cross node boundaries transparently.
//!
//! ```
//! use u8span::{Chain, Span};
//!
//! let mut chain = Chain::from_span(Span::from_str("foo"));
//! chain.append(Span::from_str("bar"));
//! assert_eq!(chain.total_len(), 6);
//! assert_eq!(chain.to_vec(), b"foobar");
//! assert!(chain.starts_with(b"foob"));
//! ```
//!
//! # Slicing policy
//!
//! Out-of-range slice arguments clamp to the span bounds instead of
//! erroring; see [`Span::slice`].
//!
//! # Permissive parsing
//!
//! The `parse_*` family has no error channel: any input produces a
//! deterministic value. See the individual methods for the exact rules.
//!
//! # `no_std`
//!
//! The crate is `no_std` and only requires `alloc` (for `Chain` node
//! storage and the owning conversions). Enable the `std` feature to
//! forward `std` support to the dependencies.

extern crate alloc;

mod chain;
mod error;
mod iter;
mod parse;
mod span;
pub mod utf8;

pub use chain::Chain;
pub use error::{SplitError, Utf8Error};
pub use iter::{ChainBytes, ChainChars};
pub use span::Span;
