//! `textnav`: a lookahead/consume cursor over a byte sequence, for
//! hand-written lexers.
//!
//! The navigator borrows its input and never allocates. Reads return
//! spans into the underlying data, so scanned pieces stay valid while
//! the cursor keeps moving.
//!
//! ```
//! use textnav::TextNavigator;
//!
//! let mut nav = TextNavigator::from_str("alpha 42\nbeta");
//! assert_eq!(nav.read_word().as_bytes(), b"alpha");
//! nav.skip_whitespace();
//! assert_eq!(nav.read_integer(), 42);
//! assert_eq!(nav.read_line().as_bytes(), b"");
//! assert_eq!(nav.read_line().as_bytes(), b"beta");
//! assert!(nav.is_eot());
//! ```

mod navigator;

pub use navigator::{Location, TextNavigator, RECORD_SEPARATOR, UNIT_SEPARATOR};

pub use growbuf;
pub use u8span;
