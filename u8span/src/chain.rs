use alloc::string::String;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;

use crate::iter::{ChainBytes, ChainChars};
use crate::parse;
use crate::span::{cmp_ignore_ascii_case, Span};

/// An ordered sequence of spans forming one logical byte sequence.
///
/// The underlying bytes may be physically fragmented across any number of
/// storage regions; every operation on the chain treats them as a single
/// contiguous sequence. The chain owns only its node list, never the
/// referenced bytes.
///
/// Nodes are stored in a `Vec` rather than heap-linked cells, so there
/// are no cycles and no manual free lists. [`Chain::concat`] takes its
/// source by value: ownership of the spliced nodes transfers into the
/// target, enforced by move semantics.
#[derive(Clone, Default)]
pub struct Chain<'a> {
    nodes: Vec<Span<'a>>,
}

impl<'a> Chain<'a> {
    /// Creates an empty chain. Does not allocate.
    #[must_use]
    pub const fn new() -> Self {
        Chain { nodes: Vec::new() }
    }

    /// Creates a one-node chain over the given span.
    #[must_use]
    pub fn from_span(span: Span<'a>) -> Self {
        let mut nodes = Vec::with_capacity(1);
        nodes.push(span);
        Chain { nodes }
    }

    /// Appends a span as a new tail node.
    pub fn append(&mut self, span: Span<'a>) {
        self.nodes.push(span);
    }

    /// Removes every node. Idempotent: clearing an already-empty chain is
    /// a no-op.
    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Number of nodes, including empty ones.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// The nodes in order.
    #[must_use]
    pub fn nodes(&self) -> &[Span<'a>] {
        &self.nodes
    }

    /// Total byte count across all nodes.
    #[must_use]
    pub fn total_len(&self) -> usize {
        self.nodes.iter().map(Span::len).sum()
    }

    /// True only if every node is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.iter().all(Span::is_empty)
    }

    /// Narrows node boundaries past leading ASCII whitespace, in place.
    ///
    /// Never allocates and never removes nodes; nodes emptied by the trim
    /// stay in the chain until [`Chain::prune`].
    pub fn trim_start(&mut self) {
        for node in &mut self.nodes {
            *node = node.trim_start();
            if !node.is_empty() {
                break;
            }
        }
    }

    /// Narrows node boundaries before trailing ASCII whitespace, in place.
    pub fn trim_end(&mut self) {
        for node in self.nodes.iter_mut().rev() {
            *node = node.trim_end();
            if !node.is_empty() {
                break;
            }
        }
    }

    /// Trims both ends.
    pub fn trim(&mut self) {
        self.trim_start();
        self.trim_end();
    }

    /// Removes empty nodes.
    pub fn prune(&mut self) {
        self.nodes.retain(|node| !node.is_empty());
    }

    /// Splices `source` onto the tail of this chain.
    ///
    /// The source is consumed; its nodes now belong to this chain.
    pub fn concat(&mut self, mut source: Chain<'a>) {
        self.nodes.append(&mut source.nodes);
    }

    /// Iterates over the logical byte sequence, crossing node boundaries
    /// transparently. Supports reverse iteration via
    /// `DoubleEndedIterator`.
    #[must_use]
    pub fn bytes(&self) -> ChainBytes<'_, 'a> {
        ChainBytes::new(&self.nodes)
    }

    /// Decodes the logical byte sequence as UTF-8, crossing node
    /// boundaries transparently. Each item is the decoded character or a
    /// `Utf8Error` carrying the logical byte offset of the rejected
    /// sequence.
    #[must_use]
    pub fn chars(&self) -> ChainChars<'_, 'a> {
        ChainChars::new(self.bytes())
    }

    /// Prefix test over the logical byte sequence.
    #[must_use]
    pub fn starts_with(&self, prefix: &[u8]) -> bool {
        let mut bytes = self.bytes();
        prefix.iter().all(|&p| bytes.next() == Some(p))
    }

    /// Suffix test over the logical byte sequence.
    #[must_use]
    pub fn ends_with(&self, suffix: &[u8]) -> bool {
        let mut bytes = self.bytes().rev();
        suffix.iter().rev().all(|&s| bytes.next() == Some(s))
    }

    /// Three-way lexicographic comparison of two chains' logical byte
    /// sequences, shorter-is-less on prefix ties. Fragmentation is
    /// unobservable: `"foo"+"bar"` compares equal to `"foob"+"ar"`.
    #[must_use]
    pub fn compare(&self, other: &Chain) -> Ordering {
        self.bytes().cmp(other.bytes())
    }

    /// Three-way comparison against a contiguous byte slice.
    #[must_use]
    pub fn compare_bytes(&self, other: &[u8]) -> Ordering {
        self.bytes().cmp(other.iter().copied())
    }

    /// Like [`Chain::compare`], but ASCII-case-insensitive.
    #[must_use]
    pub fn compare_ignore_case(&self, other: &Chain) -> Ordering {
        cmp_ignore_ascii_case(self.bytes(), other.bytes())
    }

    /// Concatenates all node bytes into one owned vector.
    #[must_use]
    pub fn to_vec(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.total_len());
        for node in &self.nodes {
            out.extend_from_slice(node.as_bytes());
        }
        out
    }

    /// Concatenates and decodes as UTF-8, replacing invalid sequences.
    #[must_use]
    pub fn to_string_lossy(&self) -> String {
        String::from_utf8_lossy(&self.to_vec()).into_owned()
    }

    /// Permissive parse to `u64` across node boundaries. Same rules as
    /// [`Span::parse_u64`].
    #[must_use]
    pub fn parse_u64(&self) -> u64 {
        parse::unsigned(self.bytes())
    }

    /// Permissive parse to `u32` across node boundaries.
    #[must_use]
    pub fn parse_u32(&self) -> u32 {
        parse::unsigned(self.bytes()) as u32
    }

    /// Permissive parse to `i64` across node boundaries. Same rules as
    /// [`Span::parse_i64`]: sign and whitespace skipping continues
    /// seamlessly from one node into the next.
    #[must_use]
    pub fn parse_i64(&self) -> i64 {
        parse::signed(self.bytes())
    }

    /// Permissive parse to `i32` across node boundaries.
    #[must_use]
    pub fn parse_i32(&self) -> i32 {
        parse::signed(self.bytes()) as i32
    }
}

impl fmt::Debug for Chain<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.nodes.iter()).finish()
    }
}

impl PartialEq for Chain<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.total_len() == other.total_len() && self.bytes().eq(other.bytes())
    }
}

impl Eq for Chain<'_> {}

impl<'a> From<Span<'a>> for Chain<'a> {
    fn from(span: Span<'a>) -> Self {
        Chain::from_span(span)
    }
}

impl<'a> FromIterator<Span<'a>> for Chain<'a> {
    fn from_iter<T: IntoIterator<Item = Span<'a>>>(iter: T) -> Self {
        Chain {
            nodes: iter.into_iter().collect(),
        }
    }
}
