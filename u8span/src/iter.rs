use crate::error::Utf8Error;
use crate::span::Span;
use crate::utf8;

/// Byte iterator over a chain's logical sequence.
///
/// Node boundaries are crossed silently in both directions. Exhaustion is
/// the end-of-chain signal; there is no sentinel byte.
///
/// This iterator implements `Clone`.
#[derive(Clone)]
pub struct ChainBytes<'c, 'a> {
    nodes: &'c [Span<'a>],
    front_node: usize,
    front_off: usize,
    // back_off counts the not-yet-consumed bytes of nodes[back_node].
    // The initial state (nodes.len(), 0) means "nothing consumed from
    // the back yet"; the shared `remaining` count keeps the two ends
    // from overlapping.
    back_node: usize,
    back_off: usize,
    remaining: usize,
}

impl<'c, 'a> ChainBytes<'c, 'a> {
    pub(crate) fn new(nodes: &'c [Span<'a>]) -> Self {
        ChainBytes {
            nodes,
            front_node: 0,
            front_off: 0,
            back_node: nodes.len(),
            back_off: 0,
            remaining: nodes.iter().map(Span::len).sum(),
        }
    }
}

impl Iterator for ChainBytes<'_, '_> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.remaining == 0 {
            return None;
        }
        loop {
            let node = self.nodes[self.front_node].as_bytes();
            if self.front_off < node.len() {
                let byte = node[self.front_off];
                self.front_off += 1;
                self.remaining -= 1;
                return Some(byte);
            }
            self.front_node += 1;
            self.front_off = 0;
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl DoubleEndedIterator for ChainBytes<'_, '_> {
    fn next_back(&mut self) -> Option<u8> {
        if self.remaining == 0 {
            return None;
        }
        loop {
            if self.back_off > 0 {
                self.back_off -= 1;
                self.remaining -= 1;
                return Some(self.nodes[self.back_node].as_bytes()[self.back_off]);
            }
            self.back_node -= 1;
            self.back_off = self.nodes[self.back_node].len();
        }
    }
}

impl ExactSizeIterator for ChainBytes<'_, '_> {}

/// UTF-8 decoding iterator over a chain's logical sequence.
///
/// Scalars that straddle node boundaries decode normally: up to four
/// bytes are gathered into a scratch buffer first. On a malformed
/// sequence the item is an error carrying the logical byte offset; the
/// bytes consumed by the failed attempt are not replayed.
///
/// This iterator implements `Clone`.
#[derive(Clone)]
pub struct ChainChars<'c, 'a> {
    bytes: ChainBytes<'c, 'a>,
    offset: usize,
}

impl<'c, 'a> ChainChars<'c, 'a> {
    pub(crate) fn new(bytes: ChainBytes<'c, 'a>) -> Self {
        ChainChars { bytes, offset: 0 }
    }
}

impl Iterator for ChainChars<'_, '_> {
    type Item = Result<char, Utf8Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.offset;
        let lead = self.bytes.next()?;
        self.offset += 1;

        let len = match utf8::sequence_len(lead) {
            Some(len) => len,
            None => return Some(Err(Utf8Error { offset: start })),
        };

        let mut scratch = [0u8; 4];
        scratch[0] = lead;
        for slot in scratch.iter_mut().take(len).skip(1) {
            match self.bytes.next() {
                Some(byte) => {
                    *slot = byte;
                    self.offset += 1;
                }
                None => return Some(Err(Utf8Error { offset: start })),
            }
        }

        match utf8::decode(&scratch[..len]) {
            Ok((ch, _)) => Some(Ok(ch)),
            Err(_) => Some(Err(Utf8Error { offset: start })),
        }
    }
}
