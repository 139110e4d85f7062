use growbuf::Buffer;
use memchr::{memchr, memchr2};
use u8span::{utf8, Span, Utf8Error};

/// ASCII record separator, a field terminator in ISIS-style records.
pub const RECORD_SEPARATOR: u8 = 0x1e;

/// ASCII unit separator, the other field terminator.
pub const UNIT_SEPARATOR: u8 = 0x1f;

/// 1-based line/column position of a navigator cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

/// A read cursor over an immutable byte sequence.
///
/// The invariant `0 <= position <= len` is maintained by every
/// operation: moves clamp, lookahead out of range returns `None`, and
/// reads at the end of text consume nothing.
#[derive(Debug, Clone)]
pub struct TextNavigator<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> TextNavigator<'a> {
    /// Creates a navigator over the given bytes, positioned at the start.
    #[must_use]
    pub const fn new(data: &'a [u8]) -> Self {
        TextNavigator { data, position: 0 }
    }

    /// Creates a navigator over a span's bytes.
    #[must_use]
    pub const fn from_span(span: Span<'a>) -> Self {
        TextNavigator {
            data: span.as_bytes(),
            position: 0,
        }
    }

    /// Creates a navigator over the bytes of a string slice.
    #[must_use]
    pub const fn from_str(text: &'a str) -> Self {
        TextNavigator {
            data: text.as_bytes(),
            position: 0,
        }
    }

    /// Creates a navigator over a buffer's content. The buffer is
    /// borrowed for the navigator's lifetime.
    #[must_use]
    pub fn from_buffer(buffer: &'a Buffer) -> Self {
        TextNavigator {
            data: buffer.as_bytes(),
            position: 0,
        }
    }

    /// Current cursor offset.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Total length of the underlying data.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True for empty input.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of bytes left to read.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.data.len() - self.position
    }

    /// True once the cursor has reached the end of text.
    #[must_use]
    pub fn is_eot(&self) -> bool {
        self.position >= self.data.len()
    }

    /// The unread tail as a span.
    #[must_use]
    pub fn remaining_span(&self) -> Span<'a> {
        Span::new(self.rest())
    }

    fn rest(&self) -> &'a [u8] {
        &self.data[self.position..]
    }

    /// The byte at the cursor, without advancing.
    #[must_use]
    pub fn peek(&self) -> Option<u8> {
        self.data.get(self.position).copied()
    }

    /// The first byte at or after the cursor that is not CR or LF,
    /// without advancing.
    #[must_use]
    pub fn peek_skip_newlines(&self) -> Option<u8> {
        self.rest()
            .iter()
            .copied()
            .find(|&b| b != b'\r' && b != b'\n')
    }

    /// The byte `distance` positions ahead of the cursor; 0 is the
    /// cursor itself. `None` out of range.
    #[must_use]
    pub fn look_ahead(&self, distance: usize) -> Option<u8> {
        self.position
            .checked_add(distance)
            .and_then(|at| self.data.get(at))
            .copied()
    }

    /// The byte `distance` positions behind the cursor; 1 is the byte
    /// most recently read. `None` out of range.
    #[must_use]
    pub fn look_behind(&self, distance: usize) -> Option<u8> {
        if distance == 0 || distance > self.position {
            return None;
        }
        Some(self.data[self.position - distance])
    }

    /// Consumes and returns one byte.
    pub fn read(&mut self) -> Option<u8> {
        let byte = self.peek()?;
        self.position += 1;
        Some(byte)
    }

    /// Consumes past any CR/LF bytes, then consumes and returns the
    /// first other byte.
    pub fn read_skip_newlines(&mut self) -> Option<u8> {
        loop {
            let byte = self.read()?;
            if byte != b'\r' && byte != b'\n' {
                return Some(byte);
            }
        }
    }

    /// Decodes and consumes one UTF-8 scalar.
    ///
    /// Returns `Ok(None)` at the end of text. On a truncated or invalid
    /// sequence the cursor does not move.
    ///
    /// # Errors
    ///
    /// `Utf8Error` carrying the cursor offset of the rejected sequence.
    pub fn read_utf8(&mut self) -> Result<Option<char>, Utf8Error> {
        if self.is_eot() {
            return Ok(None);
        }
        let (ch, n) = utf8::decode(self.rest()).map_err(|e| Utf8Error {
            offset: self.position + e.offset,
        })?;
        self.position += n;
        Ok(Some(ch))
    }

    /// Consumes one line.
    ///
    /// The terminator — `\r\n`, `\n`, or a lone `\r` — is consumed but
    /// excluded from the returned span. A lone `\r` never swallows the
    /// byte after it. The final line needs no terminator.
    pub fn read_line(&mut self) -> Span<'a> {
        let rest = self.rest();
        let end = memchr2(b'\r', b'\n', rest).unwrap_or(rest.len());
        let line = Span::new(&rest[..end]);
        self.position += end;
        if self.peek() == Some(b'\r') {
            self.position += 1;
            if self.peek() == Some(b'\n') {
                self.position += 1;
            }
        } else if self.peek() == Some(b'\n') {
            self.position += 1;
        }
        line
    }

    /// Consumes one field of an ISIS-style record: reads up to a record
    /// (0x1E) or unit (0x1F) separator, consuming but excluding it.
    pub fn read_field(&mut self) -> Span<'a> {
        let rest = self.rest();
        let end = memchr2(RECORD_SEPARATOR, UNIT_SEPARATOR, rest).unwrap_or(rest.len());
        let field = Span::new(&rest[..end]);
        self.position += end;
        if !self.is_eot() {
            self.position += 1;
        }
        field
    }

    /// Reads up to `stop`, consuming it. The stop byte is excluded from
    /// the returned span. Without a stop byte, reads to the end.
    pub fn read_to(&mut self, stop: u8) -> Span<'a> {
        let piece = self.read_until(stop);
        if self.peek() == Some(stop) {
            self.position += 1;
        }
        piece
    }

    /// Reads up to `stop`, leaving it unconsumed.
    pub fn read_until(&mut self, stop: u8) -> Span<'a> {
        let rest = self.rest();
        let end = memchr(stop, rest).unwrap_or(rest.len());
        self.position += end;
        Span::new(&rest[..end])
    }

    /// Reads up to any byte of `stops`, consuming the stop byte found.
    pub fn read_to_any(&mut self, stops: &[u8]) -> Span<'a> {
        let piece = self.read_until_any(stops);
        if self.peek().is_some_and(|b| stops.contains(&b)) {
            self.position += 1;
        }
        piece
    }

    /// Reads up to any byte of `stops`, leaving it unconsumed.
    pub fn read_until_any(&mut self, stops: &[u8]) -> Span<'a> {
        let rest = self.rest();
        let end = rest
            .iter()
            .position(|b| stops.contains(b))
            .unwrap_or(rest.len());
        self.position += end;
        Span::new(&rest[..end])
    }

    /// Consumes a maximal run of ASCII digits and accumulates it
    /// permissively (wrapping, no error channel) into a `u64`. An empty
    /// run yields 0.
    pub fn read_integer(&mut self) -> u64 {
        self.take_matching(|b| b.is_ascii_digit()).parse_u64()
    }

    /// Skips non-digits, then reads an integer like
    /// [`TextNavigator::read_integer`].
    pub fn extract_integer(&mut self) -> u64 {
        self.take_matching(|b| !b.is_ascii_digit());
        self.read_integer()
    }

    /// Consumes a maximal run of ASCII alphanumeric bytes.
    pub fn read_word(&mut self) -> Span<'a> {
        self.take_matching(|b| b.is_ascii_alphanumeric())
    }

    /// Consumes past ASCII whitespace. Returns the byte count skipped.
    pub fn skip_whitespace(&mut self) -> usize {
        self.take_matching(|b| b.is_ascii_whitespace()).len()
    }

    /// Consumes past ASCII punctuation. Returns the byte count skipped.
    pub fn skip_punctuation(&mut self) -> usize {
        self.take_matching(|b| b.is_ascii_punctuation()).len()
    }

    /// Consumes past anything that is not alphanumeric. Returns the
    /// byte count skipped.
    pub fn skip_non_word(&mut self) -> usize {
        self.take_matching(|b| !b.is_ascii_alphanumeric()).len()
    }

    /// Moves the cursor by a signed distance, clamping to `[0, len]`.
    pub fn move_by(&mut self, delta: isize) {
        if delta < 0 {
            self.position = self.position.saturating_sub(delta.unsigned_abs());
        } else {
            self.position = self
                .position
                .saturating_add(delta as usize)
                .min(self.data.len());
        }
    }

    /// 1-based line and column of the cursor, recomputed by scanning
    /// from the start. `\n` increments the line and resets the column.
    ///
    /// O(position); call sparingly on hot paths.
    #[must_use]
    pub fn location(&self) -> Location {
        let mut line = 1;
        let mut column = 1;
        for &byte in &self.data[..self.position] {
            if byte == b'\n' {
                line += 1;
                column = 1;
            } else {
                column += 1;
            }
        }
        Location { line, column }
    }

    fn take_matching(&mut self, pred: impl Fn(u8) -> bool) -> Span<'a> {
        let rest = self.rest();
        let end = rest.iter().position(|&b| !pred(b)).unwrap_or(rest.len());
        self.position += end;
        Span::new(&rest[..end])
    }
}
