//! Minimal UTF-8 decoding helpers used by the chain character iterator
//! and by cursor types in dependent crates.

use crate::error::Utf8Error;

/// Expected sequence length for a lead byte, per the standard bit
/// patterns. `None` for continuation bytes and the invalid lead bytes.
#[must_use]
pub const fn sequence_len(lead: u8) -> Option<usize> {
    match lead {
        0x00..=0x7f => Some(1),
        0xc2..=0xdf => Some(2),
        0xe0..=0xef => Some(3),
        0xf0..=0xf4 => Some(4),
        _ => None,
    }
}

/// Decodes the first scalar from `input`, returning the character and the
/// number of bytes it occupied.
///
/// Validation is strict: overlong encodings, surrogates and truncated
/// sequences are all rejected. The reported offset is relative to
/// `input`; callers tracking a global position add their own base.
///
/// # Errors
///
/// `Utf8Error` when `input` is empty or does not start with a complete,
/// valid UTF-8 sequence.
pub fn decode(input: &[u8]) -> Result<(char, usize), Utf8Error> {
    let lead = *input.first().ok_or(Utf8Error { offset: 0 })?;
    let len = sequence_len(lead).ok_or(Utf8Error { offset: 0 })?;
    let sequence = input.get(..len).ok_or(Utf8Error { offset: 0 })?;
    let decoded = core::str::from_utf8(sequence).map_err(|_| Utf8Error { offset: 0 })?;
    // from_utf8 on a non-empty slice always yields at least one char
    let ch = decoded.chars().next().ok_or(Utf8Error { offset: 0 })?;
    Ok((ch, len))
}
