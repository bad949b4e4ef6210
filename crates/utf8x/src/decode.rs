use alloc::vec::Vec;
use core::iter::FusedIterator;

use crate::{
    error::DecodeError,
    options::DecodeOptions,
    tables::{append_continuation, classify_lead, is_continuation},
};

/// Decodes a byte sequence with default options.
///
/// # Errors
///
/// Returns the first [`DecodeError`] encountered. No partial output is
/// returned.
///
/// # Examples
///
/// ```rust
/// use utf8x::{DecodeError, decode};
///
/// assert_eq!(decode(&[0x74, 0xD0, 0xBC]).unwrap(), [0x74, 0x43C]);
/// assert_eq!(
///     decode(&[0x74, 0xE5]),
///     Err(DecodeError::UnexpectedEnd { expected: 2, offset: 2 })
/// );
/// ```
pub fn decode(bytes: &[u8]) -> Result<Vec<u32>, DecodeError> {
    decode_with(bytes, DecodeOptions::default())
}

/// Decodes a byte sequence.
///
/// # Errors
///
/// See [`decode`].
pub fn decode_with(bytes: &[u8], options: DecodeOptions) -> Result<Vec<u32>, DecodeError> {
    let mut out = Vec::with_capacity(bytes.len());
    decode_into(bytes, &mut out, options)?;
    Ok(out)
}

/// Appends the code points decoded from `bytes` to `out` and returns how many
/// were written.
///
/// On error `out` is restored to its original length.
///
/// # Errors
///
/// See [`decode`].
pub fn decode_into(
    bytes: &[u8],
    out: &mut Vec<u32>,
    options: DecodeOptions,
) -> Result<usize, DecodeError> {
    let start = out.len();
    for item in CodePoints::with_options(bytes, options) {
        match item {
            Ok(code_point) => out.push(code_point),
            Err(err) => {
                out.truncate(start);
                return Err(err);
            }
        }
    }
    Ok(out.len() - start)
}

/// Decodes the first code point of `bytes`, returning it together with the
/// number of bytes it occupied.
///
/// # Errors
///
/// Returns [`DecodeError::UnexpectedEnd`] for empty input, and otherwise the
/// same errors as [`decode`] restricted to the first sequence.
pub fn decode_code_point(bytes: &[u8]) -> Result<(u32, usize), DecodeError> {
    decode_sequence(bytes, 0, DecodeOptions::default())
}

/// Iterates over the code points of `bytes` with default options.
#[must_use]
pub fn code_points(bytes: &[u8]) -> CodePoints<'_> {
    CodePoints::with_options(bytes, DecodeOptions::default())
}

/// Decodes one sequence starting at `bytes[0]`, which sits at absolute offset
/// `base` in the caller's input.
fn decode_sequence(
    bytes: &[u8],
    base: usize,
    options: DecodeOptions,
) -> Result<(u32, usize), DecodeError> {
    let Some(&lead) = bytes.first() else {
        return Err(DecodeError::UnexpectedEnd {
            expected: 1,
            offset: base,
        });
    };
    let class = classify_lead(lead).ok_or(DecodeError::InvalidLeadByte {
        byte: lead,
        offset: base,
    })?;
    let len = class.byte_len();

    let mut code_point = class.lead_payload(lead);
    for i in 1..len {
        let offset = base + i;
        let Some(&byte) = bytes.get(i) else {
            return Err(DecodeError::UnexpectedEnd {
                expected: len - i,
                offset,
            });
        };
        if !is_continuation(byte) {
            return Err(DecodeError::InvalidContinuationByte { byte, offset });
        }
        code_point = append_continuation(code_point, byte);
    }

    if options.reject_overlong && code_point < class.min_code_point() {
        return Err(DecodeError::OverlongEncoding {
            value: code_point,
            len,
            offset: base,
        });
    }
    Ok((code_point, len))
}

/// Iterator over the code points of a byte slice.
///
/// Yields `Err` once for the first malformed sequence and then ends.
#[derive(Debug, Clone)]
pub struct CodePoints<'a> {
    bytes: &'a [u8],
    offset: usize,
    options: DecodeOptions,
    failed: bool,
}

impl<'a> CodePoints<'a> {
    /// Creates an iterator decoding `bytes` with `options`.
    #[must_use]
    pub fn with_options(bytes: &'a [u8], options: DecodeOptions) -> Self {
        Self {
            bytes,
            offset: 0,
            options,
            failed: false,
        }
    }

    /// Offset of the next byte to be decoded.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The bytes not yet decoded.
    #[must_use]
    pub fn remaining(&self) -> &'a [u8] {
        &self.bytes[self.offset..]
    }
}

impl Iterator for CodePoints<'_> {
    type Item = Result<u32, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.offset == self.bytes.len() {
            return None;
        }
        match decode_sequence(self.remaining(), self.offset, self.options) {
            Ok((code_point, len)) => {
                self.offset += len;
                Some(Ok(code_point))
            }
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failed {
            return (0, Some(0));
        }
        // Malformed input ends the iteration after a single item.
        let remaining = self.bytes.len() - self.offset;
        (usize::from(remaining > 0), Some(remaining))
    }
}

impl FusedIterator for CodePoints<'_> {}
