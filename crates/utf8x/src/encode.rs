use alloc::vec::Vec;

use crate::{
    error::EncodeError,
    tables::{CONTINUATION_BITS, MAX_CODE_POINT, MAX_SEQUENCE_LEN, continuation_byte, length_class},
};

/// Encodes a sequence of code points.
///
/// # Errors
///
/// Returns [`EncodeError::CodePointTooLarge`] for the first value above
/// [`MAX_CODE_POINT`]. No partial output is returned.
///
/// # Examples
///
/// ```rust
/// use utf8x::encode;
///
/// assert_eq!(encode(&[0x74, 0x43C]).unwrap(), [0x74, 0xD0, 0xBC]);
/// assert_eq!(encode(&[0x7FFF_FFFF]).unwrap(), [0xFD, 0xBF, 0xBF, 0xBF, 0xBF, 0xBF]);
/// assert!(encode(&[0x8000_0000]).is_err());
/// ```
pub fn encode(code_points: &[u32]) -> Result<Vec<u8>, EncodeError> {
    let mut out = Vec::with_capacity(code_points.len());
    encode_into(code_points, &mut out)?;
    Ok(out)
}

/// Appends the encoding of `code_points` to `out` and returns the number of
/// bytes written.
///
/// On error `out` is restored to its original length.
///
/// # Errors
///
/// See [`encode`].
pub fn encode_into(code_points: &[u32], out: &mut Vec<u8>) -> Result<usize, EncodeError> {
    let start = out.len();
    let mut buf = [0; MAX_SEQUENCE_LEN];
    for (index, &code_point) in code_points.iter().enumerate() {
        match encode_at(code_point, index, &mut buf) {
            Ok(bytes) => out.extend_from_slice(bytes),
            Err(err) => {
                out.truncate(start);
                return Err(err);
            }
        }
    }
    Ok(out.len() - start)
}

/// Encodes a single code point into `buf`, returning the filled prefix.
///
/// # Errors
///
/// Returns [`EncodeError::CodePointTooLarge`] (with index 0) when the value
/// exceeds [`MAX_CODE_POINT`].
pub fn encode_code_point(
    code_point: u32,
    buf: &mut [u8; MAX_SEQUENCE_LEN],
) -> Result<&[u8], EncodeError> {
    encode_at(code_point, 0, buf)
}

/// Number of bytes `code_point` encodes to.
///
/// # Errors
///
/// Returns [`EncodeError::CodePointTooLarge`] when the value exceeds
/// [`MAX_CODE_POINT`].
pub fn encoded_len(code_point: u32) -> Result<usize, EncodeError> {
    length_class(code_point)
        .map(|class| class.byte_len())
        .ok_or(too_large(code_point, 0))
}

fn encode_at(
    code_point: u32,
    index: usize,
    buf: &mut [u8; MAX_SEQUENCE_LEN],
) -> Result<&[u8], EncodeError> {
    let class = length_class(code_point).ok_or(too_large(code_point, index))?;
    let len = class.byte_len();

    buf[0] = class.lead_byte(code_point);
    // Most significant group first.
    let mut shift = class.lead_shift();
    for slot in &mut buf[1..len] {
        shift -= CONTINUATION_BITS;
        *slot = continuation_byte(code_point >> shift);
    }
    Ok(&buf[..len])
}

const fn too_large(value: u32, index: usize) -> EncodeError {
    EncodeError::CodePointTooLarge {
        value,
        max: MAX_CODE_POINT,
        index,
    }
}
