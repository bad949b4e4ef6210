//! A UTF-8 style codec extended to 6-byte sequences.
//!
//! Code points are 31-bit values (`0..=0x7FFF_FFFF`). Values up to U+10FFFF
//! encode exactly as in UTF-8; larger values use 5- and 6-byte sequences with
//! lead bytes `111110xx` and `1111110x`. Surrogates and values above the
//! Unicode range are ordinary code points here.
//!
//! ```rust
//! use utf8x::{decode, encode};
//!
//! let text = [0x74, 0x43C, 0x10_FFFF, 0x7FFF_FFFF];
//! let bytes = encode(&text).unwrap();
//! assert_eq!(bytes.len(), 1 + 2 + 4 + 6);
//! assert_eq!(decode(&bytes).unwrap(), text);
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod decode;
mod encode;
mod error;
mod options;
mod stream;
mod tables;

#[cfg(test)]
mod tests;

pub use decode::{CodePoints, code_points, decode, decode_code_point, decode_into, decode_with};
pub use encode::{encode, encode_code_point, encode_into, encoded_len};
pub use error::{DecodeError, EncodeError};
pub use options::DecodeOptions;
pub use stream::{ClosedStreamingDecoder, StreamingDecoder};
pub use tables::{
    LengthClass, MAX_CODE_POINT, MAX_SEQUENCE_LEN, classify_lead, is_continuation, length_class,
    sequence_len,
};
