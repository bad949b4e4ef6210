use thiserror::Error;

/// Failure while encoding code points into bytes.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EncodeError {
    /// The code point does not fit in six bytes.
    #[error("value {value:#X} at index {index} exceeds maximum supported code point {max:#X}")]
    CodePointTooLarge {
        /// The rejected value.
        value: u32,
        /// The largest value the codec supports.
        max: u32,
        /// Position of the value in the input sequence.
        index: usize,
    },
}

impl EncodeError {
    /// The code point that could not be encoded.
    #[must_use]
    pub fn value(&self) -> u32 {
        match self {
            Self::CodePointTooLarge { value, .. } => *value,
        }
    }
}

/// Failure while decoding bytes into code points.
///
/// Every variant records the byte offset at which decoding stopped.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DecodeError {
    /// A byte in lead position matches no lead-byte marker.
    #[error("invalid first byte {byte:#04X} at offset {offset}")]
    InvalidLeadByte {
        /// The offending byte.
        byte: u8,
        /// Its offset in the input.
        offset: usize,
    },
    /// A byte in continuation position is not of the form `10xxxxxx`.
    #[error("invalid secondary byte {byte:#04X} at offset {offset}")]
    InvalidContinuationByte {
        /// The offending byte.
        byte: u8,
        /// Its offset in the input.
        offset: usize,
    },
    /// The input ended in the middle of a sequence.
    #[error("the string ended unexpectedly at offset {offset}, {expected} more byte(s) expected")]
    UnexpectedEnd {
        /// Continuation bytes still missing.
        expected: usize,
        /// Length of the input.
        offset: usize,
    },
    /// A sequence is longer than the shortest encoding of its value.
    ///
    /// Only reported when [`DecodeOptions::reject_overlong`] is set.
    ///
    /// [`DecodeOptions::reject_overlong`]: crate::DecodeOptions::reject_overlong
    #[error("overlong encoding of {value:#X} in {len} bytes at offset {offset}")]
    OverlongEncoding {
        /// The decoded value.
        value: u32,
        /// Length of the sequence that carried it.
        len: usize,
        /// Offset of the sequence's lead byte.
        offset: usize,
    },
}

impl DecodeError {
    /// Byte offset in the input where decoding failed.
    #[must_use]
    pub fn offset(&self) -> usize {
        match self {
            Self::InvalidLeadByte { offset, .. }
            | Self::InvalidContinuationByte { offset, .. }
            | Self::UnexpectedEnd { offset, .. }
            | Self::OverlongEncoding { offset, .. } => *offset,
        }
    }
}
