/// Configuration options for the decoder.
///
/// # Default
///
/// All options default to `false`, which accepts every sequence the encoder
/// could have produced as well as any longer-than-necessary form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DecodeOptions {
    /// Whether to reject overlong sequences.
    ///
    /// A sequence is overlong when its value would fit in a shorter length
    /// class, for example `[0xC0, 0x80]` for U+0000. The encoder never emits
    /// such forms, so with this option enabled `encode(decode(bytes))` returns
    /// the original bytes for every accepted input.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use utf8x::{DecodeError, DecodeOptions, decode_with};
    ///
    /// let lenient = decode_with(&[0xC0, 0x80], DecodeOptions::default());
    /// assert_eq!(lenient, Ok(vec![0]));
    ///
    /// let strict = decode_with(&[0xC0, 0x80], DecodeOptions { reject_overlong: true });
    /// assert_eq!(
    ///     strict,
    ///     Err(DecodeError::OverlongEncoding { value: 0, len: 2, offset: 0 })
    /// );
    /// ```
    ///
    /// # Default
    ///
    /// `false`
    pub reject_overlong: bool,
}
