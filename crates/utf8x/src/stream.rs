//! Incremental decoding of input that arrives in chunks.

use alloc::collections::VecDeque;

use crate::{
    error::DecodeError,
    options::DecodeOptions,
    tables::{LengthClass, append_continuation, classify_lead, is_continuation},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    AwaitLead,
    AwaitContinuation {
        class: LengthClass,
        remaining: usize,
        code_point: u32,
        start: usize,
    },
    Failed,
}

/// A decoder that accepts bytes in arbitrary chunks.
///
/// Sequences may be split anywhere between chunks. It implements `Iterator`
/// to yield every code point completed by the input fed so far. Error offsets
/// count from the first byte ever fed.
///
/// # Examples
///
/// ```rust
/// use utf8x::{DecodeOptions, StreamingDecoder};
///
/// let mut decoder = StreamingDecoder::new(DecodeOptions::default());
/// decoder.feed(&[0x74, 0xD0]);
/// assert_eq!(decoder.next(), Some(Ok(0x74)));
/// assert_eq!(decoder.next(), None);
///
/// decoder.feed(&[0xBC]);
/// assert_eq!(decoder.next(), Some(Ok(0x43C)));
///
/// let mut closed = decoder.finish();
/// assert_eq!(closed.next(), None);
/// ```
#[derive(Debug, Clone)]
pub struct StreamingDecoder {
    options: DecodeOptions,
    pending: VecDeque<u8>,
    state: State,
    position: usize,
}

impl StreamingDecoder {
    /// Creates a new decoder with the given options.
    #[must_use]
    pub fn new(options: DecodeOptions) -> Self {
        Self {
            options,
            pending: VecDeque::new(),
            state: State::AwaitLead,
            position: 0,
        }
    }

    /// Queues a chunk of input.
    ///
    /// Input fed after an error has been reported is discarded.
    pub fn feed(&mut self, chunk: &[u8]) {
        if self.state != State::Failed {
            self.pending.extend(chunk);
        }
    }

    /// Marks the end of input.
    ///
    /// The returned [`ClosedStreamingDecoder`] drains the remaining input and
    /// reports [`DecodeError::UnexpectedEnd`] if it stops inside a sequence.
    #[must_use]
    pub fn finish(self) -> ClosedStreamingDecoder {
        ClosedStreamingDecoder { decoder: self }
    }

    /// Number of bytes consumed so far.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Whether the decoder stopped on an error.
    #[must_use]
    pub fn is_failed(&self) -> bool {
        self.state == State::Failed
    }

    fn next_byte(&mut self) -> Option<(u8, usize)> {
        let byte = self.pending.pop_front()?;
        let offset = self.position;
        self.position += 1;
        Some((byte, offset))
    }

    fn fail(&mut self, err: DecodeError) -> Option<Result<u32, DecodeError>> {
        self.state = State::Failed;
        self.pending.clear();
        Some(Err(err))
    }

    fn next_code_point(&mut self, end_of_input: bool) -> Option<Result<u32, DecodeError>> {
        loop {
            match self.state {
                State::Failed => return None,
                State::AwaitLead => {
                    let (lead, offset) = self.next_byte()?;
                    let Some(class) = classify_lead(lead) else {
                        return self.fail(DecodeError::InvalidLeadByte { byte: lead, offset });
                    };
                    let code_point = class.lead_payload(lead);
                    if class.continuation_count() == 0 {
                        return Some(Ok(code_point));
                    }
                    self.state = State::AwaitContinuation {
                        class,
                        remaining: class.continuation_count(),
                        code_point,
                        start: offset,
                    };
                }
                State::AwaitContinuation {
                    class,
                    remaining,
                    code_point,
                    start,
                } => {
                    let Some((byte, offset)) = self.next_byte() else {
                        if end_of_input {
                            return self.fail(DecodeError::UnexpectedEnd {
                                expected: remaining,
                                offset: self.position,
                            });
                        }
                        return None;
                    };
                    if !is_continuation(byte) {
                        return self.fail(DecodeError::InvalidContinuationByte { byte, offset });
                    }
                    let code_point = append_continuation(code_point, byte);
                    if remaining > 1 {
                        self.state = State::AwaitContinuation {
                            class,
                            remaining: remaining - 1,
                            code_point,
                            start,
                        };
                        continue;
                    }

                    self.state = State::AwaitLead;
                    if self.options.reject_overlong && code_point < class.min_code_point() {
                        return self.fail(DecodeError::OverlongEncoding {
                            value: code_point,
                            len: class.byte_len(),
                            offset: start,
                        });
                    }
                    return Some(Ok(code_point));
                }
            }
        }
    }
}

impl Iterator for StreamingDecoder {
    type Item = Result<u32, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_code_point(false)
    }
}

/// A [`StreamingDecoder`] that has been closed to further input.
///
/// Returned by [`StreamingDecoder::finish`]; yields the remaining code points
/// and then ends.
#[derive(Debug, Clone)]
pub struct ClosedStreamingDecoder {
    decoder: StreamingDecoder,
}

impl ClosedStreamingDecoder {
    /// Number of bytes consumed so far.
    #[must_use]
    pub fn position(&self) -> usize {
        self.decoder.position()
    }
}

impl Iterator for ClosedStreamingDecoder {
    type Item = Result<u32, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.decoder.next_code_point(true)
    }
}
