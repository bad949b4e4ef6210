//! Length-class tables shared by the encoder and the decoder.
//!
//! A length class is the number of bytes a code point occupies, minus one.
//! Every table below is indexed by that class.

/// Longest encoded sequence, in bytes.
pub const MAX_SEQUENCE_LEN: usize = 6;

/// Largest code point representable in [`MAX_SEQUENCE_LEN`] bytes.
pub const MAX_CODE_POINT: u32 = 0x7FFF_FFFF;

/// Largest code point of each length class.
const LAST_CODE_POINTS: [u32; MAX_SEQUENCE_LEN] =
    [0x7F, 0x7FF, 0xFFFF, 0x1F_FFFF, 0x3FF_FFFF, 0x7FFF_FFFF];

/// Significant bits carried by a sequence of each length class.
const BITS_FOR_CODE_POINT: [u32; MAX_SEQUENCE_LEN] = [7, 11, 16, 21, 26, 31];

#[rustfmt::skip]
const LEAD_BYTE_MARKERS: [u8; MAX_SEQUENCE_LEN] = [
    0b0000_0000,
    0b1100_0000,
    0b1110_0000,
    0b1111_0000,
    0b1111_1000,
    0b1111_1100,
];

const CONTINUATION_MARKER: u8 = 0b1000_0000;
const CONTINUATION_MASK: u8 = 0b1100_0000;
const CONTINUATION_PAYLOAD: u8 = 0b0011_1111;

/// Payload bits stored in each continuation byte.
pub(crate) const CONTINUATION_BITS: u32 = 6;

/// Bits of the code point carried by the continuation bytes of each class.
const LEAD_SHIFTS: [u32; MAX_SEQUENCE_LEN] = [0, 6, 12, 18, 24, 30];

const _: () = {
    assert!(LAST_CODE_POINTS[MAX_SEQUENCE_LEN - 1] == MAX_CODE_POINT);
    let mut i = 0;
    let mut shift = 0;
    while i < MAX_SEQUENCE_LEN {
        assert!(LAST_CODE_POINTS[i] == (1u32 << BITS_FOR_CODE_POINT[i]) - 1);
        if i > 0 {
            assert!(LAST_CODE_POINTS[i - 1] < LAST_CODE_POINTS[i]);
        }
        assert!(LEAD_SHIFTS[i] == shift);
        let payload = BITS_FOR_CODE_POINT[i] - shift;
        // The marker must not overlap the payload, and the bit right above the
        // payload terminates the run of ones.
        assert!(LEAD_BYTE_MARKERS[i] & ((1u8 << payload) - 1) == 0);
        assert!((LEAD_BYTE_MARKERS[i] >> payload) & 1 == 0);
        i += 1;
        shift += CONTINUATION_BITS;
    }
};

/// The byte-count category of an encoded code point.
///
/// Class `n` covers sequences of `n + 1` bytes: one lead byte followed by `n`
/// continuation bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LengthClass(u8);

impl LengthClass {
    /// All length classes, shortest first.
    pub const ALL: [LengthClass; MAX_SEQUENCE_LEN] = [
        LengthClass(0),
        LengthClass(1),
        LengthClass(2),
        LengthClass(3),
        LengthClass(4),
        LengthClass(5),
    ];

    #[inline]
    const fn index(self) -> usize {
        self.0 as usize
    }

    /// Total number of bytes in a sequence of this class (1 to 6).
    #[must_use]
    #[inline]
    pub const fn byte_len(self) -> usize {
        self.index() + 1
    }

    /// Number of continuation bytes following the lead byte.
    #[must_use]
    #[inline]
    pub const fn continuation_count(self) -> usize {
        self.index()
    }

    /// The fixed high-bit pattern of a lead byte of this class.
    #[must_use]
    #[inline]
    pub const fn lead_marker(self) -> u8 {
        LEAD_BYTE_MARKERS[self.index()]
    }

    /// Number of code point bits stored in the lead byte.
    #[must_use]
    #[inline]
    pub const fn lead_payload_bits(self) -> u32 {
        BITS_FOR_CODE_POINT[self.index()] - self.lead_shift()
    }

    /// Right shift that leaves the lead byte's payload in the low bits.
    #[inline]
    pub(crate) const fn lead_shift(self) -> u32 {
        LEAD_SHIFTS[self.index()]
    }

    /// Largest code point this class can hold.
    #[must_use]
    #[inline]
    pub const fn max_code_point(self) -> u32 {
        LAST_CODE_POINTS[self.index()]
    }

    /// Smallest code point for which this class is the shortest encoding.
    #[must_use]
    #[inline]
    pub const fn min_code_point(self) -> u32 {
        match self.index() {
            0 => 0,
            i => LAST_CODE_POINTS[i - 1] + 1,
        }
    }

    #[inline]
    const fn lead_payload_mask(self) -> u8 {
        ((1u32 << self.lead_payload_bits()) - 1) as u8
    }

    /// Builds the lead byte of `code_point`, which must fit this class.
    #[inline]
    pub(crate) const fn lead_byte(self, code_point: u32) -> u8 {
        self.lead_marker() | ((code_point >> self.lead_shift()) as u8 & self.lead_payload_mask())
    }

    /// Extracts the payload bits of a lead byte of this class.
    #[inline]
    pub(crate) const fn lead_payload(self, lead: u8) -> u32 {
        (lead & self.lead_payload_mask()) as u32
    }

    #[inline]
    const fn matches_lead(self, byte: u8) -> bool {
        byte & !self.lead_payload_mask() == self.lead_marker()
    }
}

/// Returns the shortest length class able to hold `code_point`, or `None`
/// when it exceeds [`MAX_CODE_POINT`].
#[must_use]
pub const fn length_class(code_point: u32) -> Option<LengthClass> {
    let mut i = 0;
    while i < MAX_SEQUENCE_LEN {
        if code_point <= LAST_CODE_POINTS[i] {
            return Some(LengthClass::ALL[i]);
        }
        i += 1;
    }
    None
}

/// Classifies a lead byte by its marker pattern.
///
/// Continuation bytes (`10xxxxxx`), `0xFE` and `0xFF` match no marker and
/// yield `None`.
#[must_use]
pub const fn classify_lead(byte: u8) -> Option<LengthClass> {
    let mut i = 0;
    while i < MAX_SEQUENCE_LEN {
        let class = LengthClass::ALL[i];
        if class.matches_lead(byte) {
            return Some(class);
        }
        i += 1;
    }
    None
}

/// Total sequence length announced by `lead`, or `None` if it is not a lead
/// byte.
#[must_use]
pub const fn sequence_len(lead: u8) -> Option<usize> {
    match classify_lead(lead) {
        Some(class) => Some(class.byte_len()),
        None => None,
    }
}

/// Whether `byte` matches the continuation pattern `10xxxxxx`.
#[must_use]
#[inline]
pub const fn is_continuation(byte: u8) -> bool {
    byte & CONTINUATION_MASK == CONTINUATION_MARKER
}

/// Low six bits of `bits` tagged as a continuation byte.
#[inline]
pub(crate) const fn continuation_byte(bits: u32) -> u8 {
    CONTINUATION_MARKER | (bits as u8 & CONTINUATION_PAYLOAD)
}

/// Shifts a continuation byte's payload into the accumulated code point.
#[inline]
pub(crate) const fn append_continuation(code_point: u32, byte: u8) -> u32 {
    (code_point << CONTINUATION_BITS) | (byte & CONTINUATION_PAYLOAD) as u32
}
