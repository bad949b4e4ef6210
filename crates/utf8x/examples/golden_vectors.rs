//! Runs the reference vectors through the codec and reports each check.
//!
//! Run with
//!
//! ```bash
//! cargo run -p utf8x --example golden_vectors
//! ```
#![allow(missing_docs)]

use std::process::ExitCode;

use utf8x::{DecodeError, EncodeError, decode, encode};

#[rustfmt::skip]
const UTF8_TEXT: [u8; 43] = [
    0x74, 0x65, 0x72, 0x61, 0x6E, 0x61, 0x20, 0x2D, 0x20, 0xD0, 0xBC, 0xD0,
    0xB0, 0xD1, 0x88, 0xD0, 0xB8, 0xD0, 0xBD, 0xD0, 0xB0, 0x20, 0xD0, 0xBF,
    0xD0, 0xBE, 0xD0, 0xB3, 0xD1, 0x80, 0xD0, 0xBE, 0xD0, 0xBC, 0xD0, 0xB8,
    0xD0, 0xB7, 0xD0, 0xBC, 0xD0, 0xB0, 0x0A,
];

#[rustfmt::skip]
const UTF32_TEXT: [u32; 27] = [
    0x74, 0x65, 0x72, 0x61, 0x6E, 0x61, 0x20, 0x2D, 0x20, 0x43C, 0x430,
    0x448, 0x438, 0x43D, 0x430, 0x20, 0x43F, 0x43E, 0x433, 0x440, 0x43E,
    0x43C, 0x438, 0x437, 0x43C, 0x430, 0x0A,
];

fn check(name: &str, ok: bool) -> bool {
    if ok {
        println!("Test {name}: OK");
    } else {
        println!("Test {name}: FAILED");
    }
    ok
}

fn main() -> ExitCode {
    let results = [
        check(
            "UTF32 to UTF8",
            encode(&UTF32_TEXT).is_ok_and(|bytes| bytes == UTF8_TEXT),
        ),
        check(
            "UTF8 to UTF32",
            decode(&UTF8_TEXT).is_ok_and(|code_points| code_points == UTF32_TEXT),
        ),
        check(
            "corrupted first byte UTF8",
            matches!(decode(&[0x74, 0xE5]), Err(DecodeError::UnexpectedEnd { .. })),
        ),
        check(
            "corrupted secondary byte UTF8",
            matches!(
                decode(&[0xD0, 0xFC]),
                Err(DecodeError::InvalidContinuationByte { byte: 0xFC, .. })
            ),
        ),
        check(
            "not enough secondary bytes UTF8",
            matches!(
                decode(&[0xD0, 0x74]),
                Err(DecodeError::InvalidContinuationByte { byte: 0x74, .. })
            ),
        ),
        check(
            "too big UTF32 symbol",
            matches!(
                encode(&[0xFFFF_FFFF]),
                Err(EncodeError::CodePointTooLarge { value: 0xFFFF_FFFF, .. })
            ),
        ),
    ];

    if results.iter().all(|&ok| ok) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
