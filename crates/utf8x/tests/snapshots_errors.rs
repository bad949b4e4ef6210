#![expect(missing_docs)]

use core::fmt::Write;

use utf8x::{DecodeOptions, decode_with, encode};

fn render_decode(cases: &[&[u8]], options: DecodeOptions) -> String {
    let mut out = String::new();
    for bytes in cases {
        match decode_with(bytes, options) {
            Ok(values) => writeln!(out, "{bytes:02X?} => {values:X?}").unwrap(),
            Err(err) => writeln!(out, "{bytes:02X?} => error: {err}").unwrap(),
        }
    }
    out
}

#[test]
fn snapshot_decode_diagnostics() {
    let cases: [&[u8]; 6] = [
        &[0x74, 0xE5],
        &[0xD0, 0xFC],
        &[0xD0, 0x74],
        &[0x41, 0x80],
        &[0xFE],
        &[0xC0, 0x80],
    ];

    insta::assert_snapshot!(render_decode(&cases, DecodeOptions::default()), @r"
    [74, E5] => error: the string ended unexpectedly at offset 2, 2 more byte(s) expected
    [D0, FC] => error: invalid secondary byte 0xFC at offset 1
    [D0, 74] => error: invalid secondary byte 0x74 at offset 1
    [41, 80] => error: invalid first byte 0x80 at offset 1
    [FE] => error: invalid first byte 0xFE at offset 0
    [C0, 80] => [0]
    ");
    insta::assert_snapshot!(
        render_decode(&cases[5..], DecodeOptions { reject_overlong: true }),
        @"[C0, 80] => error: overlong encoding of 0x0 in 2 bytes at offset 0"
    );
}

#[test]
fn snapshot_encode_diagnostics() {
    let err = encode(&[0x41, 0x7FFF_FFFF, 0xFFFF_FFFF]).unwrap_err();
    insta::assert_snapshot!(
        err,
        @"value 0xFFFFFFFF at index 2 exceeds maximum supported code point 0x7FFFFFFF"
    );
}
